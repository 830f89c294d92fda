// error.rs provides the error types for drawing operations.
//
// All of these are caller-input errors, detected at the boundary of each
// public operation before any register write is issued. None is retryable
// and none is fatal: callers decide whether to abort a drawing pass or skip
// the offending element.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("coordinate ({x}, {y}) is outside the {width}x{height} surface")]
    AddressOutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("line ({x0}, {y0}) -> ({x1}, {y1}) is neither horizontal nor vertical")]
    UnsupportedGeometry {
        x0: usize,
        y0: usize,
        x1: usize,
        y1: usize,
    },

    #[error("character {code:?} is outside the font's covered range")]
    InvalidCharacter { code: char },

    #[error("color index {index} is outside 0..=15")]
    InvalidColor { index: u8 },
}
