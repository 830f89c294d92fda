pub mod font;
pub mod framebuffer;
pub mod line;
pub mod text;

use crate::error::Error;
use crate::gfx::framebuffer::Surface;

/// Resolution variants of the video mode select. The mode itself is chosen
/// once per session by the host before any drawing occurs; the core only
/// consumes the resulting surface geometry.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Vga180,
    Vga240,
}

impl Mode {
    pub const fn surface(self) -> Surface {
        match self {
            Mode::Vga180 => Surface::new(320, 180),
            Mode::Vga240 => Surface::new(320, 240),
        }
    }
}

impl From<u8> for Mode {
    fn from(value: u8) -> Self {
        match value {
            1 => Mode::Vga180,
            _ => Mode::Vga240,
        }
    }
}

/// A 4-bit color index into the flat 16-entry palette.
///
/// Validated on construction, so the nibble-packing arithmetic downstream can
/// never bleed into the adjacent pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(u8);

impl Color {
    pub const BLACK: Color = Color(0);
    pub const WHITE: Color = Color(7);
    pub const BRIGHT_WHITE: Color = Color(15);

    pub fn new(index: u8) -> Result<Self, Error> {
        if index > 15 {
            return Err(Error::InvalidColor { index });
        }
        Ok(Color(index))
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    /// The color replicated into both nibbles of a byte, i.e. one full pixel
    /// pair.
    pub const fn pair(self) -> u8 {
        self.0 | self.0 << 4
    }
}

/// RGB-332 approximations of the 16 ANSI colors, used when exposing the
/// packed surface to an RGBA frame. The core itself only ever sees the flat
/// 4-bit indices.
pub const DEFAULT_PALETTE: [u8; 16] = [
    0x00, 0x03, 0x1c, 0x0f, 0xe0, 0xee, 0xcc, 0xb6,
    0x49, 0x07, 0x5d, 0x1f, 0xe1, 0xe2, 0xf8, 0xff,
];

#[inline(always)]
pub fn rgb332_rgba(col: u8) -> (u8, u8, u8, u8) {
    let col = col as u32;
    let r = (((col & 0b1110_0000) >> 5) * 255) / 7;
    let g = (((col & 0b0001_1100) >> 2) * 255) / 7;
    let b = ((col & 0b0000_0011) * 255) / 3;

    (r as u8, g as u8, b as u8, 0xff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_index_is_validated() {
        assert!(Color::new(15).is_ok());
        assert_eq!(Color::new(16), Err(Error::InvalidColor { index: 16 }));
    }

    #[test]
    fn color_pair_fills_both_nibbles() {
        let c = Color::new(7).unwrap();
        assert_eq!(c.pair(), 0x77);
        assert_eq!(Color::BLACK.pair(), 0x00);
        assert_eq!(Color::BRIGHT_WHITE.pair(), 0xff);
    }

    #[test]
    fn mode_surfaces() {
        assert_eq!(Mode::Vga240.surface().height(), 240);
        assert_eq!(Mode::Vga180.surface().height(), 180);
        assert_eq!(Mode::from(1), Mode::Vga180);
        assert_eq!(Mode::from(2), Mode::Vga240);
    }
}
