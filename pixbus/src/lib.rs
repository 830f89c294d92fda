// pixbus.rs
/* Pixbus is a small 2D graphics core for a nibble-packed (4 bits per pixel)
video surface that is only reachable through an address/step/data register
triplet, the way the RP6502 RIA exposes its VRAM. It provides the register
port abstraction, a framebuffer with clear and pixel primitives, axis-aligned
line drawing, and an 8x8 bitmap font renderer. */

pub mod error;
pub mod gfx;
pub mod port;

pub use error::Error;
pub use gfx::framebuffer::{FrameBuffer, Surface};
pub use gfx::font::Font;
pub use gfx::{Color, Mode};
pub use port::{Address, PixelPort, Step, VideoRam};
