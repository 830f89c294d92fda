// The framebuffer module converts logical coordinates and 4-bit colors into
// the nibble-addressed register writes the port understands.

use log::trace;

use crate::error::Error;
use crate::gfx::Color;
use crate::port::{Address, PixelPort, Step};

/// Geometry of the packed video surface. Fixed for the session once the host
/// has selected a video mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surface {
    width: usize,
    height: usize,
}

impl Surface {
    /// `width` must be even (two pixels per byte) and the surface must fit
    /// the 16-bit address register.
    pub const fn new(width: usize, height: usize) -> Self {
        assert!(width % 2 == 0, "surface width must be even");
        assert!(width * height / 2 <= 1 << 16, "surface exceeds the address register");
        Self { width, height }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn row_bytes(&self) -> usize {
        self.width / 2
    }

    pub const fn byte_count(&self) -> usize {
        self.row_bytes() * self.height
    }

    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// The byte offset and nibble holding pixel `(x, y)`.
    pub(crate) const fn nibble_addr(&self, x: usize, y: usize) -> (Address, Nibble) {
        ((y * self.row_bytes() + (x >> 1)) as Address, Nibble::of(x))
    }
}

/// Which half of a VRAM byte a pixel lives in.
///
/// One fixed convention for the whole crate: even `x` is the high nibble
/// (left pixel of the pair), odd `x` is the low nibble (right pixel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Nibble {
    High,
    Low,
}

impl Nibble {
    #[inline(always)]
    pub const fn of(x: usize) -> Self {
        if x & 1 == 0 {
            Nibble::High
        } else {
            Nibble::Low
        }
    }

    /// The bits of the byte this nibble occupies.
    #[inline(always)]
    pub const fn mask(self) -> u8 {
        match self {
            Nibble::High => 0xf0,
            Nibble::Low => 0x0f,
        }
    }

    /// A color index shifted into this nibble's position.
    #[inline(always)]
    pub const fn place(self, color: Color) -> u8 {
        match self {
            Nibble::High => color.index() << 4,
            Nibble::Low => color.index(),
        }
    }
}

/// Clear and single-pixel operations over a surface, through the port.
///
/// Owns the port handle: the register pair is process-wide mutable state with
/// a strict reprogram-before-use discipline, so exactly one component may
/// drive it at a time.
pub struct FrameBuffer<P: PixelPort> {
    port: P,
    surface: Surface,
}

impl<P: PixelPort> FrameBuffer<P> {
    pub fn new(port: P, surface: Surface) -> Self {
        Self { port, surface }
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub(crate) fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    /// Give the port handle back to the host.
    pub fn into_port(self) -> P {
        self.port
    }

    /// Fill the whole surface with one color, replicated into both nibbles
    /// of every byte. One write per byte with the address auto-stepping;
    /// this is the dominant bulk path and stays a tight, allocation-free
    /// loop.
    pub fn clear(&mut self, color: Color) {
        trace!("clear {}x{} surface with color {}", self.surface.width, self.surface.height, color.index());
        let fill = color.pair();
        self.port.set_address(0);
        self.port.set_step(Step::Advance);
        for _ in 0..self.surface.byte_count() {
            self.port.write_byte(fill);
        }
    }

    /// Set one pixel, preserving its neighbour in the shared byte.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) -> Result<(), Error> {
        if !self.surface.contains(x, y) {
            return Err(self.out_of_range(x, y));
        }

        let (addr, nibble) = self.surface.nibble_addr(x, y);
        self.port.set_address(addr);
        self.port.set_step(Step::Hold);
        self.port.read_modify_write(nibble.mask(), nibble.place(color));
        Ok(())
    }

    pub(crate) fn out_of_range(&self, x: usize, y: usize) -> Error {
        Error::AddressOutOfRange {
            x,
            y,
            width: self.surface.width,
            height: self.surface.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::{PortOp, RecordingPort, VideoRam};

    fn buffer(width: usize, height: usize) -> FrameBuffer<VideoRam> {
        let surface = Surface::new(width, height);
        FrameBuffer::new(VideoRam::new(surface.byte_count()), surface)
    }

    #[test]
    fn surface_geometry() {
        let s = Surface::new(320, 240);
        assert_eq!(s.row_bytes(), 160);
        assert_eq!(s.byte_count(), 38400);
        assert!(s.contains(319, 239));
        assert!(!s.contains(320, 0));
        assert!(!s.contains(0, 240));
    }

    #[test]
    fn even_x_writes_the_high_nibble_only() {
        let mut fb = buffer(8, 2);
        fb.clear(Color::new(0x5).unwrap());
        fb.set_pixel(2, 1, Color::new(0xa).unwrap()).unwrap();

        // byte 1 of row 1 holds pixels x=2 (high) and x=3 (low)
        assert_eq!(fb.port().frame()[4 + 1], 0xa5);
        assert_eq!(fb.port().frame()[4], 0x55);
    }

    #[test]
    fn odd_x_writes_the_low_nibble_only() {
        let mut fb = buffer(8, 2);
        fb.clear(Color::new(0x5).unwrap());
        fb.set_pixel(3, 0, Color::new(0xc).unwrap()).unwrap();

        assert_eq!(fb.port().frame()[1], 0x5c);
        assert_eq!(fb.port().frame()[0], 0x55);
    }

    #[test]
    fn clear_fills_every_byte_with_the_pixel_pair() {
        let mut fb = buffer(6, 3);
        fb.clear(Color::new(9).unwrap());
        assert_eq!(fb.port().len(), 9);
        assert!(fb.port().frame().iter().all(|&b| b == 0x99));
    }

    #[test]
    fn clear_then_set_every_pixel_keeps_the_fill_pattern() {
        let mut fb = buffer(16, 4);
        let c = Color::new(3).unwrap();
        fb.clear(c);
        for y in 0..4 {
            for x in 0..16 {
                fb.set_pixel(x, y, c).unwrap();
            }
        }
        assert!(fb.port().frame().iter().all(|&b| b == 0x33));
    }

    #[test]
    fn set_pixel_rejects_out_of_range_coordinates() {
        let mut fb = buffer(8, 4);
        let c = Color::BLACK;
        assert_eq!(
            fb.set_pixel(8, 0, c),
            Err(Error::AddressOutOfRange { x: 8, y: 0, width: 8, height: 4 })
        );
        assert_eq!(
            fb.set_pixel(0, 4, c),
            Err(Error::AddressOutOfRange { x: 0, y: 4, width: 8, height: 4 })
        );
    }

    #[test]
    fn set_pixel_programs_the_registers_before_the_data_write() {
        let surface = Surface::new(8, 4);
        let mut fb = FrameBuffer::new(RecordingPort::new(), surface);
        fb.set_pixel(5, 2, Color::WHITE).unwrap();

        assert_eq!(
            fb.port().ops,
            vec![
                PortOp::Address(2 * 4 + 2),
                PortOp::Step(Step::Hold),
                PortOp::Rmw(0x0f, 0x07),
            ]
        );
    }
}
