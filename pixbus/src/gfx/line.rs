// Axis-aligned line drawing.
//
// Both cases program the address register once and then advance it
// themselves, instead of recomputing a byte offset from (x, y) on every
// pixel: with step 0 each read-modify-write stays on its byte, so moving to
// the next row is one address-register write and moving right is one
// address-register write every second pixel.

use crate::error::Error;
use crate::gfx::framebuffer::{FrameBuffer, Nibble};
use crate::gfx::Color;
use crate::port::{Address, PixelPort, Step};

impl<P: PixelPort> FrameBuffer<P> {
    /// Draw a horizontal or vertical segment between the two endpoints,
    /// inclusive. Endpoint order does not matter; both-axes-differing input
    /// has no drawing algorithm here and is rejected.
    pub fn draw_line(&mut self, x0: usize, y0: usize, x1: usize, y1: usize, color: Color) -> Result<(), Error> {
        let (x0, x1) = (x0.min(x1), x0.max(x1));
        let (y0, y1) = (y0.min(y1), y0.max(y1));

        if x0 != x1 && y0 != y1 {
            return Err(Error::UnsupportedGeometry { x0, y0, x1, y1 });
        }
        if !self.surface().contains(x0, y0) {
            return Err(self.out_of_range(x0, y0));
        }
        if !self.surface().contains(x1, y1) {
            return Err(self.out_of_range(x1, y1));
        }

        if x0 == x1 {
            self.vertical(x0, y0, y1, color);
        } else {
            self.horizontal(x0, x1, y0, color);
        }
        Ok(())
    }

    /// The nibble is fixed by `x` parity for the whole segment; each row is
    /// one RMW, then the address advances by a full row of bytes.
    fn vertical(&mut self, x: usize, y0: usize, y1: usize, color: Color) {
        let surface = self.surface();
        let (mut addr, nibble) = surface.nibble_addr(x, y0);
        let port = self.port_mut();

        port.set_address(addr);
        port.set_step(Step::Hold);
        for _ in y0..=y1 {
            port.read_modify_write(nibble.mask(), nibble.place(color));
            addr = addr.wrapping_add(surface.row_bytes() as Address);
            port.set_address(addr);
        }
    }

    /// The nibble toggles with `x` parity; the address advances by one byte
    /// only after the right (odd-`x`) pixel of a pair has been written.
    /// Getting that advance timing wrong would corrupt neighbour pixels, so
    /// the two-pixels-per-byte packing is encoded directly in the iteration.
    fn horizontal(&mut self, x0: usize, x1: usize, y: usize, color: Color) {
        let surface = self.surface();
        let (mut addr, _) = surface.nibble_addr(x0, y);
        let port = self.port_mut();

        port.set_address(addr);
        port.set_step(Step::Hold);
        for x in x0..=x1 {
            let nibble = Nibble::of(x);
            port.read_modify_write(nibble.mask(), nibble.place(color));
            if x & 1 == 1 {
                addr = addr.wrapping_add(1);
                port.set_address(addr);
            }
        }
    }
}
