// Glyph and string rendering on top of the pixel primitives. Strings are
// validated in full before the first pixel is written, so a bad character or
// a run off the surface edge never leaves a partially drawn string behind.

use log::debug;

use crate::error::Error;
use crate::gfx::font::{Font, Glyph};
use crate::gfx::framebuffer::FrameBuffer;
use crate::gfx::Color;
use crate::port::PixelPort;

/// Fixed horizontal advance per glyph, in pixels.
pub const GLYPH_ADVANCE: usize = 8;

impl<P: PixelPort> FrameBuffer<P> {
    /// Draw one 8x8 glyph with its top-left corner at `(x, y)`: set bits get
    /// the foreground color, clear bits the background. Always 1:1, no
    /// scaling.
    pub fn draw_glyph(&mut self, glyph: &Glyph, x: usize, y: usize, fg: Color, bg: Color) -> Result<(), Error> {
        if !self.surface().contains(x + 7, y + 7) {
            return Err(self.out_of_range(x, y));
        }

        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..8 {
                let color = if bits & (0x80 >> col) != 0 { fg } else { bg };
                self.set_pixel(x + col, y + row, color)?;
            }
        }
        Ok(())
    }

    /// Draw a string left-to-right from `(x, y)`, advancing a fixed 8 pixels
    /// per character regardless of actual glyph width.
    pub fn draw_string(&mut self, text: &str, font: &Font, x: usize, y: usize, fg: Color, bg: Color) -> Result<(), Error> {
        let mut glyphs: Vec<Glyph> = Vec::with_capacity(text.len());
        for ch in text.chars() {
            glyphs.push(font.glyph(ch)?);
        }
        if glyphs.is_empty() {
            return Ok(());
        }

        let extent = x + glyphs.len() * GLYPH_ADVANCE - 1;
        if !self.surface().contains(extent, y + 7) {
            return Err(self.out_of_range(extent, y));
        }

        debug!("draw {:?} at ({}, {})", text, x, y);
        let mut cursor = x;
        for glyph in &glyphs {
            self.draw_glyph(glyph, cursor, y, fg, bg)?;
            cursor += GLYPH_ADVANCE;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::font::FONT_8X8;
    use crate::gfx::framebuffer::Surface;
    use crate::port::VideoRam;

    fn buffer(width: usize, height: usize) -> FrameBuffer<VideoRam> {
        let surface = Surface::new(width, height);
        FrameBuffer::new(VideoRam::new(surface.byte_count()), surface)
    }

    fn pixel(fb: &FrameBuffer<VideoRam>, x: usize, y: usize) -> u8 {
        let byte = fb.port().frame()[y * fb.surface().row_bytes() + x / 2];
        if x % 2 == 0 {
            byte >> 4
        } else {
            byte & 0x0f
        }
    }

    #[test]
    fn glyph_renders_msb_first_with_fg_and_bg() {
        let mut fb = buffer(16, 16);
        let fg = Color::new(7).unwrap();
        let bg = Color::new(1).unwrap();
        // top row: left half set, right half clear
        let glyph: Glyph = [0xf0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
        fb.draw_glyph(&glyph, 4, 2, fg, bg).unwrap();

        for col in 0..8 {
            let expect = if col < 4 { 7 } else { 1 };
            assert_eq!(pixel(&fb, 4 + col, 2), expect, "top row col {col}");
        }
        for row in 1..8 {
            for col in 0..8 {
                assert_eq!(pixel(&fb, 4 + col, 2 + row), 1, "row {row} col {col}");
            }
        }
    }

    #[test]
    fn glyph_box_is_bounds_checked_up_front() {
        let mut fb = buffer(16, 16);
        let glyph: Glyph = [0xff; 8];
        let c = Color::WHITE;
        assert!(fb.draw_glyph(&glyph, 8, 8, c, c).is_ok());
        assert!(fb.draw_glyph(&glyph, 9, 0, c, c).is_err());
        assert!(fb.draw_glyph(&glyph, 0, 9, c, c).is_err());
    }

    #[test]
    fn string_renders_the_h_bitmap_at_its_origin() {
        let mut fb = buffer(32, 16);
        let font = Font::system();
        let fg = Color::new(7).unwrap();
        let bg = Color::BLACK;
        fb.draw_string("H", &font, 8, 4, fg, bg).unwrap();

        let offset = (72 - 32) * 8; // ASCII 'H'
        for row in 0..8 {
            let bits = FONT_8X8[offset + row];
            for col in 0..8 {
                let expect = if bits & (0x80 >> col) != 0 { 7 } else { 0 };
                assert_eq!(pixel(&fb, 8 + col, 4 + row), expect, "row {row} col {col}");
            }
        }

        // nothing outside the 8x8 box is touched
        for y in 0..16 {
            for x in 0..32 {
                if (8..16).contains(&x) && (4..12).contains(&y) {
                    continue;
                }
                assert_eq!(pixel(&fb, x, y), 0, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn string_advances_eight_pixels_per_character() {
        let mut fb = buffer(48, 8);
        let font = Font::system();
        let fg = Color::new(15).unwrap();
        let bg = Color::BLACK;
        fb.draw_string("II", &font, 0, 0, fg, bg).unwrap();

        let offset = (b'I' as usize - 32) * 8;
        for row in 0..8 {
            let bits = FONT_8X8[offset + row];
            for col in 0..8 {
                let expect = if bits & (0x80 >> col) != 0 { 15 } else { 0 };
                assert_eq!(pixel(&fb, col, row), expect);
                assert_eq!(pixel(&fb, 8 + col, row), expect);
            }
        }
    }

    #[test]
    fn invalid_character_draws_nothing() {
        let mut fb = buffer(64, 8);
        let font = Font::system();
        let c = Color::WHITE;
        assert_eq!(
            fb.draw_string("OK\n", &font, 0, 0, c, c),
            Err(Error::InvalidCharacter { code: '\n' })
        );
        assert!(fb.port().frame().iter().all(|&b| b == 0));
    }

    #[test]
    fn string_extent_is_bounds_checked_up_front() {
        let mut fb = buffer(32, 8);
        let font = Font::system();
        let c = Color::WHITE;
        assert!(fb.draw_string("ABCD", &font, 0, 0, c, c).is_ok());
        assert!(fb.draw_string("ABCDE", &font, 0, 0, c, c).is_err());
        assert!(fb.draw_string("", &font, 0, 0, c, c).is_ok());
    }

    #[test]
    fn string_error_leaves_no_partial_drawing() {
        let mut fb = buffer(32, 8);
        let font = Font::system();
        let c = Color::WHITE;
        // second glyph would start in range but the full extent does not fit
        assert!(fb.draw_string("ABCDE", &font, 0, 0, c, c).is_err());
        assert!(fb.port().frame().iter().all(|&b| b == 0));
    }
}
