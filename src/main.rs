use clap::{arg, command, value_parser};
use log::error;
use pixels::{Pixels, SurfaceTexture};
use winit::{
    dpi::LogicalSize,
    event::{Event, VirtualKeyCode},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};
use winit_input_helper::WinitInputHelper;

use pixbus::gfx::{rgb332_rgba, DEFAULT_PALETTE};
use pixbus::{Color, Font, FrameBuffer, Mode, PixelPort, VideoRam};

pub const TITLE: &'static str = "sprited";

// Editor grid geometry: 16x16 cells of 8 pixels each.
pub const GRID_X: usize = 8;
pub const GRID_Y: usize = 16;
pub const CELL: usize = 8;
pub const CELLS: usize = 16;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = command!()
        .arg(
            arg!(--height <PIXELS> "viewport height, 180 or 240")
                .value_parser(value_parser!(usize))
                .required(false)
                .default_value("240"),
        )
        .arg(
            arg!(--bg <COLOR> "background color index, 0-15")
                .value_parser(value_parser!(u8))
                .required(false)
                .default_value("0"),
        )
        .arg(
            arg!(--fg <COLOR> "foreground color index, 0-15")
                .value_parser(value_parser!(u8))
                .required(false)
                .default_value("7"),
        )
        .get_matches();

    let mode = match matches.get_one::<usize>("height").copied() {
        Some(180) => Mode::Vga180,
        _ => Mode::Vga240,
    };
    let bg = Color::new(*matches.get_one::<u8>("bg").unwrap())?;
    let fg = Color::new(*matches.get_one::<u8>("fg").unwrap())?;

    let surface = mode.surface();
    let mut fb = FrameBuffer::new(VideoRam::new(surface.byte_count()), surface);
    draw_layout(&mut fb, fg, bg)?;
    let vram = fb.into_port();

    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();
    let window = {
        let size = LogicalSize::new(surface.width() as f64, surface.height() as f64);
        WindowBuilder::new()
            .with_title(TITLE)
            .with_inner_size(size)
            .with_min_inner_size(size)
            .build(&event_loop)
            .unwrap()
    };
    let mut pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(surface.width() as u32, surface.height() as u32, surface_texture)?
    };

    event_loop.run(move |event, _, control_flow| {
        if let Event::RedrawRequested(_) = event {
            expose(&vram, pixels.get_frame_mut());
            if let Err(err) = pixels.render() {
                error!("pixels.render() failed: {err}");
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        // The drawn content is static; the loop only waits for a close.
        if input.update(&event) {
            if input.quit() || input.key_pressed(VirtualKeyCode::Escape) {
                *control_flow = ControlFlow::Exit;
                return;
            }

            if let Some(size) = input.window_resized() {
                if let Err(err) = pixels.resize_surface(size.width, size.height) {
                    error!("pixels.resize_surface() failed: {err}");
                    *control_flow = ControlFlow::Exit;
                    return;
                }
            }

            window.request_redraw();
        }
    });
}

/// Draw the borders around the different screen areas and the static text.
fn draw_layout<P: PixelPort>(fb: &mut FrameBuffer<P>, fg: Color, bg: Color) -> Result<(), pixbus::Error> {
    let w = fb.surface().width();
    let h = fb.surface().height();

    fb.clear(bg);

    // Outside border
    fb.draw_line(0, 0, w - 1, 0, fg)?;
    fb.draw_line(0, 0, 0, h - 1, fg)?;
    fb.draw_line(0, h - 1, w - 1, h - 1, fg)?;
    fb.draw_line(w - 1, 0, w - 1, h - 1, fg)?;

    fb.draw_string("SPRITED", &Font::system(), GRID_X, 4, fg, bg)?;

    // Editing grid
    let span = CELLS * CELL;
    for i in 0..=CELLS {
        fb.draw_line(GRID_X + i * CELL, GRID_Y, GRID_X + i * CELL, GRID_Y + span, fg)?;
        fb.draw_line(GRID_X, GRID_Y + i * CELL, GRID_X + span, GRID_Y + i * CELL, fg)?;
    }

    // Palette strip below the grid, one filled cell per color
    let strip_y = GRID_Y + span + CELL;
    for index in 0..16u8 {
        let color = Color::new(index)?;
        let x = GRID_X + index as usize * CELL;
        for row in 0..CELL {
            fb.draw_line(x, strip_y + row, x + CELL - 1, strip_y + row, color)?;
        }
    }

    Ok(())
}

/// Expand the packed 4-bit surface into the RGBA frame, left pixel from the
/// high nibble of each byte.
fn expose(vram: &VideoRam, frame: &mut [u8]) {
    for (i, pixel) in frame.chunks_exact_mut(4).enumerate() {
        let byte = vram.frame()[i / 2];
        let index = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
        let (r, g, b, a) = rgb332_rgba(DEFAULT_PALETTE[index as usize]);
        pixel.copy_from_slice(&[r, g, b, a]);
    }
}
