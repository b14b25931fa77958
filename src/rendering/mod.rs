mod frame;

pub use frame::{CellLayout, DrawCommand, FrameRecorder, RenderSink, Rgb, build_frame};

use macroquad::prelude::*;
use crate::application::Controller;
use crate::ui::{Button, PANEL_WIDTH};

fn to_color([r, g, b]: Rgb) -> Color {
    Color::from_rgba(r, g, b, 255)
}

/// Replay a recorded frame onto the window
pub fn present(frame: &[DrawCommand]) {
    for command in frame {
        match *command {
            DrawCommand::FillRect { x, y, w, h, color } => draw_rectangle(x, y, w, h, to_color(color)),
            DrawCommand::Line { x1, y1, x2, y2, color } => {
                draw_line(x1, y1, x2, y2, 1.0, to_color(color))
            }
        }
    }
}

/// Helper to draw text labels
fn draw_text_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y, size, color);
}

/// Draw the control panel with buttons and status
pub fn draw_controls<S, T, R>(
    controller: &Controller<S, T, R>,
    panel_x: f32,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) where
    S: RenderSink,
    T: crate::application::TimerService,
    R: ::rand::Rng,
{
    draw_rectangle(panel_x, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let (gw, gh) = controller.dimensions();
    let running = controller.is_running();
    let grid_info = format!("Grid: {}x{}", gw, gh);
    let live_info = format!("Live: {}", controller.live_cells());
    let generation = controller.generation().to_string();
    let status_color = if running {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };

    let labels: [(&str, f32, f32, f32, Color); 7] = [
        ("Keys: Space S R G", panel_x, 300.0, 12.0, GRAY),
        (&grid_info, panel_x, 330.0, 14.0, LIGHTGRAY),
        (&live_info, panel_x, 350.0, 14.0, LIGHTGRAY),
        ("Generation:", panel_x, 380.0, 16.0, WHITE),
        (&generation, panel_x, 400.0, 20.0, Color::from_rgba(0x58, 0xf0, 0x87, 255)),
        ("Status:", panel_x, 435.0, 16.0, WHITE),
        (if running { "Running" } else { "Stopped" }, panel_x, 455.0, 16.0, status_color),
    ];

    labels.iter().for_each(|(text, x, y, size, color)| {
        draw_text_label(text, *x, *y, *size, *color);
    });
}
