//! Window-independent frame construction.
//!
//! A frame is a flat list of draw commands in canvas pixel coordinates. The
//! macroquad presenter replays the last recorded frame every video frame,
//! while the simulation only records a new one when it steps.

use crate::config::ColorConfig;
use crate::domain::Grid;

pub type Rgb = [u8; 3];

/// Pixel geometry of the grid on the canvas.
/// Cells are `cell_size` squares separated by 1px grid lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellLayout {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub cell_size: u32,
}

impl CellLayout {
    /// Largest whole cell size that fits the grid plus its lines on the canvas
    pub fn fit(canvas_width: u32, canvas_height: u32, grid_width: usize, grid_height: usize) -> Self {
        let per_axis = |canvas: u32, cells: usize| {
            let cells = cells.max(1) as u32;
            canvas.saturating_sub(cells + 1) / cells
        };
        Self {
            canvas_width,
            canvas_height,
            cell_size: per_axis(canvas_width, grid_width).min(per_axis(canvas_height, grid_height)),
        }
    }

    /// Distance between the top-left corners of adjacent cells
    pub const fn pitch(&self) -> u32 {
        self.cell_size + 1
    }

    /// Top-left pixel of the cell at (row, col)
    pub fn cell_origin(&self, row: usize, col: usize) -> (f32, f32) {
        let pitch = self.pitch() as f32;
        (pitch * col as f32, pitch * row as f32)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect { x: f32, y: f32, w: f32, h: f32, color: Rgb },
    Line { x1: f32, y1: f32, x2: f32, y2: f32, color: Rgb },
}

/// Build the draw commands for one grid: background, live cells, then grid lines
pub fn build_frame(grid: &Grid, layout: &CellLayout, colors: &ColorConfig) -> Vec<DrawCommand> {
    let (width, height) = grid.dimensions();
    let size = layout.cell_size as f32;
    let pitch = layout.pitch() as f32;
    let extent_x = pitch * width as f32;
    let extent_y = pitch * height as f32;

    let background = DrawCommand::FillRect {
        x: 0.0,
        y: 0.0,
        w: layout.canvas_width as f32,
        h: layout.canvas_height as f32,
        color: colors.background,
    };

    let cells = grid.iter_cells().filter(|(_, _, c)| c.is_alive()).map(|(row, col, _)| {
        let (x, y) = layout.cell_origin(row, col);
        DrawCommand::FillRect { x, y, w: size, h: size, color: colors.alive }
    });

    let horizontal = (0..=height).map(|row| {
        let y = pitch * row as f32;
        DrawCommand::Line { x1: 0.0, y1: y, x2: extent_x, y2: y, color: colors.border }
    });
    let vertical = (0..=width).map(|col| {
        let x = pitch * col as f32;
        DrawCommand::Line { x1: x, y1: 0.0, x2: x, y2: extent_y, color: colors.border }
    });

    std::iter::once(background)
        .chain(cells)
        .chain(horizontal)
        .chain(vertical)
        .collect()
}

/// Receives the current grid once per step. Must not keep the borrow.
pub trait RenderSink {
    fn render_grid(&mut self, grid: &Grid, layout: &CellLayout);
}

/// Sink that keeps the most recent frame for presentation
#[derive(Clone, Debug, Default)]
pub struct FrameRecorder {
    colors: ColorConfig,
    frame: Vec<DrawCommand>,
    frames_rendered: u64,
}

impl FrameRecorder {
    pub fn new(colors: ColorConfig) -> Self {
        Self { colors, frame: Vec::new(), frames_rendered: 0 }
    }

    /// Commands of the last rendered frame (empty before the first step)
    pub fn frame(&self) -> &[DrawCommand] {
        &self.frame
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}

impl RenderSink for FrameRecorder {
    fn render_grid(&mut self, grid: &Grid, layout: &CellLayout) {
        self.frame = build_frame(grid, layout, &self.colors);
        self.frames_rendered += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_default_canvas() {
        // (500 - 26) / 25 = 18.96
        let layout = CellLayout::fit(500, 500, 25, 25);
        assert_eq!(layout.cell_size, 18);
        assert_eq!(layout.pitch(), 19);
    }

    #[test]
    fn test_fit_uses_tighter_axis() {
        let layout = CellLayout::fit(400, 200, 10, 10);
        assert_eq!(layout.cell_size, (200 - 11) / 10);
    }

    #[test]
    fn test_fit_tiny_canvas_gives_zero() {
        assert_eq!(CellLayout::fit(10, 10, 25, 25).cell_size, 0);
    }

    #[test]
    fn test_frame_order_and_counts() {
        let grid = Grid::parse(&["#..", "..#"]);
        let layout = CellLayout::fit(100, 100, 3, 2);
        let frame = build_frame(&grid, &layout, &ColorConfig::default());

        // background + 2 cells + 3 horizontal + 4 vertical
        assert_eq!(frame.len(), 1 + 2 + 3 + 4);
        assert!(matches!(frame[0], DrawCommand::FillRect { x, y, .. } if x == 0.0 && y == 0.0));
        assert!(frame[3..].iter().all(|c| matches!(c, DrawCommand::Line { .. })));
    }

    #[test]
    fn test_live_cell_position() {
        let grid = Grid::parse(&["...", "..#"]);
        let layout = CellLayout { canvas_width: 100, canvas_height: 100, cell_size: 9 };
        let colors = ColorConfig::default();
        let frame = build_frame(&grid, &layout, &colors);
        assert_eq!(
            frame[1],
            DrawCommand::FillRect { x: 20.0, y: 10.0, w: 9.0, h: 9.0, color: colors.alive }
        );
    }

    #[test]
    fn test_recorder_keeps_last_frame() {
        let mut recorder = FrameRecorder::new(ColorConfig::default());
        let layout = CellLayout::fit(100, 100, 2, 2);
        recorder.render_grid(&Grid::parse(&["##", "##"]), &layout);
        recorder.render_grid(&Grid::new(2, 2), &layout);
        assert_eq!(recorder.frames_rendered(), 2);
        assert_eq!(recorder.frame().len(), 1 + 3 + 3);
    }
}
