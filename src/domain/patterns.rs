use super::{Cell, Grid};

/// Represents a pattern that can be stamped onto the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>,  // (row, col) offsets of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell offsets
    pub fn new(cells: Vec<(usize, usize)>) -> Self {
        let height = cells.iter().map(|(r, _)| *r).max().unwrap_or(0) + 1;
        let width = cells.iter().map(|(_, c)| *c).max().unwrap_or(0) + 1;
        Self { width, height, cells }
    }

    /// Whether the pattern fits inside a `width` x `height` grid when its
    /// origin is at (row, col)
    pub fn fits(&self, width: usize, height: usize, row: usize, col: usize) -> bool {
        row + self.height <= height && col + self.width <= width
    }

    /// Mark the pattern's cells alive with its top-left at (row, col).
    /// Cells falling outside the grid are dropped.
    pub fn place_on(&self, grid: &mut Grid, row: usize, col: usize) {
        for (dr, dc) in &self.cells {
            grid.set(row + dr, col + dc, Cell::Alive);
        }
    }
}

/// Built-in patterns
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves down and right
    pub fn glider() -> Pattern {
        Pattern::new(vec![
            (0, 1),
            (1, 2),
            (2, 0), (2, 1), (2, 2),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glider_bounding_box() {
        let glider = presets::glider();
        assert_eq!((glider.width, glider.height), (3, 3));
        assert_eq!(glider.cells.len(), 5);
    }

    #[test]
    fn test_place_on_offsets_from_origin() {
        let mut grid = Grid::new(6, 6);
        presets::glider().place_on(&mut grid, 2, 1);
        let expected = Grid::parse(&[
            "......",
            "......",
            "..#...",
            "...#..",
            ".###..",
            "......",
        ]);
        assert_eq!(grid, expected);
    }

    #[test]
    fn test_fits_checks_both_axes() {
        let glider = presets::glider();
        assert!(glider.fits(5, 4, 1, 2));
        assert!(!glider.fits(5, 4, 2, 2));
        assert!(!glider.fits(5, 4, 1, 3));
    }
}
