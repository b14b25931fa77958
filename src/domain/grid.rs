use std::fmt;

use super::Cell;

/// Grid is a fixed-size 2D cell array addressed by zero-based (row, col).
/// Cells are stored row-major in one contiguous buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Build a grid from text rows, `#` alive and anything else dead.
    /// The widest row sets the grid width.
    pub fn parse(rows: &[&str]) -> Self {
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let mut grid = Self::new(width, rows.len());
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                if ch == '#' {
                    grid.set(row, col, Cell::Alive);
                }
            }
        }
        grid
    }

    /// Get grid dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.height && col < self.width).then(|| self.cells[self.get_index(row, col)])
    }

    /// Set cell at position. Out-of-range writes are ignored.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.height && col < self.width {
            let idx = self.get_index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Reset every cell to dead without reallocating
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Count live cells in the 3x3 neighborhood, excluding the center.
    /// Edges are clipped: positions outside the grid are not counted.
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let row_lo = row.saturating_sub(1);
        let row_hi = (row + 1).min(self.height.saturating_sub(1));
        let col_lo = col.saturating_sub(1);
        let col_hi = (col + 1).min(self.width.saturating_sub(1));

        (row_lo..=row_hi)
            .flat_map(|r| (col_lo..=col_hi).map(move |c| (r, c)))
            .filter(|&(r, c)| (r, c) != (row, col))
            .filter(|&(r, c)| self.cells[self.get_index(r, c)].is_alive())
            .count() as u8
    }

    /// Number of live cells in the whole grid
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Row-major view of the cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Iterate over all cells with their positions as (row, col, cell)
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (i / self.width, i % self.width, cell))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
