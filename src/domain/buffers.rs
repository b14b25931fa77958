use super::Grid;
use crate::error::ConfigError;

/// Smallest buffer count that keeps "current" and "next" distinct.
pub const MIN_BUFFERS: usize = 2;

/// BufferSet owns a ring of same-sized grids and tracks which one is current.
///
/// All grids are allocated once. The rule engine reads the current grid and
/// writes the one after it, then [`BufferSet::advance`] makes that the new
/// current grid.
#[derive(Clone, Debug)]
pub struct BufferSet {
    grids: Vec<Grid>,
    current: usize,
}

impl BufferSet {
    /// Allocate `count` dead grids of the given size
    pub fn new(width: usize, height: usize, count: usize) -> Result<Self, ConfigError> {
        if count < MIN_BUFFERS {
            return Err(ConfigError::TooFewBuffers(count));
        }
        Ok(Self {
            grids: (0..count).map(|_| Grid::new(width, height)).collect(),
            current: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.grids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    /// Get grid dimensions as (width, height)
    pub fn dimensions(&self) -> (usize, usize) {
        self.grids[self.current].dimensions()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn next_index(&self) -> usize {
        (self.current + 1) % self.grids.len()
    }

    /// The grid to draw and seed
    pub fn current(&self) -> &Grid {
        &self.grids[self.current]
    }

    pub fn current_mut(&mut self) -> &mut Grid {
        &mut self.grids[self.current]
    }

    /// The grid the next update will write
    pub fn next(&self) -> &Grid {
        &self.grids[self.next_index()]
    }

    /// Borrow the current grid for reading and the next grid for writing
    pub fn split(&mut self) -> (&Grid, &mut Grid) {
        let (cur, next) = (self.current, self.next_index());
        if cur < next {
            let (head, tail) = self.grids.split_at_mut(next);
            (&head[cur], &mut tail[0])
        } else {
            // next wrapped to 0
            let (head, tail) = self.grids.split_at_mut(cur);
            (&tail[0], &mut head[next])
        }
    }

    /// Make the next grid current
    pub fn advance(&mut self) {
        self.current = self.next_index();
    }
}
