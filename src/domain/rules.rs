//! B3/S23 rule engine.
//!
//! Both passes read only from `current` and write every cell of `next`,
//! so the result never depends on what `next` held before.

use rayon::prelude::*;

use super::{Cell, Grid};

/// Compute the next generation of `current` into `next` (serial).
pub fn update(current: &Grid, next: &mut Grid) {
    debug_assert_eq!(current.dimensions(), next.dimensions());
    let width = current.width();
    if width == 0 {
        return;
    }

    next.cells_mut()
        .chunks_exact_mut(width)
        .enumerate()
        .for_each(|(row, out)| evolve_row(current, row, out));
}

/// Same result as [`update`], with rows computed concurrently by rayon.
pub fn update_parallel(current: &Grid, next: &mut Grid) {
    debug_assert_eq!(current.dimensions(), next.dimensions());
    let width = current.width();
    if width == 0 {
        return;
    }

    next.cells_mut()
        .par_chunks_exact_mut(width)
        .enumerate()
        .for_each(|(row, out)| evolve_row(current, row, out));
}

fn evolve_row(current: &Grid, row: usize, out: &mut [Cell]) {
    for (col, slot) in out.iter_mut().enumerate() {
        let cell = current.get(row, col).unwrap_or_default();
        *slot = cell.evolve(current.live_neighbors(row, col));
    }
}
