//! Seeding strategies that fill a grid with a starting pattern.

use rand::Rng;

use super::{Cell, Grid, presets};

/// Most gliders placed by [`populate_gliders`]
pub const MAX_GLIDERS: usize = 3;

/// Cells reserved at the right of each bucket so a glider stays inside it
const BUCKET_MARGIN: usize = 6;

/// Number of random placements for a grid: floor(width * height * 0.3)
pub const fn random_target(width: usize, height: usize) -> usize {
    width * height * 3 / 10
}

/// Draw `random_target` positions as (row, col), each axis uniform over its
/// range. Positions may repeat.
pub fn random_positions<'a, R: Rng + ?Sized>(
    width: usize,
    height: usize,
    rng: &'a mut R,
) -> impl Iterator<Item = (usize, usize)> + 'a {
    (0..random_target(width, height))
        .map(move |_| (rng.random_range(0..height), rng.random_range(0..width)))
}

/// Clear the grid, then mark every position from [`random_positions`] alive.
/// Repeated positions land on the same cell, so the live count can be lower
/// than the target. Returns the realized live count.
pub fn populate_random<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> usize {
    grid.clear();
    let (width, height) = grid.dimensions();
    for (row, col) in random_positions(width, height, rng) {
        grid.set(row, col, Cell::Alive);
    }
    grid.live_count()
}

/// How gliders are spread over a grid of a given size
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GliderLayout {
    /// Number of gliders, one per bucket
    pub count: usize,
    /// Width of each horizontal bucket
    pub bucket_width: usize,
    /// Origin rows always fall in `0..row_span`
    pub row_span: usize,
}

/// Work out the glider layout for a grid, or `None` when a glider could be
/// stamped outside it.
pub fn glider_layout(width: usize, height: usize) -> Option<GliderLayout> {
    let count = MAX_GLIDERS.min(width / 5);
    if count == 0 {
        return None;
    }
    let bucket_width = width / count;
    if bucket_width <= BUCKET_MARGIN {
        return None;
    }
    // floor of a real drawn from [0, width / 2)
    let row_span = width.div_ceil(2);

    let last_row = row_span - 1;
    let last_col = (count - 1) * bucket_width + bucket_width - BUCKET_MARGIN - 1;
    presets::glider()
        .fits(width, height, last_row, last_col)
        .then_some(GliderLayout { count, bucket_width, row_span })
}

/// Origin row: a real drawn uniformly from [0, width / 2), floored.
/// For odd widths the last row is half as likely as the others.
fn origin_row<R: Rng + ?Sized>(rng: &mut R, width: usize, row_span: usize) -> usize {
    let row = (rng.random::<f64>() * width as f64 / 2.0) as usize;
    // rounding can land exactly on width / 2
    row.min(row_span - 1)
}

/// Clear the grid, then place one glider in each of up to three equal-width
/// buckets. Returns how many gliders were placed.
pub fn populate_gliders<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> usize {
    grid.clear();
    let (width, height) = grid.dimensions();
    let Some(layout) = glider_layout(width, height) else {
        log::warn!("Grid {}x{} is too small for gliders, leaving it empty", width, height);
        return 0;
    };

    let glider = presets::glider();
    for i in 0..layout.count {
        let col = rng.random_range(0..layout.bucket_width - BUCKET_MARGIN) + i * layout.bucket_width;
        let row = origin_row(rng, width, layout.row_span);
        glider.place_on(grid, row, col);
    }
    layout.count
}
