mod cell;
mod grid;
mod buffers;
mod patterns;
mod algorithm;
pub mod rules;
pub mod seeder;

pub use cell::Cell;
pub use grid::Grid;
pub use buffers::{BufferSet, MIN_BUFFERS};
pub use patterns::{Pattern, presets};
pub use algorithm::ComputeMode;
pub use seeder::{GliderLayout, glider_layout, populate_gliders, populate_random};
