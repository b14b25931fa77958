//! Selection of the rule engine pass used for each update.

use serde::{Deserialize, Serialize};

use super::{Grid, rules};

/// How the next generation is computed. Both produce identical grids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComputeMode {
    /// Cell by cell on the calling thread
    #[default]
    Serial,
    /// Rows split across the rayon thread pool
    Parallel,
}

impl ComputeMode {
    /// Get all available modes
    pub fn all() -> Vec<ComputeMode> {
        vec![ComputeMode::Serial, ComputeMode::Parallel]
    }

    /// Display name for UI and benchmark output
    pub fn name(&self) -> &'static str {
        match self {
            ComputeMode::Serial => "Serial",
            ComputeMode::Parallel => "Parallel",
        }
    }

    /// Compute the next generation of `current` into `next`
    pub fn apply(self, current: &Grid, next: &mut Grid) {
        match self {
            ComputeMode::Serial => rules::update(current, next),
            ComputeMode::Parallel => rules::update_parallel(current, next),
        }
    }
}
