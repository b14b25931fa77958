//! Configuration error types
//!
//! The simulation itself is total; every error here is a misconfiguration
//! caught before the first buffer is allocated.

use std::fmt;

/// Error type for loading and validating configuration
#[derive(Debug)]
pub enum ConfigError {
    /// A source could not be read or did not match the schema
    Load(String),
    /// Fewer than two buffers would make "current" and "next" alias
    TooFewBuffers(usize),
    /// Width or height is zero
    EmptyGrid { width: usize, height: usize },
    /// The periodic timer needs a non-zero period
    ZeroUpdatePeriod,
    /// Glider seeding would stamp cells outside the grid
    GliderDoesNotFit { width: usize, height: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Load(msg) => write!(f, "Configuration error: {}", msg),
            ConfigError::TooFewBuffers(n) => {
                write!(f, "Configuration error: need at least 2 buffers, got {}", n)
            }
            ConfigError::EmptyGrid { width, height } => {
                write!(f, "Configuration error: grid {}x{} has no cells", width, height)
            }
            ConfigError::ZeroUpdatePeriod => {
                write!(f, "Configuration error: update_time_ms must be greater than 0")
            }
            ConfigError::GliderDoesNotFit { width, height } => write!(
                f,
                "Configuration error: gliders cannot be placed on a {}x{} grid",
                width, height
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError::Load(e.to_string())
    }
}
