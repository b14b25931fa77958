//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`LIFE_SECTION__KEY`)

use figment::{Figment, providers::{Env, Format, Toml}};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::domain::{ComputeMode, MIN_BUFFERS, glider_layout};
use crate::error::ConfigError;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Grid and timing
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Drawing surface size
    #[serde(default)]
    pub canvas: CanvasConfig,
    /// Draw colors
    #[serde(default)]
    pub colors: ColorConfig,
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load and validate configuration from the default `config` directory
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load and validate configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // LIFE_SIMULATION__WIDTH=40 -> simulation.width = 40
        figment = figment.merge(Env::prefixed("LIFE_").split("__"));

        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.simulation.validate()
    }

    /// Fall back to defaults when the sources could not be read or parsed.
    /// Settings that were read but failed validation are passed through.
    pub fn recover(err: ConfigError) -> Result<Self, ConfigError> {
        match err {
            ConfigError::Load(reason) => {
                log::warn!("Failed to load config: {}. Using defaults.", reason);
                Ok(Self::default())
            }
            other => Err(other),
        }
    }
}

/// Grid dimensions, tick period and buffer depth
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Grid columns
    pub width: usize,
    /// Grid rows
    pub height: usize,
    /// Period between automatic steps, in milliseconds
    pub update_time_ms: u64,
    /// Number of grid buffers (at least 2)
    pub buffers: usize,
    /// Serial or rayon-parallel rule engine
    pub compute: ComputeMode,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 25,
            height: 25,
            update_time_ms: 100,
            buffers: 2,
            compute: ComputeMode::Serial,
        }
    }
}

impl SimulationConfig {
    pub fn update_period(&self) -> Duration {
        Duration::from_millis(self.update_time_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.buffers < MIN_BUFFERS {
            return Err(ConfigError::TooFewBuffers(self.buffers));
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid { width: self.width, height: self.height });
        }
        if self.update_time_ms == 0 {
            return Err(ConfigError::ZeroUpdatePeriod);
        }
        if glider_layout(self.width, self.height).is_none() {
            return Err(ConfigError::GliderDoesNotFit { width: self.width, height: self.height });
        }
        Ok(())
    }
}

/// Raster surface the grid is fitted into
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self { width: 500, height: 500 }
    }
}

/// Draw colors as [r, g, b]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub background: [u8; 3],
    pub border: [u8; 3],
    pub alive: [u8; 3],
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: [0xff, 0xff, 0xff],
            border: [0xe0, 0xe0, 0xe0],
            alive: [0x58, 0xf0, 0x87],
        }
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Game of Life".to_string(),
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
