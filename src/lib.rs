// Domain layer - Grid, rule engine, buffers, seeding
pub mod domain;

// Application layer - Simulation context, controller, timer
pub mod application;

// Ambient - configuration and its errors
pub mod config;
pub mod error;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{BufferSet, Cell, ComputeMode, Grid, Pattern, presets};
pub use application::{Controller, FrameTimer, RunState, SimulationContext, TimerHandle, TimerService};
pub use config::AppConfig;
pub use error::ConfigError;
pub use rendering::{CellLayout, FrameRecorder, RenderSink};
