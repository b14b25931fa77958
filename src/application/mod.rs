mod context;
mod controller;
mod timer;

pub use context::{RunState, SimulationContext};
pub use controller::Controller;
pub use timer::{FrameTimer, TimerHandle, TimerService};
