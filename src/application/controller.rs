use std::time::Duration;

use rand::Rng;

use crate::config::SimulationConfig;
use crate::domain::{Grid, populate_gliders, populate_random};
use crate::error::ConfigError;
use crate::rendering::{CellLayout, RenderSink};
use super::{FrameTimer, RunState, SimulationContext, TimerHandle, TimerService};

/// Controller exposes the entry points a UI may call:
/// step, start, stop and the two seeding strategies.
///
/// It owns the simulation context together with its collaborators: the
/// render sink that receives each drawn grid, the timer service that drives
/// the run loop and the random source used for seeding.
pub struct Controller<S, T, R> {
    context: SimulationContext,
    sink: S,
    timer: T,
    rng: R,
    period: Duration,
}

impl<S, T, R> Controller<S, T, R>
where
    S: RenderSink,
    T: TimerService,
    R: Rng,
{
    pub fn new(
        config: &SimulationConfig,
        layout: CellLayout,
        sink: S,
        timer: T,
        rng: R,
    ) -> Result<Self, ConfigError> {
        if config.update_time_ms == 0 {
            return Err(ConfigError::ZeroUpdatePeriod);
        }
        Ok(Self {
            context: SimulationContext::new(config, layout)?,
            sink,
            timer,
            rng,
            period: config.update_period(),
        })
    }

    /// Begin periodic stepping. Steps once immediately. No-op while running.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        log::info!("Starting simulation, one step every {:?}", self.period);
        self.step();
        let handle = self.timer.schedule_periodic(self.period);
        self.context.set_run_state(RunState::Running(handle));
    }

    /// Cancel periodic stepping. No-op while idle.
    pub fn stop(&mut self) {
        if let RunState::Running(handle) = self.context.run_state() {
            self.timer.cancel(handle);
            self.context.set_run_state(RunState::Idle);
            log::info!("Stopped at generation {}", self.context.generation());
        }
    }

    /// Draw the current grid, then compute the next one.
    /// Allowed in either state; does not change it.
    pub fn step(&mut self) {
        self.context.step(&mut self.sink);
    }

    /// Fill the current grid with random noise and show it
    pub fn populate_random(&mut self) {
        let live = populate_random(self.context.current_grid_mut(), &mut self.rng);
        log::info!("Seeded {} random live cells", live);
        self.context.reset_generation();
        self.step();
    }

    /// Replace the current grid with up to three gliders and show it
    pub fn populate_gliders(&mut self) {
        let placed = populate_gliders(self.context.current_grid_mut(), &mut self.rng);
        log::info!("Seeded {} gliders", placed);
        self.context.reset_generation();
        self.step();
    }

    /// Timer callback. Steps only for the handle of the active run.
    pub fn on_timer(&mut self, handle: TimerHandle) -> bool {
        if self.context.run_state() != RunState::Running(handle) {
            return false;
        }
        self.step();
        true
    }

    pub fn is_running(&self) -> bool {
        matches!(self.context.run_state(), RunState::Running(_))
    }

    pub fn generation(&self) -> u64 {
        self.context.generation()
    }

    /// Live cells in the grid the next step will draw
    pub fn live_cells(&self) -> usize {
        self.context.current_grid().live_count()
    }

    /// Get grid dimensions as (width, height)
    pub fn dimensions(&self) -> (usize, usize) {
        self.context.current_grid().dimensions()
    }

    pub fn current_grid(&self) -> &Grid {
        self.context.current_grid()
    }

    pub fn current_grid_mut(&mut self) -> &mut Grid {
        self.context.current_grid_mut()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }
}

impl<S, R> Controller<S, FrameTimer, R>
where
    S: RenderSink,
    R: Rng,
{
    /// Advance the frame timer by one frame and run any step that came due
    pub fn tick(&mut self, dt: Duration) {
        for handle in self.timer.advance(dt) {
            self.on_timer(handle);
        }
    }
}
