use crate::config::SimulationConfig;
use crate::domain::{BufferSet, ComputeMode, Grid};
use crate::error::ConfigError;
use crate::rendering::{CellLayout, RenderSink};
use super::TimerHandle;

/// Whether the periodic timer is driving steps
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running(TimerHandle),
}

/// SimulationContext owns all simulation state: the buffer ring, the run
/// state and the generation counter.
pub struct SimulationContext {
    buffers: BufferSet,
    layout: CellLayout,
    compute: ComputeMode,
    run_state: RunState,
    generation: u64,
}

impl SimulationContext {
    pub fn new(config: &SimulationConfig, layout: CellLayout) -> Result<Self, ConfigError> {
        Ok(Self {
            buffers: BufferSet::new(config.width, config.height, config.buffers)?,
            layout,
            compute: config.compute,
            run_state: RunState::Idle,
            generation: 0,
        })
    }

    pub fn buffers(&self) -> &BufferSet {
        &self.buffers
    }

    /// The grid that will be drawn by the next step
    pub fn current_grid(&self) -> &Grid {
        self.buffers.current()
    }

    pub fn current_grid_mut(&mut self) -> &mut Grid {
        self.buffers.current_mut()
    }

    pub fn layout(&self) -> &CellLayout {
        &self.layout
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn reset_generation(&mut self) {
        self.generation = 0;
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn set_run_state(&mut self, state: RunState) {
        self.run_state = state;
    }

    /// Draw the current grid, then compute the next one.
    /// The drawn grid is not touched until the following step.
    pub fn step<S: RenderSink + ?Sized>(&mut self, sink: &mut S) {
        sink.render_grid(self.buffers.current(), &self.layout);
        self.update();
    }

    /// Compute the next grid from the current one and make it current
    pub fn update(&mut self) {
        let (current, next) = self.buffers.split();
        self.compute.apply(current, next);
        self.buffers.advance();
        self.generation += 1;
        log::debug!(
            "Generation {}: {} live cells",
            self.generation,
            self.buffers.current().live_count()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    struct CountingSink {
        seen: Vec<Grid>,
    }

    impl RenderSink for CountingSink {
        fn render_grid(&mut self, grid: &Grid, _layout: &CellLayout) {
            self.seen.push(grid.clone());
        }
    }

    fn context(width: usize, height: usize) -> SimulationContext {
        let config = SimulationConfig { width, height, ..SimulationConfig::default() };
        SimulationContext::new(&config, CellLayout::fit(100, 100, width, height)).unwrap()
    }

    #[test]
    fn test_rejects_single_buffer() {
        let config = SimulationConfig { buffers: 1, ..SimulationConfig::default() };
        assert!(SimulationContext::new(&config, CellLayout::fit(100, 100, 25, 25)).is_err());
    }

    #[test]
    fn test_step_draws_before_update() {
        let mut ctx = context(5, 5);
        for col in 1..4 {
            ctx.current_grid_mut().set(2, col, Cell::Alive);
        }
        let horizontal = ctx.current_grid().clone();

        let mut sink = CountingSink { seen: Vec::new() };
        ctx.step(&mut sink);

        assert_eq!(sink.seen, vec![horizontal.clone()]);
        assert_ne!(ctx.current_grid(), &horizontal);
        assert_eq!(ctx.generation(), 1);
        assert_eq!(ctx.buffers().current_index(), 1);
    }

    #[test]
    fn test_update_leaves_previous_buffer_intact() {
        let mut ctx = context(5, 5);
        ctx.current_grid_mut().set(0, 0, Cell::Alive);
        ctx.update();
        // lone cell dies in the new current grid, old one is stale but unchanged
        assert_eq!(ctx.current_grid().live_count(), 0);
        assert_eq!(ctx.buffers().next().get(0, 0), Some(Cell::Alive));
    }

    #[test]
    fn test_starts_idle() {
        let ctx = context(25, 25);
        assert_eq!(ctx.run_state(), RunState::Idle);
        assert_eq!(ctx.generation(), 0);
    }
}
