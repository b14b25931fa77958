//! Periodic timer service used to drive the run loop.

use std::time::Duration;

/// Identifies one periodic registration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

/// Something that can fire a periodic callback until cancelled.
///
/// Firing is reported back to the owner (see [`FrameTimer::advance`]) rather
/// than by calling a stored closure, so the callback target is never borrowed
/// by the timer itself.
pub trait TimerService {
    /// Register a timer that fires every `period`
    fn schedule_periodic(&mut self, period: Duration) -> TimerHandle;

    /// Stop a timer. Unknown or already cancelled handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}

#[derive(Clone, Debug)]
struct PeriodicTimer {
    handle: TimerHandle,
    period: Duration,
    elapsed: Duration,
}

/// Timer driven by frame delta time.
///
/// Each call to [`advance`](FrameTimer::advance) fires every active timer at
/// most once, so a long frame never produces a burst of catch-up steps.
#[derive(Clone, Debug, Default)]
pub struct FrameTimer {
    next_id: u64,
    timers: Vec<PeriodicTimer>,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of timers that have not been cancelled
    pub fn active(&self) -> usize {
        self.timers.len()
    }

    /// Let `dt` pass and return the handles whose period elapsed
    pub fn advance(&mut self, dt: Duration) -> Vec<TimerHandle> {
        let mut fired = Vec::new();
        for timer in &mut self.timers {
            timer.elapsed += dt;
            if timer.elapsed >= timer.period {
                let period = timer.period.as_nanos().max(1);
                timer.elapsed = Duration::from_nanos(((timer.elapsed.as_nanos() - period) % period) as u64);
                fired.push(timer.handle);
            }
        }
        fired
    }
}

impl TimerService for FrameTimer {
    fn schedule_periodic(&mut self, period: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.timers.push(PeriodicTimer { handle, period, elapsed: Duration::ZERO });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.timers.retain(|t| t.handle != handle);
    }
}
