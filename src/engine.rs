use std::time::{Duration, Instant};

/// Tick engine lifecycle state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EngineStatus {
    Running,
    Stopped,
}

/// Fixed-interval tick source for the game loop.
///
/// Two-state machine: while `Running` it reports one due tick each time the
/// interval elapses; once `Stopped` (on game over) no further ticks fire
/// until [`restart`](Self::restart). The interval never changes during a
/// session.
#[derive(Debug, Clone)]
pub struct TickEngine {
    interval: Duration,
    last_tick: Instant,
    status: EngineStatus,
}

impl TickEngine {
    /// Creates a running engine whose first tick is due one interval from `now`.
    #[must_use]
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_tick: now,
            status: EngineStatus::Running,
        }
    }

    /// Returns true when a tick is due, consuming it. Never reports ticks
    /// while stopped.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.status != EngineStatus::Running {
            return false;
        }

        if now.duration_since(self.last_tick) >= self.interval {
            self.last_tick = now;
            return true;
        }

        false
    }

    /// Stops the engine; subsequent polls report no ticks.
    pub fn stop(&mut self) {
        self.status = EngineStatus::Stopped;
    }

    /// Restarts a stopped engine with a fresh interval window.
    pub fn restart(&mut self, now: Instant) {
        self.status = EngineStatus::Running;
        self.last_tick = now;
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn status(&self) -> EngineStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{EngineStatus, TickEngine};

    const INTERVAL: Duration = Duration::from_millis(100);

    #[test]
    fn no_tick_before_interval_elapses() {
        let start = Instant::now();
        let mut engine = TickEngine::new(INTERVAL, start);

        assert!(!engine.poll(start));
        assert!(!engine.poll(start + Duration::from_millis(99)));
    }

    #[test]
    fn one_tick_per_elapsed_interval() {
        let start = Instant::now();
        let mut engine = TickEngine::new(INTERVAL, start);

        assert!(engine.poll(start + INTERVAL));
        // The window restarts from the consumed tick.
        assert!(!engine.poll(start + INTERVAL + Duration::from_millis(50)));
        assert!(engine.poll(start + INTERVAL + INTERVAL));
    }

    #[test]
    fn stopped_engine_reports_no_ticks() {
        let start = Instant::now();
        let mut engine = TickEngine::new(INTERVAL, start);

        engine.stop();

        assert_eq!(engine.status(), EngineStatus::Stopped);
        assert!(!engine.poll(start + INTERVAL * 10));
    }

    #[test]
    fn restart_resumes_ticking_with_fresh_window() {
        let start = Instant::now();
        let mut engine = TickEngine::new(INTERVAL, start);
        engine.stop();

        let later = start + Duration::from_secs(5);
        engine.restart(later);

        assert_eq!(engine.status(), EngineStatus::Running);
        assert!(!engine.poll(later + Duration::from_millis(10)));
        assert!(engine.poll(later + INTERVAL));
    }
}
