//! Fixed-interval scan scheduling

use std::time::Duration;

use super::config::ScanConfig;

/// Drives scans at a fixed interval from the host's update loop.
///
/// `tick` fires at most once per call and drops any backlog, so an
/// overrunning scan can never overlap the next one - ticks are
/// strictly serialized on the calling thread, late frames skip rather
/// than queue.
pub struct ScanScheduler {
    interval: Duration,
    accumulated: Duration,
    running: bool,
}

impl ScanScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
            running: true,
        }
    }

    /// Scheduler honoring the configured scan interval
    pub fn from_config(config: &ScanConfig) -> Self {
        Self::new(Duration::from_secs_f32(config.interval_secs))
    }

    /// Advance by the frame delta; true when a scan is due
    pub fn tick(&mut self, dt: Duration) -> bool {
        if !self.running {
            return false;
        }
        self.accumulated += dt;
        if self.accumulated >= self.interval {
            self.accumulated = Duration::ZERO;
            true
        } else {
            false
        }
    }

    /// Cancel the pending tick and stop firing
    pub fn stop(&mut self) {
        self.running = false;
        self.accumulated = Duration::ZERO;
    }

    /// Resume firing from a clean accumulator
    pub fn start(&mut self) {
        self.running = true;
        self.accumulated = Duration::ZERO;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }
}
