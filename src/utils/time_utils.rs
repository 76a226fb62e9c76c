use std::time::{Duration, Instant};

pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

/// Block the current thread for `latency`, standing in for real processing time.
/// A zero duration returns immediately.
pub fn simulate_latency(latency: Duration) {
    if latency.is_zero() {
        return;
    }
    std::thread::sleep(latency);
}
