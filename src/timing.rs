//! Monotonic wall-clock measurement for a single timed pass.

use std::time::{Duration, Instant};

/// Stopwatch over [`Instant`], which never goes backwards.
pub(crate) struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    pub(crate) fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Whole milliseconds in `elapsed`, truncated from microsecond resolution.
pub(crate) fn truncated_ms(elapsed: Duration) -> u64 {
    (elapsed.as_micros() / 1000) as u64
}

/// Throughput in MiB/s, or `None` when no time was measured.
pub(crate) fn mib_per_sec(bytes: u64, elapsed: Duration) -> Option<f64> {
    let secs = elapsed.as_secs_f64();
    if secs <= 0.0 {
        return None;
    }
    Some(bytes as f64 / (1024.0 * 1024.0) / secs)
}
