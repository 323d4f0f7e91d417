//! Verbose transcript of benchmark steps on stderr.

use crate::bench::PassResult;
use crate::timing::{mib_per_sec, truncated_ms};

/// Step log enabled by `--verbose`; stdout output is never affected.
pub(crate) struct Transcript {
    enabled: bool,
    started: bool,
}

impl Transcript {
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            enabled,
            started: false,
        }
    }

    pub(crate) fn note(&mut self, message: impl AsRef<str>) {
        if !self.enabled {
            return;
        }
        if !self.started {
            self.started = true;
            eprintln!("transcript:");
        }
        eprintln!("- {}", message.as_ref());
    }

    /// Record totals and throughput for a finished pass.
    pub(crate) fn pass(&mut self, pass: &PassResult) {
        if !self.enabled {
            return;
        }
        self.note(pass_summary(pass));
    }
}

fn pass_summary(pass: &PassResult) -> String {
    let totals = format!(
        "read {} bytes in {} chunks in {} us",
        pass.stats.bytes,
        pass.stats.chunks,
        pass.elapsed.as_micros()
    );
    match mib_per_sec(pass.stats.bytes, pass.elapsed) {
        Some(rate) => format!("{totals} ({rate:.1} MiB/s, {} ms)", truncated_ms(pass.elapsed)),
        None => totals,
    }
}
