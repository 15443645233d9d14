use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

/// Point-in-time view of a profiling run: sample count, rolling mean and
/// the three standard latency percentiles.
#[derive(Copy, Clone, Debug, Serialize)]
pub struct Snapshot {
    pub samples_seen: u64,
    pub mean: f64,
    pub p50: f64,
    pub p95: f64,
    pub p99: f64,
    pub seconds: f64,
}

impl Display for Snapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "seen={}, mean={:.6}, p50={:.6}, p95={:.6}, p99={:.6}, t={:.3}s",
            self.samples_seen, self.mean, self.p50, self.p95, self.p99, self.seconds
        )
    }
}
