use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::core::SampleWindow;
use crate::estimators::{Estimator, EstimatorError};

/// `f64` wrapper ordered by IEEE 754 total order, for use inside the
/// partition heaps.
#[derive(Debug, Clone, Copy, PartialEq)]
struct TotalF64(f64);

impl Eq for TotalF64 {}

impl PartialOrd for TotalF64 {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TotalF64 {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Rolling percentile estimator over the last `capacity` samples.
///
/// The window is a bounded FIFO; percentile queries are answered exactly
/// from its live contents by sorting a copy and selecting the rank
/// `ceil(quantile × n) − 1`, clamped to the valid index range.
///
/// Alongside the window, the estimator maintains a two-heap partition of the
/// sample values (a max-heap of the lower half, a min-heap of the upper
/// half) so the median neighborhood is readable in O(1) via
/// [`median_estimate`]. Heaps do not support removing an arbitrary element,
/// so evicted samples are not deleted from the partitions eagerly; instead
/// the partitions are rebuilt from the current window contents after every
/// `capacity / 2 + 1` evictions. Between rebuilds [`median_estimate`] may
/// lag the true median; [`percentile`] never consults the partitions and is
/// unaffected.
///
/// Not thread-safe; callers sharing one estimator across threads must wrap
/// it in a mutex.
///
/// [`median_estimate`]: WindowPercentileEstimator::median_estimate
/// [`percentile`]: WindowPercentileEstimator::percentile
#[derive(Debug, Clone)]
pub struct WindowPercentileEstimator {
    window: SampleWindow,
    lower: BinaryHeap<TotalF64>,
    upper: BinaryHeap<Reverse<TotalF64>>,
    evictions_since_rebuild: usize,
    rebuild_threshold: usize,
}

impl WindowPercentileEstimator {
    /// Creates an estimator over the last `capacity` samples.
    ///
    /// Returns [`EstimatorError::InvalidWindowCapacity`] when `capacity`
    /// is 0.
    pub fn new(capacity: usize) -> Result<Self, EstimatorError> {
        if capacity == 0 {
            return Err(EstimatorError::InvalidWindowCapacity(capacity));
        }
        Ok(Self {
            window: SampleWindow::with_capacity(capacity),
            lower: BinaryHeap::new(),
            upper: BinaryHeap::new(),
            evictions_since_rebuild: 0,
            rebuild_threshold: capacity / 2 + 1,
        })
    }

    /// Pushes one observation into the window, evicting the oldest sample
    /// once the window is full. NaN observations are skipped.
    pub fn add_sample(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }

        let evicted = self.window.push(value);
        self.partition_insert(value);

        if evicted.is_some() {
            self.evictions_since_rebuild += 1;
            if self.evictions_since_rebuild >= self.rebuild_threshold {
                self.rebuild_partitions();
            }
        }
    }

    /// Exact percentile of the current window contents.
    ///
    /// Returns 0.0 while the window is empty (documented sentinel, not a
    /// fault). Quantiles outside (0, 1] are clamped through the rank bounds:
    /// anything ≤ 0 (including non-finite values) yields the window minimum
    /// and anything > 1 yields the maximum.
    pub fn percentile(&self, quantile: f64) -> f64 {
        if self.window.is_empty() {
            return 0.0;
        }
        let mut sorted: Vec<f64> = self.window.iter().collect();
        sorted.sort_unstable_by(f64::total_cmp);

        let n = sorted.len();
        let rank = (quantile * n as f64).ceil() as i64 - 1;
        let idx = rank.clamp(0, n as i64 - 1) as usize;
        sorted[idx]
    }

    /// O(1) median read from the partition boundary elements.
    ///
    /// Exact immediately after a partition rebuild; between rebuilds the
    /// partitions may still hold evicted samples, so the returned value is
    /// an approximation of the true window median. Returns 0.0 while empty.
    pub fn median_estimate(&self) -> f64 {
        let Some(&TotalF64(low)) = self.lower.peek() else {
            return 0.0;
        };
        if self.lower.len() > self.upper.len() {
            low
        } else {
            // Partitions are balanced; the median straddles the boundary.
            let Reverse(TotalF64(high)) = self.upper.peek().copied().unwrap_or(Reverse(TotalF64(low)));
            (low + high) / 2.0
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.window.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.window.capacity()
    }

    /// Inserts into the lower partition when the value falls at or below its
    /// maximum, otherwise into the upper partition, then restores the size
    /// invariant `lower.len ∈ {upper.len, upper.len + 1}`.
    fn partition_insert(&mut self, value: f64) {
        let fits_lower = self
            .lower
            .peek()
            .is_none_or(|&TotalF64(max)| value <= max);
        if fits_lower {
            self.lower.push(TotalF64(value));
        } else {
            self.upper.push(Reverse(TotalF64(value)));
        }
        self.rebalance();
    }

    fn rebalance(&mut self) {
        if self.lower.len() > self.upper.len() + 1 {
            if let Some(max) = self.lower.pop() {
                self.upper.push(Reverse(max));
            }
        } else if self.upper.len() > self.lower.len() {
            if let Some(Reverse(min)) = self.upper.pop() {
                self.lower.push(min);
            }
        }
    }

    /// Redistributes the current window contents into fresh partitions using
    /// the same insert-and-rebalance rule, discarding any evicted stragglers.
    fn rebuild_partitions(&mut self) {
        self.lower.clear();
        self.upper.clear();
        let samples: Vec<f64> = self.window.iter().collect();
        for v in samples {
            self.partition_insert(v);
        }
        self.evictions_since_rebuild = 0;
    }
}

impl Estimator for WindowPercentileEstimator {
    #[inline]
    fn add(&mut self, v: f64) {
        self.add_sample(v);
    }

    /// The rolling median (exact, via the full-sort query path).
    #[inline]
    fn estimation(&self) -> f64 {
        self.percentile(0.5)
    }
}
