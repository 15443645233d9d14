use std::collections::VecDeque;

/// Bounded-capacity FIFO over scalar samples.
///
/// Holds at most `capacity` samples in arrival order; pushing onto a full
/// window evicts the oldest sample and hands it back to the caller.
#[derive(Debug, Clone)]
pub struct SampleWindow {
    samples: VecDeque<f64>,
    capacity: usize,
}

impl SampleWindow {
    /// Creates an empty window. Capacity validation (≥ 1) is done by the
    /// owning estimator; see `WindowPercentileEstimator::new`.
    pub fn with_capacity(capacity: usize) -> Self {
        debug_assert!(capacity >= 1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends `value` at the tail. Returns the evicted head when the window
    /// was already at capacity, `None` otherwise.
    pub fn push(&mut self, value: f64) -> Option<f64> {
        let evicted = if self.samples.len() == self.capacity {
            self.samples.pop_front()
        } else {
            None
        };
        self.samples.push_back(value);
        evicted
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates the window contents in arrival order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let w = SampleWindow::with_capacity(3);
        assert_eq!(w.len(), 0);
        assert!(w.is_empty());
        assert_eq!(w.capacity(), 3);
    }

    #[test]
    fn push_below_capacity_evicts_nothing() {
        let mut w = SampleWindow::with_capacity(3);
        assert_eq!(w.push(1.0), None);
        assert_eq!(w.push(2.0), None);
        assert_eq!(w.push(3.0), None);
        assert_eq!(w.len(), 3);
    }

    #[test]
    fn push_at_capacity_evicts_oldest() {
        let mut w = SampleWindow::with_capacity(3);
        w.push(1.0);
        w.push(2.0);
        w.push(3.0);
        assert_eq!(w.push(4.0), Some(1.0));
        assert_eq!(w.push(5.0), Some(2.0));
        assert_eq!(w.len(), 3);
        let contents: Vec<f64> = w.iter().collect();
        assert_eq!(contents, vec![3.0, 4.0, 5.0]);
    }

    #[test]
    fn capacity_one_keeps_only_latest() {
        let mut w = SampleWindow::with_capacity(1);
        assert_eq!(w.push(10.0), None);
        assert_eq!(w.push(20.0), Some(10.0));
        let contents: Vec<f64> = w.iter().collect();
        assert_eq!(contents, vec![20.0]);
    }

    #[test]
    fn iter_preserves_arrival_order() {
        let mut w = SampleWindow::with_capacity(5);
        for v in [3.0, 1.0, 2.0] {
            w.push(v);
        }
        let contents: Vec<f64> = w.iter().collect();
        assert_eq!(contents, vec![3.0, 1.0, 2.0]);
    }
}
