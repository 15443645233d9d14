use crate::estimators::Estimator;

/// Streaming mean estimator: `mean = sum / len`.
///
/// Covers the plain-average reduction over a metric stream (e.g., average
/// latency over all observed samples). NaN observations are skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct MeanEstimator {
    len: f64,
    sum: f64,
}

impl Estimator for MeanEstimator {
    #[inline]
    fn add(&mut self, v: f64) {
        if v.is_nan() {
            return;
        }
        self.len += 1.0;
        self.sum += v;
    }

    #[inline]
    fn estimation(&self) -> f64 {
        if self.len > 0.0 {
            self.sum / self.len
        } else {
            f64::NAN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_estimate_is_nan() {
        let est = MeanEstimator::default();
        assert!(est.estimation().is_nan());
    }

    #[test]
    fn mean_of_a_few_values() {
        let mut est = MeanEstimator::default();
        for v in [1.0, 2.0, 3.0, 4.0] {
            est.add(v);
        }
        assert_eq!(est.estimation(), 2.5);
    }

    #[test]
    fn nan_observations_are_ignored() {
        let mut est = MeanEstimator::default();
        est.add(2.0);
        est.add(f64::NAN);
        est.add(4.0);
        assert_eq!(est.estimation(), 3.0);
    }
}
