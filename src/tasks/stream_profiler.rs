use crate::estimators::{Estimator, MeanEstimator, WindowPercentileEstimator};
use crate::evaluation::{Measurement, ProfileCurve, Snapshot};
use crate::streams::SampleStream;
use std::io::{Error, ErrorKind};
use std::sync::mpsc::Sender;
use std::time::Instant;

/// Drains a sample stream into rolling estimators and records a curve of
/// periodic snapshots (mean plus P50/P95/P99 over the sliding window).
pub struct StreamProfiler {
    stream: Box<dyn SampleStream>,
    percentiles: WindowPercentileEstimator,
    mean: MeanEstimator,

    curve: ProfileCurve,

    max_samples: Option<u64>,
    max_seconds: Option<u64>,
    sample_frequency: u64,

    processed: u64,
    start_time: Instant,

    progress_tx: Option<Sender<Snapshot>>,
}

impl StreamProfiler {
    pub fn new(
        stream: Box<dyn SampleStream>,
        window_capacity: usize,
        max_samples: Option<u64>,
        max_seconds: Option<u64>,
        sample_frequency: u64,
    ) -> Result<Self, Error> {
        if sample_frequency == 0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "sample_frequency must be > 0",
            ));
        }
        let percentiles = WindowPercentileEstimator::new(window_capacity)
            .map_err(|e| Error::new(ErrorKind::InvalidInput, e))?;

        Ok(Self {
            stream,
            percentiles,
            mean: MeanEstimator::default(),
            curve: ProfileCurve::default(),
            max_samples,
            max_seconds,
            sample_frequency,
            processed: 0,
            start_time: Instant::now(),
            progress_tx: None,
        })
    }

    pub fn with_progress(mut self, tx: Sender<Snapshot>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub fn run(&mut self) -> Result<(), Error> {
        self.start_time = Instant::now();

        while self.stream.has_more_samples() {
            if let Some(n) = self.max_samples {
                if self.processed >= n {
                    break;
                }
            }
            if let Some(s) = self.max_seconds {
                if self.start_time.elapsed().as_secs() >= s {
                    break;
                }
            }
            let Some(sample) = self.stream.next_sample() else {
                break;
            };
            self.processed += 1;

            self.mean.add(sample);
            self.percentiles.add_sample(sample);

            if self.processed % self.sample_frequency == 0 {
                self.push_snapshot();
            }
        }

        self.push_snapshot();
        Ok(())
    }

    pub fn curve(&self) -> &ProfileCurve {
        &self.curve
    }

    /// Current summary as named scalars, in reporting order.
    pub fn measurements(&self) -> Vec<Measurement> {
        vec![
            Measurement::new("mean", self.mean.estimation()),
            Measurement::new("p50", self.percentiles.percentile(0.50)),
            Measurement::new("p95", self.percentiles.percentile(0.95)),
            Measurement::new("p99", self.percentiles.percentile(0.99)),
        ]
    }

    fn push_snapshot(&mut self) {
        let snapshot = Snapshot {
            samples_seen: self.processed,
            mean: self.mean.estimation(),
            p50: self.percentiles.percentile(0.50),
            p95: self.percentiles.percentile(0.95),
            p99: self.percentiles.percentile(0.99),
            seconds: self.start_time.elapsed().as_secs_f64(),
        };

        if let Some(tx) = &self.progress_tx {
            let _ = tx.send(snapshot);
        }

        self.curve.push(snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::VecSampleStream;
    use std::io::ErrorKind;
    use std::sync::mpsc::channel;

    fn ramp(n: usize) -> Box<dyn SampleStream> {
        Box::new(VecSampleStream::new(
            (1..=n).map(|i| i as f64).collect(),
        ))
    }

    #[test]
    fn ctor_guards() {
        let err = StreamProfiler::new(ramp(10), 5, None, None, 0)
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err = StreamProfiler::new(ramp(10), 0, None, None, 5)
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn periodic_and_final_snapshots() {
        let mut profiler = StreamProfiler::new(ramp(100), 100, None, None, 10).unwrap();
        profiler.run().unwrap();

        assert_eq!(profiler.curve().len(), 11);
        let last = profiler.curve().latest().unwrap();
        assert_eq!(last.samples_seen, 100);
        assert_eq!(last.mean, 50.5);
        assert_eq!(last.p50, 50.0);
        assert_eq!(last.p95, 95.0);
        assert_eq!(last.p99, 99.0);
    }

    #[test]
    fn window_narrows_percentiles_to_recent_samples() {
        let mut profiler = StreamProfiler::new(ramp(100), 10, None, None, 50).unwrap();
        profiler.run().unwrap();

        // Window holds {91, ..., 100}; the mean still covers everything.
        let last = profiler.curve().latest().unwrap();
        assert_eq!(last.p50, 95.0);
        assert_eq!(last.p99, 100.0);
        assert_eq!(last.mean, 50.5);
    }

    #[test]
    fn stops_at_max_samples() {
        let mut profiler = StreamProfiler::new(ramp(1000), 50, Some(25), None, 5).unwrap();
        profiler.run().unwrap();

        assert_eq!(profiler.curve().len(), 6);
        assert_eq!(profiler.curve().latest().unwrap().samples_seen, 25);
    }

    #[test]
    fn stops_immediately_when_time_zero() {
        let mut profiler = StreamProfiler::new(ramp(100), 10, None, Some(0), 10).unwrap();
        profiler.run().unwrap();

        assert_eq!(profiler.curve().len(), 1);
        let last = profiler.curve().latest().unwrap();
        assert_eq!(last.samples_seen, 0);
        assert!(last.mean.is_nan());
        assert_eq!(last.p50, 0.0);
    }

    #[test]
    fn measurements_report_named_scalars() {
        let mut profiler = StreamProfiler::new(ramp(100), 100, None, None, 100).unwrap();
        profiler.run().unwrap();

        let got = profiler.measurements();
        let names: Vec<&str> = got.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["mean", "p50", "p95", "p99"]);
        assert_eq!(got[1].value, 50.0);
        assert_eq!(got[3].value, 99.0);
    }

    #[test]
    fn progress_channel_receives_every_snapshot() {
        let (tx, rx) = channel();
        let mut profiler = StreamProfiler::new(ramp(30), 30, None, None, 10)
            .unwrap()
            .with_progress(tx);
        profiler.run().unwrap();

        let received: Vec<Snapshot> = rx.try_iter().collect();
        assert_eq!(received.len(), profiler.curve().len());
        assert_eq!(received.last().unwrap().samples_seen, 30);
    }
}
