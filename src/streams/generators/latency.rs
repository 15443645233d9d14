use std::io::{Error, ErrorKind};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::streams::SampleStream;

/// Synthetic request-latency stream.
///
/// Emits `base_ms` plus uniform jitter in `[0, jitter_ms)`; a configurable
/// percentage of samples are stretched by `spike_multiplier` to give the
/// stream a heavy tail, which is what makes it useful for exercising
/// percentile estimators.
#[derive(Debug)]
pub struct LatencyGenerator {
    seed: u64,
    rng: StdRng,
    base_ms: f64,
    jitter_ms: f64,
    spike_percentage: u32,
    spike_multiplier: f64,
    max_samples: Option<usize>,
    produced: usize,
}

impl LatencyGenerator {
    pub fn new(
        base_ms: f64,
        jitter_ms: f64,
        spike_percentage: u32,
        spike_multiplier: f64,
        max_samples: Option<usize>,
        seed: u64,
    ) -> Result<Self, Error> {
        if !base_ms.is_finite() || base_ms <= 0.0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "Base latency must be finite and positive",
            ));
        }
        if !jitter_ms.is_finite() || jitter_ms < 0.0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "Jitter must be finite and non-negative",
            ));
        }
        if spike_percentage > 100 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "Spike percentage must be in [0, 100]",
            ));
        }
        if !spike_multiplier.is_finite() || spike_multiplier < 1.0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "Spike multiplier must be finite and >= 1.0",
            ));
        }

        Ok(Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            base_ms,
            jitter_ms,
            spike_percentage,
            spike_multiplier,
            max_samples,
            produced: 0,
        })
    }

    #[inline]
    fn gen_latency(&mut self) -> f64 {
        self.base_ms + self.rng.random::<f64>() * self.jitter_ms
    }

    #[inline]
    fn maybe_spike(&mut self, latency: f64) -> f64 {
        let roll: u32 = self.rng.random_range(1..=100);
        if roll <= self.spike_percentage {
            latency * self.spike_multiplier
        } else {
            latency
        }
    }
}

impl SampleStream for LatencyGenerator {
    fn has_more_samples(&self) -> bool {
        self.max_samples.is_none_or(|max| self.produced < max)
    }

    fn next_sample(&mut self) -> Option<f64> {
        if !self.has_more_samples() {
            return None;
        }

        let latency = self.gen_latency();
        let latency = self.maybe_spike(latency);
        self.produced += 1;
        Some(latency)
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.produced = 0;
        Ok(())
    }
}
