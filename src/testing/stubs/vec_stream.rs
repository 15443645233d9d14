use crate::streams::SampleStream;
use std::io::Error;

/// In-memory finite stream over a fixed vector of samples.
pub struct VecSampleStream {
    pub samples: Vec<f64>,
    idx: usize,
}

impl VecSampleStream {
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples, idx: 0 }
    }
}

impl SampleStream for VecSampleStream {
    fn has_more_samples(&self) -> bool {
        self.idx < self.samples.len()
    }

    fn next_sample(&mut self) -> Option<f64> {
        if !self.has_more_samples() {
            return None;
        }

        let v = self.samples[self.idx];
        self.idx += 1;
        Some(v)
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.idx = 0;
        Ok(())
    }
}
