use crate::signals::Signal;
use std::io::Error;

/// Finite signal backed by a vector of samples.
pub struct VecSignal {
    pub samples: Vec<f64>,
    idx: usize,
}

impl VecSignal {
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples, idx: 0 }
    }
}

impl Signal for VecSignal {
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
