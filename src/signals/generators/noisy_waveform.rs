use std::io::{Error, ErrorKind};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::signals::Signal;
use crate::signals::generators::Waveform;
use crate::utils::math::sample_standard_normal;

/// Seeded generator of `truth + sigma·ε` samples, `ε ~ N(0, 1)`.
///
/// The underlying truth comes from a [`Waveform`]; Gaussian noise is drawn
/// from a `StdRng` seeded at construction, so two generators built with the
/// same arguments produce identical sample sequences and
/// [`restart`](Signal::restart) replays the sequence from the top.
#[derive(Debug)]
pub struct NoisyWaveformGenerator {
    seed: u64,
    rng: StdRng,
    waveform: Waveform,
    sigma: f64,
    max_samples: Option<usize>,
    produced: usize,
}

impl NoisyWaveformGenerator {
    pub fn new(
        waveform: Waveform,
        sigma: f64,
        max_samples: Option<usize>,
        seed: u64,
    ) -> Result<Self, Error> {
        if !sigma.is_finite() || sigma < 0.0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "sigma must be finite and >= 0",
            ));
        }
        if let Waveform::Sine { period: 0, .. } = waveform {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "sine period must be >= 1",
            ));
        }

        Ok(Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            waveform,
            sigma,
            max_samples,
            produced: 0,
        })
    }

    /// Noise-free value the generator would produce at `step`.
    #[inline]
    pub fn truth_at(&self, step: u64) -> f64 {
        self.waveform.value_at(step)
    }
}

impl Signal for NoisyWaveformGenerator {
    fn has_more_samples(&self) -> bool {
        match self.max_samples {
            Some(max) => self.produced < max,
            None => true,
        }
    }

    fn next_sample(&mut self) -> Option<f64> {
        if !self.has_more_samples() {
            return None;
        }

        let truth = self.waveform.value_at(self.produced as u64);
        let noise = self.sigma * sample_standard_normal(&mut self.rng);
        self.produced += 1;
        Some(truth + noise)
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.produced = 0;
        Ok(())
    }
}
