use crate::filters::{FilterError, ScalarFilter};

/// One-dimensional linear-Gaussian recursive estimator.
///
/// Models the system `x_t = A·x_{t-1} + w` observed through
/// `z_t = H·x_t + v`, with `w ~ N(0, Q)` and `v ~ N(0, R)`. Every
/// [`update`](ScalarFilter::update) runs one full predict → gain → correct
/// cycle over the scalar state pair (estimate, error covariance).
///
/// All model parameters are fixed at construction. The filter applies no
/// validation to them; the configuration layer is the place to reject
/// degenerate combinations up front, and [`FilterError::DegenerateGain`]
/// catches the one failure mode the arithmetic cannot absorb.
#[derive(Debug, Clone, Copy)]
pub struct ScalarKalman {
    estimate: f64,
    error_covariance: f64,
    state_transition: f64,
    observation: f64,
    process_noise: f64,
    observation_noise: f64,
    gain: f64,
    initial_estimate: f64,
    initial_covariance: f64,
}

impl ScalarKalman {
    /// Creates a filter with the random-walk defaults
    /// (`A = 1`, `H = 1`, `Q = 0.1`, `R = 1`, `P = 1`).
    pub fn new(initial_estimate: f64) -> Self {
        Self::with_parameters(initial_estimate, 1.0, 1.0, 0.1, 1.0, 1.0)
    }

    /// Creates a filter with an explicit model configuration.
    ///
    /// `state_transition` is A, `observation` is H, `process_noise` is Q,
    /// `observation_noise` is R, and `initial_covariance` seeds P.
    pub fn with_parameters(
        initial_estimate: f64,
        state_transition: f64,
        observation: f64,
        process_noise: f64,
        observation_noise: f64,
        initial_covariance: f64,
    ) -> Self {
        Self {
            estimate: initial_estimate,
            error_covariance: initial_covariance,
            state_transition,
            observation,
            process_noise,
            observation_noise,
            gain: 0.0,
            initial_estimate,
            initial_covariance,
        }
    }

    /// Current posterior estimate of the true value.
    #[inline]
    pub fn estimate(&self) -> f64 {
        self.estimate
    }

    /// Gain used by the most recent update (0 before the first update).
    #[inline]
    pub fn gain(&self) -> f64 {
        self.gain
    }

    /// Current posterior error covariance.
    #[inline]
    pub fn error_covariance(&self) -> f64 {
        self.error_covariance
    }

    /// Process noise covariance Q.
    #[inline]
    pub fn process_noise(&self) -> f64 {
        self.process_noise
    }

    /// Observation noise covariance R.
    #[inline]
    pub fn observation_noise(&self) -> f64 {
        self.observation_noise
    }
}

impl Default for ScalarKalman {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl ScalarFilter for ScalarKalman {
    fn update(&mut self, value: f64) -> Result<f64, FilterError> {
        // Predict: x_prior = A·x, P_prior = A²·P + Q.
        let prior_estimate = self.state_transition * self.estimate;
        let prior_covariance =
            self.state_transition * self.state_transition * self.error_covariance
                + self.process_noise;

        // Gain: k = P_prior·H / (H²·P_prior + R).
        let denominator =
            self.observation * self.observation * prior_covariance + self.observation_noise;
        if !denominator.is_finite() || denominator == 0.0 {
            return Err(FilterError::DegenerateGain { denominator });
        }
        let gain = prior_covariance * self.observation / denominator;

        // Correct: blend the prediction with the observation surprise.
        let innovation = value - self.observation * prior_estimate;
        self.estimate = prior_estimate + gain * innovation;
        self.error_covariance = prior_covariance - gain * self.observation * prior_covariance;
        self.gain = gain;

        Ok(self.estimate)
    }

    fn filtered(&self) -> Result<f64, FilterError> {
        Ok(self.estimate)
    }

    fn reset(&mut self) {
        self.estimate = self.initial_estimate;
        self.error_covariance = self.initial_covariance;
        self.gain = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn defaults_match_documented_configuration() {
        let kf = ScalarKalman::new(2.5);
        assert_eq!(kf.estimate(), 2.5);
        assert_eq!(kf.error_covariance(), 1.0);
        assert_eq!(kf.process_noise(), 0.1);
        assert_eq!(kf.observation_noise(), 1.0);
        assert_eq!(kf.gain(), 0.0);
    }

    #[test]
    fn single_update_matches_hand_computed_cycle() {
        // A = 1, H = 1, Q = 0.1, R = 1, P0 = 1, x0 = 0, z = 10.
        let mut kf = ScalarKalman::new(0.0);
        let out = kf.update(10.0).unwrap();

        // P_prior = 1.1, k = 1.1 / 2.1, x = 0 + k·10, P = 1.1·(1 - k).
        let k = 1.1 / 2.1;
        assert!((kf.gain() - k).abs() < 1e-12);
        assert!((out - k * 10.0).abs() < 1e-12);
        assert!((kf.error_covariance() - 1.1 * (1.0 - k)).abs() < 1e-12);
        assert_eq!(kf.filtered().unwrap(), out);
    }

    #[test]
    fn repeated_identical_observations_converge_monotonically() {
        // Q → 0 so the prior keeps tightening; the estimate must approach
        // the constant observation from below and the covariance must
        // shrink toward zero, both monotonically.
        let mut kf = ScalarKalman::with_parameters(0.0, 1.0, 1.0, 1e-9, 1.0, 1.0);
        let z = 5.0;

        let mut last_gap = (z - kf.estimate()).abs();
        let mut last_cov = kf.error_covariance();
        for _ in 0..500 {
            kf.update(z).unwrap();
            let gap = (z - kf.estimate()).abs();
            let cov = kf.error_covariance();
            assert!(gap <= last_gap + 1e-15);
            assert!(cov <= last_cov + 1e-15);
            assert!(cov >= 0.0);
            last_gap = gap;
            last_cov = cov;
        }
        // With P0 = R = 1 the covariance decays like 1/(n+1), so after n
        // updates the remaining gap is about z/(n+1).
        assert!(last_gap < 0.02);
        assert!(last_cov < 0.005);
    }

    #[test]
    fn gain_stays_in_unit_interval_for_safe_parameters() {
        // Randomized sweep over safe ranges: Q ≥ 0, R > 0, H = 1, |A| ≤ 1.
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let q = rng.random_range(0.0..5.0);
            let r = rng.random_range(0.01..5.0);
            let a = rng.random_range(-1.0..1.0);
            let p0 = rng.random_range(0.0..10.0);
            let mut kf = ScalarKalman::with_parameters(0.0, a, 1.0, q, r, p0);

            for _ in 0..50 {
                let z = rng.random_range(-100.0..100.0);
                kf.update(z).unwrap();
                let k = kf.gain();
                assert!((0.0..=1.0).contains(&k), "gain {k} escaped [0, 1]");
                assert!(kf.error_covariance() >= 0.0);
            }
        }
    }

    #[test]
    fn degenerate_denominator_is_refused_and_state_kept() {
        // R = 0 with Q = 0 and P0 = 0 drives the denominator to exactly 0.
        let mut kf = ScalarKalman::with_parameters(3.0, 1.0, 1.0, 0.0, 0.0, 0.0);
        let err = kf.update(7.0).unwrap_err();
        assert!(matches!(err, FilterError::DegenerateGain { denominator } if denominator == 0.0));
        assert_eq!(kf.estimate(), 3.0);
        assert_eq!(kf.error_covariance(), 0.0);
        assert_eq!(kf.gain(), 0.0);
    }

    #[test]
    fn filtered_is_available_from_construction() {
        let kf = ScalarKalman::new(1.25);
        assert_eq!(kf.filtered().unwrap(), 1.25);
    }

    #[test]
    fn reset_restores_construction_state() {
        let mut kf = ScalarKalman::with_parameters(2.0, 1.0, 1.0, 0.1, 1.0, 4.0);
        for z in [8.0, 9.0, 7.5] {
            kf.update(z).unwrap();
        }
        assert!(kf.estimate() != 2.0);

        kf.reset();
        assert_eq!(kf.estimate(), 2.0);
        assert_eq!(kf.error_covariance(), 4.0);
        assert_eq!(kf.gain(), 0.0);

        // The next cycle behaves exactly like the first one ever.
        let mut fresh = ScalarKalman::with_parameters(2.0, 1.0, 1.0, 0.1, 1.0, 4.0);
        let a = kf.update(6.0).unwrap();
        let b = fresh.update(6.0).unwrap();
        assert_eq!(a, b);
    }
}
