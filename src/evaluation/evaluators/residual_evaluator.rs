use crate::evaluation::estimators::PeakEstimator;
use crate::evaluation::{Estimator, Measurement, SmoothingEvaluator};

/// Online evaluator of the residual `raw − filtered`.
///
/// Tracks:
/// - signed bias (`mean_residual`);
/// - magnitude (`mean_abs_residual`) and energy (`rms_residual`);
/// - optionally the worst-case magnitude (`peak_abs_residual`);
/// - optionally `roughness`: mean |Δfiltered| over mean |Δraw|, the
///   step-to-step variation the smoother lets through (1 ≈ no smoothing,
///   0 ≈ a flat line).
///
/// All updates are **online** and unbounded; per-pair cost is O(1). Pairs
/// with a non-finite side are skipped entirely so one bad sample cannot
/// poison the aggregates.
pub struct ResidualEvaluator<E: Estimator + Default> {
    bias: E,
    magnitude: E,
    energy: E,
    peak: PeakEstimator,
    raw_step: E,
    filtered_step: E,
    last_raw: Option<f64>,
    last_filtered: Option<f64>,
    samples_seen: u64,
    show_peak: bool,
    show_roughness: bool,
}

impl<E: Estimator + Default> ResidualEvaluator<E> {
    pub fn new(show_peak: bool, show_roughness: bool) -> Self {
        Self {
            bias: E::default(),
            magnitude: E::default(),
            energy: E::default(),
            peak: PeakEstimator::default(),
            raw_step: E::default(),
            filtered_step: E::default(),
            last_raw: None,
            last_filtered: None,
            samples_seen: 0,
            show_peak,
            show_roughness,
        }
    }

    pub fn new_with_default_flags() -> Self {
        Self::new(false, false)
    }

    /// Number of (raw, filtered) pairs accepted so far.
    #[inline]
    pub fn samples_seen(&self) -> u64 {
        self.samples_seen
    }
}

impl<E: Estimator + Default> Default for ResidualEvaluator<E> {
    fn default() -> Self {
        Self::new_with_default_flags()
    }
}

impl<E: Estimator + Default> SmoothingEvaluator for ResidualEvaluator<E> {
    fn reset(&mut self) {
        *self = Self::new(self.show_peak, self.show_roughness);
    }

    fn add_result(&mut self, raw: f64, filtered: f64) {
        if !raw.is_finite() || !filtered.is_finite() {
            return;
        }

        self.samples_seen += 1;

        let residual = raw - filtered;
        self.bias.add(residual);
        self.magnitude.add(residual.abs());
        self.energy.add(residual * residual);
        self.peak.add(residual);

        if let Some(prev) = self.last_raw {
            self.raw_step.add((raw - prev).abs());
        }
        if let Some(prev) = self.last_filtered {
            self.filtered_step.add((filtered - prev).abs());
        }

        self.last_raw = Some(raw);
        self.last_filtered = Some(filtered);
    }

    fn performance(&self) -> Vec<Measurement> {
        let mut m = vec![
            Measurement::new("mean_residual", self.bias.estimation()),
            Measurement::new("mean_abs_residual", self.magnitude.estimation()),
            Measurement::new("rms_residual", self.energy.estimation().sqrt()),
        ];

        if self.show_peak {
            m.push(Measurement::new("peak_abs_residual", self.peak.estimation()));
        }

        if self.show_roughness {
            let raw = self.raw_step.estimation();
            let filtered = self.filtered_step.estimation();
            let roughness = if raw.is_finite() && raw.abs() > f64::EPSILON {
                filtered / raw
            } else {
                f64::NAN
            };
            m.push(Measurement::new("roughness", roughness));
        }

        m
    }
}
