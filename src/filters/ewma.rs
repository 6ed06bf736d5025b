use crate::filters::{FilterError, ScalarFilter};

/// Exponentially weighted moving average.
///
/// `filtered_t = alpha·value_t + (1 − alpha)·filtered_{t-1}`, seeded exactly
/// by the first observed sample. Higher `alpha` weighs new samples more;
/// `alpha` is clamped to `[0, 1]` at every assignment.
#[derive(Debug, Clone, Copy)]
pub struct Ewma {
    alpha: f64,
    filtered: Option<f64>,
}

impl Ewma {
    /// Creates a filter with the default smoothing weight of 0.3.
    pub fn new() -> Self {
        Self::with_alpha(0.3)
    }

    /// Creates a filter with the given smoothing weight (clamped to [0, 1]).
    pub fn with_alpha(alpha: f64) -> Self {
        let mut filter = Self {
            alpha: 0.0,
            filtered: None,
        };
        filter.set_alpha(alpha);
        filter
    }

    /// Assigns the smoothing weight, clamping it to `[0, 1]`.
    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    /// Current smoothing weight.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Clears the filtered state; if `alpha` is given, re-assigns the
    /// smoothing weight as well (clamped like [`set_alpha`](Self::set_alpha)).
    pub fn reset_with(&mut self, alpha: Option<f64>) {
        self.filtered = None;
        if let Some(a) = alpha {
            self.set_alpha(a);
        }
    }
}

impl Default for Ewma {
    fn default() -> Self {
        Self::new()
    }
}

impl ScalarFilter for Ewma {
    fn update(&mut self, value: f64) -> Result<f64, FilterError> {
        let next = match self.filtered {
            // First sample seeds the state; no smoothing applied.
            None => value,
            Some(prev) => self.alpha * value + (1.0 - self.alpha) * prev,
        };
        self.filtered = Some(next);
        Ok(next)
    }

    fn filtered(&self) -> Result<f64, FilterError> {
        self.filtered.ok_or(FilterError::Uninitialized)
    }

    fn reset(&mut self) {
        self.filtered = None;
    }
}
