use crate::filters::{FilterError, ScalarFilter};
use std::collections::VecDeque;

/// Arithmetic mean over the last `window_size` samples.
///
/// While warming up the mean covers however many samples have arrived so
/// far; once the window holds `window_size` entries the oldest is evicted
/// before each insertion. The mean is recomputed from the full window on
/// every update (windows are expected small).
#[derive(Debug, Clone)]
pub struct SlidingWindowMean {
    window: VecDeque<f64>,
    window_size: usize,
    mean: Option<f64>,
}

impl SlidingWindowMean {
    /// Creates a filter with the default window of five samples.
    pub fn new() -> Self {
        Self::with_window_size(5)
    }

    /// Creates a filter over the last `window_size` samples.
    pub fn with_window_size(window_size: usize) -> Self {
        Self {
            window: VecDeque::with_capacity(window_size),
            window_size,
            mean: None,
        }
    }

    /// Number of samples currently held (at most `window_size`).
    #[inline]
    pub fn len(&self) -> usize {
        self.window.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Whether the window has reached full capacity.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.window.len() >= self.window_size
    }

    /// Configured window capacity.
    #[inline]
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Appends one sample and returns `(mean, is_full)`.
    ///
    /// `is_full` reports whether the window has reached capacity, so callers
    /// can distinguish a warm-up mean over fewer samples from a steady-state
    /// one. Non-finite samples are rejected with [`FilterError::NotFinite`]
    /// and leave the window untouched.
    pub fn update_with_fill(&mut self, value: f64) -> Result<(f64, bool), FilterError> {
        if !value.is_finite() {
            return Err(FilterError::NotFinite(value));
        }

        self.window.push_back(value);
        while self.window.len() > self.window_size {
            self.window.pop_front();
        }

        let mean = self.window.iter().sum::<f64>() / self.window.len() as f64;
        self.mean = Some(mean);
        Ok((mean, self.is_full()))
    }
}

impl Default for SlidingWindowMean {
    fn default() -> Self {
        Self::new()
    }
}

impl ScalarFilter for SlidingWindowMean {
    fn update(&mut self, value: f64) -> Result<f64, FilterError> {
        self.update_with_fill(value).map(|(mean, _)| mean)
    }

    fn filtered(&self) -> Result<f64, FilterError> {
        self.mean.ok_or(FilterError::Uninitialized)
    }

    fn reset(&mut self) {
        self.window.clear();
        self.mean = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_window_reports_warm_up_mean() {
        let mut f = SlidingWindowMean::with_window_size(3);
        assert_eq!(f.update_with_fill(2.0).unwrap(), (2.0, false));
        assert_eq!(f.update_with_fill(4.0).unwrap(), (3.0, false));
        assert_eq!(f.len(), 2);
        assert!(!f.is_full());
    }

    #[test]
    fn full_window_evicts_oldest_first() {
        let mut f = SlidingWindowMean::with_window_size(3);
        for v in [2.0, 4.0, 6.0] {
            f.update_with_fill(v).unwrap();
        }
        assert!(f.is_full());

        // 2 falls out; the mean covers (4, 6, 8) only.
        let (mean, full) = f.update_with_fill(8.0).unwrap();
        assert!(full);
        assert!((mean - 6.0).abs() < 1e-12);
        assert_eq!(f.len(), 3);
    }

    #[test]
    fn non_finite_samples_are_rejected_without_side_effects() {
        let mut f = SlidingWindowMean::with_window_size(3);
        f.update_with_fill(2.0).unwrap();

        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = f.update_with_fill(bad).unwrap_err();
            assert!(matches!(err, FilterError::NotFinite(_)));
        }
        assert_eq!(f.len(), 1);
        assert_eq!(f.filtered().unwrap(), 2.0);
    }

    #[test]
    fn filtered_fails_before_first_update() {
        let f = SlidingWindowMean::new();
        assert_eq!(f.filtered().unwrap_err(), FilterError::Uninitialized);
    }

    #[test]
    fn reset_empties_window_and_unsets_mean() {
        let mut f = SlidingWindowMean::with_window_size(2);
        f.update_with_fill(1.0).unwrap();
        f.update_with_fill(3.0).unwrap();

        f.reset();
        assert!(f.is_empty());
        assert_eq!(f.filtered().unwrap_err(), FilterError::Uninitialized);

        // The next update starts a fresh warm-up.
        assert_eq!(f.update_with_fill(10.0).unwrap(), (10.0, false));
    }

    #[test]
    fn trait_update_returns_mean_alone() {
        let mut f: Box<dyn ScalarFilter> = Box::new(SlidingWindowMean::with_window_size(4));
        assert_eq!(f.update(1.0).unwrap(), 1.0);
        assert_eq!(f.update(3.0).unwrap(), 2.0);
        assert_eq!(f.filtered().unwrap(), 2.0);
    }
}
