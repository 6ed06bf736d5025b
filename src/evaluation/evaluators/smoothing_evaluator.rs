use crate::evaluation::Measurement;
use std::collections::HashMap;

/// Online evaluator of smoothing quality.
///
/// A `SmoothingEvaluator` consumes (raw sample, filtered value) pairs as a
/// filter produces them and exposes aggregated metrics via [`performance`].
pub trait SmoothingEvaluator {
    /// Clears internal state/metrics (configuration does not change).
    fn reset(&mut self);

    /// Feeds one raw sample together with the filtered value the smoother
    /// produced for it.
    ///
    /// If either side of the pair is unusable (non-finite), the
    /// implementation may choose to skip the update.
    fn add_result(&mut self, raw: f64, filtered: f64);

    /// Returns a snapshot of current metrics.
    fn performance(&self) -> Vec<Measurement>;
}

pub trait SmoothingEvaluatorExt {
    /// Returns (name, Some(value)|None) for each requested metric, preserving order.
    fn metrics<'a, I>(&self, names: I) -> Vec<(String, Option<f64>)>
    where
        I: IntoIterator<Item = &'a str>;

    fn metric(&self, name: &str) -> Option<f64> {
        self.metrics([name]).into_iter().next().unwrap().1
    }
}

impl<T: SmoothingEvaluator + ?Sized> SmoothingEvaluatorExt for T {
    fn metrics<'a, I>(&self, names: I) -> Vec<(String, Option<f64>)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let ms = self.performance();
        let map: HashMap<_, _> = ms.into_iter().map(|m| (m.name, m.value)).collect();
        names
            .into_iter()
            .map(|n| (n.to_string(), map.get(n).copied()))
            .collect()
    }
}
