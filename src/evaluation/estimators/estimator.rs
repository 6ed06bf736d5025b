/// Online scalar aggregate over an unbounded stream of values.
///
/// Implementations accept values incrementally via [`add`] and expose the
/// current aggregate via [`estimation`]. The evaluators feed these with
/// per-sample residual terms, so a `NaN` input means "nothing to record for
/// this sample" and is skipped rather than poisoning the aggregate.
pub trait Estimator {
    /// Incorporates a new observation.
    fn add(&mut self, v: f64);

    /// Returns the current aggregate, or `NaN` if nothing was recorded yet.
    fn estimation(&self) -> f64;
}
