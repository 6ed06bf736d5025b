use std::io::Error;

/// Pull-based source of scalar measurements.
///
/// Implementations may represent finite recordings (e.g., vectors of
/// captured telemetry) or unbounded generators. Samples are plain `f64`s;
/// a filter consumes them one at a time.
pub trait Signal {
    /// Indicates whether the signal *may* produce more samples.
    ///
    /// Finite signals should return `false` once exhausted. Unbounded
    /// generators typically return `true` always.
    ///
    /// This call should be cheap and side effect free. If it returns
    /// `false`, a subsequent call to [`next_sample`](Self::next_sample)
    /// must return `None`.
    fn has_more_samples(&self) -> bool;

    /// Produces the next sample, or `None` if the signal is exhausted.
    fn next_sample(&mut self) -> Option<f64>;

    /// Resets the signal to its initial state.
    ///
    /// For recordings this rewinds to the first sample; for generators it
    /// re-seeds the RNG and clears internal counters, so the exact same
    /// sample sequence is produced again.
    ///
    /// Returns an error if the underlying source cannot be rewound.
    fn restart(&mut self) -> Result<(), Error>;
}
