use thiserror::Error;

/// Errors surfaced by the streaming filters.
///
/// Every error is local to the call that produced it: a failed `update`
/// leaves the filter state exactly as it was, and the next call starts
/// fresh from that state.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum FilterError {
    /// The sample is `NaN` or infinite and the filter refuses to ingest it.
    #[error("sample is not a finite number: {0}")]
    NotFinite(f64),

    /// A filtered-value accessor was called before any sample was accepted.
    #[error("no sample has been filtered yet")]
    Uninitialized,

    /// The Kalman gain denominator `H²·P_prior + R` is zero or non-finite.
    ///
    /// Reachable only with degenerate configuration (e.g. `R = 0` together
    /// with a vanishing prior covariance); the update is refused instead of
    /// committing a division-by-zero result.
    #[error("degenerate Kalman gain denominator: {denominator}")]
    DegenerateGain { denominator: f64 },
}
