use crate::filters::FilterError;

/// Streaming scalar smoother fed one raw sample per call.
///
/// Implementations keep private, constant-memory state and are meant to be
/// drop-in interchangeable: a caller that holds a `Box<dyn ScalarFilter>`
/// can swap the smoothing strategy without touching the feeding loop.
///
/// Each instance serves exactly one logical sample stream. Updates must
/// arrive sequentially; there is no internal synchronization, so sharing an
/// instance across threads requires external locking.
pub trait ScalarFilter: std::fmt::Debug {
    /// Incorporates one raw sample and returns the new filtered value.
    ///
    /// A failed update leaves the internal state untouched.
    fn update(&mut self, value: f64) -> Result<f64, FilterError>;

    /// Returns the most recent filtered value without mutating state.
    ///
    /// Fails with [`FilterError::Uninitialized`] until the first successful
    /// [`update`](Self::update) after construction or a reset.
    fn filtered(&self) -> Result<f64, FilterError>;

    /// Restores the as-constructed state.
    ///
    /// Configuration parameters (window size, smoothing weight, noise
    /// covariances) survive a reset; only the accumulated stream state is
    /// discarded.
    fn reset(&mut self);
}
