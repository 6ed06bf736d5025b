use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result};

/// Point-in-time view of a smoothing run.
///
/// The fixed fields cover the always-present metrics; anything else the
/// evaluator emits (peak, roughness, ...) lands in `extras` keyed by metric
/// name.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub samples_seen: u64,
    pub mean_abs_residual: f64,
    pub rms_residual: f64,
    pub seconds: f64,
    pub extras: BTreeMap<String, f64>,
}

impl Display for Snapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "seen={}, mae={:.6}, rms={:.6}, t={:.3}s",
            self.samples_seen, self.mean_abs_residual, self.rms_residual, self.seconds
        )
    }
}
