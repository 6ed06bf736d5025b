mod smoothing_curve;
mod snapshot;

pub use smoothing_curve::{CurveFormat, SmoothingCurve};
pub use snapshot::Snapshot;
