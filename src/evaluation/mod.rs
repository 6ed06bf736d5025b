mod estimators;
mod evaluators;
mod measurement;
mod preview;

pub use estimators::{BasicEstimator, Estimator, PeakEstimator};
pub use evaluators::{ResidualEvaluator, SmoothingEvaluator, SmoothingEvaluatorExt};
pub use measurement::Measurement;
pub use preview::{CurveFormat, SmoothingCurve, Snapshot};
