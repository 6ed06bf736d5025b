mod residual_evaluator;
mod smoothing_evaluator;

pub use residual_evaluator::ResidualEvaluator;
pub use smoothing_evaluator::{SmoothingEvaluator, SmoothingEvaluatorExt};
