mod error;
mod ewma;
mod kalman;
mod scalar_filter;
mod sliding_window;

pub use error::FilterError;
pub use ewma::Ewma;
pub use kalman::ScalarKalman;
pub use scalar_filter::ScalarFilter;
pub use sliding_window::SlidingWindowMean;
