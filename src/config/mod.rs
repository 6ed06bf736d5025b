mod build;
mod filter_choice;

pub use build::{BuildError, build_filter};
pub use filter_choice::{
    EwmaParameters, FilterChoice, FilterKind, KalmanParameters, SlidingWindowParameters,
};
