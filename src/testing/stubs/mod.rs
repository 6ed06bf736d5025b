pub mod spy_filter;
pub mod vec_signal;

pub use spy_filter::{SpyFilter, SpyFilterHandle};
pub use vec_signal::VecSignal;
