pub mod stubs;

pub use stubs::{SpyFilter, SpyFilterHandle, VecSignal};
