use crate::filters::{FilterError, ScalarFilter};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identity filter that counts `update` calls.
///
/// The paired [`SpyFilterHandle`] keeps observing the count after the
/// filter itself has been boxed and moved into a task.
#[derive(Debug)]
pub struct SpyFilter {
    updates: Arc<AtomicU64>,
    last: Option<f64>,
}

#[derive(Clone)]
pub struct SpyFilterHandle(Arc<AtomicU64>);

impl SpyFilterHandle {
    pub fn count(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

impl SpyFilter {
    pub fn new() -> (Self, SpyFilterHandle) {
        let updates = Arc::new(AtomicU64::new(0));
        let handle = SpyFilterHandle(Arc::clone(&updates));
        (
            Self {
                updates,
                last: None,
            },
            handle,
        )
    }
}

impl ScalarFilter for SpyFilter {
    fn update(&mut self, value: f64) -> Result<f64, FilterError> {
        self.updates.fetch_add(1, Ordering::Relaxed);
        self.last = Some(value);
        Ok(value)
    }

    fn filtered(&self) -> Result<f64, FilterError> {
        self.last.ok_or(FilterError::Uninitialized)
    }

    fn reset(&mut self) {
        // The update count survives a reset.
        self.last = None;
    }
}
