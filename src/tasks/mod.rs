mod smoothing_task;

pub use smoothing_task::SmoothingTask;
