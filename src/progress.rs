// src/progress.rs
/// Progress reporting for the long-running stages (harvest, details).
/// Frontends implement this to surface status; the library itself prints nothing per item.
pub trait Progress {
    /// Called at the start with the number of work items.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Work item `index` (0-based) is about to be processed.
    fn item_started(&mut self, _index: usize, _label: &str) {}

    /// Item finished; `detail` is a one-line summary of what it produced.
    fn item_done(&mut self, _index: usize, _detail: &str) {}

    /// Item was skipped because of `reason`.
    fn item_failed(&mut self, _index: usize, _label: &str, _reason: &str) {}

    /// Called at the end, successful, failed or interrupted.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
