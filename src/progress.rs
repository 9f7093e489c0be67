// src/progress.rs
/// Progress reporting for live acquisition (one item per job).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of jobs.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A job finished successfully.
    fn item_done(&mut self, _job: &str) {}

    /// A job failed; the run continues with the next one.
    fn item_failed(&mut self, _job: &str, _err: &str) {}

    /// Called at the end, whatever happened.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
