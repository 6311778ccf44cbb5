// src/progress.rs
/// Lightweight progress reporting for multi-game runs.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of games found.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One game parsed with every requested category.
    fn item_done(&mut self, _url: &str) {}

    /// One game where at least one category produced no stats.
    fn item_failed(&mut self, _url: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
