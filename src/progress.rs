// src/progress.rs
use crate::error::FetchError;

/// Progress reporting for a scrape run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of ids to fetch.
    fn begin(&mut self, _total: usize) {}

    /// A request for `url` is about to go out.
    fn fetching(&mut self, _id: u32, _url: &str) {}

    /// A report arrived and contributed `entries` categorized fields.
    fn item_done(&mut self, _id: u32, _entries: usize) {}

    fn item_failed(&mut self, _id: u32, _err: &FetchError) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called once fetching is over, before export.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
