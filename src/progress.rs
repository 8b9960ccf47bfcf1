// src/progress.rs
use crate::scrape::Troop;

/// Progress reporting for the scrape loop.
/// Frontends implement this to surface status to the operator.
pub trait Progress {
    /// A faction starts, with the number of troop pages to fetch.
    fn begin(&mut self, _faction: &str, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A troop page was fetched and parsed.
    fn item_done(&mut self, _troop: &Troop) {}

    /// A troop page could not be fetched; the troop is skipped.
    fn item_failed(&mut self, _name: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
