// src/progress.rs
/// Lightweight progress reporting for long-running operations (the geocode
/// pass). Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one logical unit completes (e.g., one address resolved).
    fn item_done(&mut self, _done: usize, _total: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints to stderr; used during the blocking startup pass, before the
/// window exists.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        if total > 0 {
            eprintln!("Geocoding {} address(es)...", total);
        }
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }
    fn item_done(&mut self, done: usize, total: usize) {
        eprintln!("  [{}/{}]", done, total);
    }
}
