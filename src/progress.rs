// src/progress.rs
/// Progress reporting for the extractor. Frontends implement this to
/// surface status; every method defaults to a no-op.
pub trait Progress {
    /// Called once with the number of product blocks found.
    fn begin(&mut self, _total: usize) {}

    /// One product block extracted (0-based index).
    fn item_done(&mut self, _index: usize) {}

    /// Called after the last block.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
