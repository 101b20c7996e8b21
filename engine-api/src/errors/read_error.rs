use thiserror::Error;

/// Error surfaced by the injected byte-reader callback at the `ReadGroup` boundary.
///
/// A short read is recoverable (the group just becomes ineligible for relative comparisons
/// until it reads cleanly again), while `Fatal` aborts the whole scan.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReadError {
    #[error("short read: got {read} of {requested} requested bytes")]
    ShortRead { read: usize, requested: usize },

    #[error("fatal read error: {0}")]
    Fatal(String),
}

impl ReadError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, ReadError::Fatal(_))
    }
}
