use memscan_api::errors::read_error::ReadError;
use thiserror::Error;

/// Error surfaced by the scan driver. A reader returning a short read is tolerated (the
/// affected `ReadGroup` just sits out relative comparisons this pass); only `ReadError::Fatal`
/// reaches here as `ReadFailed`.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("invalid scan arguments: {0}")]
    InvalidArguments(String),

    #[error("scan aborted by a fatal read error: {0}")]
    ReadFailed(ReadError),

    #[error("scan cancelled")]
    Cancelled,

    #[error("unsupported constraint/type combination: {0}")]
    UnsupportedType(String),
}
