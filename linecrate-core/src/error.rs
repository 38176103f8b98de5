//! Error types for linecrate

use thiserror::Error;

/// Main error type for linecrate operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An index referenced an element beyond the end of its container.
    #[error("{kind} index {index} is out of range (length {len})")]
    IndexOutOfRange {
        kind: &'static str,
        index: usize,
        len: usize,
    },
}

/// Result type alias for linecrate operations
pub type Result<T> = std::result::Result<T, Error>;
