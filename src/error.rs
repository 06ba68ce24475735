//! Error types for the tracker library.

use thiserror::Error;

/// Error type for tracker operations.
///
/// Almost every operation in this crate is total over its inputs: lookups
/// return `Option`, duplicate insertions are ignored, and out-of-range
/// positions degrade to an append. The only fallible surface is JSON
/// encoding of exported state.
#[derive(Error, Debug)]
pub enum ProcessError {
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Result type alias for tracker operations
pub type Result<T> = std::result::Result<T, ProcessError>;
