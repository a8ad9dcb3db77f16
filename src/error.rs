//! Error types.

use thiserror::Error;

/// Errors reported before any partitioning work starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartitionError {
    /// The algorithm selector does not name a known implementation.
    #[error("invalid method \"{method}\"; valid options: {valid}")]
    UnknownMethod {
        /// The rejected selector string.
        method: String,
        /// Comma-separated list of accepted selector strings.
        valid: String,
    },

    /// A partition needs at least one part.
    #[error("num_parts must be at least 1")]
    ZeroParts,
}

/// Result type alias for partitioning operations.
pub type Result<T> = std::result::Result<T, PartitionError>;
