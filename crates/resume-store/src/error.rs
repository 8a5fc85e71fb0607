//! Store error types.

use resume_model::OrderError;
use thiserror::Error;

/// Document store operation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The supplied section order violates its invariants.
    #[error("invalid section order")]
    InvalidOrder(#[from] OrderError),
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
