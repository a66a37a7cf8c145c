//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// No event exists with the given id.
    #[error("event not found: {0}")]
    EventNotFound(i64),

    /// An infrastructure/persistence error. Store connectivity failures
    /// land here; there is no retry, a single attempt fails the request.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
