// Error types for the event lifecycle

use thiserror::Error;

/// Errors reported by an `EventStore` implementation.
///
/// Every variant is a storage fault from the caller's point of view. The
/// variants only exist so logs can tell a lost connection from a rejected
/// write.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A constraint rejected the write (e.g. duplicate id)
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// The store could not be reached
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Timed out waiting for a connection or for the statement
    #[error("store timed out: {0}")]
    Timeout(String),

    /// Any other database error
    #[error("database error: {0}")]
    Database(String),
}

/// Outcome of an `EventService` operation that did not succeed.
#[derive(Debug, Error)]
pub enum EventError {
    /// Malformed or missing input. Detected before the store is touched.
    #[error("{0}")]
    Validation(String),

    /// Well-formed request targeting an id that does not exist
    #[error("event not found: {0}")]
    NotFound(String),

    /// The store reported a fault
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}

impl EventError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        EventError::Validation(msg.into())
    }

    /// Create a not-found error for the given event id
    pub fn not_found(id: impl Into<String>) -> Self {
        EventError::NotFound(id.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, EventError::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, EventError::NotFound(_))
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, EventError::Storage(_))
    }
}

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, EventError>;
