use crate::types::DbId;

/// Domain-level error taxonomy shared by all crates.
///
/// Every failure a request can hit maps to exactly one variant; the API
/// layer translates these into HTTP status codes. None are retried --
/// a failure is a terminal outcome of the request that triggered it.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The target exists but is not in a state that permits the action
    /// (e.g. bidding on a closed project, withdrawing an accepted bid).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
