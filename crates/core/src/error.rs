use crate::types::DbId;

/// Domain-level error type shared across crates.
///
/// Variants map one-to-one onto the HTTP status codes the API layer
/// produces; the mapping itself lives in `vidshare-api`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The request is well-formed but the operation is not allowed on the
    /// target, e.g. mutating the reserved default category.
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
