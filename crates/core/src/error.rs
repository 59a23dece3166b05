use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Field-level validation failures. Carries the per-field messages so
    /// the HTTP layer can return them to the client for form redisplay.
    #[error("Validation failed")]
    Validation(#[from] validator::ValidationErrors),

    /// The id in the request path disagrees with the id in the body.
    /// Treated as untrusted input (a forged or stale route/body pairing),
    /// not as a server fault.
    #[error("Id mismatch: route id {route_id}, body id {body_id}")]
    IdMismatch { route_id: DbId, body_id: DbId },

    /// An optimistic-concurrency write lost the race: the record was
    /// modified by another writer after this caller read it. The record
    /// still exists; callers must re-read and reconcile, never retry blind.
    #[error("Concurrency conflict: {entity} with id {id} was modified concurrently")]
    ConcurrencyConflict { entity: &'static str, id: DbId },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
