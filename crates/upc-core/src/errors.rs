//! Cross-cutting error types.
//!
//! Domain-specific errors (e.g., `IndexError`, `FusionError`) are defined in
//! their respective crates. A unified error is deferred to `upc-cli` where
//! all crate errors converge.

use thiserror::Error;

/// Errors that can be raised by any `upc` crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
