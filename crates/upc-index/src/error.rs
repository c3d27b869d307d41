//! Index error types.

use std::path::PathBuf;

use upc_core::errors::CoreError;
use upc_parser::ParserError;

/// Errors from building an index or reading its document set.
///
/// A dangling link is not an error here: it is reported through
/// `AuditReport::broken`.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// An entry violated the entry invariants.
    #[error(transparent)]
    Invalid(#[from] CoreError),

    /// The index document could not be parsed.
    #[error("index document error: {0}")]
    Parser(#[from] ParserError),

    /// The notebook directory does not exist.
    #[error("notebook directory not found: {}", .0.display())]
    MissingRoot(PathBuf),

    /// Filesystem access failed for a reason other than absence.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The notebook glob is not a valid pattern.
    #[error("invalid notebook pattern: {0}")]
    Pattern(#[from] globset::Error),

    /// Directory walking failed.
    #[error("walk error: {0}")]
    Walk(#[from] ignore::Error),
}
