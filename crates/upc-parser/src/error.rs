//! Parser error types for upc-parser.

/// Errors that can occur while reading an index document.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Link target on line {line} is not valid percent-encoded UTF-8: {target}")]
    InvalidLinkTarget { line: usize, target: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
