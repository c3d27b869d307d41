//! # upc-parser
//!
//! Reads and writes the markdown document that lists the tutorial notebooks.
//!
//! Parsing runs the `tree-sitter-md` block grammar through ast-grep and keeps
//! every list item that opens with an inline link. Rendering writes the same
//! shape back, so a rendered index parses to the entries it came from.

pub mod error;
mod markdown;
pub mod parser;
mod render;

pub use error::ParserError;
pub use markdown::{IndexDocument, parse_index, parse_index_document, parse_index_file};
pub use render::{encode_link_target, escape_link_label, render_index};
