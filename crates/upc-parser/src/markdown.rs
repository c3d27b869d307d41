//! Index extraction from a README-style markdown document.

use std::path::Path;

use ast_grep_core::matcher::KindMatcher;
use tracing::{debug, warn};
use upc_core::entities::IndexEntry;

use crate::error::ParserError;
use crate::parser::{MarkdownLang, parse_markdown};

mod helpers;
#[cfg(test)]
mod tests;

/// A parsed index document: its title heading and its entries in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDocument {
    pub heading: Option<String>,
    pub entries: Vec<IndexEntry>,
}

/// Parse a markdown index into entries, in document order.
///
/// # Errors
/// Returns `ParserError::InvalidLinkTarget` when a link target is not valid
/// percent-encoded UTF-8.
pub fn parse_index(source: &str) -> Result<Vec<IndexEntry>, ParserError> {
    parse_index_document(source).map(|doc| doc.entries)
}

/// Read and parse an index document from disk.
///
/// # Errors
/// Returns `ParserError::Io` when the file cannot be read, or any error of
/// [`parse_index_document`].
pub fn parse_index_file(path: &Path) -> Result<IndexDocument, ParserError> {
    let source = std::fs::read_to_string(path)?;
    parse_index_document(&source)
}

/// Parse a markdown index, keeping the first heading.
///
/// Every list item that opens with an inline link becomes an entry. Items
/// linking outside the collection (URLs, anchors) and items with a blank
/// title or target are skipped.
///
/// # Errors
/// Returns `ParserError::InvalidLinkTarget` when a link target is not valid
/// percent-encoded UTF-8.
pub fn parse_index_document(source: &str) -> Result<IndexDocument, ParserError> {
    let tree = parse_markdown(source);
    let root = tree.root();

    let mut headings: Vec<_> = root
        .find_all(KindMatcher::new("atx_heading", MarkdownLang))
        .collect();
    headings.extend(root.find_all(KindMatcher::new("setext_heading", MarkdownLang)));
    let heading = headings
        .into_iter()
        .min_by_key(|node| node.start_pos().line())
        .map(|node| helpers::heading_text(&node.text()))
        .filter(|text| !text.is_empty());

    let mut items: Vec<_> = root
        .find_all(KindMatcher::new("list_item", MarkdownLang))
        .collect();
    items.sort_by_key(|node| node.start_pos().line());

    let mut entries = Vec::new();
    for node in items {
        let line = node.start_pos().line() + 1;
        if let Some(entry) = entry_from_item(&node.text(), line)? {
            entries.push(entry);
        }
    }

    debug!(entries = entries.len(), "parsed notebook index");
    Ok(IndexDocument { heading, entries })
}

fn entry_from_item(raw: &str, line: usize) -> Result<Option<IndexEntry>, ParserError> {
    let mut lines = raw.lines();
    let Some(body) = lines.next().and_then(helpers::strip_list_marker) else {
        return Ok(None);
    };
    let Some((label, target, rest)) = helpers::split_leading_link(body) else {
        debug!(line, "list item does not open with a link");
        return Ok(None);
    };
    if helpers::is_external(target) {
        debug!(line, target, "skipping link outside the notebook collection");
        return Ok(None);
    }

    let path = urlencoding::decode(target)
        .map_err(|_| ParserError::InvalidLinkTarget {
            line,
            target: target.to_string(),
        })?
        .into_owned();

    let mut description = helpers::strip_description_separator(rest).to_string();
    for continuation in lines {
        let text = continuation.trim();
        if text.is_empty() || helpers::strip_list_marker(text).is_some() {
            break;
        }
        if !description.is_empty() {
            description.push(' ');
        }
        description.push_str(text);
    }

    match IndexEntry::new(label, path, description) {
        Ok(entry) => Ok(Some(entry)),
        Err(error) => {
            warn!(line, %error, "skipping malformed index item");
            Ok(None)
        }
    }
}
