//! Markdown rendering of an index.

use std::fmt::Write as _;

use upc_core::entities::IndexEntry;

/// Percent-encode the characters that would break an inline link target.
#[must_use]
pub fn encode_link_target(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for ch in path.chars() {
        match ch {
            '%' => out.push_str("%25"),
            ' ' => out.push_str("%20"),
            '(' => out.push_str("%28"),
            ')' => out.push_str("%29"),
            '<' => out.push_str("%3C"),
            '>' => out.push_str("%3E"),
            other => out.push(other),
        }
    }
    out
}

/// Backslash-escape the characters that would end or nest a link label.
#[must_use]
pub fn escape_link_label(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    for ch in title.chars() {
        if matches!(ch, '\\' | '[' | ']') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Render entries as a markdown bullet list under a level-1 heading.
///
/// A blank heading is left out.
#[must_use]
pub fn render_index(heading: &str, entries: &[IndexEntry]) -> String {
    let mut out = String::new();
    let heading = single_line(heading);
    if !heading.is_empty() {
        let _ = writeln!(out, "# {heading}");
        out.push('\n');
    }

    for entry in entries {
        let _ = write!(
            out,
            "- [{}]({})",
            escape_link_label(&single_line(&entry.title)),
            encode_link_target(&entry.relative_path)
        );
        let description = single_line(&entry.description);
        if !description.is_empty() {
            let _ = write!(out, ": {description}");
        }
        out.push('\n');
    }
    out
}
