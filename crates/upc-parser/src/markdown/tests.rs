use pretty_assertions::assert_eq;
use rstest::rstest;
use upc_core::entities::IndexEntry;

use super::{parse_index, parse_index_document};
use crate::error::ParserError;
use crate::render::render_index;

const README: &str = "\
# Notebooks

This folder holds tutorial notebooks for the point-cloud pipeline.

1. [Complete solution](0.%20Complete%20solution.ipynb): an example of the complete solution.
2. [AHN preprocessing](1.%20AHN%20preprocessing.ipynb): details on AHN preprocessing.
3. [Data fusion](2.%20Data%20fusion.ipynb): details on the data fusion step.
";

fn titles(entries: &[IndexEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.title.as_str()).collect()
}

#[test]
fn parses_entries_in_document_order() {
    let doc = parse_index_document(README).expect("parse");
    assert_eq!(doc.heading.as_deref(), Some("Notebooks"));
    assert_eq!(
        titles(&doc.entries),
        vec!["Complete solution", "AHN preprocessing", "Data fusion"]
    );
}

#[test]
fn link_targets_are_percent_decoded() {
    let entries = parse_index(README).expect("parse");
    assert_eq!(entries[1].relative_path, "1. AHN preprocessing.ipynb");
    assert_eq!(entries[1].description, "details on AHN preprocessing.");
}

#[test]
fn skips_items_without_links_external_links_and_code() {
    let src = "\
# Index

- plain text item
- [Website](https://example.org): not a notebook
- [Anchor](#usage)
- [Local](local.ipynb) - kept

```markdown
- [In code](code.ipynb)
```
";
    let entries = parse_index(src).expect("parse");
    assert_eq!(titles(&entries), vec!["Local"]);
    assert_eq!(entries[0].description, "kept");
}

#[test]
fn blank_title_items_are_skipped() {
    let entries = parse_index("- [](empty.ipynb)\n- [Ok](ok.ipynb)\n").expect("parse");
    assert_eq!(titles(&entries), vec!["Ok"]);
}

#[test]
fn continuation_lines_extend_description() {
    let src = "- [A](a.ipynb): first line\n  continues here\n- [B](b.ipynb)\n";
    let entries = parse_index(src).expect("parse");
    assert_eq!(entries[0].description, "first line continues here");
    assert_eq!(entries[1].description, "");
}

#[test]
fn nested_items_follow_their_parent() {
    let src = "- [Parent](p.ipynb)\n  - [Child](c.ipynb)\n- [Sibling](s.ipynb)\n";
    let entries = parse_index(src).expect("parse");
    assert_eq!(titles(&entries), vec!["Parent", "Child", "Sibling"]);
    assert_eq!(entries[0].description, "");
}

#[test]
fn invalid_percent_encoding_is_an_error() {
    let err = parse_index("- [Bad](bad%FF.ipynb)\n").unwrap_err();
    assert!(matches!(err, ParserError::InvalidLinkTarget { line: 1, .. }));
}

#[test]
fn document_without_heading_or_items() {
    let doc = parse_index_document("just a paragraph\n").expect("parse");
    assert_eq!(doc.heading, None);
    assert!(doc.entries.is_empty());
}

#[test]
fn render_then_parse_is_stable() {
    let entries = parse_index(README).expect("parse");
    let rendered = render_index("Notebooks", &entries);
    let doc = parse_index_document(&rendered).expect("reparse");
    assert_eq!(doc.heading.as_deref(), Some("Notebooks"));
    assert_eq!(doc.entries, entries);
}

#[rstest]
#[case("Fusion ] notes", "fusion.ipynb", "d")]
#[case("a](b", "c.ipynb", "")]
#[case("[Draft", "draft.ipynb", "unfinished")]
#[case("Paths \\ and [nested] brackets", "dir/x (1).ipynb", "x")]
#[case("Trailing backslash \\", "t.ipynb", "t")]
#[case("Dash description", "d.ipynb", "- starts with a dash")]
#[case("Colon description", "c.ipynb", ": starts with a colon")]
#[case("Em dash description", "e.ipynb", "\u{2014} starts with an em dash")]
fn awkward_entries_survive_render_then_parse(
    #[case] title: &str,
    #[case] path: &str,
    #[case] description: &str,
) {
    let entries = vec![
        IndexEntry::new(title, path, description).expect("valid entry"),
        IndexEntry::new("After", "after.ipynb", "").expect("valid entry"),
    ];
    let rendered = render_index("Notebooks", &entries);
    assert_eq!(parse_index(&rendered).expect("reparse"), entries);
}
