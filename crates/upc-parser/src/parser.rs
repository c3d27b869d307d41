//! ast-grep language wrapper for `tree-sitter-md`.

use std::borrow::Cow;

use ast_grep_core::language::Language;
use ast_grep_core::matcher::{Pattern, PatternBuilder, PatternError};
use ast_grep_core::tree_sitter::{LanguageExt, StrDoc, TSLanguage};

/// The concrete AST tree type returned by [`parse_markdown`].
pub type MarkdownTree = ast_grep_core::AstGrep<StrDoc<MarkdownLang>>;

/// Block-level markdown grammar.
#[derive(Clone, Copy, Debug)]
pub struct MarkdownLang;

impl Language for MarkdownLang {
    fn pre_process_pattern<'q>(&self, query: &'q str) -> Cow<'q, str> {
        Cow::Borrowed(query)
    }

    fn kind_to_id(&self, kind: &str) -> u16 {
        self.get_ts_language().id_for_node_kind(kind, true)
    }

    fn field_to_id(&self, field: &str) -> Option<u16> {
        self.get_ts_language()
            .field_id_for_name(field)
            .map(std::num::NonZero::get)
    }

    fn build_pattern(&self, builder: &PatternBuilder) -> Result<Pattern, PatternError> {
        builder.build(|src| StrDoc::try_new(src, *self))
    }
}

impl LanguageExt for MarkdownLang {
    fn get_ts_language(&self) -> TSLanguage {
        tree_sitter_md::LANGUAGE.into()
    }
}

/// Parse a markdown document into an ast-grep tree.
#[must_use]
pub fn parse_markdown(source: &str) -> MarkdownTree {
    MarkdownLang.ast_grep(source)
}

#[cfg(test)]
mod tests {
    use ast_grep_core::matcher::KindMatcher;

    use super::*;

    #[test]
    fn list_items_are_visible_to_kind_matcher() {
        let tree = parse_markdown("# Notebooks\n\n- one\n- two\n");
        let count = tree
            .root()
            .find_all(KindMatcher::new("list_item", MarkdownLang))
            .count();
        assert_eq!(count, 2);
    }

    #[test]
    fn grammar_loads_into_tree_sitter() {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_md::LANGUAGE.into())
            .expect("markdown grammar should load");
        let tree = parser.parse("# Title\n", None).expect("should parse");
        assert_eq!(tree.root_node().kind(), "document");
    }
}
