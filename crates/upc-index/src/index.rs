//! The ordered, immutable notebook index.

use std::path::Path;

use upc_core::entities::IndexEntry;

use crate::error::IndexError;
use crate::store::normalize_relative;

/// Built-in entries, in recommended reading order.
const CANONICAL: [(&str, &str, &str); 3] = [
    (
        "Complete solution",
        "0. Complete solution.ipynb",
        "An example of the complete solution, from raw point cloud to labelled tile.",
    ),
    (
        "AHN preprocessing",
        "1. AHN preprocessing.ipynb",
        "Details on preprocessing the AHN elevation data.",
    ),
    (
        "Data fusion",
        "2. Data fusion.ipynb",
        "Details on fusing AHN and other data sources to label points.",
    ),
];

/// An ordered list of notebook entries.
///
/// Insertion order is the recommended reading order and is preserved by
/// every operation. Changing an index means building a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotebookIndex {
    entries: Vec<IndexEntry>,
}

impl NotebookIndex {
    /// The documented notebooks: complete solution, AHN preprocessing, data fusion.
    #[must_use]
    pub fn canonical() -> Self {
        Self {
            entries: CANONICAL
                .iter()
                .map(|(title, path, description)| IndexEntry {
                    title: (*title).to_string(),
                    relative_path: (*path).to_string(),
                    description: (*description).to_string(),
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn builder() -> IndexBuilder {
        IndexBuilder::default()
    }

    /// Build an index from already constructed entries.
    ///
    /// # Errors
    /// Returns `IndexError::Invalid` for the first entry with a blank title or path.
    pub fn from_entries(entries: Vec<IndexEntry>) -> Result<Self, IndexError> {
        for entry in &entries {
            entry.validate()?;
        }
        Ok(Self { entries })
    }

    /// Parse an index from a markdown document.
    ///
    /// # Errors
    /// Returns `IndexError::Parser` when the document cannot be parsed.
    pub fn from_markdown(source: &str) -> Result<Self, IndexError> {
        Self::from_entries(upc_parser::parse_index(source)?)
    }

    /// Read and parse an index document, returning its heading alongside.
    ///
    /// # Errors
    /// Returns `IndexError::Parser` when the file cannot be read or parsed.
    pub fn from_markdown_file(path: &Path) -> Result<(Self, Option<String>), IndexError> {
        let document = upc_parser::parse_index_file(path)?;
        Ok((Self::from_entries(document.entries)?, document.heading))
    }

    /// All entries in canonical order.
    #[must_use]
    pub fn list_entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IndexEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A new index with `entry` appended after the existing ones.
    ///
    /// # Errors
    /// Returns `IndexError::Invalid` when the entry has a blank title or path.
    pub fn with_entry(self, entry: IndexEntry) -> Result<Self, IndexError> {
        self.into_builder().entry(entry).map(IndexBuilder::build)
    }

    /// Reopen the index for regeneration.
    #[must_use]
    pub fn into_builder(self) -> IndexBuilder {
        IndexBuilder {
            entries: self.entries,
        }
    }

    /// Look an entry up by title (case-insensitive) or by relative path.
    #[must_use]
    pub fn find(&self, needle: &str) -> Option<&IndexEntry> {
        let needle = needle.trim();
        let path = normalize_relative(needle);
        self.entries
            .iter()
            .find(|entry| entry.title.eq_ignore_ascii_case(needle))
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|entry| normalize_relative(&entry.relative_path) == path)
            })
    }

    /// Render the index as markdown under `heading`.
    #[must_use]
    pub fn to_markdown(&self, heading: &str) -> String {
        upc_parser::render_index(heading, &self.entries)
    }
}

impl<'a> IntoIterator for &'a NotebookIndex {
    type Item = &'a IndexEntry;
    type IntoIter = std::slice::Iter<'a, IndexEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Accumulates entries for a new [`NotebookIndex`].
#[derive(Debug, Clone, Default)]
pub struct IndexBuilder {
    entries: Vec<IndexEntry>,
}

impl IndexBuilder {
    /// Append an entry.
    ///
    /// # Errors
    /// Returns `IndexError::Invalid` when the entry has a blank title or path.
    pub fn entry(mut self, entry: IndexEntry) -> Result<Self, IndexError> {
        entry.validate()?;
        self.entries.push(entry);
        Ok(self)
    }

    #[must_use]
    pub fn build(self) -> NotebookIndex {
        NotebookIndex {
            entries: self.entries,
        }
    }
}
