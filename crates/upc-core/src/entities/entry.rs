use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// One line of the notebook index: a titled link to a tutorial notebook.
///
/// Entries are values. An index is regenerated wholesale rather than edited
/// in place, so nothing hands out `&mut IndexEntry`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct IndexEntry {
    pub title: String,
    pub relative_path: String,
    pub description: String,
}

impl IndexEntry {
    /// Build a validated entry.
    ///
    /// # Errors
    /// Returns `CoreError::Validation` when the title or the path is blank.
    pub fn new(
        title: impl Into<String>,
        relative_path: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let entry = Self {
            title: title.into().trim().to_string(),
            relative_path: relative_path.into().trim().to_string(),
            description: description.into().trim().to_string(),
        };
        entry.validate()?;
        Ok(entry)
    }

    /// Check the entry invariants: non-empty title and path.
    ///
    /// # Errors
    /// Returns `CoreError::Validation` naming the first violated field.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "index entry for '{}' has an empty title",
                self.relative_path
            )));
        }
        if self.relative_path.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "index entry '{}' has an empty path",
                self.title
            )));
        }
        Ok(())
    }
}
