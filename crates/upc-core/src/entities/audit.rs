use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An index entry whose path does not resolve to an existing notebook.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BrokenLink {
    /// 0-based position of the entry in canonical order.
    pub position: usize,
    pub title: String,
    pub relative_path: String,
}

/// Result of checking every entry of an index against its document set.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditReport {
    pub entries: usize,
    pub resolved: usize,
    pub broken: Vec<BrokenLink>,
    /// Notebooks present in the document set that no entry links to.
    pub orphans: Vec<String>,
    pub checked_at: DateTime<Utc>,
}

impl AuditReport {
    /// True when every entry resolved. Orphans do not count against this.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.broken.is_empty()
    }
}
