use std::collections::HashSet;

use chrono::Utc;
use tracing::{debug, warn};
use upc_core::entities::{AuditReport, BrokenLink, IndexEntry};

use crate::index::NotebookIndex;
use crate::store::{DocumentStore, normalize_relative};

/// An index bound to the document set its links point into.
#[derive(Debug, Clone)]
pub struct NotebookCollection<S> {
    index: NotebookIndex,
    store: S,
}

impl<S: DocumentStore> NotebookCollection<S> {
    pub const fn new(index: NotebookIndex, store: S) -> Self {
        Self { index, store }
    }

    #[must_use]
    pub const fn index(&self) -> &NotebookIndex {
        &self.index
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// All entries in canonical order, broken or not.
    #[must_use]
    pub fn list_entries(&self) -> &[IndexEntry] {
        self.index.list_entries()
    }

    /// Whether the entry's target exists. Store failures count as absent.
    pub fn resolve(&self, entry: &IndexEntry) -> bool {
        match self.store.exists(&entry.relative_path) {
            Ok(exists) => {
                debug!(title = %entry.title, path = %entry.relative_path, exists, "resolved entry");
                exists
            }
            Err(error) => {
                warn!(path = %entry.relative_path, %error, "could not check notebook");
                false
            }
        }
    }

    /// Resolve every entry and collect the broken ones.
    ///
    /// Also lists documents that no entry links to. Never stops early.
    pub fn audit(&self) -> AuditReport {
        let entries = self.index.list_entries();
        let broken: Vec<BrokenLink> = entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| !self.resolve(entry))
            .map(|(position, entry)| BrokenLink {
                position,
                title: entry.title.clone(),
                relative_path: entry.relative_path.clone(),
            })
            .collect();

        for link in &broken {
            warn!(
                position = link.position,
                title = %link.title,
                path = %link.relative_path,
                "broken notebook link"
            );
        }

        AuditReport {
            entries: entries.len(),
            resolved: entries.len() - broken.len(),
            broken,
            orphans: self.orphans(),
            checked_at: Utc::now(),
        }
    }

    fn orphans(&self) -> Vec<String> {
        let documents = match self.store.documents() {
            Ok(documents) => documents,
            Err(error) => {
                warn!(%error, "could not list notebooks; skipping orphan check");
                return Vec::new();
            }
        };

        let linked: HashSet<String> = self
            .index
            .iter()
            .map(|entry| normalize_relative(&entry.relative_path))
            .collect();
        documents
            .into_iter()
            .filter(|document| !linked.contains(document))
            .collect()
    }
}
