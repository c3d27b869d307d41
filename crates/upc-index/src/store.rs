//! The set of documents an index links into.

use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use globset::{Glob, GlobMatcher};
use ignore::WalkBuilder;
use tracing::debug;

use crate::error::IndexError;

/// Read access to the notebooks an index points at.
///
/// Implementations only answer existence questions; notebook content is
/// never opened.
pub trait DocumentStore {
    /// Whether `relative_path` names an existing document.
    ///
    /// # Errors
    /// Returns `IndexError` only when the answer cannot be determined
    /// (e.g. permission denied). Absence is `Ok(false)`.
    fn exists(&self, relative_path: &str) -> Result<bool, IndexError>;

    /// Every document in the set, as normalized relative paths, sorted.
    ///
    /// # Errors
    /// Returns `IndexError` when the set cannot be enumerated.
    fn documents(&self) -> Result<Vec<String>, IndexError>;
}

/// Normalize a relative link: `\` becomes `/`, leading `./` segments and
/// surrounding whitespace are dropped.
#[must_use]
pub fn normalize_relative(path: &str) -> String {
    let mut path = path.trim().replace('\\', "/");
    while let Some(rest) = path.strip_prefix("./") {
        path = rest.to_string();
    }
    path
}

/// Documents in a directory tree.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
    matcher: GlobMatcher,
}

impl FsStore {
    /// Store over `root` listing files that match `*.ipynb`.
    ///
    /// # Errors
    /// Never fails for the default pattern; kept fallible to share the
    /// signature of [`Self::with_pattern`].
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, IndexError> {
        Self::with_pattern(root, "*.ipynb")
    }

    /// Store over `root` listing files that match `pattern`.
    ///
    /// # Errors
    /// Returns `IndexError::Pattern` when `pattern` is not a valid glob.
    pub fn with_pattern(root: impl Into<PathBuf>, pattern: &str) -> Result<Self, IndexError> {
        Ok(Self {
            root: root.into(),
            matcher: Glob::new(pattern)?.compile_matcher(),
        })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a link onto a path under the root, or `None` if it would escape.
    fn contained(&self, relative_path: &str) -> Option<PathBuf> {
        let normalized = normalize_relative(relative_path);
        let relative = Path::new(&normalized);
        let stays_inside = relative
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));
        if normalized.is_empty() || !stays_inside {
            return None;
        }
        Some(self.root.join(relative))
    }
}

impl DocumentStore for FsStore {
    fn exists(&self, relative_path: &str) -> Result<bool, IndexError> {
        let Some(path) = self.contained(relative_path) else {
            debug!(relative_path, "link leaves the notebook directory");
            return Ok(false);
        };

        match std::fs::metadata(&path) {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(false),
            Err(source) => Err(IndexError::Io { path, source }),
        }
    }

    fn documents(&self) -> Result<Vec<String>, IndexError> {
        if !self.root.is_dir() {
            return Err(IndexError::MissingRoot(self.root.clone()));
        }

        let mut found = Vec::new();
        for entry in WalkBuilder::new(&self.root).build() {
            let entry = entry?;
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            if self.matcher.is_match(relative) {
                found.push(normalize_relative(&relative.to_string_lossy()));
            }
        }
        found.sort();
        Ok(found)
    }
}

/// A fixed set of document paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    paths: BTreeSet<String>,
}

impl MemoryStore {
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        Self {
            paths: paths
                .into_iter()
                .map(|p| normalize_relative(p.as_ref()))
                .collect(),
        }
    }
}

impl DocumentStore for MemoryStore {
    fn exists(&self, relative_path: &str) -> Result<bool, IndexError> {
        Ok(self.paths.contains(&normalize_relative(relative_path)))
    }

    fn documents(&self) -> Result<Vec<String>, IndexError> {
        Ok(self.paths.iter().cloned().collect())
    }
}
