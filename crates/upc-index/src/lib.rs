//! # upc-index
//!
//! The notebook index: an ordered, immutable list of [`IndexEntry`] values
//! pointing at tutorial notebooks, plus the checks that tie it to the
//! notebooks actually on disk.
//!
//! - [`NotebookIndex`] holds the entries in canonical reading order.
//! - [`DocumentStore`] abstracts the set of notebooks the entries link to
//!   ([`FsStore`] for a directory, [`MemoryStore`] for fixed sets).
//! - [`NotebookCollection`] pairs the two and answers `resolve` and `audit`.
//!   Broken links are collected into an [`AuditReport`], never raised.
//!
//! ```
//! use upc_index::{MemoryStore, NotebookCollection, NotebookIndex};
//!
//! let index = NotebookIndex::canonical();
//! let store = MemoryStore::new(["0. Complete solution.ipynb"]);
//! let collection = NotebookCollection::new(index, store);
//!
//! let report = collection.audit();
//! assert_eq!(report.broken.len(), 2);
//! assert_eq!(collection.list_entries().len(), 3);
//! ```
//!
//! [`IndexEntry`]: upc_core::entities::IndexEntry
//! [`AuditReport`]: upc_core::entities::AuditReport

mod collection;
pub mod error;
mod index;
mod store;

pub use collection::NotebookCollection;
pub use error::IndexError;
pub use index::{IndexBuilder, NotebookIndex};
pub use store::{DocumentStore, FsStore, MemoryStore, normalize_relative};
