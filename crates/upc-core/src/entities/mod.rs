//! Entity structs for the notebook index.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip
//! and schema validation.

mod audit;
mod entry;

pub use audit::{AuditReport, BrokenLink};
pub use entry::IndexEntry;
