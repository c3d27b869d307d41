//! CLI response types returned as JSON by `upc` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{AuditReport, IndexEntry};

/// Response from `upc list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ListResponse {
    pub source: String,
    pub entries: Vec<IndexEntry>,
    pub count: usize,
}

/// Response from `upc audit`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditResponse {
    pub source: String,
    pub root: String,
    pub clean: bool,
    pub report: AuditReport,
}

/// Response from `upc resolve`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResolveResponse {
    pub entry: IndexEntry,
    pub exists: bool,
}
