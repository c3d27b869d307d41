//! # upc-core
//!
//! Core types and error types for the urban point-cloud notebook index.
//!
//! This crate provides the foundational types shared across all `upc` crates:
//! - Entity structs for the index (entries, broken links, audit reports)
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod errors;
pub mod responses;
