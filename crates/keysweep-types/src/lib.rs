//! Foundation types for keysweep.
//!
//! This crate provides the core data model shared by every other keysweep
//! crate.
//!
//! # Key Types
//!
//! - [`Key`] — Opaque string identifier for a document in the store
//! - [`FieldValue`] — Typed value a document field can hold
//! - [`Document`] — Read-only field map fetched from the store for one key
//! - [`RunSummary`] — Aggregate counters produced by one pass over a key list

pub mod document;
pub mod error;
pub mod key;
pub mod summary;

pub use document::{Document, FieldValue};
pub use error::TypeError;
pub use key::Key;
pub use summary::RunSummary;
