//! The keysweep core: key acquisition and the decision-and-delete loop.
//!
//! [`KeySource`] turns a line-oriented input into an ordered sequence of
//! keys, preserving whatever prefix was read if the input fails mid-stream.
//! [`BatchProcessor`] drives the per-key loop — fetch, evaluate, delete —
//! with strict input order, a single delete attempt per candidate, and
//! per-key failures isolated so one bad key never aborts the run.

pub mod error;
pub mod processor;
pub mod source;

pub use error::ReadError;
pub use processor::BatchProcessor;
pub use source::{KeyList, KeySource};
