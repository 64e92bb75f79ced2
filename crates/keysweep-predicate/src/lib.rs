//! Deletion predicate for keysweep.
//!
//! The predicate decides, per fetched document, whether the document
//! qualifies for deletion. It is pure: no side effects, and the same
//! document under the same configuration always produces the same answer.
//!
//! Rules are configuration, not code: a [`PredicateConfig`] can be
//! deserialized from a JSON file, so field names, operators, and thresholds
//! change without recompiling. Example:
//!
//! ```json
//! {
//!   "mode": "rules",
//!   "rules": [
//!     { "field": "status", "equals": "A certain string" },
//!     { "field": "revision", "greater_than": 3342423 }
//!   ]
//! }
//! ```

pub mod config;
pub mod error;
pub mod predicate;

pub use config::{FieldOp, FieldRule, PredicateConfig, PredicateMode};
pub use error::ConfigError;
pub use predicate::DeletionPredicate;
