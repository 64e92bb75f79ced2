//! Document store access for keysweep.
//!
//! The batch loop only ever needs two operations from a store: fetch a
//! document by key and delete a document by key. Both are exposed through
//! the [`DocumentStore`] trait so the core is independent of the backend.
//!
//! # Backends
//!
//! - [`InMemoryDocumentStore`] — `HashMap`-based store for tests and
//!   embedding, with failure-injection hooks
//! - [`DirDocumentStore`] — one JSON file per document under a bucket
//!   directory, the backend the CLI opens
//!
//! # Design Rules
//!
//! 1. A missing document on `fetch` is `Ok(None)`, never an error.
//! 2. A missing document on `delete` is an error, matching stores that
//!    reject removal of nonexistent keys.
//! 3. Connection parameters (host, bucket, credentials, timeouts) are fixed
//!    once at [`connect`] time, before any per-key operation.
//! 4. The store never interprets document contents beyond decoding them.

pub mod connect;
pub mod dir;
pub mod error;
pub mod memory;
pub mod timeouts;
pub mod traits;

pub use connect::connect;
pub use dir::DirDocumentStore;
pub use error::{ConnectError, StoreError, StoreResult};
pub use memory::InMemoryDocumentStore;
pub use timeouts::StoreTimeouts;
pub use traits::DocumentStore;
