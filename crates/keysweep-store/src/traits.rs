use keysweep_types::{Document, Key};

use crate::error::StoreResult;

/// Document store collaborator consumed by the batch loop.
///
/// All implementations must satisfy these invariants:
/// - `fetch` returns `Ok(None)` for a missing document; `Err` is reserved
///   for store-level failures (I/O, corruption, rejection).
/// - `delete` fails for a missing document, as stores that reject removal
///   of nonexistent keys do.
/// - Neither operation retries internally; the caller owns retry policy
///   (the batch loop's policy is a single attempt).
pub trait DocumentStore: Send + Sync + std::fmt::Debug {
    /// Fetch the document stored under `key`.
    fn fetch(&self, key: &Key) -> StoreResult<Option<Document>>;

    /// Delete the document stored under `key`.
    fn delete(&self, key: &Key) -> StoreResult<()>;
}
