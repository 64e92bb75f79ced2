use std::path::Path;

use tracing::info;

use crate::dir::DirDocumentStore;
use crate::error::ConnectError;
use crate::memory::InMemoryDocumentStore;
use crate::timeouts::StoreTimeouts;
use crate::traits::DocumentStore;

/// Open the store named by `host` once, before the batch loop begins.
///
/// Two host forms are recognized:
/// - `mem:` — a fresh, empty [`InMemoryDocumentStore`] (useful for dry runs
///   and smoke tests; every key will come back absent),
/// - anything else — a filesystem path used as the root of a
///   [`DirDocumentStore`].
///
/// Connection failures are fatal: the caller is expected to propagate them
/// and terminate before processing any key.
pub fn connect(
    host: &str,
    bucket: &str,
    password: Option<&str>,
    timeouts: StoreTimeouts,
) -> Result<Box<dyn DocumentStore>, ConnectError> {
    if host == "mem:" {
        info!(bucket, "opened in-memory store");
        return Ok(Box::new(InMemoryDocumentStore::new()));
    }
    let store = DirDocumentStore::open(Path::new(host), bucket, password, timeouts)?;
    info!(host, bucket, "opened directory store");
    Ok(Box::new(store))
}
