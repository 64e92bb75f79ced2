use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use keysweep_types::{Document, Key};
use tracing::debug;

use crate::error::{ConnectError, StoreError, StoreResult};
use crate::timeouts::StoreTimeouts;
use crate::traits::DocumentStore;

/// Name of the optional credential file inside a bucket directory.
const PASSWORD_FILE: &str = ".bucket-password";

/// Directory-backed document store: one `<key>.json` file per document,
/// grouped under `<root>/<bucket>/`.
///
/// This is the concrete backend the CLI opens. A bucket may carry a
/// `.bucket-password` file; when it does, opening the bucket requires the
/// matching password. When it does not, any supplied password is ignored.
pub struct DirDocumentStore {
    bucket_dir: PathBuf,
    timeouts: StoreTimeouts,
}

impl DirDocumentStore {
    /// Open a bucket under `root`, checking credentials once up front.
    pub fn open(
        root: &Path,
        bucket: &str,
        password: Option<&str>,
        timeouts: StoreTimeouts,
    ) -> Result<Self, ConnectError> {
        if !root.is_dir() {
            return Err(ConnectError::RootNotFound(root.to_path_buf()));
        }
        let bucket_dir = root.join(bucket);
        if !bucket_dir.is_dir() {
            return Err(ConnectError::BucketNotFound(bucket.to_owned()));
        }

        let password_path = bucket_dir.join(PASSWORD_FILE);
        if password_path.is_file() {
            let expected = fs::read_to_string(&password_path)?;
            if password != Some(expected.trim()) {
                return Err(ConnectError::Unauthorized(bucket.to_owned()));
            }
        } else if password.is_some() {
            debug!(bucket, "password supplied but bucket has none; ignoring");
        }

        Ok(Self {
            bucket_dir,
            timeouts,
        })
    }

    /// The timeouts this connection was opened with.
    pub fn timeouts(&self) -> StoreTimeouts {
        self.timeouts
    }

    /// Write a document under `key`, replacing any existing one.
    pub fn put(&self, key: &Key, document: &Document) -> StoreResult<()> {
        let payload = serde_json::to_vec_pretty(&document.to_json())
            .map_err(|e| StoreError::Rejected {
                key: key.clone(),
                reason: e.to_string(),
            })?;
        fs::write(self.document_path(key)?, payload)?;
        Ok(())
    }

    /// Map a key to its file inside the bucket directory.
    ///
    /// Keys come from an untrusted input file; a path separator in a key
    /// would address files outside the bucket, so such keys are rejected.
    fn document_path(&self, key: &Key) -> StoreResult<PathBuf> {
        if key.as_str().contains(['/', '\\']) {
            return Err(StoreError::Rejected {
                key: key.clone(),
                reason: "key contains a path separator".into(),
            });
        }
        Ok(self.bucket_dir.join(format!("{key}.json")))
    }
}

impl DocumentStore for DirDocumentStore {
    fn fetch(&self, key: &Key) -> StoreResult<Option<Document>> {
        let path = self.document_path(key)?;
        let payload = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let value: serde_json::Value =
            serde_json::from_slice(&payload).map_err(|e| StoreError::CorruptDocument {
                key: key.clone(),
                reason: e.to_string(),
            })?;
        let document = Document::from_json(&value).map_err(|e| StoreError::CorruptDocument {
            key: key.clone(),
            reason: e.to_string(),
        })?;
        Ok(Some(document))
    }

    fn delete(&self, key: &Key) -> StoreResult<()> {
        match fs::remove_file(self.document_path(key)?) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StoreError::NotFound(key.clone())),
            Err(e) => Err(e.into()),
        }
    }
}

impl std::fmt::Debug for DirDocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirDocumentStore")
            .field("bucket_dir", &self.bucket_dir)
            .finish()
    }
}
