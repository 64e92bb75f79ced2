use std::path::PathBuf;

use thiserror::Error;

/// Errors acquiring keys from the input source.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to open key file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read failed after {keys_read} keys: {source}")]
    Stream {
        keys_read: usize,
        #[source]
        source: std::io::Error,
    },
}
