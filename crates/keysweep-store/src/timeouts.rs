use std::time::Duration;

/// Timeouts for the store connection.
///
/// Fixed once when the connection is opened, before the batch loop begins;
/// never adjusted per operation. Backends that perform no network I/O carry
/// the values without consulting them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StoreTimeouts {
    /// Maximum time to establish the connection.
    pub connect: Duration,
    /// Maximum time for a single fetch.
    pub read: Duration,
    /// Maximum time for a single delete.
    pub query: Duration,
}

impl Default for StoreTimeouts {
    fn default() -> Self {
        Self::uniform(Duration::from_secs(10))
    }
}

impl StoreTimeouts {
    /// The same timeout for connect, read, and query.
    pub fn uniform(timeout: Duration) -> Self {
        Self {
            connect: timeout,
            read: timeout,
            query: timeout,
        }
    }
}
