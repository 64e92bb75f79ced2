use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque string identifier for a document in the store.
///
/// Keys are produced once by the key source, in input order, and consumed
/// once each by the batch processor. They are never interpreted: an empty
/// key (from a trailing blank line in the input file) is a valid `Key` that
/// the store will simply fail to find.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(String);

impl Key {
    /// Wrap a string as a key.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the empty key.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key({:?})", self.0)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Key {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for Key {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_raw_string() {
        let key = Key::new("user::1042");
        assert_eq!(key.as_str(), "user::1042");
        assert_eq!(key.to_string(), "user::1042");
    }

    #[test]
    fn empty_key_is_valid() {
        let key = Key::from("");
        assert!(key.is_empty());
    }

    #[test]
    fn serde_is_transparent() {
        let key = Key::new("k1");
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"k1\"");
        let parsed: Key = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, key);
    }
}
