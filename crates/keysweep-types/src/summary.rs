use serde::Serialize;

/// Aggregate counters produced by one full pass over a key list.
///
/// The counters only grow, and they grow in a fixed order: a key is recorded
/// before it can become a candidate, and a candidate before its deletion can
/// be recorded. This keeps `deleted <= candidates <= total_keys` true at
/// every point during a run, not just at the end.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    total_keys: u64,
    candidates: u64,
    deleted: u64,
}

impl RunSummary {
    /// Create an empty summary for the start of a run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys processed so far.
    pub fn total_keys(&self) -> u64 {
        self.total_keys
    }

    /// Number of documents that satisfied the deletion predicate.
    pub fn candidates(&self) -> u64 {
        self.candidates
    }

    /// Number of documents successfully deleted.
    pub fn deleted(&self) -> u64 {
        self.deleted
    }

    /// Record one key taken from the key source.
    pub fn record_key(&mut self) {
        self.total_keys += 1;
    }

    /// Record that the current key's document satisfied the predicate.
    ///
    /// Must follow a `record_key` for the same key.
    pub fn record_candidate(&mut self) {
        debug_assert!(self.candidates < self.total_keys, "candidate without key");
        self.candidates += 1;
    }

    /// Record a successful deletion of the current candidate.
    ///
    /// Must follow a `record_candidate` for the same key.
    pub fn record_deleted(&mut self) {
        debug_assert!(self.deleted < self.candidates, "deletion without candidate");
        self.deleted += 1;
    }

    /// Returns `true` if the counter ordering invariant holds.
    pub fn is_consistent(&self) -> bool {
        self.deleted <= self.candidates && self.candidates <= self.total_keys
    }
}
