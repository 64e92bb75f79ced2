use keysweep_predicate::DeletionPredicate;
use keysweep_store::DocumentStore;
use keysweep_types::{Key, RunSummary};
use tracing::{debug, warn};

/// The per-key decision-and-delete loop.
///
/// Keys are processed strictly sequentially, in input order, each exactly
/// once: fetch the document, evaluate the predicate, and on a match attempt
/// a single delete. Per-key failures are isolated — a fetch error is logged
/// and the document treated as absent, a delete error is logged and the
/// loop moves on. Only exhausting the key sequence ends the run.
///
/// The returned [`RunSummary`] is fully determined by the key sequence, the
/// store's responses as each key was processed, and the predicate
/// configuration.
pub struct BatchProcessor;

impl BatchProcessor {
    pub fn run<I, S>(keys: I, store: &S, predicate: &DeletionPredicate) -> RunSummary
    where
        I: IntoIterator<Item = Key>,
        S: DocumentStore + ?Sized,
    {
        let mut summary = RunSummary::new();

        for (index, key) in keys.into_iter().enumerate() {
            summary.record_key();
            debug!(index, key = %key, "processing key");

            // A fetch error surfaces the same way a missing document does:
            // nothing to evaluate, nothing to delete, move on.
            let document = match store.fetch(&key) {
                Ok(document) => document,
                Err(e) => {
                    warn!(key = %key, error = %e, "fetch failed, treating document as absent");
                    None
                }
            };

            if !predicate.evaluate(document.as_ref()) {
                continue;
            }
            summary.record_candidate();

            match store.delete(&key) {
                Ok(()) => summary.record_deleted(),
                Err(e) => {
                    warn!(key = %key, error = %e, "delete failed, continuing with next key");
                }
            }
        }

        summary
    }
}
