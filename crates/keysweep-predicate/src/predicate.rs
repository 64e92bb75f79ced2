use keysweep_types::Document;
use tracing::debug;

use crate::config::{FieldOp, FieldRule, PredicateConfig, PredicateMode};

/// Decides whether a fetched document qualifies for deletion.
///
/// Pure and deterministic: evaluation has no side effects, and the same
/// document under the same configuration always yields the same answer.
#[derive(Clone, Debug)]
pub struct DeletionPredicate {
    config: PredicateConfig,
}

impl DeletionPredicate {
    pub fn new(config: PredicateConfig) -> Self {
        Self { config }
    }

    /// The configuration this predicate evaluates.
    pub fn config(&self) -> &PredicateConfig {
        &self.config
    }

    /// Decide whether the document for a key should be deleted.
    ///
    /// An absent document never qualifies, in any mode: there is nothing to
    /// delete. For a present document the answer depends on the configured
    /// mode; in rules mode the rule list is combined with OR semantics.
    pub fn evaluate(&self, document: Option<&Document>) -> bool {
        let Some(document) = document else {
            return false;
        };

        match self.config.mode {
            PredicateMode::All => true,
            PredicateMode::None => false,
            PredicateMode::Rules => self.config.rules.iter().any(|rule| {
                let matched = rule_matches(rule, document);
                if matched {
                    debug!(field = %rule.field, "deletion rule matched");
                }
                matched
            }),
        }
    }
}

/// Evaluate a single rule against a document.
///
/// An absent field, or a field of the wrong type, does not match.
fn rule_matches(rule: &FieldRule, document: &Document) -> bool {
    match &rule.op {
        FieldOp::Equals(literal) => document
            .get_str(&rule.field)
            .is_some_and(|value| value == literal),
        FieldOp::GreaterThan(threshold) => document
            .get_int(&rule.field)
            .is_some_and(|value| value > *threshold),
    }
}
