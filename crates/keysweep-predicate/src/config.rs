use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How the predicate treats a present document.
///
/// An absent document never qualifies, in any mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredicateMode {
    /// Every present document qualifies (unconditional-delete runs).
    All,
    /// No document qualifies (dry runs).
    None,
    /// A document qualifies if any configured rule matches.
    #[default]
    Rules,
}

/// Comparison applied to one document field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldOp {
    /// String field equals this literal.
    Equals(String),
    /// Integer field is strictly greater than this threshold.
    GreaterThan(i64),
}

/// One deletion rule: a field name and the comparison applied to it.
///
/// A rule whose field is absent, or holds a value of the wrong type, simply
/// does not match; that is never an error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    /// Name of the document field the rule inspects.
    pub field: String,
    /// Comparison applied to the field value.
    #[serde(flatten)]
    pub op: FieldOp,
}

/// Complete predicate configuration: a mode and, in rules mode, the rule
/// list combined with OR semantics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredicateConfig {
    #[serde(default)]
    pub mode: PredicateMode,
    #[serde(default)]
    pub rules: Vec<FieldRule>,
}

impl PredicateConfig {
    /// Delete every present document.
    pub fn all() -> Self {
        Self {
            mode: PredicateMode::All,
            rules: Vec::new(),
        }
    }

    /// Delete nothing (dry run).
    pub fn none() -> Self {
        Self {
            mode: PredicateMode::None,
            rules: Vec::new(),
        }
    }

    /// Rules mode with the given rule list.
    pub fn rules(rules: Vec<FieldRule>) -> Self {
        Self {
            mode: PredicateMode::Rules,
            rules,
        }
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Returns `true` if this configuration can never select a document
    /// (dry-run mode, or rules mode with no rules).
    pub fn is_inert(&self) -> bool {
        match self.mode {
            PredicateMode::All => false,
            PredicateMode::None => true,
            PredicateMode::Rules => self.rules.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty_rules_mode() {
        let config = PredicateConfig::default();
        assert_eq!(config.mode, PredicateMode::Rules);
        assert!(config.rules.is_empty());
        assert!(config.is_inert());
    }

    #[test]
    fn parses_rules_json() {
        let config: PredicateConfig = serde_json::from_str(
            r#"{
                "mode": "rules",
                "rules": [
                    { "field": "status", "equals": "expired" },
                    { "field": "revision", "greater_than": 100 }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(config.rules.len(), 2);
        assert_eq!(
            config.rules[0],
            FieldRule {
                field: "status".into(),
                op: FieldOp::Equals("expired".into()),
            }
        );
        assert_eq!(
            config.rules[1],
            FieldRule {
                field: "revision".into(),
                op: FieldOp::GreaterThan(100),
            }
        );
        assert!(!config.is_inert());
    }

    #[test]
    fn mode_defaults_to_rules_when_omitted() {
        let config: PredicateConfig =
            serde_json::from_str(r#"{ "rules": [{ "field": "f", "equals": "v" }] }"#).unwrap();
        assert_eq!(config.mode, PredicateMode::Rules);
        assert_eq!(config.rules.len(), 1);
    }

    #[test]
    fn parses_bare_modes() {
        let all: PredicateConfig = serde_json::from_str(r#"{ "mode": "all" }"#).unwrap();
        assert_eq!(all.mode, PredicateMode::All);
        assert!(!all.is_inert());

        let none: PredicateConfig = serde_json::from_str(r#"{ "mode": "none" }"#).unwrap();
        assert_eq!(none.mode, PredicateMode::None);
        assert!(none.is_inert());
    }

    #[test]
    fn rejects_unknown_operator() {
        let result: Result<PredicateConfig, _> =
            serde_json::from_str(r#"{ "rules": [{ "field": "f", "less_than": 3 }] }"#);
        assert!(result.is_err());
    }

    #[test]
    fn from_json_file_roundtrip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("rules.json");
        let config = PredicateConfig::rules(vec![FieldRule {
            field: "status".into(),
            op: FieldOp::Equals("stale".into()),
        }]);
        std::fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();

        let loaded = PredicateConfig::from_json_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn from_json_file_missing_is_read_error() {
        let err = PredicateConfig::from_json_file(Path::new("/nonexistent/rules.json"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
