use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TypeError;

/// A typed value held by a document field.
///
/// The predicate only ever inspects strings and integers; any other JSON
/// type (float, bool, array, object) is carried as [`FieldValue::Null`] so
/// that rules treat it as non-matching rather than as an error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Null,
}

impl FieldValue {
    /// The contained string, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The contained integer, if this is an integer value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

/// Read-only record fetched from the store for one key.
///
/// Documents are ephemeral: fetched fresh per key, inspected by the
/// predicate, then discarded. They are never written back.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    fields: BTreeMap<String, FieldValue>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from a JSON payload.
    ///
    /// The payload must be a JSON object. String and integer members map to
    /// their typed values; every other member type maps to
    /// [`FieldValue::Null`].
    pub fn from_json(value: &Value) -> Result<Self, TypeError> {
        let object = value.as_object().ok_or(TypeError::NotAnObject)?;
        let fields = object
            .iter()
            .map(|(name, member)| {
                let field = match member {
                    Value::String(s) => FieldValue::String(s.clone()),
                    Value::Number(n) => n
                        .as_i64()
                        .map(FieldValue::Integer)
                        .unwrap_or(FieldValue::Null),
                    _ => FieldValue::Null,
                };
                (name.clone(), field)
            })
            .collect();
        Ok(Self { fields })
    }

    /// Serialize back to a JSON object.
    pub fn to_json(&self) -> Value {
        let map = self
            .fields
            .iter()
            .map(|(name, field)| {
                let value = match field {
                    FieldValue::String(s) => Value::String(s.clone()),
                    FieldValue::Integer(i) => Value::from(*i),
                    FieldValue::Null => Value::Null,
                };
                (name.clone(), value)
            })
            .collect();
        Value::Object(map)
    }

    /// Set a string field, returning the document for chaining.
    pub fn with_str(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields
            .insert(name.into(), FieldValue::String(value.into()));
        self
    }

    /// Set an integer field, returning the document for chaining.
    pub fn with_int(mut self, name: impl Into<String>, value: i64) -> Self {
        self.fields.insert(name.into(), FieldValue::Integer(value));
        self
    }

    /// The string value of a field, or `None` if the field is absent or not
    /// a string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(FieldValue::as_str)
    }

    /// The integer value of a field, or `None` if the field is absent or not
    /// an integer.
    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.fields.get(name).and_then(FieldValue::as_int)
    }

    /// Number of fields in the document.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the document has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_maps_strings_and_integers() {
        let doc = Document::from_json(&json!({
            "status": "expired",
            "age_days": 420,
        }))
        .unwrap();
        assert_eq!(doc.get_str("status"), Some("expired"));
        assert_eq!(doc.get_int("age_days"), Some(420));
    }

    #[test]
    fn from_json_rejects_non_objects() {
        assert_eq!(
            Document::from_json(&json!([1, 2, 3])),
            Err(TypeError::NotAnObject)
        );
        assert_eq!(
            Document::from_json(&json!("scalar")),
            Err(TypeError::NotAnObject)
        );
    }

    #[test]
    fn unsupported_member_types_become_null() {
        let doc = Document::from_json(&json!({
            "ratio": 0.5,
            "tags": ["a", "b"],
            "nested": {"x": 1},
            "flag": true,
        }))
        .unwrap();
        assert_eq!(doc.len(), 4);
        assert_eq!(doc.get_str("ratio"), None);
        assert_eq!(doc.get_int("ratio"), None);
        assert_eq!(doc.get_int("tags"), None);
    }

    #[test]
    fn typed_accessors_reject_mismatched_types() {
        let doc = Document::new().with_str("name", "x").with_int("count", 7);
        assert_eq!(doc.get_int("name"), None);
        assert_eq!(doc.get_str("count"), None);
        assert_eq!(doc.get_str("missing"), None);
        assert_eq!(doc.get_int("missing"), None);
    }

    #[test]
    fn json_roundtrip() {
        let doc = Document::new()
            .with_str("status", "stale")
            .with_int("version", 3);
        let back = Document::from_json(&doc.to_json()).unwrap();
        assert_eq!(back, doc);
    }
}
