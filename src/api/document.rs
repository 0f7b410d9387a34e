// JSON:API-style resource documents read from the fixture files

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope of every fixture file and every API response
///
/// Only `data` is required. `included` and `meta` are carried as raw JSON and
/// never inspected beyond an emptiness check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDocument {
    pub data: Vec<ResourceRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

/// One resource, kept exactly as found in the fixture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceRecord(Value);

impl ResourceDocument {
    /// Document carrying only primary data
    pub const fn from_data(data: Vec<ResourceRecord>) -> Self {
        Self {
            data,
            included: None,
            meta: None,
        }
    }
}

impl ResourceRecord {
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }

    pub fn kind(&self) -> Option<&Value> {
        self.0.get("type")
    }

    /// String value of an attribute; `None` when missing or not a string
    pub fn attribute_str(&self, field: &str) -> Option<&str> {
        self.0
            .get("attributes")
            .and_then(|attributes| attributes.get(field))
            .and_then(Value::as_str)
    }
}

/// Whether a loosely-typed member counts as present: not null, false, zero or empty
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(members) => !members.is_empty(),
    }
}
