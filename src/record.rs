//! Dynamic record type shared by every collection.
//!
//! Records are schema-light: beyond the `id` field the storage layer does not
//! care which fields an entity carries. Required-field checks happen in the
//! validation hook at create/replace time, not here.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field that identifies a record within its collection.
pub const ID_FIELD: &str = "id";

/// One entity instance: a mapping of field name to JSON value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing field map.
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Returns the record's `id`, if it has one.
    pub fn id(&self) -> Option<&str> {
        self.fields.get(ID_FIELD).and_then(Value::as_str)
    }

    /// Sets the record's `id`, replacing any caller-supplied value.
    pub fn set_id(&mut self, id: &str) {
        self.fields
            .insert(ID_FIELD.to_string(), Value::String(id.to_string()));
    }

    /// Returns a field's value, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Inserts or replaces a field.
    pub fn insert(&mut self, field: &str, value: Value) {
        self.fields.insert(field.to_string(), value);
    }

    /// Returns the underlying field map.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Exact, case-sensitive string match against a field.
    ///
    /// Non-string values never match: lookups arrive as path/query strings
    /// and are compared without coercion.
    pub fn matches(&self, field: &str, value: &str) -> bool {
        self.fields.get(field).and_then(Value::as_str) == Some(value)
    }

    /// Case-insensitive substring match against a string field.
    pub fn matches_term(&self, field: &str, term: &str) -> bool {
        self.fields
            .get(field)
            .and_then(Value::as_str)
            .is_some_and(|s| s.to_lowercase().contains(&term.to_lowercase()))
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
