//! Dynamic item record

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use super::FieldPath;
use super::Value;

/// A single item of tabular data.
///
/// Records hold field values as a `HashMap<String, Value>`; nested data is
/// stored as [`Value::Record`] or [`Value::List`] and reached through a
/// [`FieldPath`]. The view and change operations only ever read records.
///
/// # Example
///
/// ```
/// use tabular_lib::model::{Record, Value};
///
/// let record = Record::new()
///     .set("id", "1")
///     .set("name", "frog")
///     .set("habitat", Record::new().set("kind", "pond"));
///
/// assert_eq!(record.get("name"), Some(&Value::from("frog")));
/// assert_eq!(record.resolve("habitat.kind"), Some(&Value::from("pond")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: HashMap<String, Value>,
}

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Resolves a dotted path such as `"owner.name"` against this record.
    ///
    /// Returns `None` when any segment is missing or the value is null.
    /// Parse the path once with [`FieldPath::parse`] when resolving it
    /// against many records.
    pub fn resolve(&self, path: &str) -> Option<&Value> {
        FieldPath::parse(path).resolve(self)
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_nested() {
        let json = r#"{"id": "7", "name": "sheep", "stats": {"legs": 4}}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.get("name"), Some(&Value::from("sheep")));
        assert_eq!(record.resolve("stats.legs"), Some(&Value::Int(4)));
    }

    #[test]
    fn test_serialize_round_trips_fields() {
        let record = Record::new().set("id", "1").set("count", 3i64);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({"id": "1", "count": 3}));
    }

    #[test]
    fn test_null_field_resolves_to_none() {
        let record = Record::new().set("name", Value::Null);

        assert!(record.contains("name"));
        assert_eq!(record.resolve("name"), None);
    }
}
