//! Opaque records and field-path lookup

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field holding a record's identifier in backend payloads
pub const ID_FIELD: &str = "_id";

/// One domain item (issue, officer, inventory entry) seen as a field-value mapping
///
/// Field names may be dotted paths (`officerProfile.status`) which descend
/// into nested objects. A JSON `null` is reported as absent, so callers only
/// ever see defined values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Build a record from a JSON value
    ///
    /// Returns `None` when the value is not an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Build a record from any serializable type that serializes to an object
    pub fn from_serialize<T: Serialize>(item: &T) -> serde_json::Result<Option<Self>> {
        Ok(Self::from_value(serde_json::to_value(item)?))
    }

    /// Look up a field by name or dotted path
    pub fn get(&self, field: &str) -> Option<&Value> {
        let value = match self.0.get(field) {
            Some(value) => value,
            None if field.contains('.') => {
                let mut segments = field.split('.');
                let first = segments.next()?;
                let mut current = self.0.get(first)?;
                for segment in segments {
                    current = current.as_object()?.get(segment)?;
                }
                current
            }
            None => return None,
        };

        if value.is_null() { None } else { Some(value) }
    }

    /// Set a top-level field
    pub fn insert(&mut self, field: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(field.into(), value)
    }

    /// Remove a top-level field
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.0.remove(field)
    }

    /// Shallow-merge another object's fields into this record
    pub fn merge(&mut self, patch: &Map<String, Value>) {
        for (key, value) in patch {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// The record identifier rendered as a string, if present
    pub fn id(&self) -> Option<String> {
        match self.get(ID_FIELD)? {
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Convert a list of JSON values into records, dropping anything that is not an object
pub fn records_from_values(values: impl IntoIterator<Item = Value>) -> Vec<Record> {
    values.into_iter().filter_map(Record::from_value).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn issue() -> Record {
        Record::from_value(json!({
            "_id": "issue1",
            "title": "Pothole on Main Road",
            "priority": 1,
            "assignedOfficerId": null,
            "verification": { "confidenceScore": 0.92, "status": "success" }
        }))
        .expect("object")
    }

    #[test]
    fn test_get_top_level_field() {
        assert_eq!(issue().get("title"), Some(&json!("Pothole on Main Road")));
        assert_eq!(issue().get("priority"), Some(&json!(1)));
    }

    #[test]
    fn test_get_nested_path() {
        let record = issue();
        assert_eq!(record.get("verification.confidenceScore"), Some(&json!(0.92)));
        assert_eq!(record.get("verification.missing"), None);
        assert_eq!(record.get("title.length"), None);
    }

    #[test]
    fn test_null_is_absent() {
        assert_eq!(issue().get("assignedOfficerId"), None);
        assert_eq!(issue().get("nope"), None);
    }

    #[test]
    fn test_literal_dotted_key_wins() {
        let record = Record::from_value(json!({ "a.b": 1, "a": { "b": 2 } })).expect("object");
        assert_eq!(record.get("a.b"), Some(&json!(1)));
    }

    #[test]
    fn test_non_object_rejected() {
        assert!(Record::from_value(json!([1, 2])).is_none());
        assert_eq!(records_from_values(vec![json!(1), json!({"x": 1})]).len(), 1);
    }

    #[test]
    fn test_id_and_merge() {
        let mut record = issue();
        assert_eq!(record.id().as_deref(), Some("issue1"));

        let patch = json!({ "status": "resolved", "priority": 3 });
        record.merge(patch.as_object().expect("object"));
        assert_eq!(record.get("status"), Some(&json!("resolved")));
        assert_eq!(record.get("priority"), Some(&json!(3)));
    }
}
