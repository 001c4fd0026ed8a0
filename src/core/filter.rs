//! Exact-match filter specs and the predicate builder

use crate::core::field::loosely_equal;
use crate::core::record::Record;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sentinel filter value meaning "this field imposes no constraint"
pub const ALL: &str = "all";

/// A single filter entry
///
/// Serializes as a plain JSON value: the sentinel `"all"` for [`FilterValue::Any`],
/// the wanted value otherwise. A JSON `null` also reads as `Any`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum FilterValue {
    Any,
    Exact(Value),
}

impl FilterValue {
    pub fn is_any(&self) -> bool {
        matches!(self, FilterValue::Any)
    }
}

impl From<Value> for FilterValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => FilterValue::Any,
            Value::String(s) if s == ALL => FilterValue::Any,
            other => FilterValue::Exact(other),
        }
    }
}

impl From<FilterValue> for Value {
    fn from(value: FilterValue) -> Self {
        match value {
            FilterValue::Any => Value::String(ALL.to_string()),
            FilterValue::Exact(v) => v,
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Value::String(value.to_string()).into()
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Value::String(value).into()
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Exact(Value::from(value))
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Exact(Value::Bool(value))
    }
}

/// Mapping from field name to filter value, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSpec {
    fields: IndexMap<String, FilterValue>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a spec whose fields all start at the sentinel
    pub fn unconstrained<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|f| (f.into(), FilterValue::Any))
                .collect(),
        }
    }

    /// Parse a JSON object (`{"status": "resolved", "category": "all"}`)
    ///
    /// Anything other than an object yields an empty spec.
    pub fn from_json(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            return Self::default();
        };
        Self {
            fields: map
                .iter()
                .map(|(k, v)| (k.clone(), FilterValue::from(v.clone())))
                .collect(),
        }
    }

    /// Builder form of [`FilterSpec::set`]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<FilterValue>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&FilterValue> {
        self.fields.get(field)
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Put one field back to the sentinel
    pub fn clear_field(&mut self, field: &str) {
        if let Some(value) = self.fields.get_mut(field) {
            *value = FilterValue::Any;
        }
    }

    /// Put every field back to the sentinel, keeping the field list
    pub fn reset(&mut self) {
        for value in self.fields.values_mut() {
            *value = FilterValue::Any;
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Entries that actually constrain records
    pub fn active_constraints(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().filter_map(|(k, v)| match v {
            FilterValue::Any => None,
            FilterValue::Exact(value) => Some((k.as_str(), value)),
        })
    }

    pub fn has_active_constraints(&self) -> bool {
        self.active_constraints().next().is_some()
    }
}

/// Build a predicate that ANDs every active constraint of `spec`
///
/// A record missing a constrained field does not match.
pub fn build_filter_predicate(spec: &FilterSpec) -> impl Fn(&Record) -> bool + Send + Sync + Clone + use<> {
    let constraints: Vec<(String, Value)> = spec
        .active_constraints()
        .map(|(field, value)| (field.to_string(), value.clone()))
        .collect();

    move |record: &Record| {
        constraints.iter().all(|(field, wanted)| match record.get(field) {
            Some(actual) => loosely_equal(actual, wanted),
            None => false,
        })
    }
}
