//! Field value types, coercions and validation

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::sync::OnceLock;

/// A typed view of a JSON field value
///
/// Backend payloads carry dates as RFC 3339 strings, so strings that parse as
/// timestamps classify as `DateTime`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    DateTime(DateTime<Utc>),
    Null,
}

impl FieldValue {
    /// Classify a JSON value
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Boolean(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => FieldValue::Integer(i),
                None => FieldValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => match parse_timestamp(s) {
                Some(ts) => FieldValue::DateTime(ts),
                None => FieldValue::String(s.clone()),
            },
            other => FieldValue::String(other.to_string()),
        }
    }

    /// Numeric value, coercing strings that parse as finite numbers
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::Float(f) if f.is_finite() => Some(*f),
            FieldValue::String(s) => parse_number(s),
            _ => None,
        }
    }

    /// Boolean value, coercing the strings `"true"` and `"false"`
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            FieldValue::String(s) => match s.as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::DateTime(ts) => Some(*ts),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

fn parse_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Text used for free-text search and case-insensitive ordering
///
/// Strings, numbers and booleans have a text form; null, arrays and objects
/// do not.
pub fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(match n.as_i64() {
            Some(i) => i.to_string(),
            None => n.as_f64().map(|f| f.to_string()).unwrap_or_else(|| n.to_string()),
        }),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Equality used by exact-match filters
///
/// Numbers compare numerically after coercion (`"2"` equals `2`), booleans
/// compare with booleans, and everything else compares its exact,
/// case-sensitive text.
pub fn loosely_equal(record_value: &Value, wanted: &Value) -> bool {
    let a = FieldValue::from_json(record_value);
    let b = FieldValue::from_json(wanted);

    if let (Some(x), Some(y)) = (a.as_number(), b.as_number()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_bool(), b.as_bool()) {
        return x == y;
    }
    match (text_of(record_value), text_of(wanted)) {
        (Some(x), Some(y)) => x == y,
        _ => record_value == wanted,
    }
}

/// Sort class of a value: numbers, then timestamps, then text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum SortClass {
    Numeric,
    Timestamp,
    Text,
}

fn sort_class(value: &FieldValue) -> SortClass {
    if value.as_number().is_some() {
        SortClass::Numeric
    } else if value.as_datetime().is_some() {
        SortClass::Timestamp
    } else {
        SortClass::Text
    }
}

/// Natural ordering of two defined values
///
/// Values rank by class first (numbers, then timestamps, then text), so a
/// field mixing kinds still has a total order. Within a class numbers compare
/// numerically, timestamps chronologically, and text case-insensitively.
pub fn natural_cmp(a: &Value, b: &Value) -> Ordering {
    let fa = FieldValue::from_json(a);
    let fb = FieldValue::from_json(b);

    let (ca, cb) = (sort_class(&fa), sort_class(&fb));
    if ca != cb {
        return ca.cmp(&cb);
    }

    match ca {
        SortClass::Numeric => match (fa.as_number(), fb.as_number()) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            _ => Ordering::Equal,
        },
        SortClass::Timestamp => fa.as_datetime().cmp(&fb.as_datetime()),
        SortClass::Text => {
            let ta = text_of(a).unwrap_or_else(|| a.to_string()).to_lowercase();
            let tb = text_of(b).unwrap_or_else(|| b.to_string()).to_lowercase();
            ta.cmp(&tb)
        }
    }
}

/// Field format validators for officer and user form input
#[derive(Debug, Clone)]
pub enum FieldFormat {
    Email,
    /// Ten-digit Indian mobile number, formatting characters ignored
    Phone,
    Custom(Regex),
}

impl FieldFormat {
    /// Validate a field value against this format
    pub fn validate(&self, value: &Value) -> bool {
        let Some(string_value) = value.as_str() else {
            return false;
        };

        match self {
            FieldFormat::Email => Self::is_valid_email(string_value),
            FieldFormat::Phone => Self::is_valid_phone(string_value),
            FieldFormat::Custom(regex) => regex.is_match(string_value),
        }
    }

    fn is_valid_email(email: &str) -> bool {
        static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = EMAIL_REGEX.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
        regex.is_match(email)
    }

    fn is_valid_phone(phone: &str) -> bool {
        static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = PHONE_REGEX.get_or_init(|| Regex::new(r"^[6-9]\d{9}$").unwrap());
        let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
        regex.is_match(&digits)
    }
}
