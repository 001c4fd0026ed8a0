//! Free-text search across a fixed list of fields

use crate::core::field::text_of;
use crate::core::record::Record;
use serde::{Deserialize, Serialize};

/// A search term and the fields it is matched against, in order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSpec {
    #[serde(default)]
    pub term: String,
    #[serde(default)]
    pub fields: Vec<String>,
}

impl SearchSpec {
    pub fn new<I, S>(term: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            term: term.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// A spec over `fields` with an empty term
    pub fn over<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(String::new(), fields)
    }

    /// Whether the term is empty or whitespace-only
    pub fn is_blank(&self) -> bool {
        self.term.trim().is_empty()
    }
}

/// Build a case-insensitive substring predicate
///
/// A blank term matches every record. Otherwise a record matches when ANY
/// listed field contains the term; null and missing fields never match.
pub fn build_search_predicate(spec: &SearchSpec) -> impl Fn(&Record) -> bool + Send + Sync + Clone + use<> {
    let needle = if spec.is_blank() {
        None
    } else {
        Some(spec.term.to_lowercase())
    };
    let fields = spec.fields.clone();

    move |record: &Record| {
        let Some(needle) = &needle else {
            return true;
        };
        fields.iter().any(|field| {
            record
                .get(field)
                .and_then(text_of)
                .is_some_and(|text| text.to_lowercase().contains(needle.as_str()))
        })
    }
}
