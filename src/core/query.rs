//! Query parameters, page specs and view results

use crate::core::filter::FilterSpec;
use crate::core::record::Record;
use crate::core::search::SearchSpec;
use crate::core::sort::SortSpec;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default number of rows per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Largest page size a query may request
pub const MAX_PAGE_SIZE: usize = 100;

/// Requested page number and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSpec {
    pub page: usize,
    pub page_size: usize,
}

impl PageSpec {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }

    pub fn first(page_size: usize) -> Self {
        Self::new(1, page_size)
    }

    /// Page size, with zero raised to 1
    pub fn effective_page_size(&self) -> usize {
        self.page_size.max(1)
    }
}

impl Default for PageSpec {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_SIZE)
    }
}

/// Number of pages needed for `total` rows; never less than 1
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// The computed page of records ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewResult {
    /// Records on the current page, in display order
    pub visible_records: Vec<Record>,

    /// Records left after search and filters
    pub total_matched: usize,

    /// Pages available; at least 1
    pub total_pages: usize,

    /// Current page, within `1..=total_pages`
    pub current_page: usize,

    /// Rows per page the result was cut with; at least 1
    pub page_size: usize,
}

impl ViewResult {
    pub fn empty() -> Self {
        Self {
            visible_records: Vec::new(),
            total_matched: 0,
            total_pages: 1,
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn is_empty(&self) -> bool {
        self.total_matched == 0
    }

    /// One-based index range of the visible rows, for "Showing 11-20 of 45"
    ///
    /// Returns `None` when nothing matched.
    pub fn visible_range(&self) -> Option<(usize, usize)> {
        if self.visible_records.is_empty() {
            return None;
        }
        let start = (self.current_page - 1) * self.page_size.max(1) + 1;
        Some((start, start + self.visible_records.len() - 1))
    }
}

impl Default for ViewResult {
    fn default() -> Self {
        Self::empty()
    }
}

/// Query parameters for a list view
///
/// Mirrors the query string a list endpoint accepts. All parameters have
/// defaults and malformed values degrade rather than fail.
///
/// # Example
/// ```text
/// ?page=2&limit=25
/// ?filter={"status": "resolved", "category": "all"}
/// ?sort=createdAt:desc&search=pothole&search_fields=title,description
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ViewQuery {
    /// Page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub limit: usize,

    /// Filters as a JSON object string
    pub filter: Option<String>,

    /// Sort field and direction (`field`, `field:asc`, `field:desc`)
    pub sort: Option<String>,

    /// Free-text search term
    pub search: Option<String>,

    /// Comma-separated fields the search term is matched against
    pub search_fields: Option<String>,
}

impl Default for ViewQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            filter: None,
            sort: None,
            search: None,
            search_fields: None,
        }
    }
}

impl ViewQuery {
    /// Get page number, ensuring minimum of 1
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    /// Get limit, clamped to `1..=MAX_PAGE_SIZE`
    pub fn limit(&self) -> usize {
        self.limit.clamp(1, MAX_PAGE_SIZE)
    }

    /// Parse filter JSON string into Value
    pub fn filter_value(&self) -> Option<Value> {
        self.filter
            .as_ref()
            .and_then(|s| serde_json::from_str(s).ok())
    }

    pub fn filter_spec(&self) -> FilterSpec {
        self.filter_value()
            .map(|v| FilterSpec::from_json(&v))
            .unwrap_or_default()
    }

    pub fn sort_spec(&self) -> Option<SortSpec> {
        self.sort.as_deref().and_then(SortSpec::parse)
    }

    pub fn search_spec(&self) -> SearchSpec {
        let fields = self
            .search_fields
            .as_deref()
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|f| !f.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();
        SearchSpec::new(self.search.clone().unwrap_or_default(), fields)
    }

    pub fn page_spec(&self) -> PageSpec {
        PageSpec::new(self.page(), self.limit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_view_query_defaults() {
        let params = ViewQuery::default();
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 10);
        assert!(params.sort_spec().is_none());
        assert!(params.search_spec().is_blank());
        assert!(!params.filter_spec().has_active_constraints());
    }

    #[test]
    fn test_view_query_clamps() {
        let params = ViewQuery {
            page: 0,
            limit: 500,
            ..Default::default()
        };
        assert_eq!(params.page_spec(), PageSpec::new(1, 100));

        let params = ViewQuery {
            limit: 0,
            ..Default::default()
        };
        assert_eq!(params.limit(), 1);
    }

    #[test]
    fn test_view_query_from_json() {
        let params: ViewQuery = serde_json::from_value(json!({
            "page": 2,
            "filter": "{\"status\": \"resolved\", \"category\": \"all\"}",
            "sort": "priority:desc",
            "search": "pothole",
            "search_fields": "title, description,,"
        }))
        .expect("deserialize should succeed");

        assert_eq!(params.page(), 2);
        assert_eq!(params.limit(), DEFAULT_PAGE_SIZE);
        assert_eq!(params.sort_spec(), Some(SortSpec::descending("priority")));
        assert_eq!(params.search_spec().fields, vec!["title", "description"]);
        let active: Vec<_> = params.filter_spec().active_constraints().map(|(f, _)| f.to_string()).collect();
        assert_eq!(active, vec!["status"]);
    }

    #[test]
    fn test_malformed_filter_degrades() {
        let params = ViewQuery {
            filter: Some("{not json".to_string()),
            ..Default::default()
        };
        assert!(params.filter_value().is_none());
        assert!(!params.filter_spec().has_active_constraints());
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(145, 20), 8);
        assert_eq!(total_pages(3, 0), 3);
    }

    #[test]
    fn test_view_result_navigation() {
        let result = ViewResult {
            visible_records: vec![Record::new(), Record::new()],
            total_matched: 12,
            total_pages: 2,
            current_page: 2,
            page_size: 10,
        };
        assert!(!result.has_next());
        assert!(result.has_prev());
        assert_eq!(result.visible_range(), Some((11, 12)));
        assert_eq!(ViewResult::empty().visible_range(), None);
    }
}
