//! Stateful list-view adapter
//!
//! A [`ViewModel`] owns one source collection and the current view spec.
//! Every mutation re-runs the pipeline synchronously and memoizes the
//! result, so [`ViewModel::view`] is a plain read.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut issues = ViewModel::new(records)
//!     .with_search_fields(["title", "description", "category"])
//!     .with_filter_fields(["status", "category"])
//!     .with_sort(SortSpec::descending("createdAt"));
//!
//! issues.set_filter("status", "resolved");
//! issues.set_search_term("pothole");
//! issues.set_sort("priority");
//! let page = issues.view();
//! ```

use crate::core::filter::{FilterSpec, FilterValue};
use crate::core::pipeline::ViewSpec;
use crate::core::query::{DEFAULT_PAGE_SIZE, PageSpec, ViewResult};
use crate::core::record::Record;
use crate::core::search::SearchSpec;
use crate::core::sort::{SortDirection, SortSpec};

#[derive(Debug, Clone)]
pub struct ViewModel {
    source: Vec<Record>,
    spec: ViewSpec,
    default_sort: Option<SortSpec>,
    filter_fields: Option<Vec<String>>,
    view: ViewResult,
    recomputes: u64,
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ViewModel {
    /// Create a view over `source` with no filters, no search, no sort and the default page size
    pub fn new(source: Vec<Record>) -> Self {
        let mut model = Self {
            source,
            spec: ViewSpec {
                page: PageSpec::first(DEFAULT_PAGE_SIZE),
                ..Default::default()
            },
            default_sort: None,
            filter_fields: None,
            view: ViewResult::empty(),
            recomputes: 0,
        };
        model.recompute();
        model
    }

    // === Builders ===

    /// Fields the search term is matched against
    pub fn with_search_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.spec.search = SearchSpec::new(std::mem::take(&mut self.spec.search.term), fields);
        self.recompute();
        self
    }

    /// Declare the filterable fields
    ///
    /// Each starts at the sentinel. Once declared, `set_filter` ignores any
    /// other field name.
    pub fn with_filter_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        self.spec.filter = FilterSpec::unconstrained(fields.iter().cloned());
        self.filter_fields = Some(fields);
        self.recompute();
        self
    }

    /// Initial sort, also restored by [`ViewModel::clear_filters`]
    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.default_sort = Some(sort.clone());
        self.spec.sort = Some(sort);
        self.recompute();
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.spec.page = PageSpec::first(page_size.max(1));
        self.recompute();
        self
    }

    // === Change handlers ===

    /// Replace the source collection
    ///
    /// The current page is kept unless it no longer exists, in which case
    /// the view goes back to page 1.
    pub fn set_source(&mut self, records: Vec<Record>) {
        self.source = records;
        let requested = self.spec.page.page;
        self.recompute();
        if self.view.current_page != requested {
            self.spec.page.page = 1;
            self.recompute();
        }
    }

    /// Update one filter entry and go back to page 1
    ///
    /// Returns `false` when filterable fields were declared and `field` is
    /// not one of them; the spec is left untouched in that case.
    pub fn set_filter(&mut self, field: &str, value: impl Into<FilterValue>) -> bool {
        let known = self
            .filter_fields
            .as_ref()
            .is_none_or(|fields| fields.iter().any(|f| f == field));
        if !known {
            tracing::warn!(field = %field, "ignoring filter on unknown field");
            return false;
        }

        self.spec.filter.set(field, value);
        self.spec.page.page = 1;
        self.recompute();
        true
    }

    /// Update the search term and go back to page 1
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.spec.search.term = term.into();
        self.spec.page.page = 1;
        self.recompute();
    }

    /// Sort by `field`
    ///
    /// Selecting the active field flips the direction; a new field starts
    /// descending. The current page is kept.
    pub fn set_sort(&mut self, field: &str) {
        let next = match &self.spec.sort {
            Some(current) if current.field == field => {
                SortSpec::new(field, current.direction.toggled())
            }
            _ => SortSpec::descending(field),
        };
        self.spec.sort = Some(next);
        self.recompute();
    }

    /// Sort by `field` in an explicit direction, keeping the current page
    pub fn set_sort_direction(&mut self, field: &str, direction: SortDirection) {
        self.spec.sort = Some(SortSpec::new(field, direction));
        self.recompute();
    }

    /// Flip the active sort direction; no-op without an active sort
    pub fn toggle_sort_direction(&mut self) {
        if let Some(sort) = &mut self.spec.sort {
            sort.direction = sort.direction.toggled();
            self.recompute();
        }
    }

    /// Jump to page `n`, clamped to the available pages
    pub fn set_page(&mut self, n: usize) {
        self.spec.page.page = n;
        self.recompute();
    }

    pub fn next_page(&mut self) {
        if self.view.has_next() {
            self.set_page(self.view.current_page + 1);
        }
    }

    pub fn prev_page(&mut self) {
        if self.view.has_prev() {
            self.set_page(self.view.current_page - 1);
        }
    }

    /// Change the page size and go back to page 1
    pub fn set_page_size(&mut self, page_size: usize) {
        self.spec.page = PageSpec::first(page_size.max(1));
        self.recompute();
    }

    /// Reset filters and search, restore the default sort, go back to page 1
    pub fn clear_filters(&mut self) {
        self.spec.filter.reset();
        self.spec.search.term.clear();
        self.spec.sort = self.default_sort.clone();
        self.spec.page.page = 1;
        self.recompute();
    }

    // === Reads ===

    /// The last computed result
    pub fn view(&self) -> &ViewResult {
        &self.view
    }

    /// Whether anything differs from the unfiltered default view
    pub fn has_active_filters(&self) -> bool {
        self.spec.filter.has_active_constraints()
            || !self.spec.search.is_blank()
            || self.spec.sort != self.default_sort
    }

    pub fn filter_spec(&self) -> &FilterSpec {
        &self.spec.filter
    }

    pub fn search_spec(&self) -> &SearchSpec {
        &self.spec.search
    }

    pub fn sort_spec(&self) -> Option<&SortSpec> {
        self.spec.sort.as_ref()
    }

    pub fn page_spec(&self) -> PageSpec {
        self.spec.page
    }

    pub fn spec(&self) -> &ViewSpec {
        &self.spec
    }

    pub fn source(&self) -> &[Record] {
        &self.source
    }

    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    /// How many times the pipeline has run
    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }

    fn recompute(&mut self) {
        self.view = self.spec.compute(&self.source);
        self.spec.page.page = self.view.current_page;
        self.recomputes += 1;

        tracing::debug!(
            total_matched = self.view.total_matched,
            total_pages = self.view.total_pages,
            current_page = self.view.current_page,
            "recomputed list view"
        );
    }
}
