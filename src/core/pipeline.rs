//! Search, filter, sort and paginate in one pass
//!
//! The order of stages is fixed: search, then filters, then a stable sort,
//! then pagination. Counts shown to the user depend on that order.

use crate::core::filter::{FilterSpec, build_filter_predicate};
use crate::core::query::{PageSpec, ViewResult, total_pages};
use crate::core::record::Record;
use crate::core::search::{SearchSpec, build_search_predicate};
use crate::core::sort::{SortSpec, build_comparator};
use serde::{Deserialize, Serialize};

/// Everything that describes what the user wants to see
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewSpec {
    #[serde(default)]
    pub filter: FilterSpec,
    #[serde(default)]
    pub search: SearchSpec,
    #[serde(default)]
    pub sort: Option<SortSpec>,
    #[serde(default)]
    pub page: PageSpec,
}

impl ViewSpec {
    pub fn compute(&self, source: &[Record]) -> ViewResult {
        compute_view(source, &self.filter, &self.search, self.sort.as_ref(), self.page)
    }
}

/// Compute the visible page of `source`
///
/// Never fails: a zero page size is treated as 1 and out-of-range pages are
/// clamped into `1..=total_pages`. With no sort the input order is kept.
pub fn compute_view(
    source: &[Record],
    filter: &FilterSpec,
    search: &SearchSpec,
    sort: Option<&SortSpec>,
    page: PageSpec,
) -> ViewResult {
    let search_predicate = build_search_predicate(search);
    let filter_predicate = build_filter_predicate(filter);

    let searched: Vec<&Record> = source.iter().filter(|r| search_predicate(r)).collect();
    let searched_count = searched.len();

    let mut matched: Vec<&Record> = searched.into_iter().filter(|r| filter_predicate(r)).collect();

    if let Some(sort) = sort {
        let comparator = build_comparator(sort);
        // slice::sort_by is stable
        matched.sort_by(|a, b| comparator(a, b));
    }

    let page_size = page.effective_page_size();
    let total_matched = matched.len();
    let total_pages = total_pages(total_matched, page_size);
    let current_page = page.page.clamp(1, total_pages);

    let start = (current_page - 1) * page_size;
    let end = (start + page_size).min(total_matched);
    let visible_records = matched
        .get(start..end)
        .unwrap_or_default()
        .iter()
        .map(|r| (*r).clone())
        .collect();

    tracing::trace!(
        source = source.len(),
        searched = searched_count,
        matched = total_matched,
        "view pipeline stages"
    );

    ViewResult {
        visible_records,
        total_matched,
        total_pages,
        current_page,
        page_size,
    }
}
