//! Store trait for answering list-view queries

use crate::core::pipeline::compute_view;
use crate::core::query::{ViewQuery, ViewResult};
use crate::core::record::Record;
use anyhow::Result;

/// A source of records that can answer list-view queries
///
/// Implementors only provide [`RecordStore::list_all`]; searching, filtering,
/// sorting and pagination run through the shared pipeline.
pub trait RecordStore: Send + Sync {
    /// Get all records (unfiltered, unsorted)
    fn list_all(&self) -> Result<Vec<Record>>;

    /// Run a query against the current records
    fn query(&self, query: &ViewQuery) -> Result<ViewResult> {
        let records = self.list_all()?;
        let sort = query.sort_spec();
        Ok(compute_view(
            &records,
            &query.filter_spec(),
            &query.search_spec(),
            sort.as_ref(),
            query.page_spec(),
        ))
    }
}
