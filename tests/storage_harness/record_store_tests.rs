//! Macro-generated test suite for `RecordStore` contract validation.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//!
//! record_store_tests!(|records| InMemoryRecordStore::with_records(records));
//! ```
//!
//! # Generated Tests
//!
//! - `test_list_all_keeps_order` — records come back in insertion order
//! - `test_default_query` — first page of 10, input order
//! - `test_query_filter` — exact match plus the "all" sentinel
//! - `test_query_nested_filter` — dotted-path filter on a nested profile
//! - `test_query_search` — case-insensitive substring over listed fields
//! - `test_query_sort_desc` — descending priority with numeric coercion
//! - `test_query_pagination_clamps` — out-of-range page is clamped
//! - `test_query_malformed_filter` — invalid filter JSON constrains nothing
//! - `test_empty_store` — one empty page

/// Generate a full `RecordStore` conformance test suite.
///
/// `$factory` must be a closure taking `Vec<Record>` and returning a store
/// holding exactly those records. It is called once per test.
#[macro_export]
macro_rules! record_store_tests {
    ($factory:expr) => {
        mod record_store_contract_tests {
            use super::*;
            use civic::prelude::*;

            fn store(records: Vec<Record>) -> impl RecordStore {
                let factory = $factory;
                factory(records)
            }

            #[test]
            fn test_list_all_keeps_order() {
                let store = store(sample_issues());
                let ids: Vec<String> = store
                    .list_all()
                    .expect("list should succeed")
                    .iter()
                    .filter_map(Record::id)
                    .collect();
                assert_eq!(ids, vec!["issue1", "issue2", "issue3", "issue4", "issue5"]);
            }

            #[test]
            fn test_default_query() {
                let result = store(sample_issues())
                    .query(&ViewQuery::default())
                    .expect("query should succeed");
                assert_eq!(result.total_matched, 5);
                assert_eq!(result.total_pages, 1);
                assert_eq!(result.current_page, 1);
                assert_eq!(visible_ids(&result)[0], "issue1");
            }

            #[test]
            fn test_query_filter() {
                let query = ViewQuery {
                    filter: Some(r#"{"status": "resolved", "category": "all"}"#.to_string()),
                    ..Default::default()
                };
                let result = store(sample_issues()).query(&query).expect("query should succeed");
                assert_eq!(visible_ids(&result), vec!["issue2"]);
            }

            #[test]
            fn test_query_nested_filter() {
                let query = ViewQuery {
                    filter: Some(r#"{"officerProfile.status": "active"}"#.to_string()),
                    ..Default::default()
                };
                let result = store(sample_officers()).query(&query).expect("query should succeed");
                assert_eq!(visible_ids(&result), vec!["user2", "user3"]);
            }

            #[test]
            fn test_query_search() {
                let query = ViewQuery {
                    search: Some("MAIN ROAD".to_string()),
                    search_fields: Some("title, description".to_string()),
                    ..Default::default()
                };
                let result = store(sample_issues()).query(&query).expect("query should succeed");
                assert_eq!(visible_ids(&result), vec!["issue1", "issue4"]);
            }

            #[test]
            fn test_query_sort_desc() {
                let query = ViewQuery {
                    sort: Some("priority:desc".to_string()),
                    ..Default::default()
                };
                let result = store(sample_issues()).query(&query).expect("query should succeed");
                assert_eq!(
                    visible_ids(&result),
                    vec!["issue5", "issue3", "issue2", "issue4", "issue1"]
                );
            }

            #[test]
            fn test_query_pagination_clamps() {
                let query = ViewQuery {
                    page: 9,
                    limit: 2,
                    ..Default::default()
                };
                let result = store(sample_issues()).query(&query).expect("query should succeed");
                assert_eq!(result.total_pages, 3);
                assert_eq!(result.current_page, 3);
                assert_eq!(visible_ids(&result), vec!["issue5"]);
            }

            #[test]
            fn test_query_malformed_filter() {
                let query = ViewQuery {
                    filter: Some("{status: resolved".to_string()),
                    ..Default::default()
                };
                let result = store(sample_issues()).query(&query).expect("query should succeed");
                assert_eq!(result.total_matched, 5);
            }

            #[test]
            fn test_empty_store() {
                let result = store(Vec::new())
                    .query(&ViewQuery::default())
                    .expect("query should succeed");
                assert!(result.visible_records.is_empty());
                assert_eq!(result.total_pages, 1);
                assert_eq!(result.current_page, 1);
            }
        }
    };
}
