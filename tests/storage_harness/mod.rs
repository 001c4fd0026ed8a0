//! Shared test harness for storage backend testing
//!
//! Provides fixture collections shaped like backend payloads and the
//! contract suites every record store and session storage must pass.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

use civic::prelude::*;
use serde_json::json;

#[macro_use]
pub mod record_store_tests;
#[macro_use]
pub mod session_storage_tests;

/// Issues covering every status, numeric and string priorities, a nested
/// verification score and a missing `resolvedAt`
pub fn sample_issues() -> Vec<Record> {
    vec![
        record_with_id(
            "issue1",
            json!({
                "title": "Pothole on Main Road",
                "description": "Large pothole near the market area",
                "category": "Roads",
                "status": "in_progress",
                "priority": 1,
                "assignedOfficerId": "user2",
                "verification": {"confidenceScore": 0.92},
                "createdAt": "2023-06-15T10:30:00Z",
                "resolvedAt": null
            }),
        ),
        record_with_id(
            "issue2",
            json!({
                "title": "Overflowing Garbage Bin",
                "description": "Bin near community park overflowing",
                "category": "Sanitation",
                "status": "resolved",
                "priority": 2,
                "assignedOfficerId": "user3",
                "verification": {"confidenceScore": 0.45},
                "createdAt": "2023-06-10T08:15:00Z",
                "resolvedAt": "2023-06-12T16:30:00Z"
            }),
        ),
        record_with_id(
            "issue3",
            json!({
                "title": "Streetlight Not Working",
                "description": "Dark stretch near the school",
                "category": "Streetlight",
                "status": "submitted",
                "priority": "3",
                "verification": {"confidenceScore": 0.2},
                "createdAt": "2023-06-18T19:00:00Z"
            }),
        ),
        record_with_id(
            "issue4",
            json!({
                "title": "Water pipe leakage",
                "description": "Leak flooding the main road",
                "category": "Water Leakage",
                "status": "closed",
                "priority": 2,
                "assignedOfficerId": "user2",
                "createdAt": "2023-05-02T07:00:00Z",
                "resolvedAt": "2023-05-03T07:00:00Z"
            }),
        ),
        record_with_id(
            "issue5",
            json!({
                "title": "Broken bench in park",
                "category": "Parks",
                "status": "rejected",
                "priority": 5,
                "createdAt": "2023-06-01T12:00:00Z"
            }),
        ),
    ]
}

/// Officers with nested profiles; one user has no profile at all
pub fn sample_officers() -> Vec<Record> {
    vec![
        record_with_id("user1", json!({"fullName": "Admin User", "email": "admin@jharkhand.gov.in", "role": "admin"})),
        record_with_id(
            "user2",
            json!({
                "fullName": "Rajesh Kumar",
                "email": "rajesh@jharkhand.gov.in",
                "officerProfile": {"officerCode": "OFF-001", "department": "Public Works", "status": "active"}
            }),
        ),
        record_with_id(
            "user3",
            json!({
                "fullName": "Priya Sharma",
                "email": "priya@jharkhand.gov.in",
                "officerProfile": {"officerCode": "OFF-002", "department": "Sanitation", "status": "active"}
            }),
        ),
        record_with_id(
            "user4",
            json!({
                "fullName": "Amit Singh",
                "email": "amit@jharkhand.gov.in",
                "officerProfile": {"officerCode": "OFF-003", "department": "Electrical", "status": "on_leave"}
            }),
        ),
    ]
}

/// Ids of the visible page, in order
pub fn visible_ids(result: &ViewResult) -> Vec<String> {
    result.visible_records.iter().filter_map(Record::id).collect()
}
