//! Analytics reports over the issue collection
//!
//! Chart series (category counts, monthly resolution trend) and the CSV
//! export offered on the analytics page.

use std::collections::BTreeMap;
use std::io;

use chrono::{Datelike, NaiveDate};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::core::error::ReportError;
use crate::core::field::{parse_timestamp, text_of};
use crate::core::record::{ID_FIELD, Record};
use crate::domain::status::IssueStatus;

/// Column headers of the issue export
pub const CSV_HEADERS: [&str; 10] = [
    "ID",
    "Title",
    "Status",
    "Priority",
    "Category",
    "Ward",
    "Assigned Officer",
    "Created At",
    "Resolved At",
    "Upvotes",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

/// Number of issues per category, in first-seen order
///
/// Issues without a category are not counted.
pub fn category_counts(issues: &[Record]) -> Vec<CategoryCount> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for category in issues.iter().filter_map(|issue| issue.get("category").and_then(text_of)) {
        *counts.entry(category).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(name, count)| CategoryCount { name, count })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    /// Month label, e.g. `Jun 2023`
    pub month: String,
    pub avg_hours: i64,
}

/// Average resolution time per calendar month of resolution
///
/// Only resolved issues carrying both `createdAt` and `resolvedAt` count.
/// Months are returned oldest first.
pub fn resolution_trend(issues: &[Record]) -> Vec<TrendPoint> {
    let mut months: BTreeMap<(i32, u32), (f64, usize)> = BTreeMap::new();

    for issue in issues {
        if issue.get("status").and_then(IssueStatus::from_value) != Some(IssueStatus::Resolved) {
            continue;
        }
        let timestamp = |field: &str| issue.get(field).and_then(Value::as_str).and_then(parse_timestamp);
        let (Some(created), Some(resolved)) = (timestamp("createdAt"), timestamp("resolvedAt")) else {
            continue;
        };

        let hours = resolved.signed_duration_since(created).num_seconds() as f64 / 3600.0;
        let entry = months
            .entry((resolved.year(), resolved.month()))
            .or_insert((0.0, 0));
        entry.0 += hours;
        entry.1 += 1;
    }

    tracing::trace!(months = months.len(), "computed resolution trend");

    months
        .into_iter()
        .filter_map(|((year, month), (total_hours, count))| {
            let label = NaiveDate::from_ymd_opt(year, month, 1)?
                .format("%b %Y")
                .to_string();
            Some(TrendPoint {
                month: label,
                avg_hours: (total_hours / count as f64).round() as i64,
            })
        })
        .collect()
}

fn cell(issue: &Record, fields: &[&str]) -> String {
    fields
        .iter()
        .find_map(|field| issue.get(field).and_then(text_of))
        .unwrap_or_default()
}

/// Write `issues` as CSV with a header row
///
/// A missing `resolvedAt` is written as `N/A`. Quoting of commas, quotes and
/// newlines is left to the `csv` writer.
pub fn export_issues_csv<W: io::Write>(issues: &[Record], writer: W) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADERS)?;

    for issue in issues {
        let resolved_at = match cell(issue, &["resolvedAt"]) {
            s if s.is_empty() => "N/A".to_string(),
            s => s,
        };
        csv_writer.write_record([
            cell(issue, &[ID_FIELD]),
            cell(issue, &["title"]),
            cell(issue, &["status"]),
            cell(issue, &["priority"]),
            cell(issue, &["category"]),
            cell(issue, &["ward", "wardId"]),
            cell(issue, &["assignedOfficer", "assignedOfficerId"]),
            cell(issue, &["createdAt"]),
            resolved_at,
            cell(issue, &["upvotes"]),
        ])?;
    }

    csv_writer.flush()?;
    tracing::debug!(rows = issues.len(), "exported issues to csv");
    Ok(())
}

/// [`export_issues_csv`] into a string
pub fn issues_csv_string(issues: &[Record]) -> Result<String, ReportError> {
    let mut buffer = Vec::new();
    export_issues_csv(issues, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| ReportError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Download name of an export made on `date`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("civic_issues_report_{}.csv", date.format("%Y-%m-%d"))
}
