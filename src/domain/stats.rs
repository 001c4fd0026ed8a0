//! Dashboard counters and time display helpers

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::record::Record;
use crate::domain::status::{IssueStatus, OfficerStatus, Priority, RequestStatus};

/// Counters shown on the dashboard stat cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_issues: usize,
    pub resolved_issues: usize,
    pub pending_issues: usize,
    pub critical_issues: usize,
    pub active_officers: usize,
    pub pending_requests: usize,
}

impl DashboardStats {
    pub fn from_collections(issues: &[Record], officers: &[Record], requests: &[Record]) -> Self {
        let statuses: Vec<IssueStatus> = issues
            .iter()
            .filter_map(|issue| issue.get("status").and_then(IssueStatus::from_value))
            .collect();

        Self {
            total_issues: issues.len(),
            resolved_issues: statuses.iter().filter(|s| s.is_done()).count(),
            pending_issues: statuses.iter().filter(|s| s.is_pending()).count(),
            critical_issues: issues
                .iter()
                .filter(|issue| {
                    issue
                        .get("priority")
                        .and_then(Priority::from_value)
                        .is_some_and(Priority::is_critical)
                })
                .count(),
            active_officers: officers
                .iter()
                .filter(|officer| {
                    officer.get("officerProfile.status").and_then(OfficerStatus::from_value)
                        == Some(OfficerStatus::Active)
                })
                .count(),
            pending_requests: requests
                .iter()
                .filter(|request| {
                    request.get("status").and_then(RequestStatus::from_value)
                        == Some(RequestStatus::Requested)
                })
                .count(),
        }
    }

    /// Resolved share of all issues, in whole percent
    pub fn resolution_rate(&self) -> u32 {
        if self.total_issues == 0 {
            return 0;
        }
        ((self.resolved_issues as f64 / self.total_issues as f64) * 100.0).round() as u32
    }
}

/// Whole calendar months from `then` to `now`
fn months_between(then: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let mut months = (now.year() as i64 * 12 + now.month() as i64)
        - (then.year() as i64 * 12 + then.month() as i64);
    let now_in_month = (now.day(), now.num_seconds_from_midnight());
    let then_in_month = (then.day(), then.num_seconds_from_midnight());
    if months > 0 && now_in_month < then_in_month {
        months -= 1;
    }
    months
}

/// Elapsed time in words, e.g. "2 hours ago"
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);

    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{} minutes ago", minutes);
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("{} hours ago", hours);
    }

    let days = elapsed.num_days();
    if days < 30 {
        return format!("{} days ago", days);
    }

    let months = months_between(then, now);
    if months < 12 {
        return format!("{} months ago", months);
    }

    format!("{} years ago", months / 12)
}

/// [`relative_time`] for a record timestamp; `None` if it does not parse
pub fn relative_time_of(value: &Value, now: DateTime<Utc>) -> Option<String> {
    value
        .as_str()
        .and_then(crate::core::field::parse_timestamp)
        .map(|then| relative_time(then, now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::record_with_id;
    use chrono::{Duration, TimeZone};
    use serde_json::json;

    #[test]
    fn test_dashboard_stats() {
        let issues = vec![
            record_with_id("i1", json!({"status": "in_progress", "priority": 1})),
            record_with_id("i2", json!({"status": "resolved", "priority": 2})),
            record_with_id("i3", json!({"status": "closed", "priority": 1})),
            record_with_id("i4", json!({"status": "rejected", "priority": 3})),
            record_with_id("i5", json!({"status": "submitted"})),
        ];
        let officers = vec![
            record_with_id("u1", json!({"role": "admin"})),
            record_with_id("u2", json!({"officerProfile": {"status": "active"}})),
            record_with_id("u3", json!({"officerProfile": {"status": "on_leave"}})),
        ];
        let requests = vec![
            record_with_id("r1", json!({"status": "requested"})),
            record_with_id("r2", json!({"status": "approved"})),
        ];

        let stats = DashboardStats::from_collections(&issues, &officers, &requests);
        assert_eq!(
            stats,
            DashboardStats {
                total_issues: 5,
                resolved_issues: 2,
                pending_issues: 2,
                critical_issues: 2,
                active_officers: 1,
                pending_requests: 1,
            }
        );
        assert_eq!(stats.resolution_rate(), 40);
    }

    #[test]
    fn test_empty_dashboard() {
        let stats = DashboardStats::from_collections(&[], &[], &[]);
        assert_eq!(stats, DashboardStats::default());
        assert_eq!(stats.resolution_rate(), 0);
    }

    #[test]
    fn test_relative_time_units() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();

        assert_eq!(relative_time(now - Duration::seconds(30), now), "Just now");
        assert_eq!(relative_time(now - Duration::minutes(5), now), "5 minutes ago");
        assert_eq!(relative_time(now - Duration::hours(3), now), "3 hours ago");
        assert_eq!(relative_time(now - Duration::days(2), now), "2 days ago");
        assert_eq!(
            relative_time(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(), now),
            "3 months ago"
        );
        assert_eq!(
            relative_time(Utc.with_ymd_and_hms(2022, 5, 1, 0, 0, 0).unwrap(), now),
            "2 years ago"
        );
    }

    #[test]
    fn test_relative_time_of_record_value() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(
            relative_time_of(&json!("2024-06-15T10:00:00Z"), now).as_deref(),
            Some("2 hours ago")
        );
        assert_eq!(relative_time_of(&json!("yesterday"), now), None);
    }
}
