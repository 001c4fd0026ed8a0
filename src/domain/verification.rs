//! Automated verification scores of flagged issues

use serde::Serialize;

use crate::core::field::FieldValue;
use crate::core::record::Record;
use crate::domain::status::{Color, Priority};

/// Path of the verification score on an issue record
pub const CONFIDENCE_FIELD: &str = "verification.confidenceScore";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.7 {
            ConfidenceLevel::High
        } else if score >= 0.4 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConfidenceLevel::High => "High",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::Low => "Low",
        }
    }

    /// What the level means for the reviewing admin
    pub fn interpretation(self) -> &'static str {
        match self {
            ConfidenceLevel::High => "Likely Authentic",
            ConfidenceLevel::Medium => "Requires Review",
            ConfidenceLevel::Low => "Potentially Suspicious",
        }
    }

    pub fn color(self) -> Color {
        match self {
            ConfidenceLevel::High => Color::Green,
            ConfidenceLevel::Medium => Color::Yellow,
            ConfidenceLevel::Low => Color::Red,
        }
    }
}

/// Score shown as a whole percentage
pub fn confidence_percent(score: f64) -> i64 {
    (score * 100.0).round() as i64
}

/// Verification score of an issue, if it carries one
pub fn confidence_score(issue: &Record) -> Option<f64> {
    issue
        .get(CONFIDENCE_FIELD)
        .and_then(|v| FieldValue::from_json(v).as_number())
}

pub fn confidence_level(issue: &Record) -> Option<ConfidenceLevel> {
    confidence_score(issue).map(ConfidenceLevel::from_score)
}

/// Header counters of the flagged-issues review page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlaggedSummary {
    pub total: usize,
    /// Priority 1 or 2
    pub high_priority: usize,
    /// Score below 0.4
    pub low_confidence: usize,
}

impl FlaggedSummary {
    pub fn from_issues(issues: &[Record]) -> Self {
        let high_priority = issues
            .iter()
            .filter_map(|issue| issue.get("priority").and_then(Priority::from_value))
            .filter(|priority| *priority <= Priority::HIGH)
            .count();
        let low_confidence = issues
            .iter()
            .filter(|issue| confidence_level(issue) == Some(ConfidenceLevel::Low))
            .count();

        Self {
            total: issues.len(),
            high_priority,
            low_confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::record_with_id;
    use serde_json::json;

    #[test]
    fn test_confidence_bands() {
        assert_eq!(ConfidenceLevel::from_score(0.92), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_score(0.7), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_score(0.69), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_score(0.4), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_score(0.39), ConfidenceLevel::Low);
        assert_eq!(ConfidenceLevel::Low.interpretation(), "Potentially Suspicious");
        assert_eq!(ConfidenceLevel::Medium.color(), Color::Yellow);
    }

    #[test]
    fn test_confidence_percent_rounds() {
        assert_eq!(confidence_percent(0.926), 93);
        assert_eq!(confidence_percent(0.4), 40);
    }

    #[test]
    fn test_flagged_summary() {
        let issues = vec![
            record_with_id("i1", json!({"priority": 1, "verification": {"confidenceScore": 0.2}})),
            record_with_id("i2", json!({"priority": 3, "verification": {"confidenceScore": 0.5}})),
            record_with_id("i3", json!({"priority": "2"})),
        ];
        let summary = FlaggedSummary::from_issues(&issues);
        assert_eq!(
            summary,
            FlaggedSummary {
                total: 3,
                high_priority: 2,
                low_confidence: 1,
            }
        );
    }
}
