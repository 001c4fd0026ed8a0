//! Status and priority lookup tables
//!
//! Each table is the single source for a value's wire form, display label and
//! badge color.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::core::field::FieldValue;

/// Badge colors used by the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Gray,
    Blue,
    Red,
    Yellow,
    Orange,
    Green,
    Purple,
}

impl Color {
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Gray => "gray",
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Orange => "orange",
            Color::Green => "green",
            Color::Purple => "purple",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a citizen issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    Submitted,
    Verified,
    Rejected,
    Acknowledged,
    InProgress,
    Resolved,
    Closed,
}

impl IssueStatus {
    pub const ALL: [IssueStatus; 7] = [
        IssueStatus::Submitted,
        IssueStatus::Verified,
        IssueStatus::Rejected,
        IssueStatus::Acknowledged,
        IssueStatus::InProgress,
        IssueStatus::Resolved,
        IssueStatus::Closed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IssueStatus::Submitted => "submitted",
            IssueStatus::Verified => "verified",
            IssueStatus::Rejected => "rejected",
            IssueStatus::Acknowledged => "acknowledged",
            IssueStatus::InProgress => "in_progress",
            IssueStatus::Resolved => "resolved",
            IssueStatus::Closed => "closed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IssueStatus::Submitted => "Submitted",
            IssueStatus::Verified => "Verified",
            IssueStatus::Rejected => "Rejected",
            IssueStatus::Acknowledged => "Acknowledged",
            IssueStatus::InProgress => "In Progress",
            IssueStatus::Resolved => "Resolved",
            IssueStatus::Closed => "Closed",
        }
    }

    pub fn color(self) -> Color {
        match self {
            IssueStatus::Submitted => Color::Gray,
            IssueStatus::Verified => Color::Blue,
            IssueStatus::Rejected => Color::Red,
            IssueStatus::Acknowledged => Color::Yellow,
            IssueStatus::InProgress => Color::Orange,
            IssueStatus::Resolved => Color::Green,
            IssueStatus::Closed => Color::Purple,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    pub fn from_value(value: &Value) -> Option<Self> {
        value.as_str().and_then(Self::parse)
    }

    /// Resolved or closed
    pub fn is_done(self) -> bool {
        matches!(self, IssueStatus::Resolved | IssueStatus::Closed)
    }

    /// Still waiting for work: submitted, verified, acknowledged or in progress
    pub fn is_pending(self) -> bool {
        matches!(
            self,
            IssueStatus::Submitted
                | IssueStatus::Verified
                | IssueStatus::Acknowledged
                | IssueStatus::InProgress
        )
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label for a raw status value; unknown values are shown as-is
pub fn status_label(value: &str) -> String {
    IssueStatus::parse(value)
        .map(|s| s.label().to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Color for a raw status value; unknown values are gray
pub fn status_color(value: &str) -> Color {
    IssueStatus::parse(value)
        .map(IssueStatus::color)
        .unwrap_or(Color::Gray)
}

/// Issue priority, 1 (critical) to 5 (very low)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(pub i64);

impl Priority {
    pub const CRITICAL: Priority = Priority(1);
    pub const HIGH: Priority = Priority(2);
    pub const MEDIUM: Priority = Priority(3);
    pub const LOW: Priority = Priority(4);
    pub const VERY_LOW: Priority = Priority(5);

    /// Read a priority from a record value; numeric strings are accepted
    pub fn from_value(value: &Value) -> Option<Self> {
        let number = FieldValue::from_json(value).as_number()?;
        (number.fract() == 0.0).then_some(Priority(number as i64))
    }

    pub fn label(self) -> String {
        match self.0 {
            1 => "Critical".to_string(),
            2 => "High".to_string(),
            3 => "Medium".to_string(),
            4 => "Low".to_string(),
            5 => "Very Low".to_string(),
            n => format!("Priority {}", n),
        }
    }

    pub fn color(self) -> Color {
        match self.0 {
            1 => Color::Red,
            2 => Color::Orange,
            3 => Color::Yellow,
            4 => Color::Blue,
            _ => Color::Gray,
        }
    }

    pub fn is_critical(self) -> bool {
        self == Priority::CRITICAL
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfficerStatus {
    Active,
    Inactive,
    OnLeave,
}

impl OfficerStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OfficerStatus::Active => "active",
            OfficerStatus::Inactive => "inactive",
            OfficerStatus::OnLeave => "on_leave",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OfficerStatus::Active => "Active",
            OfficerStatus::Inactive => "Inactive",
            OfficerStatus::OnLeave => "On Leave",
        }
    }

    pub fn color(self) -> Color {
        match self {
            OfficerStatus::Active => Color::Green,
            OfficerStatus::Inactive => Color::Red,
            OfficerStatus::OnLeave => Color::Yellow,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(OfficerStatus::Active),
            "inactive" => Some(OfficerStatus::Inactive),
            "on_leave" => Some(OfficerStatus::OnLeave),
            _ => None,
        }
    }

    pub fn from_value(value: &Value) -> Option<Self> {
        value.as_str().and_then(Self::parse)
    }
}

/// Status of an inventory (expense) request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Requested,
    Approved,
    Rejected,
    Billed,
}

impl RequestStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Requested => "requested",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
            RequestStatus::Billed => "billed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RequestStatus::Requested => "Requested",
            RequestStatus::Approved => "Approved",
            RequestStatus::Rejected => "Rejected",
            RequestStatus::Billed => "Billed",
        }
    }

    pub fn color(self) -> Color {
        match self {
            RequestStatus::Requested => Color::Yellow,
            RequestStatus::Approved => Color::Green,
            RequestStatus::Rejected => Color::Red,
            RequestStatus::Billed => Color::Blue,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "requested" => Some(RequestStatus::Requested),
            "approved" => Some(RequestStatus::Approved),
            "rejected" => Some(RequestStatus::Rejected),
            "billed" => Some(RequestStatus::Billed),
            _ => None,
        }
    }

    pub fn from_value(value: &Value) -> Option<Self> {
        value.as_str().and_then(Self::parse)
    }
}
