//! Field officers: workload statistics and the add-officer form

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::core::error::ValidationError;
use crate::core::field::FieldFormat;
use crate::core::record::Record;
use crate::domain::status::{IssueStatus, OfficerStatus};

pub const DEPARTMENTS: [&str; 4] = ["Public Works", "Sanitation", "Horticulture", "Electrical"];

pub const ROLE_TITLES: [&str; 5] = ["JE", "SI", "AE", "CSI", "EE"];

/// Issue field naming the officer an issue is assigned to
pub const ASSIGNED_OFFICER_FIELD: &str = "assignedOfficerId";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficerStats {
    pub assigned: usize,
    /// Assigned issues that are resolved or closed
    pub resolved: usize,
    /// Resolved share of assigned issues, in whole percent
    pub efficiency: u32,
}

/// Workload of one officer across `issues`
pub fn officer_stats(officer_id: &str, issues: &[Record]) -> OfficerStats {
    let assigned: Vec<&Record> = issues
        .iter()
        .filter(|issue| {
            issue
                .get(ASSIGNED_OFFICER_FIELD)
                .and_then(Value::as_str)
                .is_some_and(|id| id == officer_id)
        })
        .collect();

    let resolved = assigned
        .iter()
        .filter(|issue| {
            issue
                .get("status")
                .and_then(IssueStatus::from_value)
                .is_some_and(IssueStatus::is_done)
        })
        .count();

    OfficerStats {
        assigned: assigned.len(),
        resolved,
        efficiency: efficiency(assigned.len(), resolved),
    }
}

/// `round(resolved / assigned * 100)`, zero when nothing is assigned
pub fn efficiency(assigned: usize, resolved: usize) -> u32 {
    if assigned == 0 {
        return 0;
    }
    ((resolved as f64 / assigned as f64) * 100.0).round() as u32
}

/// Add `assigned`, `resolved` and `efficiency` so the officers view can sort
/// on them
pub fn enrich_officer(mut officer: Record, issues: &[Record]) -> Record {
    let stats = match officer.id() {
        Some(id) => officer_stats(&id, issues),
        None => OfficerStats::default(),
    };
    officer.insert("assigned", json!(stats.assigned));
    officer.insert("resolved", json!(stats.resolved));
    officer.insert("efficiency", json!(stats.efficiency));
    officer
}

pub fn enrich_officers(officers: Vec<Record>, issues: &[Record]) -> Vec<Record> {
    officers
        .into_iter()
        .map(|officer| enrich_officer(officer, issues))
        .collect()
}

/// Up to two initials for an avatar
pub fn initials(full_name: &str) -> String {
    full_name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// Input of the add-officer form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficerForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub officer_code: String,
    pub department: String,
    pub role_title: String,
    #[serde(default = "default_status")]
    pub status: OfficerStatus,
}

fn default_status() -> OfficerStatus {
    OfficerStatus::Active
}

impl OfficerForm {
    /// Check every field, reporting all problems at once
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        let required = [
            ("fullName", &self.full_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("officerCode", &self.officer_code),
            ("department", &self.department),
            ("roleTitle", &self.role_title),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                errors.push(
                    ValidationError::Required {
                        field: field.to_string(),
                    }
                    .to_string(),
                );
            }
        }

        if !self.email.is_empty() && !FieldFormat::Email.validate(&json!(self.email)) {
            errors.push(invalid("email", "email address"));
        }
        if !self.phone.is_empty() && !FieldFormat::Phone.validate(&json!(self.phone)) {
            errors.push(invalid("phone", "mobile number"));
        }
        if !self.department.is_empty() && !DEPARTMENTS.contains(&self.department.as_str()) {
            errors.push(invalid("department", "department"));
        }
        if !self.role_title.is_empty() && !ROLE_TITLES.contains(&self.role_title.as_str()) {
            errors.push(invalid("roleTitle", "role title"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::FieldErrors(errors))
        }
    }

    /// Officer record in the backend's user shape
    pub fn into_record(self) -> Record {
        let value = json!({
            "fullName": self.full_name,
            "email": self.email,
            "phone": self.phone,
            "role": "officer",
            "officerProfile": {
                "officerCode": self.officer_code,
                "department": self.department,
                "roleTitle": self.role_title,
                "status": self.status,
            },
        });
        Record::from_value(value).unwrap_or_default()
    }
}

fn invalid(field: &str, expected: &str) -> String {
    ValidationError::InvalidFormat {
        field: field.to_string(),
        expected: expected.to_string(),
    }
    .to_string()
}
