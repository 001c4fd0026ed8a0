//! Seeded demo data for offline use of the console
//!
//! Collections are shaped like the backend's payloads. The same seed always
//! yields the same records, so demos and tests are reproducible.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use serde_json::{Value, json};
use uuid::Uuid;

use crate::core::record::Record;
use crate::domain::officers::{DEPARTMENTS, ROLE_TITLES};
use crate::domain::status::{IssueStatus, OfficerStatus, RequestStatus};

const ISSUE_TITLES: [(&str, &str); 5] = [
    ("Roads", "Pothole on Main Road"),
    ("Sanitation", "Overflowing Garbage Bin"),
    ("Streetlight", "Streetlight Not Working"),
    ("Water Leakage", "Water Pipe Leakage"),
    ("Parks", "Broken Park Bench"),
];

const FIRST_NAMES: [&str; 8] = ["Rajesh", "Priya", "Amit", "Sunita", "Vikram", "Anjali", "Ravi", "Neha"];
const LAST_NAMES: [&str; 6] = ["Kumar", "Sharma", "Singh", "Mishra", "Verma", "Gupta"];

const ITEMS: [(&str, &str, &str); 6] = [
    ("LED Streetlight Bulb", "Electrical", "pieces"),
    ("Electrical Cable", "Electrical", "meters"),
    ("Asphalt Mix", "Construction", "kg"),
    ("Cement Bag", "Construction", "bags"),
    ("Garbage Bags", "Sanitation", "pieces"),
    ("Disinfectant", "Sanitation", "liters"),
];

const ISSUE_STATUSES: [IssueStatus; 7] = IssueStatus::ALL;
const OFFICER_STATUSES: [OfficerStatus; 3] = [OfficerStatus::Active, OfficerStatus::Inactive, OfficerStatus::OnLeave];
const REQUEST_STATUSES: [RequestStatus; 4] = [
    RequestStatus::Requested,
    RequestStatus::Approved,
    RequestStatus::Rejected,
    RequestStatus::Billed,
];

/// Generator of reproducible demo collections
pub struct DemoDataGenerator {
    rng: StdRng,
    epoch: DateTime<Utc>,
}

impl DemoDataGenerator {
    /// Create a generator; equal seeds produce equal data
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            epoch: Utc
                .with_ymd_and_hms(2023, 6, 30, 12, 0, 0)
                .single()
                .unwrap_or_default(),
        }
    }

    /// Latest timestamp any generated record carries
    pub fn epoch(&self) -> DateTime<Utc> {
        self.epoch
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.rng.gen_range(0..items.len())]
    }

    fn id(&mut self) -> String {
        self.uuid().to_string()
    }

    fn timestamp_before(&mut self, max_hours_back: i64) -> DateTime<Utc> {
        self.epoch - Duration::hours(self.rng.gen_range(1..=max_hours_back))
    }

    /// Officers across the known departments, each with a unique officer code
    pub fn officers(&mut self, count: usize) -> Vec<Record> {
        (0..count)
            .map(|n| {
                let first = *self.pick(&FIRST_NAMES);
                let last = *self.pick(&LAST_NAMES);
                let department = *self.pick(&DEPARTMENTS);
                let role_title = *self.pick(&ROLE_TITLES);
                // mostly active
                let status = if self.rng.gen_bool(0.7) {
                    OfficerStatus::Active
                } else {
                    *self.pick(&OFFICER_STATUSES)
                };
                let phone = format!("+91{}{:09}", self.rng.gen_range(6..=9), self.rng.gen_range(0..1_000_000_000u64));
                let created_at = self.timestamp_before(24 * 365);

                record(json!({
                    "_id": self.id(),
                    "fullName": format!("{} {}", first, last),
                    "email": format!("{}.{}{}@jharkhand.gov.in", first.to_lowercase(), last.to_lowercase(), n + 1),
                    "phone": phone,
                    "role": "officer",
                    "officerProfile": {
                        "officerCode": format!("OFF-{:03}", n + 1),
                        "department": department,
                        "roleTitle": role_title,
                        "wardId": format!("ward{}", self.rng.gen_range(1..=10)),
                        "status": status,
                    },
                    "preferredLanguage": if self.rng.gen_bool(0.5) { "hi" } else { "en" },
                    "createdAt": created_at.to_rfc3339(),
                }))
            })
            .collect()
    }

    /// Issues, some assigned to the given officers
    ///
    /// Resolved and closed issues carry a `resolvedAt` after their `createdAt`.
    pub fn issues(&mut self, count: usize, officers: &[Record]) -> Vec<Record> {
        let officer_ids: Vec<String> = officers.iter().filter_map(Record::id).collect();

        (0..count)
            .map(|_| {
                let (category, title) = *self.pick(&ISSUE_TITLES);
                let status = *self.pick(&ISSUE_STATUSES);
                let created_at = self.timestamp_before(24 * 120);
                let resolved_at = if status.is_done() {
                    let hours = self.rng.gen_range(2..=240);
                    Value::String((created_at + Duration::hours(hours)).to_rfc3339())
                } else {
                    Value::Null
                };
                let assigned = if !officer_ids.is_empty() && status != IssueStatus::Submitted {
                    Value::String(self.pick(&officer_ids).clone())
                } else {
                    Value::Null
                };
                let score = (self.rng.gen_range(0..=100u32) as f64) / 100.0;

                record(json!({
                    "_id": self.id(),
                    "title": title,
                    "description": format!("{} reported by residents of the area.", title),
                    "category": category,
                    "status": status,
                    "priority": self.rng.gen_range(1..=5),
                    "wardId": format!("ward{}", self.rng.gen_range(1..=10)),
                    "assignedOfficerId": assigned,
                    "verification": {
                        "status": if score < 0.4 { "flagged" } else { "success" },
                        "confidenceScore": score,
                        "isDuplicate": false,
                    },
                    "upvotes": self.rng.gen_range(0..50),
                    "createdAt": created_at.to_rfc3339(),
                    "resolvedAt": resolved_at,
                }))
            })
            .collect()
    }

    /// Inventory items; roughly one in five is low on or out of stock
    pub fn inventory(&mut self, count: usize) -> Vec<Record> {
        (0..count)
            .map(|n| {
                let (name, category, unit) = *self.pick(&ITEMS);
                let available = if self.rng.gen_bool(0.2) {
                    self.rng.gen_range(0..=10)
                } else {
                    self.rng.gen_range(11..=500)
                };

                record(json!({
                    "_id": self.id(),
                    "name": if n < ITEMS.len() { name.to_string() } else { format!("{} #{}", name, n + 1) },
                    "description": format!("{} for municipal works", name),
                    "category": category,
                    "availableCount": available,
                    "unit": unit,
                    "unitCost": self.rng.gen_range(10..=500),
                }))
            })
            .collect()
    }

    /// Inventory requests raised by officers against issues
    pub fn inventory_requests(&mut self, count: usize, issues: &[Record], officers: &[Record]) -> Vec<Record> {
        let issue_ids: Vec<String> = issues.iter().filter_map(Record::id).collect();
        let officer_ids: Vec<String> = officers.iter().filter_map(Record::id).collect();
        if issue_ids.is_empty() || officer_ids.is_empty() {
            return Vec::new();
        }

        (0..count)
            .map(|_| {
                let (name, _, _) = *self.pick(&ITEMS);
                let quantity = self.rng.gen_range(1..=100);
                let unit_cost = self.rng.gen_range(10..=500);

                record(json!({
                    "_id": self.id(),
                    "issueId": self.pick(&issue_ids).clone(),
                    "officerId": self.pick(&officer_ids).clone(),
                    "items": [{
                        "name": name,
                        "quantity": quantity,
                        "unitCost": unit_cost,
                        "totalCost": quantity * unit_cost,
                    }],
                    "status": *self.pick(&REQUEST_STATUSES),
                    "requestedAt": self.timestamp_before(24 * 60).to_rfc3339(),
                }))
            })
            .collect()
    }

    /// Uuid drawn from the seeded generator
    pub fn uuid(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        uuid::Builder::from_random_bytes(bytes).into_uuid()
    }
}

fn record(value: Value) -> Record {
    Record::from_value(value).unwrap_or_default()
}
