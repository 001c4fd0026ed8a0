//! Civic console vocabulary: status tables, derived record fields and
//! dashboard statistics

pub mod inventory;
pub mod officers;
pub mod stats;
pub mod status;
pub mod verification;

pub use inventory::{StockStatus, enrich_inventory, enrich_inventory_item, stock_status};
pub use officers::{OfficerForm, OfficerStats, enrich_officer, enrich_officers, officer_stats};
pub use stats::{DashboardStats, relative_time};
pub use status::{Color, IssueStatus, OfficerStatus, Priority, RequestStatus, status_color, status_label};
pub use verification::{ConfidenceLevel, FlaggedSummary, confidence_level, confidence_score};

/// Categories citizens can report issues under
pub const ISSUE_CATEGORIES: [&str; 5] = ["Roads", "Sanitation", "Streetlight", "Water Leakage", "Parks"];

pub const INVENTORY_CATEGORIES: [&str; 3] = ["Electrical", "Construction", "Sanitation"];
