//! # Civic View
//!
//! The list-view engine and console state behind a civic-issue administration
//! console: filter, search, sort and paginate in-memory collections of
//! issues, officers and inventory.
//!
//! ## Features
//!
//! - **Declarative views**: a view is a filter spec, a search spec, a sort spec and a page spec
//! - **One pipeline**: search, then filter, then stable sort, then paginate
//! - **Memoized view models**: UI events mutate a spec and the visible page is recomputed once
//! - **Configuration-Based**: Define the console's views via YAML configuration
//! - **Explicit state**: session and collections are plain values driven by reducers
//! - **Reports**: category counts, monthly resolution trend and CSV export
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use civic::prelude::*;
//!
//! let config = ConsoleConfig::default_config();
//! let mut issues = config.view_model("issues", records)?;
//!
//! issues.set_filter("status", "in_progress");
//! issues.set_search_term("pothole");
//! issues.set_sort("priority");
//!
//! for record in &issues.view().visible_records {
//!     println!("{:?}", record.get("title"));
//! }
//! ```

pub mod config;
pub mod core;
pub mod demo;
pub mod domain;
pub mod report;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === View engine ===
    pub use crate::core::{
        field::{FieldFormat, FieldValue},
        filter::{ALL, FilterSpec, FilterValue, build_filter_predicate},
        pipeline::{ViewSpec, compute_view},
        query::{PageSpec, ViewQuery, ViewResult},
        record::{ID_FIELD, Record, records_from_values},
        search::{SearchSpec, build_search_predicate},
        sort::{SortDirection, SortSpec, build_comparator},
        store::RecordStore,
        view_model::ViewModel,
    };

    // === State ===
    pub use crate::core::{
        session::{Session, SessionAction, SessionState, SessionStorage},
        state::{Collection, ConsoleAction, ConsoleState, record_with_id},
    };

    // === Errors ===
    pub use crate::core::error::{
        CivicError, ConfigError, ReportError, SessionError, ValidationError,
    };

    // === Domain ===
    pub use crate::domain::{
        ConfidenceLevel, DashboardStats, IssueStatus, OfficerForm, OfficerStatus, Priority,
        RequestStatus, StockStatus, enrich_inventory, enrich_officers, relative_time,
    };

    // === Storage ===
    pub use crate::storage::{FileSessionStorage, InMemoryRecordStore, InMemorySessionStorage};

    // === Config ===
    pub use crate::config::{ConsoleConfig, FilterField, PaginationConfig, ViewConfig};

    // === Demo ===
    pub use crate::demo::DemoDataGenerator;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
