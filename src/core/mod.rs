//! Core module containing the list-view engine and console state

pub mod error;
pub mod field;
pub mod filter;
pub mod pipeline;
pub mod query;
pub mod record;
pub mod search;
pub mod session;
pub mod sort;
pub mod state;
pub mod store;
pub mod view_model;

pub use error::{CivicError, ConfigError, ReportError, SessionError, ValidationError};
pub use field::{FieldFormat, FieldValue};
pub use filter::{ALL, FilterSpec, FilterValue, build_filter_predicate};
pub use pipeline::{ViewSpec, compute_view};
pub use query::{PageSpec, ViewQuery, ViewResult};
pub use record::Record;
pub use search::{SearchSpec, build_search_predicate};
pub use session::{Session, SessionAction, SessionState, SessionStorage};
pub use sort::{SortDirection, SortSpec, build_comparator};
pub use state::{Collection, ConsoleAction, ConsoleState};
pub use store::RecordStore;
pub use view_model::ViewModel;
