//! Typed error handling for the console library
//!
//! List views never fail (malformed specs degrade to "no constraint"), so
//! errors only come from the edges: configuration loading, session storage
//! and report export.
//!
//! # Error Categories
//!
//! - [`ConfigError`]: Errors related to configuration parsing and lookup
//! - [`SessionError`]: Errors related to persisted session storage
//! - [`ReportError`]: Errors related to report export
//! - [`ValidationError`]: Errors related to form input validation
//!
//! # Example
//!
//! ```rust,ignore
//! match ConsoleConfig::from_yaml_file("console.yaml") {
//!     Ok(config) => run(config),
//!     Err(CivicError::Config(ConfigError::Io { path, .. })) => {
//!         eprintln!("cannot read {}", path);
//!     }
//!     Err(e) => eprintln!("{} ({})", e, e.error_code()),
//! }
//! ```

use serde::Serialize;
use thiserror::Error;

/// The main error type for the console library
#[derive(Debug, Error)]
pub enum CivicError {
    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Session storage errors
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Report export errors
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Form input errors
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Error payload shown to the operator
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl CivicError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            CivicError::Config(e) => e.error_code(),
            CivicError::Session(e) => e.error_code(),
            CivicError::Report(e) => e.error_code(),
            CivicError::Validation(e) => e.error_code(),
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The YAML could not be parsed
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// No view with that name is configured
    #[error("Unknown view: {name}")]
    UnknownView { name: String },

    /// A view definition is inconsistent
    #[error("Invalid view '{view}': {message}")]
    InvalidView { view: String, message: String },
}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Io { .. } => "CONFIG_IO_ERROR",
            ConfigError::Parse(_) => "CONFIG_PARSE_ERROR",
            ConfigError::UnknownView { .. } => "UNKNOWN_VIEW",
            ConfigError::InvalidView { .. } => "INVALID_VIEW",
        }
    }
}

// =============================================================================
// Session Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum SessionError {
    /// The storage backend failed
    #[error("Session storage failure: {message}")]
    Storage { message: String },

    #[error("Session storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session data is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SessionError {
    pub fn error_code(&self) -> &'static str {
        match self {
            SessionError::Storage { .. } => "SESSION_STORAGE_ERROR",
            SessionError::Io(_) => "SESSION_IO_ERROR",
            SessionError::Serialization(_) => "SESSION_SERIALIZATION_ERROR",
        }
    }
}

// =============================================================================
// Report Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

impl ReportError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ReportError::Csv(_) => "REPORT_CSV_ERROR",
            ReportError::Io(_) => "REPORT_IO_ERROR",
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Field '{field}' is required")]
    Required { field: String },

    #[error("Field '{field}' is not a valid {expected}")]
    InvalidFormat { field: String, expected: String },

    /// Several field errors collected from one form
    #[error("Validation failed: {}", .0.join(", "))]
    FieldErrors(Vec<String>),
}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::Required { .. } => "FIELD_REQUIRED",
            ValidationError::InvalidFormat { .. } => "INVALID_FORMAT",
            ValidationError::FieldErrors(_) => "VALIDATION_FAILED",
        }
    }
}
