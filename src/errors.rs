//! Unified application error type.
//! All modules (store, core, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid month: {0} (expected 1-12, a month name or YYYY-MM)")]
    InvalidMonth(String),

    #[error("Invalid project status: {0}")]
    InvalidStatus(String),

    #[error("Invalid expense category: {0}")]
    InvalidCategory(String),

    // ---------------------------
    // Validation / integrity errors
    // ---------------------------
    #[error("Invalid value for '{field}': {constraint}")]
    Validation {
        field: &'static str,
        constraint: String,
    },

    #[error("{entity} #{id} does not exist")]
    MissingReference { entity: &'static str, id: i64 },

    #[error("No {entity} matches '{key}'")]
    NotFound { entity: &'static str, key: String },

    #[error("'{name}' matches more than one {entity} (ids: {ids}); use the numeric id")]
    AmbiguousName {
        entity: &'static str,
        name: String,
        ids: String,
    },

    #[error("{entity} #{id} has {dependents}; delete those first")]
    HasDependents {
        entity: &'static str,
        id: i64,
        dependents: String,
    },

    #[error("Project #{0} is already finished")]
    ProjectFinished(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported for this data: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Shorthand for a field validation failure.
    pub fn invalid(field: &'static str, constraint: impl Into<String>) -> Self {
        AppError::Validation {
            field,
            constraint: constraint.into(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
