//! Error types for stridelog.
//!
//! This module defines all error types used throughout the stridelog crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for stridelog operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Storage Errors ===
    /// Failed to open or create the database.
    #[error("failed to open database at {path}: {source}")]
    DatabaseOpen {
        /// Path to the database file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: rusqlite::Error,
    },

    /// A database query failed.
    #[error("database query failed: {0}")]
    DatabaseQuery(#[from] rusqlite::Error),

    /// Failed to run database migrations.
    #[error("database migration failed: {message}")]
    DatabaseMigration {
        /// Description of what went wrong.
        message: String,
    },

    /// The database belongs to a different application namespace.
    #[error("database namespace mismatch: expected {expected}, found {found}")]
    NamespaceMismatch {
        /// The namespace this build expects.
        expected: &'static str,
        /// The namespace stamped into the database.
        found: String,
    },

    /// No walk exists with the requested identifier.
    #[error("no walk found with id {id}")]
    WalkNotFound {
        /// The identifier that was looked up.
        id: i64,
    },

    // === Add-Flow Errors ===
    /// The add-walk form was submitted with one or more fields unset.
    #[error("Please populate all the fields")]
    FieldsMissing,

    /// A date string could not be normalized into a calendar date.
    #[error("unrecognized date: {input} (expected YYYY-MM-DD, 'today', or 'yesterday')")]
    InvalidDate {
        /// The input that failed to parse.
        input: String,
    },

    /// The walk duration was zero or negative.
    #[error("minutes taken must be greater than 0 (got {value})")]
    InvalidMinutes {
        /// The rejected value.
        value: f64,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Generic Errors ===
    /// An internal error occurred (bug).
    #[error("internal error: {0}")]
    Internal(String),
}

/// A specialized Result type for stridelog operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an invalid-date error.
    #[must_use]
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
        }
    }

    /// Create a new internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this error is a draft validation failure (as opposed to a
    /// storage or configuration failure).
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::FieldsMissing | Self::InvalidDate { .. } | Self::InvalidMinutes { .. }
        )
    }
}
