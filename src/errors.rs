//! Unified error type for the record store, seed loader and HTTP layer.
//!
//! Store errors are classified on conversion: unique and foreign-key violations
//! become [`Error::ConstraintViolation`], everything else stays a
//! [`Error::Database`].

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// All errors produced by the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A field failed its validator before reaching the store
    #[error("{field} {reason}")]
    Validation {
        /// Name of the offending field
        field: &'static str,
        /// Human-readable reason
        reason: String,
    },

    /// The store rejected a row because of a unique or foreign-key constraint
    #[error("{message}")]
    ConstraintViolation {
        /// Message reported by the store
        message: String,
    },

    /// A seed file is not the expected JSON shape
    #[error("{path}: {message}")]
    Parse {
        /// Seed file that failed to parse
        path: String,
        /// Description of the problem
        message: String,
    },

    /// A seed entry lacks a required key
    #[error("entry {index} is missing required field `{field}`")]
    MissingField {
        /// Zero-based position of the entry in the seed file
        index: usize,
        /// The missing key
        field: &'static str,
    },

    /// A referenced file does not exist
    #[error("file not found: {path}")]
    NotFound {
        /// The path that was looked up
        path: String,
    },

    /// Settings could not be loaded
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the problem
        message: String,
    },

    /// Any other store failure
    #[error("Database error: {0}")]
    Database(DbErr),

    /// Any other I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Stable name of the error kind, rendered in HTTP responses.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "ValidationError",
            Self::ConstraintViolation { .. } => "ConstraintViolation",
            Self::Parse { .. } => "ParseError",
            Self::MissingField { .. } => "MissingFieldError",
            Self::NotFound { .. } => "NotFoundError",
            Self::Config { .. } => "ConfigError",
            Self::Database(_) => "DatabaseError",
            Self::Io(_) => "IoError",
        }
    }
}

impl From<DbErr> for Error {
    fn from(value: DbErr) -> Self {
        match value.sql_err() {
            Some(
                SqlErr::UniqueConstraintViolation(message)
                | SqlErr::ForeignKeyConstraintViolation(message),
            ) => Self::ConstraintViolation { message },
            _ => Self::Database(value),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
