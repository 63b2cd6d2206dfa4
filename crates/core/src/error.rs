//! Unified error types for the attribution job.
//!
//! Error codes:
//! - INPUT_001: Input dataset has no rows
//! - SCHEMA_001: Required input column is missing
//! - CONFIG_001: Invalid configuration
//! - STORE_001-002: Object store errors
//! - INTERNAL_001: Internal errors

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the attribution job.
///
/// Parsing anomalies inside a row (bad URL, short product entry, non-numeric
/// revenue) never surface here; they degrade to null values. Only structural
/// problems that make the whole run meaningless are errors.
#[derive(Debug, Error)]
pub enum Error {
    #[error("[INPUT_001] input dataset is empty: {0}")]
    EmptyInput(String),

    #[error("[SCHEMA_001] required column `{column}` is missing from the input")]
    SchemaMismatch { column: String },

    #[error("[CONFIG_001] invalid configuration: {0}")]
    Config(String),

    #[error("[STORE_001] object store error: {0}")]
    Storage(String),

    #[error("[STORE_002] io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("[INTERNAL_001] internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn empty_input(source: impl Into<String>) -> Self {
        Self::EmptyInput(source.into())
    }

    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            column: column.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the stable error code.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyInput(_) => "INPUT_001",
            Self::SchemaMismatch { .. } => "SCHEMA_001",
            Self::Config(_) => "CONFIG_001",
            Self::Storage(_) => "STORE_001",
            Self::Io(_) => "STORE_002",
            Self::Internal(_) => "INTERNAL_001",
        }
    }
}
