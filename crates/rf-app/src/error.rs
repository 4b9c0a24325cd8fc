//! Error types for the rf-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates
/// and provides a unified error interface for front ends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Case error: {0}")]
    Case(String),

    #[error("Case validation failed: {0}")]
    CaseValidation(String),

    #[error(transparent)]
    InvalidParameters(#[from] rf_model::ValidationError),

    #[error("Model error: {0}")]
    Model(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Run not found: {0}")]
    RunNotFound(String),

    #[error("Failed to write output: {path}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for rf-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<rf_case::CaseError> for AppError {
    fn from(err: rf_case::CaseError) -> Self {
        match err {
            rf_case::CaseError::Validation(inner) => AppError::CaseValidation(inner.to_string()),
            other => AppError::Case(other.to_string()),
        }
    }
}

impl From<rf_case::CaseValidationError> for AppError {
    fn from(err: rf_case::CaseValidationError) -> Self {
        AppError::CaseValidation(err.to_string())
    }
}

impl From<rf_model::ModelError> for AppError {
    fn from(err: rf_model::ModelError) -> Self {
        match err {
            rf_model::ModelError::Validation(inner) => AppError::InvalidParameters(inner),
            rf_model::ModelError::Core(inner) => AppError::Model(inner.to_string()),
        }
    }
}

impl From<rf_core::RfError> for AppError {
    fn from(err: rf_core::RfError) -> Self {
        AppError::Model(err.to_string())
    }
}

impl From<rf_results::ResultsError> for AppError {
    fn from(err: rf_results::ResultsError) -> Self {
        match err {
            rf_results::ResultsError::RunNotFound { run_id } => AppError::RunNotFound(run_id),
            other => AppError::Results(other.to_string()),
        }
    }
}
