//! Error types for model operations.

use crate::params::ValidationError;
use rf_core::RfError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Core(#[from] RfError),
}

pub type ModelResult<T> = Result<T, ModelError>;
