//! rf-results: run ids, manifests and on-disk profile exports.

pub mod export;
pub mod hash;
pub mod store;
pub mod types;

pub use export::{PROFILE_CSV_HEADER, parse_profile_csv, profile_to_csv};
pub use hash::compute_run_id;
pub use store::ProfileStore;
pub use types::*;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Run not found: {run_id}")]
    RunNotFound { run_id: String },

    #[error("Malformed profile CSV at line {line}: {message}")]
    MalformedCsv { line: usize, message: String },

    #[error("Invalid path: {message}")]
    InvalidPath { message: String },
}
