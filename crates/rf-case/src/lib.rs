//! rf-case: YAML case files for radial flow runs.

pub mod schema;
pub mod validate;

use std::path::{Path, PathBuf};

pub use schema::{Case, SamplingDef, SweepDef};
pub use validate::{CaseValidationError, LATEST_VERSION, validate_case};

pub type CaseResult<T> = Result<T, CaseError>;

#[derive(thiserror::Error, Debug)]
pub enum CaseError {
    #[error("Failed to read case file: {path}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write case file: {path}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Case validation failed: {0}")]
    Validation(#[from] CaseValidationError),
}

/// Parse a case from YAML text without validating it.
pub fn parse_case(text: &str) -> CaseResult<Case> {
    Ok(serde_yaml::from_str(text)?)
}

pub fn to_yaml(case: &Case) -> CaseResult<String> {
    Ok(serde_yaml::to_string(case)?)
}

/// Load a case file from disk.
pub fn load_case(path: &Path) -> CaseResult<Case> {
    let content = std::fs::read_to_string(path).map_err(|source| CaseError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_case(&content)
}

/// Save a case file to disk.
pub fn save_case(path: &Path, case: &Case) -> CaseResult<()> {
    let content = to_yaml(case)?;
    std::fs::write(path, content).map_err(|source| CaseError::Write {
        path: path.to_path_buf(),
        source,
    })
}
