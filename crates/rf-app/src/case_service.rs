//! Case loading, saving and validation.

use std::path::Path;

use rf_case::Case;
use rf_model::ReservoirParameters;

use crate::error::AppResult;

/// Load a case from a YAML file.
pub fn load_case(path: &Path) -> AppResult<Case> {
    Ok(rf_case::load_case(path)?)
}

/// Save a case to a YAML file.
pub fn save_case(path: &Path, case: &Case) -> AppResult<()> {
    Ok(rf_case::save_case(path, case)?)
}

/// Validate case structure and the physical parameters it carries.
pub fn validate_case(case: &Case) -> AppResult<()> {
    rf_case::validate_case(case)?;
    rf_model::validate(&case.parameters)?;
    Ok(())
}

/// Validated parameters of a case.
pub fn parameters_for(case: &Case) -> AppResult<ReservoirParameters> {
    Ok(rf_model::validate(&case.parameters)?)
}
