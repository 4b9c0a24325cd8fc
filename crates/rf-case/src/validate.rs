//! Case structure validation.
//!
//! Physical constraints on the parameters belong to `rf_model::validate`;
//! this only checks what the case file itself can get wrong.

use crate::schema::Case;
use rf_model::{MIN_SAMPLE_COUNT, ParameterSweep};
use std::collections::HashSet;

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CaseValidationError {
    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },
}

pub fn validate_case(case: &Case) -> Result<(), CaseValidationError> {
    if case.version == 0 || case.version > LATEST_VERSION {
        return Err(CaseValidationError::UnsupportedVersion {
            version: case.version,
        });
    }

    if case.sampling.sample_count < MIN_SAMPLE_COUNT {
        return Err(CaseValidationError::InvalidValue {
            field: "sampling.sample_count".to_string(),
            value: case.sampling.sample_count.to_string(),
            reason: "must be at least 2".to_string(),
        });
    }

    let mut sweep_ids = HashSet::new();
    for sweep in &case.sweeps {
        if !sweep_ids.insert(&sweep.id) {
            return Err(CaseValidationError::DuplicateId {
                id: sweep.id.clone(),
                context: "sweeps".to_string(),
            });
        }
        ParameterSweep::new(sweep.field, sweep.start, sweep.end, sweep.num_points).map_err(
            |err| CaseValidationError::InvalidValue {
                field: format!("sweeps.{}", sweep.id),
                value: format!("{}..{} ({} points)", sweep.start, sweep.end, sweep.num_points),
                reason: err.to_string(),
            },
        )?;
    }

    Ok(())
}
