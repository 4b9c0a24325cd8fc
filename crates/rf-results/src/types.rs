//! Result data types.

use rf_model::{BoundarySummary, RawParameters};
use serde::{Deserialize, Serialize};

pub type RunId = String;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunManifest {
    pub run_id: RunId,
    pub case_name: String,
    /// RFC 3339, UTC
    pub timestamp: String,
    pub model_version: String,
    pub sample_count: usize,
    pub parameters: RawParameters,
    pub summary: BoundarySummary,
}

/// One row of an exported profile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ProfileRow {
    pub radius_ft: f64,
    pub pressure_psi: f64,
    pub velocity_ft_per_day: f64,
}
