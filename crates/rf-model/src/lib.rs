//! rf-model: steady-state Darcy radial flow around a single well.
//!
//! Provides:
//! - parameter validation (`validate` → `ReservoirParameters`)
//! - the linear radius grid
//! - closed-form pressure and velocity equations
//! - sampled profiles and their boundary summary
//! - advisory input ranges and parallel one-parameter sweeps
//!
//! Everything here is a pure function of its inputs.
//!
//! # Example
//!
//! ```
//! use rf_model::{RawParameters, compute_profile, summarize, validate};
//!
//! let params = validate(&RawParameters::default()).unwrap();
//! let profile = compute_profile(&params, 300).unwrap();
//! let summary = summarize(&profile);
//! assert_eq!(summary.pressure_at_drainage, 3000.0);
//! ```

pub mod darcy;
pub mod error;
pub mod grid;
pub mod params;
pub mod profile;
pub mod ranges;
pub mod sweep;

// Re-exports
pub use darcy::{drawdown_at, pressure_at, pressure_gradient_coefficient, velocity_at};
pub use error::{ModelError, ModelResult};
pub use grid::{DEFAULT_SAMPLE_COUNT, MIN_SAMPLE_COUNT, build_radii, linspace, spacing};
pub use params::{
    IssueReason, ParameterField, ParameterIssue, RawParameters, ReservoirParameters,
    ValidationError, validate,
};
pub use profile::{
    BoundarySummary, ProfileSample, RadialProfile, compute_default_profile, compute_profile,
    summarize,
};
pub use ranges::{InputRange, input_range, out_of_range_fields, warn_out_of_range};
pub use sweep::{ParameterSweep, SweepPoint, SweepResult, run_sweep};

/// Version stamped into run manifests and hashed into run ids.
pub const MODEL_VERSION: &str = env!("CARGO_PKG_VERSION");
