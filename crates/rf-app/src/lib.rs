//! Shared application service layer for radialflow.
//!
//! Front ends (the CLI today) go through here for case handling, profile
//! runs, sweeps and stored results.

pub mod case_service;
pub mod error;
pub mod report;
pub mod run_service;

// Re-export key types for convenience
pub use case_service::{load_case, parameters_for, save_case, validate_case};
pub use error::{AppError, AppResult};
pub use report::{format_summary, format_sweep_table};
pub use run_service::{
    RunRequest, RunResponse, SweepOutcome, list_runs, load_run, run_case, run_sweeps,
};
