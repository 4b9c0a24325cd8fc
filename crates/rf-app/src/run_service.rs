//! Profile runs, sweeps, and access to stored runs.

use std::path::Path;

use rf_case::Case;
use rf_model::{
    MODEL_VERSION, ParameterField, ParameterSweep, RadialProfile, SweepResult, compute_profile,
    run_sweep, summarize, warn_out_of_range,
};
use rf_results::{ProfileRow, ProfileStore, RunManifest, compute_run_id};
use tracing::{debug, info};

use crate::case_service;
use crate::error::AppResult;

/// A single profile computation.
pub struct RunRequest<'a> {
    pub case: &'a Case,
    /// Persist manifest and profile here when set.
    pub store: Option<&'a ProfileStore>,
}

/// Outcome of [`run_case`].
#[derive(Debug, Clone)]
pub struct RunResponse {
    pub run_id: String,
    pub manifest: RunManifest,
    pub profile: RadialProfile,
    /// Inputs outside their typical range (advisory only).
    pub atypical_fields: Vec<ParameterField>,
    pub saved: bool,
}

/// Validate, compute and summarize one case. Always recomputes.
pub fn run_case(request: &RunRequest<'_>) -> AppResult<RunResponse> {
    let case = request.case;
    rf_case::validate_case(case)?;

    let atypical_fields = warn_out_of_range(&case.parameters);
    let params = case_service::parameters_for(case)?;
    let sample_count = case.sampling.sample_count;

    let profile = compute_profile(&params, sample_count)?;
    let summary = summarize(&profile);
    let run_id = compute_run_id(&params, sample_count, MODEL_VERSION)?;

    let manifest = RunManifest {
        run_id: run_id.clone(),
        case_name: case.name.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        model_version: MODEL_VERSION.to_string(),
        sample_count,
        parameters: params.to_raw(),
        summary,
    };

    let saved = match request.store {
        Some(store) => {
            store.save_run(&manifest, &profile)?;
            true
        }
        None => false,
    };

    info!(run_id = %run_id, case = %case.name, saved, "profile run complete");

    Ok(RunResponse {
        run_id,
        manifest,
        profile,
        atypical_fields,
        saved,
    })
}

/// Result of one named sweep from a case.
#[derive(Debug, Clone)]
pub struct SweepOutcome {
    pub id: String,
    pub result: SweepResult,
}

/// Run every sweep declared in the case, in declaration order.
pub fn run_sweeps(case: &Case) -> AppResult<Vec<SweepOutcome>> {
    rf_case::validate_case(case)?;

    let mut outcomes = Vec::with_capacity(case.sweeps.len());
    for def in &case.sweeps {
        let sweep = ParameterSweep::new(def.field, def.start, def.end, def.num_points)?;
        let result = run_sweep(&case.parameters, &sweep, case.sampling.sample_count)?;
        debug!(sweep = %def.id, points = result.points.len(), "sweep evaluated");
        outcomes.push(SweepOutcome {
            id: def.id.clone(),
            result,
        });
    }
    Ok(outcomes)
}

/// Stored runs for the case at `case_path`, oldest first.
pub fn list_runs(case_path: &Path) -> AppResult<Vec<RunManifest>> {
    let store = ProfileStore::for_case(case_path)?;
    Ok(store.list_runs()?)
}

/// Manifest and profile rows of a stored run.
pub fn load_run(case_path: &Path, run_id: &str) -> AppResult<(RunManifest, Vec<ProfileRow>)> {
    let store = ProfileStore::for_case(case_path)?;
    let manifest = store.load_manifest(run_id)?;
    let rows = store.load_profile(run_id)?;
    Ok((manifest, rows))
}
