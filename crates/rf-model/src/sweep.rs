//! One-parameter sweeps over boundary summaries.
//!
//! Every point is an independent profile computation, so points are
//! evaluated in parallel and returned in sweep order.

use crate::grid::{MIN_SAMPLE_COUNT, linspace};
use crate::error::ModelError;
use crate::params::{ParameterField, RawParameters, validate};
use crate::profile::{BoundarySummary, compute_profile, summarize};
use rf_core::{Real, RfError, RfResult, Tolerances, ensure_finite, nearly_equal};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Linear sweep of a single field from `start` to `end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSweep {
    pub field: ParameterField,
    pub start: Real,
    pub end: Real,
    pub num_points: usize,
}

impl ParameterSweep {
    pub fn new(field: ParameterField, start: Real, end: Real, num_points: usize) -> RfResult<Self> {
        if num_points < MIN_SAMPLE_COUNT {
            return Err(RfError::InvalidArg {
                what: "sweep must have at least 2 points",
            });
        }
        ensure_finite(start, "sweep start")?;
        ensure_finite(end, "sweep end")?;
        if nearly_equal(start, end, Tolerances::default()) {
            return Err(RfError::InvalidArg {
                what: "sweep start and end must differ",
            });
        }
        Ok(Self {
            field,
            start,
            end,
            num_points,
        })
    }

    pub fn values(&self) -> RfResult<Vec<Real>> {
        linspace(self.start, self.end, self.num_points)
    }
}

impl fmt::Display for ParameterSweep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep {} from {} to {} {} ({} points)",
            self.field,
            self.start,
            self.end,
            self.field.unit(),
            self.num_points
        )
    }
}

/// Outcome at one swept value. Invalid points don't abort the sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint {
    pub value: Real,
    pub outcome: Result<BoundarySummary, ModelError>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    pub sweep: ParameterSweep,
    pub points: Vec<SweepPoint>,
}

impl SweepResult {
    pub fn num_successful(&self) -> usize {
        self.points.iter().filter(|p| p.outcome.is_ok()).count()
    }

    pub fn num_failed(&self) -> usize {
        self.points.len() - self.num_successful()
    }

    /// `(value, summary)` for the valid points only.
    pub fn successful(&self) -> impl Iterator<Item = (Real, &BoundarySummary)> {
        self.points
            .iter()
            .filter_map(|p| p.outcome.as_ref().ok().map(|s| (p.value, s)))
    }
}

/// Substitute each swept value into `base` and summarize its profile.
pub fn run_sweep(
    base: &RawParameters,
    sweep: &ParameterSweep,
    sample_count: usize,
) -> RfResult<SweepResult> {
    if sample_count < MIN_SAMPLE_COUNT {
        return Err(RfError::InvalidArg {
            what: "grid must have at least 2 points",
        });
    }
    let values = sweep.values()?;

    let points = values
        .par_iter()
        .map(|&value| {
            let outcome = validate(&base.with(sweep.field, value))
                .map_err(ModelError::from)
                .and_then(|params| compute_profile(&params, sample_count).map_err(ModelError::from))
                .map(|profile| summarize(&profile));
            SweepPoint { value, outcome }
        })
        .collect::<Vec<_>>();

    let result = SweepResult {
        sweep: sweep.clone(),
        points,
    };
    debug!(
        field = sweep.field.key(),
        successful = result.num_successful(),
        failed = result.num_failed(),
        "parameter sweep finished"
    );
    Ok(result)
}
