//! Sampled pressure and velocity profiles and their boundary summary.

use crate::darcy::{pressure_at, velocity_at};
use crate::grid::{DEFAULT_SAMPLE_COUNT, build_radii};
use crate::params::ReservoirParameters;
use rf_core::{RfResult, Real};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Pressure and velocity sampled on a linear radius grid.
///
/// Only produced by [`compute_profile`], so it always holds at least two
/// samples and all three series have the same length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadialProfile {
    radii: Vec<Real>,
    pressure: Vec<Real>,
    velocity: Vec<Real>,
}

/// One row of a profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileSample {
    pub radius: Real,
    pub pressure: Real,
    pub velocity: Real,
}

impl RadialProfile {
    /// Radii in ft, from wellbore to drainage boundary.
    pub fn radii(&self) -> &[Real] {
        &self.radii
    }

    /// Pressure in psi at each radius.
    pub fn pressure(&self) -> &[Real] {
        &self.pressure
    }

    /// Velocity in ft³/day/ft² at each radius.
    pub fn velocity(&self) -> &[Real] {
        &self.velocity
    }

    pub fn len(&self) -> usize {
        self.radii.len()
    }

    /// True when the profile holds no samples.
    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }

    pub fn samples(&self) -> impl Iterator<Item = ProfileSample> + '_ {
        self.radii
            .iter()
            .zip(&self.pressure)
            .zip(&self.velocity)
            .map(|((&radius, &pressure), &velocity)| ProfileSample {
                radius,
                pressure,
                velocity,
            })
    }
}

/// Values at the two domain boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundarySummary {
    pub wellbore_radius: Real,
    pub drainage_radius: Real,
    pub pressure_at_wellbore: Real,
    pub pressure_at_drainage: Real,
    pub velocity_at_wellbore: Real,
    pub velocity_at_drainage: Real,
}

impl BoundarySummary {
    /// Total drawdown across the domain.
    pub fn drawdown(&self) -> Real {
        self.pressure_at_drainage - self.pressure_at_wellbore
    }
}

/// Evaluate pressure and velocity over `sample_count` linearly spaced radii.
///
/// Deterministic: identical inputs always give bit-identical output.
pub fn compute_profile(
    params: &ReservoirParameters,
    sample_count: usize,
) -> RfResult<RadialProfile> {
    let radii = build_radii(
        params.wellbore_radius(),
        params.drainage_radius(),
        sample_count,
    )?;
    let pressure = radii.iter().map(|&r| pressure_at(r, params)).collect();
    let velocity = radii.iter().map(|&r| velocity_at(r, params)).collect();

    debug!(
        sample_count,
        wellbore_radius = params.wellbore_radius(),
        drainage_radius = params.drainage_radius(),
        "computed radial profile"
    );

    Ok(RadialProfile {
        radii,
        pressure,
        velocity,
    })
}

/// [`compute_profile`] with [`DEFAULT_SAMPLE_COUNT`] samples.
pub fn compute_default_profile(params: &ReservoirParameters) -> RfResult<RadialProfile> {
    compute_profile(params, DEFAULT_SAMPLE_COUNT)
}

/// First and last element of each series.
pub fn summarize(profile: &RadialProfile) -> BoundarySummary {
    let last = profile.len() - 1;
    BoundarySummary {
        wellbore_radius: profile.radii[0],
        drainage_radius: profile.radii[last],
        pressure_at_wellbore: profile.pressure[0],
        pressure_at_drainage: profile.pressure[last],
        velocity_at_wellbore: profile.velocity[0],
        velocity_at_drainage: profile.velocity[last],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{RawParameters, validate};
    use rf_core::{is_non_decreasing, is_strictly_increasing};

    fn base() -> ReservoirParameters {
        validate(&RawParameters::default()).unwrap()
    }

    #[test]
    fn profile_has_requested_length() {
        let profile = compute_profile(&base(), 50).unwrap();
        assert_eq!(profile.len(), 50);
        assert_eq!(profile.pressure().len(), 50);
        assert_eq!(profile.velocity().len(), 50);
        assert!(!profile.is_empty());
    }

    #[test]
    fn profile_rejects_single_sample() {
        assert!(compute_profile(&base(), 1).is_err());
    }

    #[test]
    fn default_profile_matches_explicit_count() {
        let params = base();
        let explicit = compute_profile(&params, DEFAULT_SAMPLE_COUNT).unwrap();
        assert_eq!(compute_default_profile(&params).unwrap(), explicit);
    }

    #[test]
    fn profile_is_monotonic() {
        let profile = compute_profile(&base(), DEFAULT_SAMPLE_COUNT).unwrap();
        assert!(is_strictly_increasing(profile.radii()));
        assert!(is_non_decreasing(profile.pressure()));
        assert!(profile.velocity().windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn summary_projects_endpoints() {
        let profile = compute_profile(&base(), 10).unwrap();
        let summary = summarize(&profile);
        assert_eq!(summary.wellbore_radius, profile.radii()[0]);
        assert_eq!(summary.drainage_radius, profile.radii()[9]);
        assert_eq!(summary.pressure_at_wellbore, profile.pressure()[0]);
        assert_eq!(summary.pressure_at_drainage, profile.pressure()[9]);
        assert_eq!(summary.velocity_at_wellbore, profile.velocity()[0]);
        assert_eq!(summary.velocity_at_drainage, profile.velocity()[9]);
        assert!(summary.drawdown() > 0.0);
    }

    #[test]
    fn samples_align_with_series() {
        let profile = compute_profile(&base(), 4).unwrap();
        let samples: Vec<_> = profile.samples().collect();
        assert_eq!(samples.len(), 4);
        assert_eq!(samples[3].radius, 500.0);
        assert_eq!(samples[3].pressure, 3000.0);
        assert_eq!(samples[0].velocity, profile.velocity()[0]);
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let params = base();
        let a = compute_profile(&params, DEFAULT_SAMPLE_COUNT).unwrap();
        let b = compute_profile(&params, DEFAULT_SAMPLE_COUNT).unwrap();
        let bits = |v: &[Real]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(a.radii()), bits(b.radii()));
        assert_eq!(bits(a.pressure()), bits(b.pressure()));
        assert_eq!(bits(a.velocity()), bits(b.velocity()));
    }
}
