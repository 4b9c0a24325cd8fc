//! Radial sample grid.

use rf_core::{RfError, RfResult, Real, is_strictly_increasing};

/// Number of radial samples used when the caller doesn't choose.
pub const DEFAULT_SAMPLE_COUNT: usize = 300;

/// Minimum useful grid: both boundaries.
pub const MIN_SAMPLE_COUNT: usize = 2;

/// `num_points` values uniformly spaced from `start` to `end`, both inclusive.
///
/// The last value is written as `end` exactly rather than accumulated.
pub fn linspace(start: Real, end: Real, num_points: usize) -> RfResult<Vec<Real>> {
    if num_points < MIN_SAMPLE_COUNT {
        return Err(RfError::InvalidArg {
            what: "grid must have at least 2 points",
        });
    }

    let mut points = Vec::with_capacity(num_points);
    let delta = (end - start) / (num_points - 1) as Real;

    for i in 0..num_points {
        points.push(start + i as Real * delta);
    }

    // Ensure exact endpoint
    points[num_points - 1] = end;
    Ok(points)
}

/// Radii from the wellbore out to the drainage boundary, strictly increasing.
///
/// Fails with [`RfError::Invariant`] when the annulus is too narrow for
/// `sample_count` distinct `f64` radii.
pub fn build_radii(
    wellbore_radius: Real,
    drainage_radius: Real,
    sample_count: usize,
) -> RfResult<Vec<Real>> {
    if !(wellbore_radius < drainage_radius) {
        return Err(RfError::InvalidArg {
            what: "wellbore radius must be below drainage radius",
        });
    }
    let radii = linspace(wellbore_radius, drainage_radius, sample_count)?;
    if !is_strictly_increasing(&radii) {
        return Err(RfError::Invariant {
            what: "annulus too narrow to separate adjacent radii",
        });
    }
    Ok(radii)
}

/// Uniform spacing of a grid built by [`build_radii`].
pub fn spacing(wellbore_radius: Real, drainage_radius: Real, sample_count: usize) -> Real {
    (drainage_radius - wellbore_radius) / (sample_count.saturating_sub(1).max(1)) as Real
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rf_core::is_strictly_increasing;

    proptest! {
        #[test]
        fn grid_invariants(
            r_w in 0.01_f64..10.0,
            extent in 1.0_f64..5000.0,
            n in 2_usize..1000,
        ) {
            let r_e = r_w + extent;
            let radii = build_radii(r_w, r_e, n).unwrap();
            prop_assert_eq!(radii.len(), n);
            prop_assert_eq!(radii[0], r_w);
            prop_assert_eq!(radii[n - 1], r_e);
            prop_assert!(is_strictly_increasing(&radii));

            let step = spacing(r_w, r_e, n);
            for w in radii.windows(2) {
                prop_assert!(((w[1] - w[0]) - step).abs() <= 1e-9 * r_e.max(1.0));
            }
        }
    }
}
