//! Steady-state Darcy radial flow toward a single well.
//!
//! Formulas are evaluated in the fixed field unit system without any
//! conversion constant:
//!
//! ```text
//! p(r) = p_e - (q·μ)/(2π·k·h) · ln(r_e / r)
//! v(r) = q / (2π·r·h)
//! ```
//!
//! Both are total over `r_w <= r <= r_e` for validated parameters.

use crate::params::ReservoirParameters;
use rf_core::{Real, TWO_PI};

/// `(q·μ)/(2π·k·h)`: pressure drop per unit of `ln(r_e/r)`.
pub fn pressure_gradient_coefficient(params: &ReservoirParameters) -> Real {
    (params.flow_rate() * params.viscosity())
        / (TWO_PI * params.permeability() * params.thickness())
}

/// Pressure at radius `r` (psi).
///
/// Returns `reservoir_pressure` bit-exactly at `r == drainage_radius`.
pub fn pressure_at(r: Real, params: &ReservoirParameters) -> Real {
    params.reservoir_pressure() - drawdown_at(r, params)
}

/// Radial flow velocity at radius `r` (ft³/day/ft²).
pub fn velocity_at(r: Real, params: &ReservoirParameters) -> Real {
    params.flow_rate() / (TWO_PI * r * params.thickness())
}

/// Reservoir pressure minus the pressure at `r`.
pub fn drawdown_at(r: Real, params: &ReservoirParameters) -> Real {
    pressure_gradient_coefficient(params) * (params.drainage_radius() / r).ln()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{RawParameters, validate};

    fn base() -> ReservoirParameters {
        validate(&RawParameters::default()).unwrap()
    }

    #[test]
    fn pressure_equals_reservoir_pressure_at_drainage() {
        let params = base();
        assert_eq!(pressure_at(params.drainage_radius(), &params), 3000.0);
        assert_eq!(drawdown_at(params.drainage_radius(), &params), 0.0);
    }

    #[test]
    fn wellbore_pressure_matches_closed_form() {
        let params = base();
        let expected =
            3000.0 - (500.0 * 1.0) / (2.0 * std::f64::consts::PI * 100.0 * 50.0)
                * (500.0_f64 / 0.25).ln();
        let p = pressure_at(0.25, &params);
        assert!((p - expected).abs() < 1e-9);
        assert!((p - 2999.879).abs() < 0.01);
    }

    #[test]
    fn velocity_matches_independent_values() {
        let params = base();
        let pi = std::f64::consts::PI;
        for r in [0.25, 1.0, 10.0, 123.4, 250.0, 500.0] {
            let expected = 500.0 / (2.0 * pi * r * 50.0);
            let v = velocity_at(r, &params);
            assert!(
                (v - expected).abs() <= 1e-12 * expected.max(1.0),
                "r={r}: {v} vs {expected}"
            );
        }
    }

    #[test]
    fn velocity_at_boundaries() {
        let params = base();
        assert!((velocity_at(0.25, &params) - 6.366).abs() < 0.001);
        assert!((velocity_at(500.0, &params) - 0.003183).abs() < 0.00001);
    }

    #[test]
    fn coefficient_scales_with_viscosity() {
        let thin = base();
        let thick = validate(&RawParameters {
            viscosity: 2.0,
            ..Default::default()
        })
        .unwrap();
        let ratio = pressure_gradient_coefficient(&thick) / pressure_gradient_coefficient(&thin);
        assert!((ratio - 2.0).abs() < 1e-12);
    }

    #[test]
    fn drawdown_is_largest_at_wellbore() {
        let params = base();
        let at_well = drawdown_at(0.25, &params);
        let mid = drawdown_at(250.0, &params);
        assert!(at_well > mid);
        assert!(mid > 0.0);
    }
}
