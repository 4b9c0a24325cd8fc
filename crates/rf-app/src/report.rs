//! Plain-text formatting of run outputs.

use rf_core::FieldUnit;
use rf_model::{BoundarySummary, SweepResult};

/// The four boundary values, two decimals each.
pub fn format_summary(summary: &BoundarySummary) -> Vec<String> {
    let psi = FieldUnit::Psi;
    let vel = FieldUnit::FtPerDay;
    let ft = FieldUnit::Foot;
    vec![
        format!(
            "Pressure at wellbore ({} {ft}): {:.2} {psi}",
            summary.wellbore_radius, summary.pressure_at_wellbore
        ),
        format!(
            "Pressure at outer radius ({} {ft}): {:.2} {psi}",
            summary.drainage_radius, summary.pressure_at_drainage
        ),
        format!(
            "Velocity at wellbore ({} {ft}): {:.2} {vel}",
            summary.wellbore_radius, summary.velocity_at_wellbore
        ),
        format!(
            "Velocity at outer radius ({} {ft}): {:.2} {vel}",
            summary.drainage_radius, summary.velocity_at_drainage
        ),
    ]
}

/// One row per sweep point: swept value, wellbore pressure, wellbore velocity.
pub fn format_sweep_table(result: &SweepResult) -> Vec<String> {
    let field = result.sweep.field;
    let mut lines = vec![format!(
        "{:>14}  {:>14}  {:>14}",
        format!("{} [{}]", field.key(), field.unit()),
        "p_w [psi]",
        "v_w"
    )];
    for point in &result.points {
        match &point.outcome {
            Ok(summary) => lines.push(format!(
                "{:>14.4}  {:>14.2}  {:>14.4}",
                point.value, summary.pressure_at_wellbore, summary.velocity_at_wellbore
            )),
            Err(err) => lines.push(format!("{:>14.4}  invalid: {}", point.value, err)),
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use rf_model::{
        ParameterField, ParameterSweep, RawParameters, compute_profile, run_sweep, validate,
    };

    #[test]
    fn summary_lines_use_two_decimals() {
        let params = validate(&RawParameters::default()).unwrap();
        let summary = rf_model::summarize(&compute_profile(&params, 300).unwrap());
        let lines = format_summary(&summary);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Pressure at wellbore (0.25 ft): 2999.88 psi");
        assert_eq!(lines[1], "Pressure at outer radius (500 ft): 3000.00 psi");
        assert_eq!(lines[2], "Velocity at wellbore (0.25 ft): 6.37 ft³/day/ft²");
        assert_eq!(lines[3], "Velocity at outer radius (500 ft): 0.00 ft³/day/ft²");
    }

    #[test]
    fn sweep_table_marks_invalid_points() {
        let sweep = ParameterSweep::new(ParameterField::Viscosity, -1.0, 1.0, 3).unwrap();
        let result = run_sweep(&RawParameters::default(), &sweep, 10).unwrap();
        let lines = format_sweep_table(&result);
        assert_eq!(lines.len(), 4);
        assert!(lines[1].contains("invalid"));
        assert!(lines[2].contains("invalid"));
        assert!(!lines[3].contains("invalid"));
    }
}
