//! CSV form of a radial profile.

use crate::types::ProfileRow;
use crate::{ResultsError, ResultsResult};
use rf_model::RadialProfile;

pub const PROFILE_CSV_HEADER: &str = "radius_ft,pressure_psi,velocity_ft_per_day";

/// Header plus one row per sample. Values use shortest round-trip formatting.
pub fn profile_to_csv(profile: &RadialProfile) -> String {
    let mut csv = String::with_capacity(32 * (profile.len() + 1));
    csv.push_str(PROFILE_CSV_HEADER);
    csv.push('\n');
    for sample in profile.samples() {
        csv.push_str(&format!(
            "{},{},{}\n",
            sample.radius, sample.pressure, sample.velocity
        ));
    }
    csv
}

pub fn parse_profile_csv(content: &str) -> ResultsResult<Vec<ProfileRow>> {
    let mut lines = content.lines().enumerate();

    match lines.next() {
        Some((_, header)) if header.trim() == PROFILE_CSV_HEADER => {}
        _ => {
            return Err(ResultsError::MalformedCsv {
                line: 1,
                message: format!("expected header '{}'", PROFILE_CSV_HEADER),
            });
        }
    }

    let mut rows = Vec::new();
    for (idx, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let malformed = |message: String| ResultsError::MalformedCsv {
            line: idx + 1,
            message,
        };
        let values = line
            .split(',')
            .map(|v| v.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| malformed(e.to_string()))?;
        let [radius_ft, pressure_psi, velocity_ft_per_day] = values[..] else {
            return Err(malformed(format!("expected 3 columns, got {}", values.len())));
        };
        rows.push(ProfileRow {
            radius_ft,
            pressure_psi,
            velocity_ft_per_day,
        });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rf_model::{RawParameters, compute_profile, validate};

    #[test]
    fn csv_has_header_and_one_line_per_sample() {
        let params = validate(&RawParameters::default()).unwrap();
        let profile = compute_profile(&params, 300).unwrap();
        let csv = profile_to_csv(&profile);
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 301);
        assert_eq!(lines[0], PROFILE_CSV_HEADER);
        assert_eq!(lines[300], "500,3000,0.003183098861837907");
    }

    #[test]
    fn parsed_rows_are_exact() {
        let params = validate(&RawParameters::default()).unwrap();
        let profile = compute_profile(&params, 17).unwrap();
        let rows = parse_profile_csv(&profile_to_csv(&profile)).unwrap();
        assert_eq!(rows.len(), 17);
        for (row, sample) in rows.iter().zip(profile.samples()) {
            assert_eq!(row.radius_ft, sample.radius);
            assert_eq!(row.pressure_psi, sample.pressure);
            assert_eq!(row.velocity_ft_per_day, sample.velocity);
        }
    }

    #[test]
    fn rejects_wrong_header() {
        assert!(parse_profile_csv("time_s,value\n0,1\n").is_err());
        assert!(parse_profile_csv("").is_err());
    }

    #[test]
    fn rejects_short_rows() {
        let csv = format!("{}\n1.0,2.0\n", PROFILE_CSV_HEADER);
        let err = parse_profile_csv(&csv).unwrap_err();
        assert!(matches!(err, ResultsError::MalformedCsv { line: 2, .. }));
    }
}
