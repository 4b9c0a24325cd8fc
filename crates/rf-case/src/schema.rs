//! Case schema definitions.

use rf_model::{DEFAULT_SAMPLE_COUNT, ParameterField, RawParameters};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Case {
    pub version: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub parameters: RawParameters,
    #[serde(default)]
    pub sampling: SamplingDef,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sweeps: Vec<SweepDef>,
}

impl Default for Case {
    fn default() -> Self {
        Self {
            version: crate::validate::LATEST_VERSION,
            name: "Base case".to_string(),
            description: None,
            parameters: RawParameters::default(),
            sampling: SamplingDef::default(),
            sweeps: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SamplingDef {
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,
}

impl Default for SamplingDef {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }
}

fn default_sample_count() -> usize {
    DEFAULT_SAMPLE_COUNT
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SweepDef {
    pub id: String,
    pub field: ParameterField,
    pub start: f64,
    pub end: f64,
    pub num_points: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_case_fills_defaults() {
        let yaml = r#"
version: 1
name: minimal
parameters:
  reservoir_pressure: 3000
  flow_rate: 500
  viscosity: 1.0
  permeability: 100
  thickness: 50
  wellbore_radius: 0.25
  drainage_radius: 500
"#;
        let case: Case = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(case.sampling.sample_count, DEFAULT_SAMPLE_COUNT);
        assert!(case.sweeps.is_empty());
        assert_eq!(case.parameters, RawParameters::default());
    }

    #[test]
    fn sweep_field_uses_snake_case() {
        let yaml = r#"
id: q
field: flow_rate
start: 100
end: 1000
num_points: 10
"#;
        let sweep: SweepDef = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(sweep.field, ParameterField::FlowRate);
    }

    #[test]
    fn missing_parameter_is_a_parse_error() {
        let yaml = r#"
version: 1
name: broken
parameters:
  reservoir_pressure: 3000
"#;
        assert!(serde_yaml::from_str::<Case>(yaml).is_err());
    }
}
