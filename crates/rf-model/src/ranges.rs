//! Typical input ranges, taken from the interactive tool's slider bounds.
//!
//! Purely advisory. Values outside a range still validate.

use crate::params::{ParameterField, RawParameters};
use rf_core::Real;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputRange {
    pub min: Real,
    pub max: Real,
    pub default: Real,
    pub step: Real,
}

impl InputRange {
    pub fn contains(&self, value: Real) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

pub fn input_range(field: ParameterField) -> InputRange {
    let (min, max, default, step) = match field {
        ParameterField::ReservoirPressure => (1000.0, 5000.0, 3000.0, 100.0),
        ParameterField::FlowRate => (100.0, 5000.0, 500.0, 50.0),
        ParameterField::Viscosity => (0.1, 10.0, 1.0, 0.1),
        ParameterField::Permeability => (1.0, 1000.0, 100.0, 10.0),
        ParameterField::Thickness => (10.0, 200.0, 50.0, 5.0),
        ParameterField::WellboreRadius => (0.1, 1.0, 0.25, 0.01),
        ParameterField::DrainageRadius => (100.0, 2000.0, 500.0, 50.0),
    };
    InputRange {
        min,
        max,
        default,
        step,
    }
}

/// Fields whose value lies outside the typical range, in declaration order.
pub fn out_of_range_fields(raw: &RawParameters) -> Vec<ParameterField> {
    ParameterField::ALL
        .into_iter()
        .filter(|&f| !input_range(f).contains(raw.get(f)))
        .collect()
}

/// Log a warning for each atypical input. Returns the offending fields.
pub fn warn_out_of_range(raw: &RawParameters) -> Vec<ParameterField> {
    let fields = out_of_range_fields(raw);
    for &field in &fields {
        let range = input_range(field);
        warn!(
            field = field.key(),
            value = raw.get(field),
            min = range.min,
            max = range.max,
            "input outside typical range"
        );
    }
    fields
}
