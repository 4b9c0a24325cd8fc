//! Reservoir and fluid parameters, and their validation.
//!
//! `RawParameters` is whatever the caller collected (case file, CLI flags,
//! widgets). `ReservoirParameters` can only be produced by [`validate`], so
//! holding one proves every domain constraint holds.

use rf_core::units::FieldUnit;
use rf_core::Real;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The seven scalar inputs of the radial flow model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterField {
    ReservoirPressure,
    FlowRate,
    Viscosity,
    Permeability,
    Thickness,
    WellboreRadius,
    DrainageRadius,
}

impl ParameterField {
    /// All fields in declaration order.
    pub const ALL: [ParameterField; 7] = [
        ParameterField::ReservoirPressure,
        ParameterField::FlowRate,
        ParameterField::Viscosity,
        ParameterField::Permeability,
        ParameterField::Thickness,
        ParameterField::WellboreRadius,
        ParameterField::DrainageRadius,
    ];

    /// Snake-case key, as used in case files.
    pub fn key(self) -> &'static str {
        match self {
            Self::ReservoirPressure => "reservoir_pressure",
            Self::FlowRate => "flow_rate",
            Self::Viscosity => "viscosity",
            Self::Permeability => "permeability",
            Self::Thickness => "thickness",
            Self::WellboreRadius => "wellbore_radius",
            Self::DrainageRadius => "drainage_radius",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ReservoirPressure => "Reservoir Pressure",
            Self::FlowRate => "Flow Rate",
            Self::Viscosity => "Viscosity",
            Self::Permeability => "Permeability",
            Self::Thickness => "Reservoir Thickness",
            Self::WellboreRadius => "Wellbore Radius",
            Self::DrainageRadius => "Drainage Radius",
        }
    }

    pub fn unit(self) -> FieldUnit {
        match self {
            Self::ReservoirPressure => FieldUnit::Psi,
            Self::FlowRate => FieldUnit::StbPerDay,
            Self::Viscosity => FieldUnit::Centipoise,
            Self::Permeability => FieldUnit::Millidarcy,
            Self::Thickness | Self::WellboreRadius | Self::DrainageRadius => FieldUnit::Foot,
        }
    }

    /// Parse a snake-case key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl fmt::Display for ParameterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Unvalidated inputs. Defaults are the initial values of the interactive tool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawParameters {
    /// psi
    pub reservoir_pressure: Real,
    /// STB/day
    pub flow_rate: Real,
    /// cp
    pub viscosity: Real,
    /// mD
    pub permeability: Real,
    /// ft
    pub thickness: Real,
    /// ft
    pub wellbore_radius: Real,
    /// ft
    pub drainage_radius: Real,
}

impl Default for RawParameters {
    fn default() -> Self {
        Self {
            reservoir_pressure: 3000.0,
            flow_rate: 500.0,
            viscosity: 1.0,
            permeability: 100.0,
            thickness: 50.0,
            wellbore_radius: 0.25,
            drainage_radius: 500.0,
        }
    }
}

impl RawParameters {
    pub fn get(&self, field: ParameterField) -> Real {
        match field {
            ParameterField::ReservoirPressure => self.reservoir_pressure,
            ParameterField::FlowRate => self.flow_rate,
            ParameterField::Viscosity => self.viscosity,
            ParameterField::Permeability => self.permeability,
            ParameterField::Thickness => self.thickness,
            ParameterField::WellboreRadius => self.wellbore_radius,
            ParameterField::DrainageRadius => self.drainage_radius,
        }
    }

    pub fn set(&mut self, field: ParameterField, value: Real) {
        let slot = match field {
            ParameterField::ReservoirPressure => &mut self.reservoir_pressure,
            ParameterField::FlowRate => &mut self.flow_rate,
            ParameterField::Viscosity => &mut self.viscosity,
            ParameterField::Permeability => &mut self.permeability,
            ParameterField::Thickness => &mut self.thickness,
            ParameterField::WellboreRadius => &mut self.wellbore_radius,
            ParameterField::DrainageRadius => &mut self.drainage_radius,
        };
        *slot = value;
    }

    /// Copy with one field replaced.
    pub fn with(mut self, field: ParameterField, value: Real) -> Self {
        self.set(field, value);
        self
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IssueReason {
    NonFinite { value: Real },
    NonPositive { value: Real },
    DrainageNotBeyondWellbore {
        wellbore_radius: Real,
        drainage_radius: Real,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterIssue {
    pub field: ParameterField,
    pub reason: IssueReason,
}

impl fmt::Display for ParameterIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            IssueReason::NonFinite { value } => {
                write!(f, "{} must be finite (got {})", self.field, value)
            }
            IssueReason::NonPositive { value } => {
                write!(f, "{} must be positive (got {})", self.field, value)
            }
            IssueReason::DrainageNotBeyondWellbore {
                wellbore_radius,
                drainage_radius,
            } => write!(
                f,
                "{} ({}) must exceed wellbore_radius ({})",
                self.field, drainage_radius, wellbore_radius
            ),
        }
    }
}

/// Every constraint violation found in one parameter set. Never empty.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("Invalid reservoir parameters: {}", join_issues(.issues))]
pub struct ValidationError {
    pub issues: Vec<ParameterIssue>,
}

fn join_issues(issues: &[ParameterIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Fields that were rejected, in declaration order, without duplicates.
    pub fn fields(&self) -> Vec<ParameterField> {
        let mut fields: Vec<_> = self.issues.iter().map(|i| i.field).collect();
        fields.sort();
        fields.dedup();
        fields
    }

    pub fn has_issue(&self, field: ParameterField) -> bool {
        self.issues.iter().any(|i| i.field == field)
    }
}

/// Validated reservoir and fluid parameters.
///
/// Invariants: every field is finite and strictly positive, and
/// `wellbore_radius < drainage_radius`. Annuli too narrow for distinct `f64`
/// radii still validate; `build_radii` rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReservoirParameters {
    reservoir_pressure: Real,
    flow_rate: Real,
    viscosity: Real,
    permeability: Real,
    thickness: Real,
    wellbore_radius: Real,
    drainage_radius: Real,
}

impl ReservoirParameters {
    pub fn reservoir_pressure(&self) -> Real {
        self.reservoir_pressure
    }

    pub fn flow_rate(&self) -> Real {
        self.flow_rate
    }

    pub fn viscosity(&self) -> Real {
        self.viscosity
    }

    pub fn permeability(&self) -> Real {
        self.permeability
    }

    pub fn thickness(&self) -> Real {
        self.thickness
    }

    pub fn wellbore_radius(&self) -> Real {
        self.wellbore_radius
    }

    pub fn drainage_radius(&self) -> Real {
        self.drainage_radius
    }

    pub fn to_raw(&self) -> RawParameters {
        RawParameters {
            reservoir_pressure: self.reservoir_pressure,
            flow_rate: self.flow_rate,
            viscosity: self.viscosity,
            permeability: self.permeability,
            thickness: self.thickness,
            wellbore_radius: self.wellbore_radius,
            drainage_radius: self.drainage_radius,
        }
    }
}

impl TryFrom<RawParameters> for ReservoirParameters {
    type Error = ValidationError;

    fn try_from(raw: RawParameters) -> Result<Self, Self::Error> {
        validate(&raw)
    }
}

/// Check every domain constraint and collect all violations.
pub fn validate(raw: &RawParameters) -> Result<ReservoirParameters, ValidationError> {
    let mut issues = Vec::new();

    for field in ParameterField::ALL {
        let value = raw.get(field);
        let reason = if !value.is_finite() {
            Some(IssueReason::NonFinite { value })
        } else if value <= 0.0 {
            Some(IssueReason::NonPositive { value })
        } else {
            None
        };
        if let Some(reason) = reason {
            issues.push(ParameterIssue { field, reason });
        }
    }

    // Ordering only means something when both radii passed on their own.
    let radii_ok = !issues.iter().any(|i| {
        matches!(
            i.field,
            ParameterField::WellboreRadius | ParameterField::DrainageRadius
        )
    });
    if radii_ok && raw.drainage_radius <= raw.wellbore_radius {
        issues.push(ParameterIssue {
            field: ParameterField::DrainageRadius,
            reason: IssueReason::DrainageNotBeyondWellbore {
                wellbore_radius: raw.wellbore_radius,
                drainage_radius: raw.drainage_radius,
            },
        });
    }

    if !issues.is_empty() {
        return Err(ValidationError { issues });
    }

    Ok(ReservoirParameters {
        reservoir_pressure: raw.reservoir_pressure,
        flow_rate: raw.flow_rate,
        viscosity: raw.viscosity,
        permeability: raw.permeability,
        thickness: raw.thickness,
        wellbore_radius: raw.wellbore_radius,
        drainage_radius: raw.drainage_radius,
    })
}
