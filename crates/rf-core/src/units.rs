// rf-core/src/units.rs

//! The fixed oilfield unit system the Darcy formulas are written in.
//!
//! Values are carried as plain `Real`; no conversion is ever performed.
//! These labels only exist so reports and exports name their columns.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldUnit {
    Psi,
    StbPerDay,
    Centipoise,
    Millidarcy,
    Foot,
    /// ft³/day per ft² of flow area
    FtPerDay,
}

impl FieldUnit {
    /// Short human-readable symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Psi => "psi",
            Self::StbPerDay => "STB/day",
            Self::Centipoise => "cp",
            Self::Millidarcy => "mD",
            Self::Foot => "ft",
            Self::FtPerDay => "ft³/day/ft²",
        }
    }
}

impl fmt::Display for FieldUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
