//! rf-core: shared foundation for radialflow.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - units (the fixed oilfield unit system and its labels)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{RfError, RfResult};
pub use numeric::*;
pub use units::FieldUnit;
