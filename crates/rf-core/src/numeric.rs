use crate::RfError;

/// Floating point type used throughout the workspace
pub type Real = f64;

/// 2π, the angle subtended by a full cylindrical shell around the well.
pub const TWO_PI: Real = 2.0 * std::f64::consts::PI;

/// Absolute + relative tolerance pair for float comparisons
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, RfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(RfError::NonFinite { what, value: v })
    }
}

/// True when every consecutive pair satisfies `a < b`.
pub fn is_strictly_increasing(values: &[Real]) -> bool {
    values.windows(2).all(|w| w[0] < w[1])
}

/// True when every consecutive pair satisfies `a <= b`.
pub fn is_non_decreasing(values: &[Real]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}
