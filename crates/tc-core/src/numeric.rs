//! Float helpers shared by the thermochem crates.

use crate::TcError;

pub type Real = f64;

/// Absolute/relative tolerance pair for comparing computed properties.
#[derive(Clone, Copy, Debug, PartialEq)]
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

/// True when `a` and `b` agree within `tol.abs` or within `tol.rel` of the
/// larger magnitude.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    diff <= tol.abs || diff <= tol.rel * a.abs().max(b.abs())
}

/// Pass `v` through, or report it as non-finite under the name `what`.
pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, TcError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(TcError::NonFinite { what, value: v })
    }
}

/// Divide `num` by `den`, refusing an exactly-zero or non-finite denominator
/// instead of producing an infinity.
pub fn checked_div(num: Real, den: Real, what: &'static str) -> Result<Real, TcError> {
    if den == 0.0 {
        return Err(TcError::DivisionByZero { what });
    }
    ensure_finite(num / den, what)
}
