//! Error types for field and point arithmetic.

use core::fmt;

use num_bigint::BigUint;

/// Errors raised while doing arithmetic on the curve.
///
/// Every variant is fatal for the computation that raised it: the inputs are
/// deterministic, so retrying gives the same result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    /// `value` has no multiplicative inverse modulo `modulus`.
    ///
    /// For a prime modulus this only happens when `value` reduces to zero,
    /// which points at a bad parameter set or a degenerate point upstream.
    NoInverse { value: BigUint, modulus: BigUint },
    /// A point operation was asked to handle an input its formula cannot:
    /// doubling a point with `y = 0`, adding two points with the same x, or
    /// passing the point at infinity to the affine formulas.
    DegeneratePoint(&'static str),
    /// Curve parameters or build parameters are malformed.
    InvalidParameter(String),
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveError::NoInverse { value, modulus } => {
                write!(f, "{value} has no inverse modulo {modulus}")
            }
            CurveError::DegeneratePoint(reason) => write!(f, "degenerate point: {reason}"),
            CurveError::InvalidParameter(reason) => write!(f, "invalid parameter: {reason}"),
        }
    }
}

impl std::error::Error for CurveError {}
