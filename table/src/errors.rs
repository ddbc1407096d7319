//! Error types for table construction and emission.

use core::fmt;

use curve::CurveError;
use num_bigint::BigUint;

/// Errors that abort building or emitting a table.
///
/// There is no partial success: a table is either complete or one of these
/// is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Field or point arithmetic failed.
    Curve(CurveError),
    /// `value` does not fit in `bits` bits, i.e. in `k` limbs of `n` bits.
    ///
    /// Usually means `n * k` is smaller than the field size.
    Overflow { value: BigUint, bits: usize },
    /// An exponent needs `2^bit * G` but the power sequence only holds
    /// `available` entries.
    ExponentOutOfRange { bit: usize, available: usize },
    /// `n`, `k` or the stride list is unusable.
    InvalidParameter(String),
    /// Rendering the tables failed.
    Emit(String),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Curve(err) => write!(f, "curve arithmetic failed: {err}"),
            TableError::Overflow { value, bits } => {
                write!(f, "{value} does not fit in {bits} bits")
            }
            TableError::ExponentOutOfRange { bit, available } => write!(
                f,
                "exponent bit {bit} is beyond the {available} precomputed powers"
            ),
            TableError::InvalidParameter(reason) => write!(f, "invalid parameter: {reason}"),
            TableError::Emit(reason) => write!(f, "failed to emit tables: {reason}"),
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TableError::Curve(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CurveError> for TableError {
    fn from(err: CurveError) -> Self {
        TableError::Curve(err)
    }
}

impl From<fmt::Error> for TableError {
    fn from(err: fmt::Error) -> Self {
        TableError::Emit(err.to_string())
    }
}

impl From<serde_json::Error> for TableError {
    fn from(err: serde_json::Error) -> Self {
        TableError::Emit(err.to_string())
    }
}
