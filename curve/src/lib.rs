//! Short Weierstrass curve arithmetic over a prime field.
//!
//! This crate provides the field arithmetic, affine point doubling and
//! addition, and the power sequence `G, 2G, 4G, ...` used to precompute
//! fixed-base window tables. Curve parameters are supplied by the caller
//! (see [`CurveParams`]) and trusted; the NIST P-192, P-224 and P-256
//! parameter sets are available as presets.

mod affine;
mod basefield;
mod errors;
mod params;
mod powers;
mod weierstrass;

#[cfg(any(test, feature = "test-support"))]
#[doc(hidden)]
pub mod testing;

pub use affine::Point;
pub use basefield::{egcd, mod_inverse, PrimeField};
pub use errors::CurveError;
pub use num_bigint::BigUint;
pub use params::{CurveConfig, CurveParams};
pub use powers::PowerSequence;
pub use weierstrass::WeierstrassCurve;
