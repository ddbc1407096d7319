//! Constants shared by the table builder and the emitters.

/// Largest supported window width in bits.
///
/// A stride-`s` table holds `2^s` entries per window position.
pub const MAX_STRIDE: usize = 16;

/// Largest supported scalar width `n * k` in bits.
///
/// Power sequences and tables are allocated up front from this width.
pub const MAX_SCALAR_BITS: usize = 4096;

/// Language version named in the `pragma circom` directive.
pub const CIRCOM_VERSION: &str = "2.1.6";

/// Number of coordinates stored per entry (x then y).
pub const COORDINATES: usize = 2;
