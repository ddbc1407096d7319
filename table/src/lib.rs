//! Fixed-base window tables of generator multiples for circuit compilers.
//!
//! An arithmetic-circuit compiler cannot do curve arithmetic at compile
//! time, so scalar multiplication by a fixed base point G is driven by a
//! lookup table computed here. For a window width `stride` and a scalar of
//! `n * k` bits, the table holds, for every window position `s` and window
//! value `w`, the point `w * 2^(s * stride) * G` with both coordinates
//! split into `k` limbs of `n` bits.
//!
//! ## Pipeline
//!
//! 1. [`curve::PowerSequence`]: `G, 2G, 4G, ..., 2^(n*k + stride - 1) G`
//! 2. [`window::evaluate`]: `e * G` as a sum of the powers at the set bits
//!    of `e`
//! 3. [`limbs::split`]: fixed-width limb encoding of each coordinate
//! 4. [`StridedTableBuilder`] / [`build_tables`]: one [`PrecomputedTable`]
//!    per stride
//! 5. [`emit::TableEmitter`]: circom source or JSON
//!
//! ## Example
//!
//! ```
//! use curve::{CurveParams, WeierstrassCurve};
//! use table::emit::{CircomEmitter, TableEmitter};
//! use table::build_tables;
//!
//! let curve = WeierstrassCurve::new(CurveParams::p256());
//! let tables = build_tables(&curve, 64, 4, &[2]).expect("build");
//! let source = CircomEmitter::default().emit(&tables).expect("emit");
//! assert!(source.starts_with("pragma circom"));
//! ```
//!
//! The window value 0 is stored as an all-zero limb pair. That pair is an
//! encoding convention for the point at infinity, not a curve point.

pub mod bits;
mod builder;
pub mod constants;
pub mod emit;
mod errors;
pub mod limbs;
mod table;
pub mod window;


pub use builder::{build_tables, validate_stride, StridedTableBuilder};
pub use errors::TableError;
pub use limbs::LimbVector;
pub use table::{num_strides, Coordinate, PrecomputedTable, WindowEntry};
