//! Strided window table construction.
//!
//! For a stride `s`, the `n*k`-bit scalar is cut into `ceil(n*k / s)`
//! windows. Entry `[position][value]` holds `value * 2^(position*s) * G`,
//! computed independently from the shared power sequence.

use curve::{BigUint, PowerSequence, WeierstrassCurve};
use log::{debug, info};
use rayon::prelude::*;

use crate::constants::{MAX_SCALAR_BITS, MAX_STRIDE};
use crate::table::{num_strides, PrecomputedTable, WindowEntry};
use crate::window::evaluate;
use crate::TableError;

/// Check that a window width is usable.
pub fn validate_stride(stride: usize) -> Result<(), TableError> {
    if stride == 0 || stride > MAX_STRIDE {
        return Err(TableError::InvalidParameter(format!(
            "stride {stride} is outside 1..={MAX_STRIDE}"
        )));
    }
    Ok(())
}

/// Check a limb layout and return its scalar width `n * k`.
pub(crate) fn validate_layout(n: usize, k: usize) -> Result<usize, TableError> {
    if n == 0 || k == 0 {
        return Err(TableError::InvalidParameter(format!(
            "n = {n} and k = {k} must both be at least 1"
        )));
    }
    match n.checked_mul(k) {
        Some(bits) if bits <= MAX_SCALAR_BITS => Ok(bits),
        _ => Err(TableError::InvalidParameter(format!(
            "n * k exceeds {MAX_SCALAR_BITS} bits for n = {n}, k = {k}"
        ))),
    }
}

/// Builds window tables for one curve and one `(n, k)` limb layout.
#[derive(Clone, Debug)]
pub struct StridedTableBuilder<'a> {
    curve: &'a WeierstrassCurve,
    n: usize,
    k: usize,
}

impl<'a> StridedTableBuilder<'a> {
    pub fn new(curve: &'a WeierstrassCurve, n: usize, k: usize) -> Result<Self, TableError> {
        validate_layout(n, k)?;
        Ok(Self { curve, n, k })
    }

    #[inline]
    pub fn curve(&self) -> &WeierstrassCurve {
        self.curve
    }

    /// Width of the encoded scalar, `n * k`.
    #[inline]
    pub fn scalar_bits(&self) -> usize {
        self.n * self.k
    }

    /// Length of the power sequence that covers every bit a stride-`stride`
    /// window can reach: `n * k + stride`.
    #[inline]
    pub fn exponent_bound(&self, stride: usize) -> usize {
        self.scalar_bits() + stride
    }

    /// Build the table for one stride with a freshly generated power
    /// sequence.
    pub fn build(&self, stride: usize) -> Result<PrecomputedTable, TableError> {
        validate_stride(stride)?;
        let powers = PowerSequence::generate(self.curve, self.exponent_bound(stride))?;
        self.build_with_powers(stride, &powers)
    }

    /// Build the table for one stride from an existing power sequence.
    ///
    /// `powers` must hold at least [`exponent_bound`](Self::exponent_bound)
    /// entries; a longer sequence gives the same table.
    pub fn build_with_powers(
        &self,
        stride: usize,
        powers: &PowerSequence,
    ) -> Result<PrecomputedTable, TableError> {
        validate_stride(stride)?;
        let bound = self.exponent_bound(stride);
        if powers.len() < bound {
            return Err(TableError::ExponentOutOfRange {
                bit: bound - 1,
                available: powers.len(),
            });
        }

        let positions = num_strides(self.scalar_bits(), stride);
        debug!(
            "building stride {stride} table: {positions} positions x {} values",
            1usize << stride
        );

        let windows = (0..positions)
            .into_par_iter()
            .map(|position| self.build_window(stride, position, powers))
            .collect::<Result<Vec<_>, _>>()?;

        info!("built stride {stride} table ({positions} positions)");
        Ok(PrecomputedTable::new(self.n, self.k, stride, windows))
    }

    fn build_window(
        &self,
        stride: usize,
        position: usize,
        powers: &PowerSequence,
    ) -> Result<Vec<WindowEntry>, TableError> {
        (0..1usize << stride)
            .map(|value| {
                if value == 0 {
                    return Ok(WindowEntry::zero(self.k));
                }
                let exponent = BigUint::from(value) << (position * stride);
                let point = evaluate(self.curve, powers, &exponent)?;
                WindowEntry::from_point(&point, self.n, self.k)
            })
            .collect()
    }
}

/// Build one table per requested stride, in the order requested.
///
/// A single power sequence, long enough for the widest stride, is shared
/// by all strides, and the strides are built in parallel.
pub fn build_tables(
    curve: &WeierstrassCurve,
    n: usize,
    k: usize,
    strides: &[usize],
) -> Result<Vec<(usize, PrecomputedTable)>, TableError> {
    let Some(&widest) = strides.iter().max() else {
        return Err(TableError::InvalidParameter("no strides requested".into()));
    };
    for &stride in strides {
        validate_stride(stride)?;
    }

    let builder = StridedTableBuilder::new(curve, n, k)?;
    let powers = PowerSequence::generate(curve, builder.exponent_bound(widest))?;

    strides
        .par_iter()
        .map(|&stride| {
            builder
                .build_with_powers(stride, &powers)
                .map(|table| (stride, table))
        })
        .collect()
}
