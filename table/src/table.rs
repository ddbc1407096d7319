//! The precomputed window table handed to the emitters.
//!
//! Shape: `[stride_position][window_value][coordinate][limb]`, with
//! `ceil(n*k / stride)` positions and `2^stride` values per position.

use curve::{BigUint, Point};
use serde::{Deserialize, Serialize};

use crate::builder::{validate_layout, validate_stride};
use crate::constants::COORDINATES;
use crate::limbs::{split, LimbVector};
use crate::TableError;

/// Which coordinate of an entry to read.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Coordinate {
    X = 0,
    Y = 1,
}

/// Number of windows needed to cover `bits` bits at `stride` bits each.
#[inline]
pub fn num_strides(bits: usize, stride: usize) -> usize {
    bits.div_ceil(stride)
}

/// Limb encoding of one table entry.
///
/// The point at infinity is encoded as the all-zero pair. That pair is not a
/// curve point; consumers select around it instead of decoding it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowEntry {
    pub x: LimbVector,
    pub y: LimbVector,
}

impl WindowEntry {
    pub fn zero(k: usize) -> Self {
        Self {
            x: LimbVector::zero(k),
            y: LimbVector::zero(k),
        }
    }

    pub fn from_point(point: &Point, n: usize, k: usize) -> Result<Self, TableError> {
        match point.coordinates() {
            None => Ok(Self::zero(k)),
            Some((x, y)) => Ok(Self {
                x: split(n, k, x)?,
                y: split(n, k, y)?,
            }),
        }
    }

    #[inline]
    pub fn coordinate(&self, coordinate: Coordinate) -> &LimbVector {
        match coordinate {
            Coordinate::X => &self.x,
            Coordinate::Y => &self.y,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }
}

/// Limb encodings of `value * 2^(position * stride) * G` for every window
/// position and every window value.
///
/// Deserialization checks the layout, the stride, the table shape and every
/// limb width before a table is produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct PrecomputedTable {
    n: usize,
    k: usize,
    stride: usize,
    windows: Vec<Vec<WindowEntry>>,
}

#[derive(Deserialize)]
struct RawTable {
    n: usize,
    k: usize,
    stride: usize,
    windows: Vec<Vec<WindowEntry>>,
}

impl TryFrom<RawTable> for PrecomputedTable {
    type Error = TableError;

    fn try_from(raw: RawTable) -> Result<Self, TableError> {
        let bits = validate_layout(raw.n, raw.k)?;
        validate_stride(raw.stride)?;

        let positions = num_strides(bits, raw.stride);
        if raw.windows.len() != positions {
            return Err(TableError::InvalidParameter(format!(
                "expected {positions} window positions, found {}",
                raw.windows.len()
            )));
        }
        let size = 1usize << raw.stride;
        for (position, row) in raw.windows.iter().enumerate() {
            if row.len() != size {
                return Err(TableError::InvalidParameter(format!(
                    "window position {position} holds {} entries, expected {size}",
                    row.len()
                )));
            }
            for limbs in row.iter().flat_map(|entry| [&entry.x, &entry.y]) {
                if limbs.len() != raw.k {
                    return Err(TableError::InvalidParameter(format!(
                        "coordinate has {} limbs, expected {}",
                        limbs.len(),
                        raw.k
                    )));
                }
                if let Some(limb) = limbs.limbs().iter().find(|limb| limb.bits() > raw.n as u64) {
                    return Err(TableError::Overflow {
                        value: limb.clone(),
                        bits: raw.n,
                    });
                }
            }
        }

        Ok(Self::new(raw.n, raw.k, raw.stride, raw.windows))
    }
}

impl PrecomputedTable {
    pub(crate) fn new(n: usize, k: usize, stride: usize, windows: Vec<Vec<WindowEntry>>) -> Self {
        Self {
            n,
            k,
            stride,
            windows,
        }
    }

    /// Limb width in bits.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Limbs per coordinate.
    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    #[inline]
    pub fn num_strides(&self) -> usize {
        self.windows.len()
    }

    /// Entries per window position, `2^stride`.
    #[inline]
    pub fn window_size(&self) -> usize {
        1 << self.stride
    }

    /// `[num_strides, 2^stride, 2, k]`
    pub fn shape(&self) -> [usize; 4] {
        [self.num_strides(), self.window_size(), COORDINATES, self.k]
    }

    pub fn entry(&self, position: usize, value: usize) -> Option<&WindowEntry> {
        self.windows.get(position)?.get(value)
    }

    pub fn limb(
        &self,
        position: usize,
        value: usize,
        coordinate: Coordinate,
        limb: usize,
    ) -> Option<&BigUint> {
        self.entry(position, value)?.coordinate(coordinate).limbs().get(limb)
    }

    /// All entries of one window position, indexed by window value.
    pub fn window(&self, position: usize) -> Option<&[WindowEntry]> {
        self.windows.get(position).map(Vec::as_slice)
    }

    /// Every entry with its `(position, value)` index, position-major.
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, &WindowEntry)> {
        self.windows.iter().enumerate().flat_map(|(position, row)| {
            row.iter()
                .enumerate()
                .map(move |(value, entry)| (position, value, entry))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_strides_rounds_up() {
        assert_eq!(num_strides(6, 2), 3);
        assert_eq!(num_strides(6, 4), 2);
        assert_eq!(num_strides(256, 8), 32);
        assert_eq!(num_strides(258, 8), 33);
        assert_eq!(num_strides(1, 16), 1);
    }

    #[test]
    fn test_entry_from_identity_is_zero() {
        let entry = WindowEntry::from_point(&Point::Identity, 8, 3).unwrap();
        assert_eq!(entry, WindowEntry::zero(3));
        assert!(entry.is_zero());
    }

    #[test]
    fn test_entry_from_point() {
        let point = Point::new(BigUint::from(17u32), BigUint::from(3u32));
        let entry = WindowEntry::from_point(&point, 3, 2).unwrap();

        assert_eq!(entry.coordinate(Coordinate::X).limbs(), &[BigUint::from(1u32), BigUint::from(2u32)]);
        assert_eq!(entry.coordinate(Coordinate::Y).limbs(), &[BigUint::from(3u32), BigUint::from(0u32)]);
    }

    fn small_table_json() -> serde_json::Value {
        let windows = vec![vec![WindowEntry::zero(2); 4]; 3];
        serde_json::to_value(PrecomputedTable::new(3, 2, 2, windows)).unwrap()
    }

    #[test]
    fn test_deserialize_accepts_well_formed_table() {
        let table: PrecomputedTable = serde_json::from_value(small_table_json()).unwrap();
        assert_eq!(table.shape(), [3, 4, 2, 2]);
    }

    #[test]
    fn test_deserialize_rejects_bad_stride() {
        let mut json = small_table_json();
        json["stride"] = serde_json::json!(70);
        assert!(serde_json::from_value::<PrecomputedTable>(json).is_err());

        let mut json = small_table_json();
        json["stride"] = serde_json::json!(0);
        assert!(serde_json::from_value::<PrecomputedTable>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_bad_layout() {
        let mut json = small_table_json();
        json["n"] = serde_json::json!(0);
        assert!(serde_json::from_value::<PrecomputedTable>(json).is_err());

        let mut json = small_table_json();
        json["n"] = serde_json::json!(usize::MAX);
        assert!(serde_json::from_value::<PrecomputedTable>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_wrong_shape() {
        let mut json = small_table_json();
        json["windows"].as_array_mut().unwrap().pop();
        let err = serde_json::from_value::<PrecomputedTable>(json).unwrap_err();
        assert!(err.to_string().contains("window positions"));

        let mut json = small_table_json();
        json["windows"][1].as_array_mut().unwrap().pop();
        let err = serde_json::from_value::<PrecomputedTable>(json).unwrap_err();
        assert!(err.to_string().contains("window position 1"));

        let mut json = small_table_json();
        json["windows"][2][3]["y"] = serde_json::json!(["0"]);
        let err = serde_json::from_value::<PrecomputedTable>(json).unwrap_err();
        assert!(err.to_string().contains("limbs"));
    }

    #[test]
    fn test_deserialize_rejects_wide_limb() {
        let mut json = small_table_json();
        json["windows"][0][1]["x"] = serde_json::json!(["8", "0"]);
        let err = serde_json::from_value::<PrecomputedTable>(json).unwrap_err();
        assert!(err.to_string().contains("does not fit in 3 bits"));
    }

    #[test]
    fn test_entry_overflow() {
        let point = Point::new(BigUint::from(64u32), BigUint::from(3u32));
        assert!(matches!(
            WindowEntry::from_point(&point, 3, 2),
            Err(TableError::Overflow { bits: 6, .. })
        ));
    }
}
