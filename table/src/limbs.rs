//! Fixed-width limb encoding of unsigned integers.
//!
//! A value below `2^(n*k)` is stored as `k` limbs of `n` bits each, least
//! significant limb first, so that `value = Σ limb[i] * 2^(n*i)`.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::TableError;

/// `k` limbs of `n` bits, little-endian.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LimbVector {
    #[serde(with = "decimal")]
    limbs: Vec<BigUint>,
}

impl LimbVector {
    /// The all-zero vector of `k` limbs.
    pub fn zero(k: usize) -> Self {
        Self {
            limbs: vec![BigUint::zero(); k],
        }
    }

    #[inline]
    pub fn limbs(&self) -> &[BigUint] {
        &self.limbs
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.limbs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.limbs.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(Zero::is_zero)
    }

    /// Reassemble the encoded integer, given the limb width.
    pub fn value(&self, n: usize) -> BigUint {
        reconstruct(n, &self.limbs)
    }
}

/// Split `x` into `k` limbs of `n` bits, least significant first.
///
/// Fails with [`TableError::Overflow`] when `x >= 2^(n*k)` rather than
/// dropping the high bits.
pub fn split(n: usize, k: usize, x: &BigUint) -> Result<LimbVector, TableError> {
    if n == 0 {
        return Err(TableError::InvalidParameter("limb width n must be at least 1".into()));
    }

    let mask = (BigUint::one() << n) - 1u32;
    let mut rest = x.clone();
    let mut limbs = Vec::with_capacity(k);
    for _ in 0..k {
        limbs.push(&rest & &mask);
        rest >>= n;
    }

    if !rest.is_zero() {
        return Err(TableError::Overflow {
            value: x.clone(),
            bits: n * k,
        });
    }

    Ok(LimbVector { limbs })
}

/// Inverse of [`split`]: `Σ limbs[i] * 2^(n*i)`.
pub fn reconstruct(n: usize, limbs: &[BigUint]) -> BigUint {
    limbs
        .iter()
        .rev()
        .fold(BigUint::zero(), |acc, limb| (acc << n) + limb)
}

/// Limbs as decimal strings, so JSON consumers never see a lossy number.
mod decimal {
    use num_bigint::BigUint;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(limbs: &[BigUint], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(limbs.iter().map(|limb| limb.to_str_radix(10)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<BigUint>, D::Error> {
        let raw = Vec::<String>::deserialize(deserializer)?;
        raw.iter()
            .map(|s| {
                BigUint::parse_bytes(s.as_bytes(), 10)
                    .ok_or_else(|| D::Error::custom(format!("invalid limb `{s}`")))
            })
            .collect()
    }
}
