//! Binary decomposition of exponents.

use num_bigint::BigUint;

/// Bits of `x`, least significant first.
///
/// The result stops at the highest set bit, so its length is
/// `ceil(log2(x + 1))` and zero yields an empty vector.
pub fn to_bits(x: &BigUint) -> Vec<bool> {
    (0..x.bits()).map(|i| x.bit(i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_empty() {
        assert!(to_bits(&BigUint::from(0u32)).is_empty());
    }

    #[test]
    fn test_small_values() {
        assert_eq!(to_bits(&BigUint::from(1u32)), vec![true]);
        assert_eq!(to_bits(&BigUint::from(6u32)), vec![false, true, true]);
        assert_eq!(to_bits(&BigUint::from(8u32)), vec![false, false, false, true]);
    }

    #[test]
    fn test_length_tracks_highest_set_bit() {
        for x in 1u32..1024 {
            let bits = to_bits(&BigUint::from(x));
            assert_eq!(bits.len() as u32, 32 - x.leading_zeros());
            assert_eq!(bits.last(), Some(&true));
        }
    }

    #[test]
    fn test_wide_value() {
        let x = (BigUint::from(1u32) << 300u32) + 5u32;
        let bits = to_bits(&x);
        assert_eq!(bits.len(), 301);
        assert!(bits[0] && !bits[1] && bits[2] && bits[300]);
        assert_eq!(bits.iter().filter(|&&b| b).count(), 3);
    }
}
