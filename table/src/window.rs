//! Scalar multiples of G assembled from the power sequence.

use curve::{BigUint, Point, PowerSequence, WeierstrassCurve};

use crate::bits::to_bits;
use crate::TableError;

/// Compute `exponent * G` as the sum of `2^i * G` over the set bits `i` of
/// `exponent`.
///
/// The lowest set bit seeds the accumulator and the remaining powers are
/// added in ascending order, so the identity never enters the affine
/// formulas. No doubling happens here. A zero exponent yields
/// [`Point::Identity`].
pub fn evaluate(
    curve: &WeierstrassCurve,
    powers: &PowerSequence,
    exponent: &BigUint,
) -> Result<Point, TableError> {
    let mut sum: Option<Point> = None;

    for (i, bit) in to_bits(exponent).into_iter().enumerate() {
        if !bit {
            continue;
        }
        let power = powers.get(i).ok_or(TableError::ExponentOutOfRange {
            bit: i,
            available: powers.len(),
        })?;

        sum = Some(match sum {
            None => power.clone(),
            Some(acc) => curve.add(&acc, power)?,
        });
    }

    Ok(sum.unwrap_or(Point::Identity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{double_and_add, toy_curve};
    use curve::CurveError;

    #[test]
    fn test_zero_exponent_is_identity() {
        let curve = toy_curve();
        let powers = PowerSequence::generate(&curve, 8).unwrap();
        assert_eq!(
            evaluate(&curve, &powers, &BigUint::from(0u32)).unwrap(),
            Point::Identity
        );
    }

    #[test]
    fn test_single_bit_is_a_power() {
        let curve = toy_curve();
        let powers = PowerSequence::generate(&curve, 8).unwrap();
        for i in 0..8 {
            let exponent = BigUint::from(1u32) << i;
            assert_eq!(evaluate(&curve, &powers, &exponent).unwrap(), powers[i]);
        }
    }

    #[test]
    fn test_matches_double_and_add_over_the_group() {
        let curve = toy_curve();
        let powers = PowerSequence::generate(&curve, 5).unwrap();

        for e in 0u64..28 {
            let expected = double_and_add(&curve, e);
            let got = evaluate(&curve, &powers, &BigUint::from(e)).unwrap();
            assert_eq!(got, expected, "e = {e}");
            assert!(curve.is_on_curve(&got));
        }
    }

    #[test]
    fn test_exponent_beyond_sequence() {
        let curve = toy_curve();
        let powers = PowerSequence::generate(&curve, 3).unwrap();
        let err = evaluate(&curve, &powers, &BigUint::from(9u32)).unwrap_err();
        assert_eq!(err, TableError::ExponentOutOfRange { bit: 3, available: 3 });
    }

    #[test]
    fn test_degenerate_partial_sum_is_reported() {
        // 36 = 4 + 32, and 32G = 4G in a group of order 28.
        let curve = toy_curve();
        let powers = PowerSequence::generate(&curve, 6).unwrap();
        let err = evaluate(&curve, &powers, &BigUint::from(36u32)).unwrap_err();
        assert!(matches!(err, TableError::Curve(CurveError::DegeneratePoint(_))));
    }
}
