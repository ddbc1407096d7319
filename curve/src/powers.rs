//! The power sequence G, 2G, 4G, ..., 2^(E-1)G.

use core::ops::Index;

use log::debug;

use crate::{CurveError, Point, WeierstrassCurve};

/// Successive doublings of the base point: entry `i` is `2^i * G`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PowerSequence {
    powers: Vec<Point>,
}

impl PowerSequence {
    /// Build the first `exponent_bound` doublings of the curve's base point.
    ///
    /// Entry 0 is G and entry `i + 1` is `double(entry i)`, so this costs
    /// `exponent_bound - 1` doublings.
    pub fn generate(curve: &WeierstrassCurve, exponent_bound: usize) -> Result<Self, CurveError> {
        let mut powers = Vec::with_capacity(exponent_bound);
        if exponent_bound == 0 {
            return Ok(Self { powers });
        }

        let mut current = curve.generator();
        for _ in 1..exponent_bound {
            let next = curve.double(&current)?;
            powers.push(current);
            current = next;
        }
        powers.push(current);

        debug!("generated {} powers of the base point", powers.len());
        Ok(Self { powers })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.powers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.powers.is_empty()
    }

    /// `2^i * G`, if the sequence reaches that far.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&Point> {
        self.powers.get(i)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Point> {
        self.powers.iter()
    }
}

impl Index<usize> for PowerSequence {
    type Output = Point;

    fn index(&self, i: usize) -> &Point {
        &self.powers[i]
    }
}

impl<'a> IntoIterator for &'a PowerSequence {
    type Item = &'a Point;
    type IntoIter = core::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{double_and_add, toy_curve};
    use crate::CurveParams;

    #[test]
    fn test_empty_sequence() {
        let seq = PowerSequence::generate(&toy_curve(), 0).unwrap();
        assert!(seq.is_empty());
    }

    #[test]
    fn test_first_entry_is_generator() {
        let curve = toy_curve();
        let seq = PowerSequence::generate(&curve, 1).unwrap();
        assert_eq!(seq.len(), 1);
        assert_eq!(seq[0], curve.generator());
    }

    #[test]
    fn test_doubling_consistency() {
        let curve = toy_curve();
        let seq = PowerSequence::generate(&curve, 8).unwrap();
        assert_eq!(seq.len(), 8);

        for i in 0..seq.len() - 1 {
            assert_eq!(seq[i + 1], curve.double(&seq[i]).unwrap());
        }
    }

    #[test]
    fn test_entries_are_powers_of_two() {
        let curve = toy_curve();
        let g = curve.generator();
        let seq = PowerSequence::generate(&curve, 8).unwrap();

        for (i, point) in seq.iter().enumerate() {
            assert_eq!(point, &double_and_add(&curve, &g, 1 << i).unwrap(), "entry {i}");
            assert!(curve.is_on_curve(point));
        }
    }

    #[test]
    fn test_deterministic() {
        let curve = WeierstrassCurve::new(CurveParams::p224());
        let a = PowerSequence::generate(&curve, 32).unwrap();
        let b = PowerSequence::generate(&curve, 32).unwrap();
        assert_eq!(a, b);
        assert!(a.iter().all(|p| curve.is_on_curve(p)));
    }
}
