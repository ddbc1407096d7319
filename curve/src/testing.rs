//! Small-curve fixture and reference arithmetic for tests in this
//! workspace. Built only for this crate's tests or with the `test-support`
//! feature.

use num_traits::Zero;

use crate::{CurveError, CurveParams, Point, WeierstrassCurve};

/// y^2 = x^3 + x + 1 over GF(23), G = (3, 10) of order 28.
pub fn toy_curve() -> WeierstrassCurve {
    WeierstrassCurve::new(CurveParams::from_limbs(&[23], &[1], &[1], &[3], &[10], &[28]))
}

/// Complete group law on top of the partial affine formulas.
pub fn group_add(curve: &WeierstrassCurve, lhs: &Point, rhs: &Point) -> Result<Point, CurveError> {
    match (lhs, rhs) {
        (Point::Identity, p) | (p, Point::Identity) => Ok(p.clone()),
        (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) if x1 == x2 => {
            if curve.field().add(y1, y2).is_zero() {
                Ok(Point::Identity)
            } else {
                curve.double(lhs)
            }
        }
        _ => curve.add(lhs, rhs),
    }
}

/// Reference left-to-right double-and-add `e * point`.
pub fn double_and_add(curve: &WeierstrassCurve, point: &Point, e: u64) -> Result<Point, CurveError> {
    let mut acc = Point::Identity;
    for i in (0..u64::BITS).rev() {
        acc = group_add(curve, &acc, &acc)?;
        if (e >> i) & 1 == 1 {
            acc = group_add(curve, &acc, point)?;
        }
    }
    Ok(acc)
}
