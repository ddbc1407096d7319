//! Affine point doubling and addition on y^2 = x^3 + a*x + b over GF(p).
//!
//! Both formulas are the textbook chord-and-tangent rules. They are partial:
//! the caller handles the identity, and adding a point to itself or to its
//! negation must go through [`WeierstrassCurve::double`] or be special-cased.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::{CurveError, CurveParams, Point, PrimeField};

/// A short Weierstrass curve bound to one parameter set.
#[derive(Clone, Debug)]
pub struct WeierstrassCurve {
    params: CurveParams,
    field: PrimeField,
}

impl WeierstrassCurve {
    pub fn new(params: CurveParams) -> Self {
        let field = PrimeField::new(params.p().clone());
        Self { params, field }
    }

    #[inline]
    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    #[inline]
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// The base point G.
    pub fn generator(&self) -> Point {
        self.params.generator()
    }

    /// Check if a point is on the curve: y^2 = x^3 + a*x + b.
    pub fn is_on_curve(&self, point: &Point) -> bool {
        let Some((x, y)) = point.coordinates() else {
            return true;
        };
        if !self.field.contains(x) || !self.field.contains(y) {
            return false;
        }

        let f = &self.field;
        let y2 = f.square(y);
        let x3 = f.mul(&f.square(x), x);
        let ax = f.mul(self.params.a(), x);
        let rhs = f.add(&f.add(&x3, &ax), self.params.b());

        y2 == rhs
    }

    /// Point doubling: 2*P.
    ///
    /// Fails for the identity and for points with `y = 0`, where the tangent
    /// is vertical.
    pub fn double(&self, point: &Point) -> Result<Point, CurveError> {
        let Some((x, y)) = point.coordinates() else {
            return Err(CurveError::DegeneratePoint("cannot double the point at infinity"));
        };
        if self.field.reduce(y).is_zero() {
            return Err(CurveError::DegeneratePoint("cannot double a point with y = 0"));
        }
        let f = &self.field;

        // λ = (3x^2 + a) / (2y)
        let numerator = f.add(&f.mul(&BigUint::from(3u32), &f.square(x)), self.params.a());
        let lambda = f.mul(&numerator, &f.inverse(&(y << 1u32))?);

        // x_r = λ^2 - 2x
        let x_r = f.sub(&f.square(&lambda), &f.add(x, x));

        // y_r = λ(x - x_r) - y
        let y_r = f.sub(&f.mul(&lambda, &f.sub(x, &x_r)), y);

        Ok(Point::new(x_r, y_r))
    }

    /// Point addition for two distinct finite points with different x.
    pub fn add(&self, lhs: &Point, rhs: &Point) -> Result<Point, CurveError> {
        let (Some((x1, y1)), Some((x2, y2))) = (lhs.coordinates(), rhs.coordinates()) else {
            return Err(CurveError::DegeneratePoint(
                "the point at infinity cannot be added with the affine formula",
            ));
        };
        let f = &self.field;
        if f.reduce(x1) == f.reduce(x2) {
            return Err(CurveError::DegeneratePoint(
                "cannot add points that share an x-coordinate",
            ));
        }

        // λ = (y2 - y1) / (x2 - x1)
        let lambda = f.mul(&f.sub(y2, y1), &f.inverse(&f.sub(x2, x1))?);

        // x_r = λ^2 - x1 - x2
        let x_r = f.sub(&f.sub(&f.square(&lambda), x1), x2);

        // y_r = λ(x1 - x_r) - y1
        let y_r = f.sub(&f.mul(&lambda, &f.sub(x1, &x_r)), y1);

        Ok(Point::new(x_r, y_r))
    }

    /// Negate a point.
    pub fn negate(&self, point: &Point) -> Point {
        match point {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => Point::new(x.clone(), self.field.neg(y)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{double_and_add, toy_curve};

    fn big(v: u32) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn test_generator_on_curve() {
        let curve = toy_curve();
        let g = curve.generator();
        assert!(curve.is_on_curve(&g), "Generator point is not on the curve");
        assert!(!g.is_identity());
    }

    #[test]
    fn test_infinity_on_curve() {
        assert!(toy_curve().is_on_curve(&Point::Identity));
    }

    #[test]
    fn test_off_curve_point() {
        let curve = toy_curve();
        assert!(!curve.is_on_curve(&Point::new(big(3), big(11))));
        assert!(!curve.is_on_curve(&Point::new(big(26), big(10))));
    }

    #[test]
    fn test_point_doubling() {
        let curve = toy_curve();
        let g2 = curve.double(&curve.generator()).unwrap();

        assert_eq!(g2, Point::new(big(7), big(12)));
        assert!(curve.is_on_curve(&g2), "Doubled point is not on the curve");
    }

    #[test]
    fn test_point_addition() {
        let curve = toy_curve();
        let g = curve.generator();
        let g2 = curve.double(&g).unwrap();
        let g3 = curve.add(&g, &g2).unwrap();

        assert_eq!(g3, Point::new(big(19), big(5)));
        assert_eq!(curve.add(&g2, &g).unwrap(), g3);
        assert!(curve.is_on_curve(&g3));
    }

    #[test]
    fn test_multiples_stay_on_curve() {
        let curve = toy_curve();
        let g = curve.generator();
        for e in 1..28 {
            let p = double_and_add(&curve, &g, e).unwrap();
            assert!(curve.is_on_curve(&p), "{e}G is not on the curve");
        }
        assert_eq!(double_and_add(&curve, &g, 28).unwrap(), Point::Identity);
    }

    #[test]
    fn test_double_rejects_y_zero() {
        let curve = toy_curve();
        let order_two = Point::new(big(4), big(0));
        assert!(curve.is_on_curve(&order_two));
        assert_eq!(double_and_add(&curve, &curve.generator(), 14).unwrap(), order_two);

        assert!(matches!(
            curve.double(&order_two),
            Err(CurveError::DegeneratePoint(_))
        ));
    }

    #[test]
    fn test_double_rejects_identity() {
        assert!(matches!(
            toy_curve().double(&Point::Identity),
            Err(CurveError::DegeneratePoint(_))
        ));
    }

    #[test]
    fn test_add_rejects_equal_x() {
        let curve = toy_curve();
        let g = curve.generator();
        let neg_g = curve.negate(&g);

        assert_eq!(neg_g, Point::new(big(3), big(13)));
        assert!(matches!(curve.add(&g, &g), Err(CurveError::DegeneratePoint(_))));
        assert!(matches!(
            curve.add(&g, &neg_g),
            Err(CurveError::DegeneratePoint(_))
        ));
    }

    #[test]
    fn test_add_rejects_identity() {
        let curve = toy_curve();
        let g = curve.generator();
        assert!(curve.add(&g, &Point::Identity).is_err());
        assert!(curve.add(&Point::Identity, &g).is_err());
    }

    #[test]
    fn test_p256_double_matches_known_value() {
        let curve = WeierstrassCurve::new(CurveParams::p256());
        let g2 = curve.double(&curve.generator()).unwrap();
        let expected_x = BigUint::parse_bytes(
            b"7cf27b188d034f7e8a52380304b51ac3c08969e277f21b35a60b48fc47669978",
            16,
        )
        .unwrap();

        assert_eq!(g2.x(), Some(&expected_x));
        assert!(curve.is_on_curve(&g2));
    }
}
