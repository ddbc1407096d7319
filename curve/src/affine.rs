use num_bigint::BigUint;

/// Point on the curve in affine coordinates, or the point at infinity.
///
/// The identity is its own variant rather than a sentinel coordinate pair:
/// it has no affine coordinates, and the affine formulas never accept it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Point {
    /// The point at infinity (identity element)
    Identity,
    /// A finite point with canonical coordinates in `[0, p)`
    Affine { x: BigUint, y: BigUint },
}

impl Point {
    /// Create a finite affine point.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Point::Affine { x, y }
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    #[inline]
    pub fn x(&self) -> Option<&BigUint> {
        self.coordinates().map(|(x, _)| x)
    }

    #[inline]
    pub fn y(&self) -> Option<&BigUint> {
        self.coordinates().map(|(_, y)| y)
    }

    /// Both coordinates, or `None` for the identity.
    #[inline]
    pub fn coordinates(&self) -> Option<(&BigUint, &BigUint)> {
        match self {
            Point::Identity => None,
            Point::Affine { x, y } => Some((x, y)),
        }
    }
}
