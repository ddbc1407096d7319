//! Arithmetic in the prime base field GF(p).
//!
//! Elements are plain `BigUint`s. Every operation reduces its result into
//! `[0, p)`, and subtraction adds `p` before subtracting so that no
//! intermediate value goes negative.

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

use crate::CurveError;

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` with `g = gcd(a, b)` and `a*x + b*y = g`. The
/// coefficients are the ones produced by the classic recursive formulation
/// `egcd(a, b) = egcd(b mod a, a)`, computed here without recursion.
pub fn egcd(a: &BigUint, b: &BigUint) -> (BigUint, BigInt, BigInt) {
    let mut old_r = BigInt::from(b.clone());
    let mut r = BigInt::from(a.clone());
    let (mut old_x, mut x) = (BigInt::zero(), BigInt::one());
    let (mut old_y, mut y) = (BigInt::one(), BigInt::zero());

    while !r.is_zero() {
        let q = &old_r / &r;

        let next_r = &old_r - &q * &r;
        old_r = core::mem::replace(&mut r, next_r);

        let next_x = &old_x - &q * &x;
        old_x = core::mem::replace(&mut x, next_x);

        let next_y = &old_y - &q * &y;
        old_y = core::mem::replace(&mut y, next_y);
    }

    // Remainders never go negative for non-negative inputs.
    let (_, g) = old_r.into_parts();
    (g, old_x, old_y)
}

/// Returns `x` in `[0, m)` with `a * x = 1 (mod m)`.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Result<BigUint, CurveError> {
    let (g, x, _) = egcd(a, m);
    if !g.is_one() || m.is_zero() {
        return Err(CurveError::NoInverse {
            value: a.clone(),
            modulus: m.clone(),
        });
    }

    let m = BigInt::from(m.clone());
    let (_, inverse) = (((x % &m) + &m) % &m).into_parts();
    Ok(inverse)
}

/// The prime field GF(p) for a fixed modulus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeField {
    modulus: BigUint,
}

impl PrimeField {
    pub fn new(modulus: BigUint) -> Self {
        Self { modulus }
    }

    #[inline]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Whether `a` is already a canonical field element.
    #[inline]
    pub fn contains(&self, a: &BigUint) -> bool {
        a < &self.modulus
    }

    #[inline]
    pub fn reduce(&self, a: &BigUint) -> BigUint {
        a % &self.modulus
    }

    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.modulus
    }

    /// `a - b mod p`, computed as `(p + a - b) mod p` on reduced operands.
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let a = self.reduce(a);
        let b = self.reduce(b);
        (&self.modulus + a - b) % &self.modulus
    }

    pub fn neg(&self, a: &BigUint) -> BigUint {
        self.sub(&BigUint::zero(), a)
    }

    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }

    #[inline]
    pub fn square(&self, a: &BigUint) -> BigUint {
        self.mul(a, a)
    }

    /// Multiplicative inverse; fails with [`CurveError::NoInverse`] for zero.
    pub fn inverse(&self, a: &BigUint) -> Result<BigUint, CurveError> {
        mod_inverse(&self.reduce(a), &self.modulus)
    }
}
