//! Curve parameters: y^2 = x^3 + a*x + b over GF(p), base point G of order n.
//!
//! Parameters are trusted. Construction only checks that every value is a
//! canonical field element; it does not verify the curve equation or the
//! group order.

use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::{CurveError, Point};

// NIST P-224 (the default configuration).
const P224_P: [u64; 4] = [
    0x0000000000000001,
    0xffffffff00000000,
    0xffffffffffffffff,
    0x00000000ffffffff,
];
const P224_A: [u64; 4] = [
    0xfffffffffffffffe,
    0xfffffffeffffffff,
    0xffffffffffffffff,
    0x00000000ffffffff,
];
const P224_B: [u64; 4] = [
    0x270b39432355ffb4,
    0x5044b0b7d7bfd8ba,
    0x0c04b3abf5413256,
    0x00000000b4050a85,
];
const P224_GX: [u64; 4] = [
    0x343280d6115c1d21,
    0x4a03c1d356c21122,
    0x6bb4bf7f321390b9,
    0x00000000b70e0cbd,
];
const P224_GY: [u64; 4] = [
    0x44d5819985007e34,
    0xcd4375a05a074764,
    0xb5f723fb4c22dfe6,
    0x00000000bd376388,
];
const P224_N: [u64; 4] = [
    0x13dd29455c5c2a3d,
    0xffff16a2e0b8f03e,
    0xffffffffffffffff,
    0x00000000ffffffff,
];

// NIST P-256.
const P256_P: [u64; 4] = [
    0xffffffffffffffff,
    0x00000000ffffffff,
    0x0000000000000000,
    0xffffffff00000001,
];
const P256_A: [u64; 4] = [
    0xfffffffffffffffc,
    0x00000000ffffffff,
    0x0000000000000000,
    0xffffffff00000001,
];
const P256_B: [u64; 4] = [
    0x3bce3c3e27d2604b,
    0x651d06b0cc53b0f6,
    0xb3ebbd55769886bc,
    0x5ac635d8aa3a93e7,
];
const P256_GX: [u64; 4] = [
    0xf4a13945d898c296,
    0x77037d812deb33a0,
    0xf8bce6e563a440f2,
    0x6b17d1f2e12c4247,
];
const P256_GY: [u64; 4] = [
    0xcbb6406837bf51f5,
    0x2bce33576b315ece,
    0x8ee7eb4a7c0f9e16,
    0x4fe342e2fe1a7f9b,
];
const P256_N: [u64; 4] = [
    0xf3b9cac2fc632551,
    0xbce6faada7179e84,
    0xffffffffffffffff,
    0xffffffff00000000,
];

// NIST P-192.
const P192_P: [u64; 3] = [
    0xffffffffffffffff,
    0xfffffffffffffffe,
    0xffffffffffffffff,
];
const P192_A: [u64; 3] = [
    0xfffffffffffffffc,
    0xfffffffffffffffe,
    0xffffffffffffffff,
];
const P192_B: [u64; 3] = [
    0xfeb8deecc146b9b1,
    0x0fa7e9ab72243049,
    0x64210519e59c80e7,
];
const P192_GX: [u64; 3] = [
    0xf4ff0afd82ff1012,
    0x7cbf20eb43a18800,
    0x188da80eb03090f6,
];
const P192_GY: [u64; 3] = [
    0x73f977a11e794811,
    0x631011ed6b24cdd5,
    0x07192b95ffc8da78,
];
const P192_N: [u64; 3] = [
    0x146bc9b1b4d22831,
    0xffffffff99def836,
    0xffffffffffffffff,
];

/// Immutable parameter set of a short Weierstrass curve.
///
/// Only obtainable through [`CurveParams::new`], a preset, or a
/// [`CurveConfig`], so every instance has passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParams {
    p: BigUint,
    a: BigUint,
    b: BigUint,
    gx: BigUint,
    gy: BigUint,
    n: BigUint,
}

/// Build a big integer from little-endian u64 limbs.
fn from_u64_limbs(limbs: &[u64]) -> BigUint {
    let mut bytes = Vec::with_capacity(limbs.len() * 8);
    for &limb in limbs {
        bytes.extend_from_slice(&limb.to_le_bytes());
    }
    BigUint::from_bytes_le(&bytes)
}

impl CurveParams {
    /// Create a parameter set, checking that `p >= 3` and that `a`, `b` and
    /// the base point coordinates are reduced modulo `p`.
    pub fn new(
        p: BigUint,
        a: BigUint,
        b: BigUint,
        gx: BigUint,
        gy: BigUint,
        n: BigUint,
    ) -> Result<Self, CurveError> {
        if p < BigUint::from(3u32) {
            return Err(CurveError::InvalidParameter(format!(
                "modulus p = {p} is too small"
            )));
        }
        for (name, value) in [("a", &a), ("b", &b), ("gx", &gx), ("gy", &gy)] {
            if value >= &p {
                return Err(CurveError::InvalidParameter(format!(
                    "{name} = {value} is not reduced modulo p"
                )));
            }
        }
        if n.is_zero() {
            return Err(CurveError::InvalidParameter(
                "group order n must be non-zero".into(),
            ));
        }

        Ok(Self { p, a, b, gx, gy, n })
    }

    pub(crate) fn from_limbs(
        p: &[u64],
        a: &[u64],
        b: &[u64],
        gx: &[u64],
        gy: &[u64],
        n: &[u64],
    ) -> Self {
        Self {
            p: from_u64_limbs(p),
            a: from_u64_limbs(a),
            b: from_u64_limbs(b),
            gx: from_u64_limbs(gx),
            gy: from_u64_limbs(gy),
            n: from_u64_limbs(n),
        }
    }

    /// NIST P-224 (secp224r1).
    pub fn p224() -> Self {
        Self::from_limbs(&P224_P, &P224_A, &P224_B, &P224_GX, &P224_GY, &P224_N)
    }

    /// NIST P-256 (secp256r1).
    pub fn p256() -> Self {
        Self::from_limbs(&P256_P, &P256_A, &P256_B, &P256_GX, &P256_GY, &P256_N)
    }

    /// NIST P-192 (secp192r1).
    pub fn p192() -> Self {
        Self::from_limbs(&P192_P, &P192_A, &P192_B, &P192_GX, &P192_GY, &P192_N)
    }

    /// Look up a named preset (`p192`, `p224`, `p256`), case-insensitively.
    pub fn by_name(name: &str) -> Result<Self, CurveError> {
        match name.to_ascii_lowercase().as_str() {
            "p192" | "p-192" | "secp192r1" => Ok(Self::p192()),
            "p224" | "p-224" | "secp224r1" => Ok(Self::p224()),
            "p256" | "p-256" | "secp256r1" => Ok(Self::p256()),
            other => Err(CurveError::InvalidParameter(format!(
                "unknown curve `{other}`"
            ))),
        }
    }

    /// Prime modulus of the base field.
    #[inline]
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    #[inline]
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    #[inline]
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    #[inline]
    pub fn gx(&self) -> &BigUint {
        &self.gx
    }

    #[inline]
    pub fn gy(&self) -> &BigUint {
        &self.gy
    }

    /// Order of the base point.
    #[inline]
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// The base point G.
    pub fn generator(&self) -> Point {
        Point::new(self.gx.clone(), self.gy.clone())
    }

    /// Bit length of the field modulus.
    pub fn field_bits(&self) -> u64 {
        self.p.bits()
    }
}

/// Textual form of [`CurveParams`], as read from a configuration file.
///
/// Each value is a decimal string or a `0x`-prefixed hex string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveConfig {
    pub p: String,
    pub a: String,
    pub b: String,
    pub gx: String,
    pub gy: String,
    pub n: String,
}

fn parse_uint(name: &str, text: &str) -> Result<BigUint, CurveError> {
    let text = text.trim();
    let (digits, radix) = match text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (text, 10),
    };
    let digits = digits.replace('_', "");

    BigUint::parse_bytes(digits.as_bytes(), radix).ok_or_else(|| {
        CurveError::InvalidParameter(format!("{name}: `{text}` is not an unsigned integer"))
    })
}

impl TryFrom<CurveConfig> for CurveParams {
    type Error = CurveError;

    fn try_from(config: CurveConfig) -> Result<Self, Self::Error> {
        CurveParams::new(
            parse_uint("p", &config.p)?,
            parse_uint("a", &config.a)?,
            parse_uint("b", &config.b)?,
            parse_uint("gx", &config.gx)?,
            parse_uint("gy", &config.gy)?,
            parse_uint("n", &config.n)?,
        )
    }
}

impl From<&CurveParams> for CurveConfig {
    fn from(params: &CurveParams) -> Self {
        let hex = |v: &BigUint| format!("0x{}", v.to_str_radix(16));
        Self {
            p: hex(&params.p),
            a: hex(&params.a),
            b: hex(&params.b),
            gx: hex(&params.gx),
            gy: hex(&params.gy),
            n: hex(&params.n),
        }
    }
}
