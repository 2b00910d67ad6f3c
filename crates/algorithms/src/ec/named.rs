//! The configured named curves
//!
//! Constants come from `ecckit-params` as hex strings and are parsed once,
//! on first access, into shared `'static` parameter sets.

use super::curve::{CurveForm, CurveParameters};
use super::point::Point;
use crate::key::{ClampedPolicy, LengthNonZeroPolicy, PrivateKeyPolicy, RangePolicy};
use core::fmt;
use core::str::FromStr;
use ecckit_api::Error;
use ecckit_params::{CurveConstants, BRAINPOOL_P256_T1, CURVE25519, SECP256K1, SECP256R1};
use lazy_static::lazy_static;
use num_bigint::BigUint;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

fn parse_hex(value: &'static str) -> BigUint {
    BigUint::parse_bytes(value.as_bytes(), 16).expect("curve constants must be valid hex")
}

fn build(
    constants: &CurveConstants,
    form: CurveForm,
    key_policy: &'static dyn PrivateKeyPolicy,
) -> CurveParameters {
    CurveParameters::new(
        constants.name,
        form,
        parse_hex(constants.p),
        parse_hex(constants.a),
        parse_hex(constants.b),
        parse_hex(constants.n),
        Point::new(parse_hex(constants.gx), parse_hex(constants.gy)),
        key_policy,
    )
}

lazy_static! {
    static ref SECP256K1_PARAMS: CurveParameters =
        build(&SECP256K1, CurveForm::ShortWeierstrass, &RangePolicy);
    static ref SECP256R1_PARAMS: CurveParameters =
        build(&SECP256R1, CurveForm::ShortWeierstrass, &RangePolicy);
    static ref BRAINPOOL_P256T1_PARAMS: CurveParameters =
        build(&BRAINPOOL_P256_T1, CurveForm::ShortWeierstrass, &LengthNonZeroPolicy);
    static ref CURVE25519_PARAMS: CurveParameters =
        build(&CURVE25519, CurveForm::Montgomery, &ClampedPolicy);
}

/// secp256k1 (y² = x³ + 7)
pub fn secp256k1() -> &'static CurveParameters {
    &SECP256K1_PARAMS
}

/// secp256r1 / NIST P-256
pub fn secp256r1() -> &'static CurveParameters {
    &SECP256R1_PARAMS
}

/// brainpoolP256t1, with the length/non-zero private-key policy
pub fn brainpool_p256t1() -> &'static CurveParameters {
    &BRAINPOOL_P256T1_PARAMS
}

/// Curve25519 in Montgomery form, with clamped private keys
pub fn curve25519() -> &'static CurveParameters {
    &CURVE25519_PARAMS
}

/// Identifier for one of the configured curves.
///
/// Parses from the canonical name or a common alias, case-insensitively:
///
/// ```
/// use ecckit_algorithms::CurveId;
///
/// let id: CurveId = "P-256".parse().unwrap();
/// assert_eq!(id, CurveId::Secp256r1);
/// assert_eq!(id.params().name(), "secp256r1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CurveId {
    /// secp256k1
    Secp256k1,
    /// secp256r1 / P-256
    Secp256r1,
    /// brainpoolP256t1
    BrainpoolP256t1,
    /// Curve25519
    Curve25519,
}

impl CurveId {
    /// Every configured curve, in declaration order
    pub const ALL: [CurveId; 4] = [
        CurveId::Secp256k1,
        CurveId::Secp256r1,
        CurveId::BrainpoolP256t1,
        CurveId::Curve25519,
    ];

    /// Canonical name
    pub fn name(self) -> &'static str {
        match self {
            CurveId::Secp256k1 => SECP256K1.name,
            CurveId::Secp256r1 => SECP256R1.name,
            CurveId::BrainpoolP256t1 => BRAINPOOL_P256_T1.name,
            CurveId::Curve25519 => CURVE25519.name,
        }
    }

    /// Shared parameter set for this curve
    pub fn params(self) -> &'static CurveParameters {
        match self {
            CurveId::Secp256k1 => secp256k1(),
            CurveId::Secp256r1 => secp256r1(),
            CurveId::BrainpoolP256t1 => brainpool_p256t1(),
            CurveId::Curve25519 => curve25519(),
        }
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "secp256k1" | "k256" | "k-256" => Ok(CurveId::Secp256k1),
            "secp256r1" | "p256" | "p-256" | "prime256v1" => Ok(CurveId::Secp256r1),
            "brainpoolp256t1" => Ok(CurveId::BrainpoolP256t1),
            "curve25519" | "x25519" => Ok(CurveId::Curve25519),
            _ => Err(Error::UnknownCurve {
                name: s.to_string(),
            }),
        }
    }
}
