//! ECDH over the configured curves
//!
//! Works on every curve, including the Montgomery-form Curve25519: both
//! parties run the same engine with the same parameters, so
//! `d_A · (d_B · G) == d_B · (d_A · G)` holds regardless of which group
//! law the formulas realise.

use core::fmt;
use ecckit_algorithms::{
    generate_private_key, scalar_mul, CurveId, CurveParameters, Point, PrivateKey,
};
use ecckit_api::{Error, KeyAgreement, RandomSource, Result};
use ecckit_params::EC_FIELD_ELEMENT_SIZE;
use tracing::{debug, warn};
use zeroize::Zeroizing;

/// Compute the shared point `d · peer_public_key` on the private key's
/// curve.
///
/// The peer point is not checked for curve membership.
pub fn ecdh(private_key: &PrivateKey<'_>, peer_public_key: &Point) -> Result<Point> {
    let shared = scalar_mul(private_key.d(), peer_public_key, private_key.curve())?;
    if shared.is_identity() {
        warn!(curve = private_key.curve().name(), "ECDH produced the identity point");
    }
    Ok(shared)
}

/// Shared secret produced by [`Ecdh::agree`]
#[derive(Clone, PartialEq, Eq)]
pub struct SharedSecret(Point);

impl SharedSecret {
    /// The shared point
    pub fn point(&self) -> &Point {
        &self.0
    }

    /// X-coordinate as 32 big-endian bytes, wiped on drop.
    pub fn x_bytes(&self) -> Zeroizing<[u8; EC_FIELD_ELEMENT_SIZE]> {
        Zeroizing::new(self.0.x_coordinate_bytes())
    }

    /// Unwrap into the underlying point
    pub fn into_point(self) -> Point {
        self.0
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret(<redacted>)")
    }
}

/// ECDH bound to one named curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ecdh {
    id: CurveId,
}

impl Ecdh {
    /// Key agreement on `id`
    pub fn new(id: CurveId) -> Self {
        Ecdh { id }
    }

    /// The curve this instance is bound to
    pub fn curve_id(&self) -> CurveId {
        self.id
    }

    /// Shared parameters of the bound curve
    pub fn curve(&self) -> &'static CurveParameters {
        self.id.params()
    }

    fn check_curve(&self, key: &PrivateKey<'_>) -> Result<()> {
        let actual = key.curve().name();
        if actual != self.id.name() {
            return Err(Error::CurveMismatch {
                expected: self.id.name(),
                actual,
            });
        }
        Ok(())
    }
}

impl KeyAgreement for Ecdh {
    type PrivateKey = PrivateKey<'static>;
    type PublicKey = Point;
    type SharedSecret = SharedSecret;

    fn name(&self) -> &'static str {
        match self.id {
            CurveId::Secp256k1 => "ECDH-secp256k1",
            CurveId::Secp256r1 => "ECDH-secp256r1",
            CurveId::BrainpoolP256t1 => "ECDH-brainpoolP256t1",
            CurveId::Curve25519 => "ECDH-curve25519",
        }
    }

    fn keypair<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Self::PrivateKey> {
        let key = generate_private_key(self.curve(), rng)?;
        debug!(scheme = self.name(), "generated ECDH key pair");
        Ok(key)
    }

    fn public_key(private_key: &Self::PrivateKey) -> Self::PublicKey {
        private_key.public_key().clone()
    }

    fn agree(
        &self,
        private_key: &Self::PrivateKey,
        peer_public_key: &Self::PublicKey,
    ) -> Result<Self::SharedSecret> {
        self.check_curve(private_key)?;
        ecdh(private_key, peer_public_key).map(SharedSecret)
    }
}
