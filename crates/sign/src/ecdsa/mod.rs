//! ECDSA over SHA-256
//!
//! Signing draws a fresh nonce for every signature by rejection sampling.
//! There is no deterministic (RFC 6979) mode.

use ecckit_algorithms::field::{add_mod, mod_inverse, mul_mod};
use ecckit_algorithms::{
    add, generate_private_key, scalar_mul, scalar_mul_base, CurveId, CurveParameters, Point,
    PrivateKey,
};
use ecckit_api::error::validate;
use ecckit_api::{Error, RandomSource, Result, SignatureScheme};
use ecckit_params::MAX_NONCE_ATTEMPTS;
use num_bigint::BigUint;
use num_traits::Zero;
use sha2::{Digest, Sha256};
use tracing::{debug, trace};
use zeroize::Zeroizing;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ECDSA signature `(r, s)`.
///
/// The fields are public so callers can build signatures from raw
/// integers; [`Signature::new`] does the same with a range check.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Signature {
    /// `R.x mod n`
    pub r: BigUint,
    /// `k⁻¹(z + r·d) mod n`
    pub s: BigUint,
}

impl Signature {
    /// Build a signature, rejecting components outside `[1, n - 1]`.
    pub fn new(r: BigUint, s: BigUint, curve: &CurveParameters) -> Result<Self> {
        let signature = Signature { r, s };
        signature.validate(curve)?;
        Ok(signature)
    }

    /// Check both components against the curve order.
    pub fn validate(&self, curve: &CurveParameters) -> Result<()> {
        let zero = BigUint::zero();
        validate::signature_component("r", &self.r, &zero, curve.n())?;
        validate::signature_component("s", &self.s, &zero, curve.n())
    }
}

/// SHA-256 digest of `message`
pub fn message_hash(message: &[u8]) -> [u8; 32] {
    Sha256::digest(message).into()
}

/// Convert a digest to the integer `z`.
///
/// The digest is read big-endian, truncated to the bit length of `n` when
/// longer, then reduced mod `n`.
pub fn hash_to_scalar(digest: &[u8], n: &BigUint) -> BigUint {
    let mut z = BigUint::from_bytes_be(digest);
    let digest_bits = digest.len() as u64 * 8;
    let order_bits = n.bits();
    if digest_bits > order_bits {
        z >>= digest_bits - order_bits;
    }
    z % n
}

// One rejection-sampling draw: the excess high bits are masked so the
// candidate has the bit length of `n`. Out-of-range draws yield `None`.
fn draw_nonce<R: RandomSource + ?Sized>(
    curve: &CurveParameters,
    buf: &mut [u8],
    rng: &mut R,
) -> Result<Option<BigUint>> {
    rng.fill_random(buf)?;
    let excess = buf.len() as u64 * 8 - curve.order_bits();
    if excess > 0 {
        buf[0] &= 0xff >> excess;
    }
    let k = BigUint::from_bytes_be(buf);
    Ok(curve.is_scalar_in_range(&k).then_some(k))
}

/// Sign `message` with `private_key`.
///
/// Algorithm:
/// 1. z = SHA-256(message) as an integer mod n
/// 2. k uniform in [1, n-1] from `rng`
/// 3. R = k·G, r = R.x mod n; if r = 0, draw a new k
/// 4. s = k⁻¹(z + r·d) mod n; if s = 0, draw a new k
///
/// At most [`MAX_NONCE_ATTEMPTS`] nonces are drawn. Fails with
/// [`Error::UnsupportedCurve`] on a Montgomery curve.
pub fn sign<R: RandomSource + ?Sized>(
    private_key: &PrivateKey<'_>,
    message: &[u8],
    rng: &mut R,
) -> Result<Signature> {
    let curve = private_key.curve();
    if !curve.supports_signatures() {
        return Err(Error::UnsupportedCurve {
            curve: curve.name(),
            operation: "ECDSA signing",
        });
    }
    let n = curve.n();

    let z = hash_to_scalar(&message_hash(message), n);
    let mut buf = Zeroizing::new(vec![0u8; curve.order_bits().div_ceil(8) as usize]);

    for attempt in 1..=MAX_NONCE_ATTEMPTS {
        let k = match draw_nonce(curve, &mut buf, rng)? {
            Some(k) => k,
            None => {
                trace!(curve = curve.name(), attempt, "nonce out of range");
                continue;
            }
        };

        let big_r = scalar_mul_base(&k, curve)?;
        let r = &big_r.x % n;
        if r.is_zero() {
            trace!(curve = curve.name(), attempt, "r = 0, retrying");
            continue;
        }

        let k_inv = mod_inverse(&k, n)?;
        let rd = mul_mod(&r, private_key.d(), n);
        let s = mul_mod(&k_inv, &add_mod(&z, &rd, n), n);
        if s.is_zero() {
            trace!(curve = curve.name(), attempt, "s = 0, retrying");
            continue;
        }

        debug!(curve = curve.name(), attempt, "produced ECDSA signature");
        return Ok(Signature { r, s });
    }

    Err(Error::NonceGenerationExhausted {
        curve: curve.name(),
        attempts: MAX_NONCE_ATTEMPTS,
    })
}

/// Verify `signature` over `message` against `public_key` on `curve`.
///
/// Algorithm:
/// 1. Reject unless r and s lie in [1, n-1]
/// 2. z = SHA-256(message) as an integer mod n
/// 3. w = s⁻¹, u₁ = z·w, u₂ = r·w (mod n)
/// 4. R' = u₁·G + u₂·Q
/// 5. Accept iff R' is not the identity and R'.x mod n = r
///
/// Never errors: every failure, including a Montgomery curve, is `false`.
pub fn verify(
    public_key: &Point,
    message: &[u8],
    signature: &Signature,
    curve: &CurveParameters,
) -> bool {
    if !curve.supports_signatures() {
        debug!(curve = curve.name(), "ECDSA verification is not defined on this curve");
        return false;
    }
    if let Err(e) = signature.validate(curve) {
        debug!(curve = curve.name(), error = %e, "signature rejected");
        return false;
    }

    match recover_x(public_key, message, signature, curve) {
        Ok(Some(x)) => {
            let valid = x == signature.r;
            if !valid {
                debug!(curve = curve.name(), "signature does not match");
            }
            valid
        }
        Ok(None) => {
            debug!(curve = curve.name(), "verification point is the identity");
            false
        }
        Err(e) => {
            debug!(curve = curve.name(), error = %e, "signature rejected");
            false
        }
    }
}

// R'.x mod n, or None when R' is the identity
fn recover_x(
    public_key: &Point,
    message: &[u8],
    signature: &Signature,
    curve: &CurveParameters,
) -> Result<Option<BigUint>> {
    let n = curve.n();
    let z = hash_to_scalar(&message_hash(message), n);

    let w = mod_inverse(&signature.s, n)?;
    let u1 = mul_mod(&z, &w, n);
    let u2 = mul_mod(&signature.r, &w, n);

    let point = add(
        &scalar_mul_base(&u1, curve)?,
        &scalar_mul(&u2, public_key, curve)?,
        curve,
    )?;
    if point.is_identity() {
        return Ok(None);
    }
    Ok(Some(&point.x % n))
}

/// ECDSA bound to one signature-capable curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ecdsa {
    id: CurveId,
}

impl Ecdsa {
    /// ECDSA on `id`. Fails with [`Error::UnsupportedCurve`] for curves
    /// limited to key agreement.
    pub fn new(id: CurveId) -> Result<Self> {
        if !id.params().supports_signatures() {
            return Err(Error::UnsupportedCurve {
                curve: id.name(),
                operation: "ECDSA",
            });
        }
        Ok(Ecdsa { id })
    }

    /// The curve this instance is bound to
    pub fn curve_id(&self) -> CurveId {
        self.id
    }

    /// Shared parameters of the bound curve
    pub fn curve(&self) -> &'static CurveParameters {
        self.id.params()
    }
}

impl SignatureScheme for Ecdsa {
    type PublicKey = Point;
    type SecretKey = PrivateKey<'static>;
    type SignatureData = Signature;

    fn name(&self) -> &'static str {
        match self.id {
            CurveId::Secp256k1 => "ECDSA-secp256k1",
            CurveId::Secp256r1 => "ECDSA-secp256r1",
            CurveId::BrainpoolP256t1 => "ECDSA-brainpoolP256t1",
            CurveId::Curve25519 => "ECDSA-curve25519",
        }
    }

    fn keypair<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Self::SecretKey> {
        generate_private_key(self.curve(), rng)
    }

    fn public_key(secret_key: &Self::SecretKey) -> Self::PublicKey {
        secret_key.public_key().clone()
    }

    fn sign<R: RandomSource + ?Sized>(
        &self,
        message: &[u8],
        secret_key: &Self::SecretKey,
        rng: &mut R,
    ) -> Result<Self::SignatureData> {
        let actual = secret_key.curve().name();
        if actual != self.id.name() {
            return Err(Error::CurveMismatch {
                expected: self.id.name(),
                actual,
            });
        }
        sign(secret_key, message, rng)
    }

    fn verify(
        &self,
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> bool {
        verify(public_key, message, signature, self.curve())
    }
}
