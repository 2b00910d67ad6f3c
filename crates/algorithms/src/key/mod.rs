//! Private-key generation and public-key derivation
//!
//! Generation draws 32 bytes from the injected [`RandomSource`], lets the
//! curve's [`PrivateKeyPolicy`] condition and judge them, and retries a
//! bounded number of times.

mod policy;

pub use policy::{ClampedPolicy, LengthNonZeroPolicy, PrivateKeyPolicy, RangePolicy};

use crate::ec::{scalar_mul_base, CurveParameters, Point};
use core::fmt;
use ecckit_api::{Error, RandomSource, Result};
use ecckit_params::{EC_SCALAR_SIZE, MAX_KEY_GENERATION_ATTEMPTS};
use num_bigint::BigUint;
use tracing::{debug, trace};
use zeroize::Zeroizing;

/// A private scalar bound to its curve, together with its public point.
#[derive(Clone)]
pub struct PrivateKey<'c> {
    d: BigUint,
    curve: &'c CurveParameters,
    public_key: Point,
}

impl<'c> PrivateKey<'c> {
    /// Build a key from a caller-supplied scalar and derive its public
    /// point. The scalar is not checked against the curve's policy; use
    /// [`PrivateKey::is_valid`] for that.
    pub fn from_scalar(curve: &'c CurveParameters, d: BigUint) -> Result<Self> {
        let public_key = scalar_mul_base(&d, curve)?;
        Ok(PrivateKey {
            d,
            curve,
            public_key,
        })
    }

    /// The private scalar
    pub fn d(&self) -> &BigUint {
        &self.d
    }

    /// The curve this key belongs to
    pub fn curve(&self) -> &'c CurveParameters {
        self.curve
    }

    /// The cached public point `d · G`
    pub fn public_key(&self) -> &Point {
        &self.public_key
    }

    /// Recompute `d · G`, store it and return it. Idempotent.
    pub fn derive_public_key(&mut self) -> Result<&Point> {
        self.public_key = scalar_mul_base(&self.d, self.curve)?;
        Ok(&self.public_key)
    }

    /// Run the curve's validity policy on this key.
    pub fn is_valid(&self) -> bool {
        is_valid_private_key(self, self.curve)
    }
}

impl fmt::Debug for PrivateKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("curve", &self.curve.name())
            .field("d", &"<redacted>")
            .field("public_key", &self.public_key)
            .finish()
    }
}

/// Check `key` against the validity policy associated with `curve`.
pub fn is_valid_private_key(key: &PrivateKey<'_>, curve: &CurveParameters) -> bool {
    curve.key_policy().is_valid(&key.d, curve)
}

/// Generate a private key under the curve's own policy.
pub fn generate_private_key<'c, R: RandomSource + ?Sized>(
    curve: &'c CurveParameters,
    rng: &mut R,
) -> Result<PrivateKey<'c>> {
    generate_private_key_with_policy(curve, curve.key_policy(), rng)
}

/// Generate a private key under an explicitly supplied policy.
///
/// Makes at most [`MAX_KEY_GENERATION_ATTEMPTS`] draws and fails with
/// [`Error::KeyGenerationExhausted`] if none is accepted. Random-source
/// failures are returned immediately, not retried.
pub fn generate_private_key_with_policy<'c, R: RandomSource + ?Sized>(
    curve: &'c CurveParameters,
    policy: &dyn PrivateKeyPolicy,
    rng: &mut R,
) -> Result<PrivateKey<'c>> {
    let mut candidate = Zeroizing::new([0u8; EC_SCALAR_SIZE]);

    for attempt in 1..=MAX_KEY_GENERATION_ATTEMPTS {
        rng.fill_random(&mut candidate[..])?;
        policy.condition(&mut candidate);

        let d = BigUint::from_bytes_be(&candidate[..]);
        if policy.is_valid(&d, curve) {
            debug!(curve = curve.name(), policy = policy.name(), attempt, "generated private key");
            return PrivateKey::from_scalar(curve, d);
        }
        trace!(curve = curve.name(), policy = policy.name(), attempt, "rejected private key candidate");
    }

    Err(Error::KeyGenerationExhausted {
        curve: curve.name(),
        attempts: MAX_KEY_GENERATION_ATTEMPTS,
    })
}

/// Draw exactly `len` random bytes.
pub fn random_bytes<R: RandomSource + ?Sized>(rng: &mut R, len: usize) -> Result<Vec<u8>> {
    let mut out = vec![0u8; len];
    rng.fill_random(&mut out)?;
    Ok(out)
}
