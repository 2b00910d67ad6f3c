//! Digital signature traits for ecckit

use super::random::RandomSource;
use crate::Result;

/// Core trait for signature schemes bound to one curve.
///
/// Signing takes an explicit random source: every signature draws a fresh
/// nonce from it.
pub trait SignatureScheme {
    /// Public key type
    type PublicKey: Clone;

    /// Secret key type
    type SecretKey;

    /// Signature data type
    type SignatureData: Clone;

    /// Returns the name of this signature scheme
    fn name(&self) -> &'static str;

    /// Generate a new secret key (carrying its public key) using `rng`.
    fn keypair<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Self::SecretKey>;

    /// Extract the public key from a secret key
    fn public_key(secret_key: &Self::SecretKey) -> Self::PublicKey;

    /// Sign a message with the given secret key
    fn sign<R: RandomSource + ?Sized>(
        &self,
        message: &[u8],
        secret_key: &Self::SecretKey,
        rng: &mut R,
    ) -> Result<Self::SignatureData>;

    /// Verify a signature against a message and public key.
    ///
    /// A mismatching or malformed signature yields `false`, never an error.
    fn verify(
        &self,
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> bool;
}
