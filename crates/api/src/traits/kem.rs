//! Trait definition for elliptic-curve key agreement
//!
//! Unlike a KEM there is no ciphertext: both parties hold a key pair and
//! combine their own secret with the peer's public value.

use super::random::RandomSource;
use crate::Result;

/// Trait for a Diffie-Hellman style key agreement bound to one curve.
pub trait KeyAgreement {
    /// Private key type; owns its public counterpart
    type PrivateKey;

    /// Public key type exchanged with the peer
    type PublicKey: Clone;

    /// Shared secret produced by [`KeyAgreement::agree`]
    type SharedSecret: Clone + PartialEq;

    /// Returns the scheme name, e.g. `"ECDH-secp256k1"`.
    fn name(&self) -> &'static str;

    /// Generate a new private key (and its public key) from `rng`.
    fn keypair<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Self::PrivateKey>;

    /// Extract the public key from a private key.
    fn public_key(private_key: &Self::PrivateKey) -> Self::PublicKey;

    /// Combine our private key with the peer's public key.
    ///
    /// For any two key pairs on the same curve,
    /// `agree(a, B) == agree(b, A)`.
    fn agree(
        &self,
        private_key: &Self::PrivateKey,
        peer_public_key: &Self::PublicKey,
    ) -> Result<Self::SharedSecret>;
}
