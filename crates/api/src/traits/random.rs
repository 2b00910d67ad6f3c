//! Injected random-byte capability
//!
//! Every operation that needs randomness (private-key sampling, signing
//! nonces) takes a `RandomSource` argument instead of reaching for a
//! process-wide generator, so tests can substitute deterministic or
//! failing sources.

use crate::error::{Error, Result};
use rand::{CryptoRng, RngCore};

/// A source of cryptographically secure random bytes.
///
/// Failures must be reported, never papered over with partially filled
/// buffers.
pub trait RandomSource {
    /// Fill `dest` entirely with random bytes.
    fn fill_random(&mut self, dest: &mut [u8]) -> Result<()>;
}

impl<R: RngCore + CryptoRng + ?Sized> RandomSource for R {
    fn fill_random(&mut self, dest: &mut [u8]) -> Result<()> {
        self.try_fill_bytes(dest).map_err(Error::from)
    }
}
