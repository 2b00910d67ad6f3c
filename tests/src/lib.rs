//! Shared fixtures for the ecckit integration tests

pub mod vectors;

use ecckit_algorithms::CurveId;
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Deterministic CSPRNG for reproducible test runs
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Curves on which ECDSA is defined
pub fn signing_curves() -> Vec<CurveId> {
    CurveId::ALL
        .into_iter()
        .filter(|id| id.params().supports_signatures())
        .collect()
}

/// A random source whose every request fails
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingRng;

impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        panic!("FailingRng cannot produce values")
    }

    fn next_u64(&mut self) -> u64 {
        panic!("FailingRng cannot produce values")
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        panic!("FailingRng cannot produce values")
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
        Err(rand::Error::new(std::io::Error::new(
            std::io::ErrorKind::Other,
            "entropy source unavailable",
        )))
    }
}

impl CryptoRng for FailingRng {}
