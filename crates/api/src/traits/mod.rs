//! Trait definitions for the ecckit protocols

pub mod kem;
pub mod random;
pub mod signature;

pub use kem::KeyAgreement;
pub use random::RandomSource;
pub use signature::SignatureScheme;
