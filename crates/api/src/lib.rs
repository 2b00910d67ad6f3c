//! Public API traits and types for the ecckit library
//!
//! This crate provides the public API surface for the ecckit workspace:
//! the shared error type, the injected random-source capability, and the
//! protocol traits implemented by the ECDH and ECDSA crates.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

// Re-export all traits from the traits module
pub use traits::{KeyAgreement, RandomSource, SignatureScheme};

// Re-export trait modules for direct access
pub use traits::{kem, random, signature};
