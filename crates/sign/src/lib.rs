//! ECDSA signatures
//!
//! Messages are hashed with SHA-256 and every signature draws a fresh
//! nonce from the caller's random source. Only short-Weierstrass curves
//! can sign; Curve25519 is limited to key agreement.

#![forbid(unsafe_code)]

pub mod ecdsa;

// Re-exports
pub use ecdsa::{hash_to_scalar, message_hash, sign, verify, Ecdsa, Signature};
