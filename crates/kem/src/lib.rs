//! Elliptic-curve Diffie-Hellman key agreement
//!
//! The shared secret is the full point `d_A · Q_B`. No key-derivation
//! function is applied; callers that want a symmetric key feed
//! [`SharedSecret::x_bytes`] into a KDF of their choice.

#![forbid(unsafe_code)]

pub mod ecdh;

// Re-exports
pub use ecdh::{ecdh, Ecdh, SharedSecret};
