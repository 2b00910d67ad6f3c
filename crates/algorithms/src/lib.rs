//! Elliptic-curve primitives for ecckit
//!
//! This crate holds the generic machinery every protocol builds on:
//!
//! - [`field`]: modular reduction and inversion over a prime modulus
//! - [`ec`]: the curve parameter model, the affine point-group engine and
//!   the named curves
//! - [`key`]: private-key sampling under per-curve validity policies and
//!   public-key derivation
//!
//! Arithmetic is variable-time and uses affine coordinates throughout.
//! It is meant for studying the group law, not for protecting secrets
//! against side channels.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub use ecckit_api::{Error, Result};

pub mod ec;
pub mod field;
pub mod key;

pub use ec::{
    add, brainpool_p256t1, curve25519, double, negate, scalar_mul, scalar_mul_base, secp256k1,
    secp256r1, CurveForm, CurveId, CurveParameters, Point,
};
pub use key::{
    generate_private_key, generate_private_key_with_policy, is_valid_private_key, random_bytes,
    ClampedPolicy, LengthNonZeroPolicy, PrivateKey, PrivateKeyPolicy, RangePolicy,
};
