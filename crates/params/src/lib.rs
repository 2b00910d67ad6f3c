//! Constant values for the ecckit library
//!
//! Domain parameters are stored as big-endian hexadecimal strings so this
//! crate stays dependency-free; `ecckit-algorithms` parses them once into
//! big integers.

#![no_std]

pub mod traditional;

pub use traditional::curves::{
    CurveConstants, BRAINPOOL_P256_T1, CURVE25519, SECP256K1, SECP256R1,
};
pub use traditional::limits::{
    EC_FIELD_ELEMENT_SIZE, EC_SCALAR_SIZE, MAX_KEY_GENERATION_ATTEMPTS, MAX_NONCE_ATTEMPTS,
};
