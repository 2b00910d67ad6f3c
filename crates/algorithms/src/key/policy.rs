//! Private-key validity strategies
//!
//! Curves disagree on what makes a 32-byte draw an acceptable private
//! scalar, so each curve carries one of these strategies and key
//! generation defers to it.

use crate::ec::CurveParameters;
use ecckit_params::EC_SCALAR_SIZE;
use num_bigint::BigUint;
use num_traits::Zero;

/// Strategy deciding whether a private scalar is acceptable for a curve.
pub trait PrivateKeyPolicy: Send + Sync {
    /// Short name used in logs and `Debug` output
    fn name(&self) -> &'static str;

    /// Adjust a fresh random draw before it is interpreted as a scalar.
    ///
    /// The default leaves the bytes untouched.
    fn condition(&self, _candidate: &mut [u8; EC_SCALAR_SIZE]) {}

    /// Whether `d` is an acceptable private scalar on `curve`.
    fn is_valid(&self, d: &BigUint, curve: &CurveParameters) -> bool;
}

/// Accepts `0 < d < n`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangePolicy;

impl PrivateKeyPolicy for RangePolicy {
    fn name(&self) -> &'static str {
        "range"
    }

    fn is_valid(&self, d: &BigUint, curve: &CurveParameters) -> bool {
        curve.is_scalar_in_range(d)
    }
}

/// Accepts scalars whose minimal big-endian encoding is exactly 32 bytes
/// and not all zero. Does not compare against `n`.
///
/// A draw whose leading byte is zero encodes to fewer than 32 bytes and is
/// therefore rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthNonZeroPolicy;

impl PrivateKeyPolicy for LengthNonZeroPolicy {
    fn name(&self) -> &'static str {
        "length-nonzero"
    }

    fn is_valid(&self, d: &BigUint, _curve: &CurveParameters) -> bool {
        if d.is_zero() {
            return false;
        }
        let bytes = d.to_bytes_be();
        bytes.len() == EC_SCALAR_SIZE && bytes.iter().any(|&b| b != 0)
    }
}

/// X25519-style clamping.
///
/// Conditioning clears the low 3 bits of the first byte, clears the top bit
/// of the last byte and sets its second-highest bit; the 32 bytes are then
/// read big-endian. A scalar is valid when it fits in 32 bytes and carries
/// that bit pattern.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClampedPolicy;

impl ClampedPolicy {
    /// Apply the clamping bit pattern in place.
    pub fn clamp(bytes: &mut [u8; EC_SCALAR_SIZE]) {
        bytes[0] &= 248;
        bytes[EC_SCALAR_SIZE - 1] &= 127;
        bytes[EC_SCALAR_SIZE - 1] |= 64;
    }
}

impl PrivateKeyPolicy for ClampedPolicy {
    fn name(&self) -> &'static str {
        "clamped"
    }

    fn condition(&self, candidate: &mut [u8; EC_SCALAR_SIZE]) {
        Self::clamp(candidate);
    }

    fn is_valid(&self, d: &BigUint, _curve: &CurveParameters) -> bool {
        let raw = d.to_bytes_be();
        if d.is_zero() || raw.len() > EC_SCALAR_SIZE {
            return false;
        }
        let mut bytes = [0u8; EC_SCALAR_SIZE];
        bytes[EC_SCALAR_SIZE - raw.len()..].copy_from_slice(&raw);
        let last = bytes[EC_SCALAR_SIZE - 1];
        bytes[0] & 0x07 == 0 && last & 0x80 == 0 && last & 0x40 != 0
    }
}
