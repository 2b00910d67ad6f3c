//! Affine curve points

use ecckit_params::EC_FIELD_ELEMENT_SIZE;
use num_bigint::BigUint;
use num_traits::Zero;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in affine coordinates.
///
/// The identity element (point at infinity) is the sentinel `(0, 0)`.
/// This is sound only because `(0, 0)` is not a point of any configured
/// curve: the engine's group law runs on y² = x³ + Ax + b' and `(0, 0)`
/// satisfies that equation exactly when b' ≡ 0. See
/// [`CurveParameters::implied_b`](super::CurveParameters::implied_b).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// Affine x-coordinate
    pub x: BigUint,
    /// Affine y-coordinate
    pub y: BigUint,
}

impl Point {
    /// Create a point from its coordinates. No curve check is performed.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Point { x, y }
    }

    /// The identity element, encoded as `(0, 0)`.
    pub fn identity() -> Self {
        Point {
            x: BigUint::zero(),
            y: BigUint::zero(),
        }
    }

    /// Check if this point is the identity sentinel.
    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    /// Get the x-coordinate as 32 big-endian bytes.
    pub fn x_coordinate_bytes(&self) -> [u8; EC_FIELD_ELEMENT_SIZE] {
        to_field_bytes(&self.x)
    }

    /// Get the y-coordinate as 32 big-endian bytes.
    pub fn y_coordinate_bytes(&self) -> [u8; EC_FIELD_ELEMENT_SIZE] {
        to_field_bytes(&self.y)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::identity()
    }
}

// Left-pads to the field size. Engine output is always reduced below a
// 256-bit prime, so only the low 32 bytes can be non-zero.
fn to_field_bytes(v: &BigUint) -> [u8; EC_FIELD_ELEMENT_SIZE] {
    let bytes = v.to_bytes_be();
    let mut out = [0u8; EC_FIELD_ELEMENT_SIZE];
    let take = bytes.len().min(EC_FIELD_ELEMENT_SIZE);
    out[EC_FIELD_ELEMENT_SIZE - take..].copy_from_slice(&bytes[bytes.len() - take..]);
    out
}
