//! Elliptic Curve Primitives
//!
//! The point-group engine here is generic: it never dispatches on the
//! curve family. Every curve, including the Montgomery-form Curve25519,
//! runs through the same short-Weierstrass chord-and-tangent formulas with
//! the curve's `A` coefficient plugged in.

mod arithmetic;
mod curve;
mod named;
mod point;

pub use arithmetic::{add, double, negate, scalar_mul, scalar_mul_base};
pub use curve::{CurveForm, CurveParameters};
pub use named::{brainpool_p256t1, curve25519, secp256k1, secp256r1, CurveId};
pub use point::Point;
