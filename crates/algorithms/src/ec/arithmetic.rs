//! Affine point-group engine
//!
//! Pure functions of their inputs and the curve parameters. Intermediate
//! values are reduced mod P right after every multiplication and
//! subtraction. Running time depends on the operands; none of this is
//! constant-time.

use super::curve::CurveParameters;
use super::point::Point;
use crate::field::{mod_inverse, mul_mod, sub_mod};
use ecckit_api::Result;
use num_bigint::BigUint;
use num_traits::Zero;

/// Add two points using the group law.
///
/// - an identity operand returns the other operand unchanged
/// - `P.x == Q.x` with `P.y != Q.y` (inverse points) returns the identity
/// - `P == Q` delegates to [`double`]
pub fn add(lhs: &Point, rhs: &Point, curve: &CurveParameters) -> Result<Point> {
    if lhs.is_identity() {
        return Ok(rhs.clone());
    }
    if rhs.is_identity() {
        return Ok(lhs.clone());
    }

    let p = curve.p();
    let (x1, y1) = (lhs.x.clone() % p, lhs.y.clone() % p);
    let (x2, y2) = (rhs.x.clone() % p, rhs.y.clone() % p);

    if x1 == x2 {
        if y1 != y2 {
            return Ok(Point::identity());
        }
        return double(lhs, curve);
    }

    // λ = (y₂ − y₁) / (x₂ − x₁)
    let dy = sub_mod(&y2, &y1, p);
    let dx = sub_mod(&x2, &x1, p);
    let lambda = mul_mod(&dy, &mod_inverse(&dx, p)?, p);

    // x₃ = λ² − x₁ − x₂
    let x3 = sub_mod(&sub_mod(&mul_mod(&lambda, &lambda, p), &x1, p), &x2, p);

    // y₃ = λ·(x₁ − x₃) − y₁
    let y3 = sub_mod(&mul_mod(&lambda, &sub_mod(&x1, &x3, p), p), &y1, p);

    Ok(Point::new(x3, y3))
}

/// Double a point (add it to itself).
///
/// A point with `y = 0` has a vertical tangent, so its double is the
/// identity. The identity sentinel itself falls into that case.
pub fn double(point: &Point, curve: &CurveParameters) -> Result<Point> {
    let p = curve.p();
    let x1 = point.x.clone() % p;
    let y1 = point.y.clone() % p;

    if y1.is_zero() {
        return Ok(Point::identity());
    }

    // λ = (3·x² + A) / (2·y)
    let x_sq = mul_mod(&x1, &x1, p);
    let numerator = (x_sq * 3u32 + curve.a()) % p;
    let two_y = (&y1 << 1) % p;
    let lambda = mul_mod(&numerator, &mod_inverse(&two_y, p)?, p);

    // x₂ = λ² − 2·x₁
    let two_x = (&x1 << 1) % p;
    let x3 = sub_mod(&mul_mod(&lambda, &lambda, p), &two_x, p);

    // y₂ = λ·(x₁ − x₂) − y₁
    let y3 = sub_mod(&mul_mod(&lambda, &sub_mod(&x1, &x3, p), p), &y1, p);

    Ok(Point::new(x3, y3))
}

/// The additive inverse `(x, −y)`.
pub fn negate(point: &Point, curve: &CurveParameters) -> Point {
    if point.is_identity() {
        return Point::identity();
    }
    let p = curve.p();
    Point::new(point.x.clone() % p, sub_mod(&BigUint::zero(), &point.y, p))
}

/// Scalar multiplication: compute `k · point`.
///
/// MSB-first double-and-add over the bits of `k`; this is the only bit
/// order used anywhere in the crate. `k = 0` or an identity input yields
/// the identity. Callers should pass `k < n`, though larger scalars give
/// the mathematically expected result.
pub fn scalar_mul(k: &BigUint, point: &Point, curve: &CurveParameters) -> Result<Point> {
    if k.is_zero() || point.is_identity() {
        return Ok(Point::identity());
    }

    let mut acc = Point::identity();
    for i in (0..k.bits()).rev() {
        acc = double(&acc, curve)?;
        if k.bit(i) {
            acc = add(&acc, point, curve)?;
        }
    }
    Ok(acc)
}

/// Scalar multiplication with the base point: `k · G`
pub fn scalar_mul_base(k: &BigUint, curve: &CurveParameters) -> Result<Point> {
    scalar_mul(k, curve.base_point(), curve)
}
