//! Curve domain parameters

use super::point::Point;
use crate::field::{add_mod, mul_mod, sub_mod};
use crate::key::PrivateKeyPolicy;
use core::fmt;
use num_bigint::BigUint;
use num_traits::One;

/// Equation family a curve's constants are written in.
///
/// Informational only: the point engine does not branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveForm {
    /// y² = x³ + ax + b
    ShortWeierstrass,
    /// By² = x³ + Ax² + x, usable for Diffie-Hellman only
    Montgomery,
}

/// Immutable description of one curve.
///
/// Instances are built once and shared by reference with every operation;
/// nothing mutates them after construction.
pub struct CurveParameters {
    name: &'static str,
    form: CurveForm,
    p: BigUint,
    a: BigUint,
    b: BigUint,
    n: BigUint,
    base_point: Point,
    key_policy: &'static dyn PrivateKeyPolicy,
}

impl CurveParameters {
    /// Assemble a curve from its domain parameters.
    ///
    /// `p` must be prime and `base_point` must lie on the curve; neither is
    /// checked.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &'static str,
        form: CurveForm,
        p: BigUint,
        a: BigUint,
        b: BigUint,
        n: BigUint,
        base_point: Point,
        key_policy: &'static dyn PrivateKeyPolicy,
    ) -> Self {
        CurveParameters {
            name,
            form,
            p,
            a,
            b,
            n,
            base_point,
            key_policy,
        }
    }

    /// Canonical curve name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Equation family
    pub fn form(&self) -> CurveForm {
        self.form
    }

    /// Prime modulus of the base field
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Coefficient `A`
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient `B`
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Order of the base point
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Generator of the subgroup used for keys
    pub fn base_point(&self) -> &Point {
        &self.base_point
    }

    /// Private-key validity strategy for this curve
    pub fn key_policy(&self) -> &'static dyn PrivateKeyPolicy {
        self.key_policy
    }

    /// Whether ECDSA is defined on this curve.
    ///
    /// The base-point order recorded for a Montgomery curve is the order
    /// under the Montgomery group law, not under the Weierstrass formulas
    /// the engine applies, so signatures would never verify.
    pub fn supports_signatures(&self) -> bool {
        self.form == CurveForm::ShortWeierstrass
    }

    /// Constant term of the short-Weierstrass curve the engine actually
    /// operates on: `Gy² − Gx³ − A·Gx mod P`.
    ///
    /// The chord-and-tangent formulas only read `A`, so the group they
    /// define is that of y² = x³ + Ax + b' where b' is fixed by the base
    /// point. For Weierstrass curves b' equals `B`. The identity sentinel
    /// `(0, 0)` is safe exactly when b' is non-zero.
    pub fn implied_b(&self) -> BigUint {
        let p = &self.p;
        let gx = &self.base_point.x;
        let gy = &self.base_point.y;
        let y2 = mul_mod(gy, gy, p);
        let x3 = mul_mod(&mul_mod(gx, gx, p), gx, p);
        let ax = mul_mod(&self.a, gx, p);
        sub_mod(&sub_mod(&y2, &x3, p), &ax, p)
    }

    /// Check whether `point` satisfies the curve equation in the curve's own
    /// form. The identity sentinel is accepted.
    ///
    /// The engine never calls this; it exists for callers that want to
    /// validate untrusted points before feeding them in.
    pub fn is_on_curve(&self, point: &Point) -> bool {
        if point.is_identity() {
            return true;
        }
        let p = &self.p;
        let (x, y) = (&point.x, &point.y);
        if x >= p || y >= p {
            return false;
        }
        let x2 = mul_mod(x, x, p);
        let x3 = mul_mod(&x2, x, p);
        let y2 = mul_mod(y, y, p);
        match self.form {
            CurveForm::ShortWeierstrass => {
                let rhs = add_mod(&add_mod(&x3, &mul_mod(&self.a, x, p), p), &self.b, p);
                y2 == rhs
            }
            CurveForm::Montgomery => {
                let lhs = mul_mod(&self.b, &y2, p);
                let rhs = add_mod(&add_mod(&x3, &mul_mod(&self.a, &x2, p), p), x, p);
                lhs == rhs
            }
        }
    }

    /// Bit length of the base-point order
    pub fn order_bits(&self) -> u64 {
        self.n.bits()
    }

    /// Whether `k` lies in `[1, n - 1]`
    pub fn is_scalar_in_range(&self, k: &BigUint) -> bool {
        k >= &BigUint::one() && k < &self.n
    }
}

impl fmt::Debug for CurveParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurveParameters")
            .field("name", &self.name)
            .field("form", &self.form)
            .field("p", &format_args!("{:#x}", self.p))
            .field("a", &format_args!("{:#x}", self.a))
            .field("b", &format_args!("{:#x}", self.b))
            .field("n", &format_args!("{:#x}", self.n))
            .field("key_policy", &self.key_policy.name())
            .finish()
    }
}
