//! Modular arithmetic over a prime modulus
//!
//! Every helper returns the canonical non-negative residue in `[0, m)`,
//! so callers never observe negative remainders. Subtraction is done on
//! unsigned values by adding the modulus first.

use ecckit_api::{Error, Result};
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Reduce `a` into `[0, m)`.
#[inline]
pub fn reduce(a: &BigUint, m: &BigUint) -> BigUint {
    a % m
}

/// `(a + b) mod m`
#[inline]
pub fn add_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a + b) % m
}

/// `(a - b) mod m`, always non-negative
pub fn sub_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    let a = a % m;
    let b = b % m;
    if a >= b {
        a - b
    } else {
        m - (b - a)
    }
}

/// `(a * b) mod m`
#[inline]
pub fn mul_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a * b) % m
}

/// Modular inverse via the extended Euclidean algorithm.
///
/// Returns the unique `x` in `[0, m)` with `a·x ≡ 1 (mod m)`, or
/// [`Error::NonInvertibleElement`] when `gcd(a, m) ≠ 1` (which includes
/// `a ≡ 0`).
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    if m.is_zero() {
        return Err(Error::not_invertible("zero modulus"));
    }

    let modulus = BigInt::from_biguint(Sign::Plus, m.clone());
    let mut old_r = BigInt::from_biguint(Sign::Plus, a % m);
    let mut r = modulus.clone();
    let mut old_s = BigInt::one();
    let mut s = BigInt::zero();

    while !r.is_zero() {
        let q = &old_r / &r;
        let next_r = &old_r - &q * &r;
        old_r = core::mem::replace(&mut r, next_r);
        let next_s = &old_s - &q * &s;
        old_s = core::mem::replace(&mut s, next_s);
    }

    if !old_r.is_one() {
        return Err(Error::not_invertible("gcd(a, m) != 1"));
    }

    // mod_floor keeps the result in [0, m) even when old_s is negative
    old_s
        .mod_floor(&modulus)
        .to_biguint()
        .ok_or_else(|| Error::not_invertible("negative residue"))
}
