//! Residue-class arithmetic modulo a prime `p`.
//!
//! Grounded on `examples/original_source/ecc/ModInt.py`: the extended
//! Euclidean algorithm for inversion, the `p % 4 == 3` square root branch,
//! and the always-use-modular-exponentiation rule for `pow` (the source's
//! `__ipow__` small/large exponent split is a performance heuristic, not a
//! correctness requirement, and is not reproduced here — see spec.md §9).

use std::fmt;
use std::sync::Arc;

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::{Error, Result};

/// An element of `Z/pZ`, always stored as its canonical representative in `[0, p)`.
///
/// The modulus is shared via `Arc` rather than copied into every value (spec.md
/// §9, "shared field modulus across many FieldElements").
#[derive(Clone)]
pub struct FieldElement {
    value: BigUint,
    modulus: Arc<BigUint>,
}

impl FieldElement {
    /// Builds a field element, reducing `value` (which may be negative) modulo `modulus`.
    pub fn new(value: impl Into<BigInt>, modulus: Arc<BigUint>) -> FieldElement {
        let value: BigInt = value.into();
        let m = BigInt::from_biguint(Sign::Plus, (*modulus).clone());
        let reduced = value.mod_floor(&m);
        FieldElement {
            value: reduced.to_biguint().expect("mod_floor of positive modulus is non-negative"),
            modulus,
        }
    }

    /// Builds a field element directly from an already-reduced `BigUint`.
    pub fn from_biguint(value: BigUint, modulus: Arc<BigUint>) -> FieldElement {
        debug_assert!(value < *modulus);
        FieldElement { value, modulus }
    }

    /// The canonical representative, as a `BigUint` in `[0, p)`.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// The modulus this element lives under.
    pub fn modulus(&self) -> &Arc<BigUint> {
        &self.modulus
    }

    fn check_modulus(&self, other: &FieldElement) {
        assert!(
            self.modulus == other.modulus,
            "curvekit: mixed FieldElement moduli"
        );
    }

    /// Rebinds this element to a different modulus without re-reducing the value.
    ///
    /// Used only by curve construction when moving a coordinate computed under
    /// one curve's modulus handle onto a birationally related curve that shares
    /// the same prime but holds a distinct `Arc` handle.
    pub(crate) fn rebind_modulus(&self, modulus: Arc<BigUint>) -> FieldElement {
        debug_assert_eq!(*self.modulus, *modulus);
        FieldElement {
            value: self.value.clone(),
            modulus,
        }
    }

    /// `self + other`.
    pub fn add(&self, other: &FieldElement) -> FieldElement {
        self.check_modulus(other);
        let sum = &self.value + &other.value;
        let value = if sum >= *self.modulus {
            sum - &*self.modulus
        } else {
            sum
        };
        FieldElement { value, modulus: self.modulus.clone() }
    }

    /// `self - other`.
    pub fn sub(&self, other: &FieldElement) -> FieldElement {
        self.check_modulus(other);
        let value = if self.value >= other.value {
            &self.value - &other.value
        } else {
            &*self.modulus - (&other.value - &self.value)
        };
        FieldElement { value, modulus: self.modulus.clone() }
    }

    /// `self * other`.
    pub fn mul(&self, other: &FieldElement) -> FieldElement {
        self.check_modulus(other);
        let value = (&self.value * &other.value) % &*self.modulus;
        FieldElement { value, modulus: self.modulus.clone() }
    }

    /// `-self`.
    pub fn neg(&self) -> FieldElement {
        if self.value.is_zero() {
            self.clone()
        } else {
            FieldElement {
                value: &*self.modulus - &self.value,
                modulus: self.modulus.clone(),
            }
        }
    }

    /// Multiplies by a small signed integer, e.g. the `2` and `3` in the group-law formulas.
    pub fn mul_small(&self, n: i64) -> FieldElement {
        self.mul(&FieldElement::new(BigInt::from(n), self.modulus.clone()))
    }

    /// `self^exponent mod p`, for `exponent >= 0`, always via modular exponentiation.
    pub fn pow(&self, exponent: &BigUint) -> FieldElement {
        let value = self.value.modpow(exponent, &self.modulus);
        FieldElement { value, modulus: self.modulus.clone() }
    }

    /// `self^exponent` for a small non-negative exponent.
    pub fn pow_u64(&self, exponent: u64) -> FieldElement {
        self.pow(&BigUint::from(exponent))
    }

    /// Multiplicative inverse via the extended Euclidean algorithm. `Err(DivisionByZero)` at zero.
    pub fn invert(&self) -> Result<FieldElement> {
        if self.value.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let a = BigInt::from_biguint(Sign::Plus, self.value.clone());
        let m = BigInt::from_biguint(Sign::Plus, (*self.modulus).clone());
        let (gcd, _u, v) = extended_euclid(&a, &m);
        debug_assert!(gcd.is_one());
        let inv = v.mod_floor(&m);
        Ok(FieldElement::new(inv, self.modulus.clone()))
    }

    /// `self / other`, i.e. `self * other^-1`.
    pub fn div(&self, other: &FieldElement) -> Result<FieldElement> {
        self.check_modulus(other);
        Ok(self.mul(&other.invert()?))
    }

    /// Whether `p % 4 == 3`, the only case in which [`sqrt`](Self::sqrt) is defined.
    pub fn is_rootable(&self) -> bool {
        self.modulus.mod_floor(&BigUint::from(4u32)) == BigUint::from(3u32)
    }

    /// Square root when `p ≡ 3 (mod 4)`: returns `(r, -r)` if `self` is a quadratic
    /// residue, `Err(NoSquareRoot)` otherwise (including when `p mod 4 != 3`).
    pub fn sqrt(&self) -> Result<(FieldElement, FieldElement)> {
        if !self.is_rootable() {
            return Err(Error::NoSquareRoot);
        }
        let exponent = (&*self.modulus + BigUint::one()) / BigUint::from(4u32);
        let pos = self.pow(&exponent);
        if pos.mul(&pos) == *self {
            let neg = pos.neg();
            Ok((pos, neg))
        } else {
            Err(Error::NoSquareRoot)
        }
    }

    /// A square root usable for EdDSA point decoding (spec.md §4.2), covering
    /// both primes `curve.p()` can legally take: `p ≡ 3 (mod 4)` (Ed448) uses
    /// the standard branch above; `p ≡ 5 (mod 8)` (Ed25519) computes
    /// `self^((p+3)/8)`, correcting by the fixed non-trivial fourth root of
    /// unity `I = 2^((p-1)/4)` when the first candidate's square doesn't
    /// match. Returns one root; the caller fixes its parity by negation.
    pub fn eddsa_candidate_sqrt(&self) -> Result<FieldElement> {
        if self.is_rootable() {
            let (r, _) = self.sqrt()?;
            return Ok(r);
        }
        if self.modulus.mod_floor(&BigUint::from(8u32)) != BigUint::from(5u32) {
            return Err(Error::NoSquareRoot);
        }
        let exponent = (&*self.modulus + BigUint::from(3u32)) / BigUint::from(8u32);
        let candidate = self.pow(&exponent);
        if candidate.mul(&candidate) == *self {
            return Ok(candidate);
        }
        let i_exponent = (&*self.modulus - BigUint::one()) / BigUint::from(4u32);
        let i = FieldElement::new(BigInt::from(2), self.modulus.clone()).pow(&i_exponent);
        let candidate = candidate.mul(&i);
        if candidate.mul(&candidate) == *self {
            Ok(candidate)
        } else {
            Err(Error::NoSquareRoot)
        }
    }

    /// Fourth root: `sqrt` applied twice, failing if either step has no root.
    pub fn sqrt4(&self) -> Result<FieldElement> {
        let (r1, _) = self.sqrt()?;
        let (r2, _) = r1.sqrt()?;
        Ok(r2)
    }

    /// Whether `self` is a quadratic residue mod `p`. Undefined (and asserted against) at zero.
    pub fn is_qr(&self) -> bool {
        assert!(!self.value.is_zero(), "curvekit: QR status of zero is undefined");
        let exponent = (&*self.modulus - BigUint::one()) / BigUint::from(2u32);
        self.pow(&exponent).value.is_one()
    }

    /// Whether this element is zero.
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.modulus == other.modulus && self.value == other.value
    }
}
impl Eq for FieldElement {}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(0x{:x} mod 0x{:x})", self.value, *self.modulus)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.value)
    }
}

/// Extended Euclidean algorithm: returns `(gcd, u, v)` with `a*u + b*v = gcd`.
fn extended_euclid(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());
    while !r.is_zero() {
        let q = &old_r / &r;
        let new_r = &old_r - &q * &r;
        old_r = std::mem::replace(&mut r, new_r);
        let new_s = &old_s - &q * &s;
        old_s = std::mem::replace(&mut s, new_s);
        let new_t = &old_t - &q * &t;
        old_t = std::mem::replace(&mut t, new_t);
    }
    (old_r, old_s, old_t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modulus(p: u64) -> Arc<BigUint> {
        Arc::new(BigUint::from(p))
    }

    #[test]
    fn reduces_negative_values() {
        let m = modulus(23);
        let a = FieldElement::new(BigInt::from(-3), m.clone());
        assert_eq!(*a.value(), BigUint::from(20u32));
    }

    #[test]
    fn inverse_round_trips() {
        let m = modulus(23);
        let a = FieldElement::new(BigInt::from(5), m.clone());
        let inv = a.invert().unwrap();
        assert!(a.mul(&inv).value().is_one());
    }

    #[test]
    fn fermats_little_theorem() {
        let m = modulus(101);
        for v in 1..101u64 {
            let a = FieldElement::new(BigInt::from(v), m.clone());
            let one = a.pow(&BigUint::from(100u32));
            assert!(one.value().is_one(), "failed for {v}");
        }
    }

    #[test]
    fn sqrt_of_square_round_trips() {
        // 23 % 4 == 3, rootable.
        let m = modulus(23);
        let a = FieldElement::new(BigInt::from(4), m.clone());
        let squared = a.mul(&a);
        let (r1, r2) = squared.sqrt().unwrap();
        assert!(r1 == a || r2 == a);
    }

    #[test]
    fn division_by_zero_fails() {
        let m = modulus(23);
        let zero = FieldElement::new(BigInt::from(0), m);
        assert_eq!(zero.invert().unwrap_err(), Error::DivisionByZero);
    }

    #[test]
    fn eddsa_candidate_sqrt_covers_p_mod_8_eq_5() {
        // 13 % 8 == 5, not rootable via the plain p%4==3 branch.
        let m = modulus(13);
        assert!(!FieldElement::new(BigInt::from(0), m.clone()).is_rootable());
        for v in 1..13u64 {
            let a = FieldElement::new(BigInt::from(v), m.clone());
            let squared = a.mul(&a);
            let root = squared.eddsa_candidate_sqrt().unwrap();
            assert_eq!(root.mul(&root), squared, "failed for {v}");
        }
    }

    #[test]
    fn sqrt4_needs_two_valid_roots() {
        let m = modulus(23);
        let a = FieldElement::new(BigInt::from(2), m.clone());
        let fourth = a.mul(&a).mul(&a).mul(&a);
        let root = fourth.sqrt4().unwrap();
        let check = root.mul(&root).mul(&root).mul(&root);
        assert_eq!(check, fourth);
    }
}
