//! Affine points and the operations carried out on them.
//!
//! Grounded on `examples/original_source/ecc/AffineCurvePoint.py` (group
//! law dispatch, scalar multiplication, compression) and `PointOps.py`
//! (EdDSA encoding, birational conversion, naive order calculation).

use std::fmt;
use std::sync::Arc;

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

use crate::bigint::IntExt;
use crate::curve::{Curve, Family};
use crate::error::{Error, Result};
use crate::field::FieldElement;

#[derive(Clone)]
enum Repr {
    Neutral,
    Affine(FieldElement, FieldElement),
}

/// A point on a [`Curve`], either the neutral element or an affine `(x, y)` pair.
#[derive(Clone)]
pub struct AffinePoint {
    curve: Arc<Curve>,
    repr: Repr,
}

impl AffinePoint {
    /// The neutral element ("point at infinity") of `curve`'s group.
    pub fn neutral(curve: Arc<Curve>) -> AffinePoint {
        AffinePoint { curve, repr: Repr::Neutral }
    }

    /// An affine point at `(x, y)`, not checked against the curve equation.
    /// Use [`Curve::oncurve`] to validate untrusted coordinates.
    pub fn from_coords(curve: Arc<Curve>, x: FieldElement, y: FieldElement) -> AffinePoint {
        AffinePoint { curve, repr: Repr::Affine(x, y) }
    }

    /// The curve this point is bound to.
    pub fn curve(&self) -> &Arc<Curve> {
        &self.curve
    }

    /// Whether this is the neutral element.
    pub fn is_neutral(&self) -> bool {
        matches!(self.repr, Repr::Neutral)
    }

    /// The `(x, y)` coordinates, or `None` for the neutral element.
    pub fn xy(&self) -> Option<(FieldElement, FieldElement)> {
        match &self.repr {
            Repr::Neutral => None,
            Repr::Affine(x, y) => Some((x.clone(), y.clone())),
        }
    }

    /// Point addition, dispatched on the curve family. `Err(CurveMismatch)`
    /// if `self` and `other` are bound to different curves.
    pub fn add(&self, other: &AffinePoint) -> Result<AffinePoint> {
        if !Arc::ptr_eq(&self.curve, &other.curve) {
            return Err(Error::CurveMismatch);
        }
        Ok(self.curve.point_addition(self, other))
    }

    /// Point negation ("conjugate").
    pub fn neg(&self) -> AffinePoint {
        self.curve.point_conjugate(self)
    }

    /// Scalar multiplication by right-to-left double-and-add, processing
    /// `scalar`'s bits from the least significant one (spec.md §4.2).
    pub fn mul(&self, scalar: &BigInt) -> AffinePoint {
        if scalar.sign() == num_bigint::Sign::Minus {
            return self.neg().mul(&(-scalar));
        }
        let mut result = AffinePoint::neutral(self.curve.clone());
        let mut addend = self.clone();
        let bits = scalar.bit_length();
        for i in 0..bits {
            if scalar.test_bit(i) {
                result = result.add(&addend).expect("same curve by construction");
            }
            addend = addend.add(&addend).expect("same curve by construction");
        }
        result
    }

    /// Compresses a short Weierstrass point: a leading `0x02`/`0x03` parity
    /// byte followed by `x` big-endian, padded to the byte length of `p`.
    pub fn compress(&self) -> Result<Vec<u8>> {
        if !matches!(self.curve.family(), Family::ShortWeierstrass { .. }) {
            return Err(Error::UnsupportedOperation);
        }
        let (x, y) = self.xy().ok_or(Error::UnsupportedOperation)?;
        let byte_len = byte_length(self.curve.p());
        let mut out = Vec::with_capacity(1 + byte_len);
        out.push(if y.value().bit(0) { 0x03 } else { 0x02 });
        let mut xb = x.value().to_bytes_be();
        pad_be(&mut xb, byte_len);
        out.extend_from_slice(&xb);
        Ok(out)
    }

    /// Recovers a short Weierstrass point from its compressed encoding.
    pub fn uncompress(curve: &Arc<Curve>, bytes: &[u8]) -> Result<AffinePoint> {
        if !matches!(curve.family(), Family::ShortWeierstrass { .. }) {
            return Err(Error::UnsupportedOperation);
        }
        let byte_len = byte_length(curve.p());
        if bytes.len() != 1 + byte_len || (bytes[0] != 0x02 && bytes[0] != 0x03) {
            return Err(Error::MalformedEncoding);
        }
        let want_odd = bytes[0] == 0x03;
        let x = BigInt::from_bytes_be_unsigned(&bytes[1..]);
        let (p1, p2) = curve
            .getpointwithx(x)?
            .ok_or(Error::NotOnCurve)?;
        let (_, y1) = p1.xy().unwrap();
        if y1.value().bit(0) == want_odd {
            Ok(p1)
        } else {
            Ok(p2)
        }
    }

    /// Encodes a twisted Edwards point per RFC 8032: `y` little-endian in
    /// `ceil(B/8)` bytes with `x`'s parity folded into the top bit.
    pub fn eddsa_encode(&self) -> Result<Vec<u8>> {
        if !matches!(self.curve.family(), Family::TwistedEdwards { .. }) {
            return Err(Error::UnsupportedOperation);
        }
        let byte_len = ((self.curve.b_bits() + 7) / 8) as usize;
        let (x, y) = match self.xy() {
            Some(xy) => xy,
            None => (
                FieldElement::new(BigInt::zero(), self.curve.p().clone()),
                FieldElement::new(BigInt::one(), self.curve.p().clone()),
            ),
        };
        let mut out = y.value().to_bytes_le();
        out.resize(byte_len, 0);
        if x.value().bit(0) {
            out[byte_len - 1] |= 0x80;
        }
        Ok(out)
    }

    /// Decodes a twisted Edwards point, recovering `x` via the curve
    /// equation and selecting the root matching the packed sign bit.
    pub fn eddsa_decode(curve: &Arc<Curve>, bytes: &[u8]) -> Result<AffinePoint> {
        let Family::TwistedEdwards { a, d, .. } = curve.family() else {
            return Err(Error::UnsupportedOperation);
        };
        let byte_len = ((curve.b_bits() + 7) / 8) as usize;
        if bytes.len() != byte_len {
            return Err(Error::MalformedEncoding);
        }
        let sign = bytes[byte_len - 1] & 0x80 != 0;
        let mut y_bytes = bytes.to_vec();
        y_bytes[byte_len - 1] &= 0x7f;
        let y_val = BigUint::from_bytes_le(&y_bytes);
        if &y_val >= &**curve.p() {
            return Err(Error::MalformedEncoding);
        }
        let y = FieldElement::from_biguint(y_val, curve.p().clone());
        let one = FieldElement::new(BigInt::one(), curve.p().clone());
        let numerator = one.sub(&y.mul(&y));
        let denominator = a.sub(&d.mul(&y).mul(&y));
        let x2 = numerator.div(&denominator)?;
        if x2.is_zero() {
            if sign {
                return Err(Error::MalformedEncoding);
            }
            return Ok(AffinePoint::from_coords(curve.clone(), x2, y));
        }
        let candidate = x2.eddsa_candidate_sqrt()?;
        let x = if candidate.value().bit(0) == sign { candidate } else { candidate.neg() };
        Ok(AffinePoint::from_coords(curve.clone(), x, y))
    }

    /// Birational conversion between a twisted Edwards curve and its
    /// Montgomery dual (`PointOps.py`'s `convert`). The scale factor between
    /// curves that aren't an exact canonical pair is resolved by comparing
    /// generators when both curves have one, else via a quadratic-residue
    /// square root; genuinely incompatible pairs return `UnsupportedOperation`.
    pub fn convert(&self, target: &Arc<Curve>) -> Result<AffinePoint> {
        match (self.curve.family(), target.family()) {
            (Family::TwistedEdwards { a, d, .. }, Family::Montgomery { a: big_a, b: big_b }) => {
                let scale = scale_factor(&self.curve, target, a, d, big_a, big_b)?;
                if self.is_neutral() {
                    return Ok(target.neutral());
                }
                let (x, y) = self.xy().unwrap();
                let one = FieldElement::new(BigInt::one(), x.modulus().clone());
                let u = one.add(&y).div(&one.sub(&y))?;
                let v = scale.mul(&u).div(&x)?;
                let u = u.rebind_modulus(target.p().clone());
                let v = v.rebind_modulus(target.p().clone());
                let out = AffinePoint::from_coords(target.clone(), u, v);
                if !target.oncurve(&out) {
                    return Err(Error::NotOnCurve);
                }
                Ok(out)
            }
            (Family::Montgomery { a: big_a, b: big_b }, Family::TwistedEdwards { a, d, .. }) => {
                let scale = scale_factor(target, &self.curve, a, d, big_a, big_b)?;
                if self.is_neutral() {
                    return Ok(target.neutral());
                }
                let (u, v) = self.xy().unwrap();
                let one = FieldElement::new(BigInt::one(), u.modulus().clone());
                let x = scale.mul(&u).div(&v)?;
                let y = u.sub(&one).div(&u.add(&one))?;
                let x = x.rebind_modulus(target.p().clone());
                let y = y.rebind_modulus(target.p().clone());
                let out = AffinePoint::from_coords(target.clone(), x, y);
                if !target.oncurve(&out) {
                    return Err(Error::NotOnCurve);
                }
                Ok(out)
            }
            _ => Err(Error::UnsupportedOperation),
        }
    }

    /// Brute-force order of this point by repeated addition, for toy curves only.
    pub fn naive_order_calculation(&self) -> BigUint {
        let mut order = BigUint::one();
        let mut acc = self.clone();
        while !acc.is_neutral() {
            acc = acc.add(self).expect("same curve by construction");
            order += BigUint::one();
        }
        order
    }
}

/// Montgomery-ladder scalar multiplication on the `x`-coordinate only
/// (spec.md §4.2.1): `x3 = x([k]P)` without ever recovering `y`.
pub fn montgomery_ladder(curve: &Arc<Curve>, x1: &FieldElement, scalar: &BigInt) -> Result<FieldElement> {
    let Family::Montgomery { a, .. } = curve.family() else {
        return Err(Error::UnsupportedOperation);
    };
    let p = curve.p().clone();
    let one = FieldElement::new(BigInt::one(), p.clone());
    let zero = FieldElement::new(BigInt::zero(), p.clone());

    let (mut x2, mut z2) = (one.clone(), zero.clone());
    let (mut x3, mut z3) = (x1.clone(), one.clone());

    let bits = scalar.bit_length();
    let mut swap = false;
    for i in (0..bits).rev() {
        let bit = scalar.test_bit(i);
        swap ^= bit;
        if swap {
            std::mem::swap(&mut x2, &mut x3);
            std::mem::swap(&mut z2, &mut z3);
        }
        swap = bit;

        let a24 = a.add(&FieldElement::new(BigInt::from(2), p.clone())).div(&FieldElement::new(BigInt::from(4), p.clone()))?;
        let t1 = x2.add(&z2);
        let t2 = x2.sub(&z2);
        let t3 = x3.add(&z3);
        let t4 = x3.sub(&z3);
        let t5 = t1.mul(&t1);
        let t6 = t2.mul(&t2);
        let t7 = t5.sub(&t6);
        let t8 = t4.mul(&t1);
        let t9 = t3.mul(&t2);
        let x3n = t8.add(&t9).mul(&t8.add(&t9));
        let z3n = x1.mul(&t8.sub(&t9).mul(&t8.sub(&t9)));
        let x2n = t5.mul(&t6);
        let z2n = t7.mul(&t6.add(&a24.mul(&t7)));
        x2 = x2n;
        z2 = z2n;
        x3 = x3n;
        z3 = z3n;
    }
    if swap {
        std::mem::swap(&mut x2, &mut x3);
        std::mem::swap(&mut z2, &mut z3);
    }
    x2.div(&z2).map_err(|_| Error::DivisionByZero)
}

fn scale_factor(
    edwards_curve: &Arc<Curve>,
    montgomery_curve: &Arc<Curve>,
    a: &FieldElement,
    d: &FieldElement,
    big_a: &FieldElement,
    big_b: &FieldElement,
) -> Result<FieldElement> {
    let diff = a.sub(d);
    let native_a = a.add(d).mul_small(2).div(&diff)?;
    let native_b = FieldElement::new(BigInt::from(4), a.modulus().clone()).div(&diff)?;
    let target_a = big_a.clone().rebind_modulus(a.modulus().clone());
    let target_b = big_b.clone().rebind_modulus(a.modulus().clone());

    if native_a == target_a && native_b == target_b {
        return Ok(FieldElement::new(BigInt::one(), a.modulus().clone()));
    }

    if let (Some(ge), Some(gm)) = (edwards_curve.generator(), montgomery_curve.generator()) {
        let (gex, gey) = ge.xy().ok_or(Error::UnsupportedOperation)?;
        let one = FieldElement::new(BigInt::one(), a.modulus().clone());
        let u0 = one.add(&gey).div(&one.sub(&gey))?;
        let v0_unscaled = u0.div(&gex)?;
        let (_, gmv) = gm.xy().ok_or(Error::UnsupportedOperation)?;
        let gmv = gmv.rebind_modulus(a.modulus().clone());
        return Ok(v0_unscaled.invert()?.mul(&gmv));
    }

    let ratio = native_b.div(&target_b)?;
    if ratio.is_qr() {
        let (r, _) = ratio.sqrt()?;
        Ok(r)
    } else {
        Err(Error::UnsupportedOperation)
    }
}

fn byte_length(p: &BigUint) -> usize {
    ((p.bits() + 7) / 8) as usize
}

fn pad_be(bytes: &mut Vec<u8>, len: usize) {
    if bytes.len() < len {
        let mut padded = vec![0u8; len - bytes.len()];
        padded.extend_from_slice(bytes);
        *bytes = padded;
    }
}

impl PartialEq for AffinePoint {
    fn eq(&self, other: &Self) -> bool {
        if !Arc::ptr_eq(&self.curve, &other.curve) {
            return false;
        }
        match (&self.repr, &other.repr) {
            (Repr::Neutral, Repr::Neutral) => true,
            (Repr::Affine(x1, y1), Repr::Affine(x2, y2)) => x1 == x2 && y1 == y2,
            _ => false,
        }
    }
}
impl Eq for AffinePoint {}

impl fmt::Debug for AffinePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Neutral => write!(f, "AffinePoint::Neutral"),
            Repr::Affine(x, y) => write!(f, "AffinePoint({x}, {y})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::CurveParams;

    fn small_curve() -> Arc<Curve> {
        Curve::short_weierstrass(
            BigInt::from(-3),
            BigInt::from(5),
            CurveParams {
                p: BigUint::from(23u32),
                n: BigUint::from(28u32),
                h: BigUint::one(),
                generator: Some((BigInt::from(13), BigInt::from(22))),
                name: Some("test23".into()),
                aliases: vec![],
            },
        )
        .unwrap()
    }

    #[test]
    fn scalar_multiplication_matches_repeated_addition() {
        let curve = small_curve();
        let g = curve.generator().unwrap();
        let by_mul = g.mul(&BigInt::from(5));
        let mut by_add = curve.neutral();
        for _ in 0..5 {
            by_add = by_add.add(&g).unwrap();
        }
        assert_eq!(by_mul, by_add);
    }

    #[test]
    fn compress_uncompress_round_trips() {
        let curve = small_curve();
        let g = curve.generator().unwrap();
        let point = g.mul(&BigInt::from(3));
        let encoded = point.compress().unwrap();
        let decoded = AffinePoint::uncompress(&curve, &encoded).unwrap();
        assert_eq!(point, decoded);
    }

    #[test]
    fn neutral_mul_is_neutral() {
        let curve = small_curve();
        let g = curve.generator().unwrap();
        let zero = g.mul(&BigInt::from(0));
        assert!(zero.is_neutral());
    }
}
