//! Curve domain parameters for the three supported families.
//!
//! Grounded on `examples/original_source/ecc/ShortWeierstrassCurve.py` and
//! `TwistedEdwardsCurve.py` (the Montgomery variant was not present in the
//! retrieved source but is specified symmetrically in spec.md §3/§4.3).
//! `is_koblitz`/`security_bit_estimate` mirror `ShortWeierstrassCurve.py`;
//! `CurveOps.py`'s isomorphism is carried as [`Curve::isomorphism`].

use std::fmt;
use std::sync::Arc;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::{Error, Result};
use crate::field::FieldElement;
use crate::point::AffinePoint;

/// Curve-specific EdDSA scalar-conditioning quirks (spec.md §9, "EdDSA quirks
/// table"; grounded on `examples/original_source/ecc/CurveQuirks.py`). Applied
/// in order to the hashed-seed scalar during key generation; bit positions
/// are absolute (0 = least significant bit of the `b`-bit scalar).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdDsaQuirk {
    /// Clear the low `n` bits, forcing the scalar into the prime-order
    /// subgroup (`CurveQuirkEdDSAEnsurePrimeOrderSubgroup`; Ed25519 clears 3
    /// low bits for its cofactor of 8, Ed448 clears 2 for its cofactor of 4).
    ClearLowBits(u32),
    /// Clear the top `n` bits of the scalar, i.e. bits `b-n ..= b-1`
    /// (Ed25519 clears the top 1 bit, Ed448 clears the entire top octet: 8 bits).
    ClearTopBits(u32),
    /// Set bit `pos` of the scalar (`CurveQuirkEdDSASetPrivateKeyMSB`; Ed25519
    /// sets bit 254, Ed448 sets bit 447).
    SetBit(u32),
}

/// EdDSA parameters attached to a twisted Edwards curve: the hash-derived bit
/// size `b`, and the ordered list of scalar-conditioning quirks to apply.
#[derive(Debug, Clone)]
pub struct EdDsaParams {
    /// Bit size used for seed/point/signature encoding (256 for Ed25519, 456 for Ed448).
    pub b: u32,
    /// Quirks applied, in order, to the hashed-seed scalar during key generation.
    pub quirks: Vec<EdDsaQuirk>,
    /// Hash function used for the seed hash, signing nonce and challenge.
    pub hash: EdDsaHash,
}

/// Hash function backing an EdDSA instantiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdDsaHash {
    /// SHA-512, used by Ed25519 and by the Ed448-Goldilocks test vectors in spec.md §8.
    Sha512,
    /// SHAKE256, used by RFC 8032 Ed448.
    Shake256,
}

/// Family-specific curve coefficients.
#[derive(Debug, Clone)]
pub enum Family {
    /// `y^2 = x^3 + ax + b`.
    ShortWeierstrass { a: FieldElement, b: FieldElement },
    /// `by^2 = x^3 + ax^2 + x`.
    Montgomery { a: FieldElement, b: FieldElement },
    /// `ax^2 + y^2 = 1 + dx^2y^2`.
    TwistedEdwards {
        a: FieldElement,
        d: FieldElement,
        eddsa: Option<EdDsaParams>,
    },
}

/// A short Weierstrass, Montgomery or twisted Edwards curve over `F_p`.
///
/// Immutable once constructed. `generator()` hands back a fresh [`AffinePoint`]
/// each time rather than a shared one, so consumers can never observe a
/// curve's own generator mutated in place.
pub struct Curve {
    p: Arc<BigUint>,
    n: BigUint,
    h: BigUint,
    family: Family,
    name: Option<String>,
    aliases: Vec<String>,
    generator_xy: Option<(FieldElement, FieldElement)>,
}

impl fmt::Debug for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curve")
            .field("name", &self.name)
            .field("curve_type", &self.curve_type())
            .field("p", &format_args!("0x{:x}", self.p))
            .finish()
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{}<{}>", self.curve_type(), name)
        } else {
            match &self.family {
                Family::ShortWeierstrass { a, b } => {
                    write!(f, "ShortWeierstrass<y^2 = x^3 + {a} x + {b} mod 0x{:x}>", self.p)
                }
                Family::Montgomery { a, b } => {
                    write!(f, "Montgomery<{b} y^2 = x^3 + {a} x^2 + x mod 0x{:x}>", self.p)
                }
                Family::TwistedEdwards { a, d, .. } => {
                    write!(f, "TwistedEdwards<{a} x^2 + y^2 = 1 + {d} x^2 y^2 mod 0x{:x}>", self.p)
                }
            }
        }
    }
}

/// Parameters common to every curve constructor, gathered to keep the
/// constructor signatures from ballooning to a dozen positional arguments.
pub struct CurveParams {
    pub p: BigUint,
    pub n: BigUint,
    pub h: BigUint,
    pub generator: Option<(BigInt, BigInt)>,
    pub name: Option<String>,
    pub aliases: Vec<String>,
}

impl Curve {
    fn finish(
        params: CurveParams,
        family: Family,
    ) -> Result<Arc<Curve>> {
        let CurveParams { p, n, h, generator, name, aliases } = params;
        let p = Arc::new(p);
        let generator_xy = match generator {
            Some((gx, gy)) => Some((
                FieldElement::new(gx, p.clone()),
                FieldElement::new(gy, p.clone()),
            )),
            None => None,
        };
        let curve = Arc::new(Curve { p, n, h, family, name, aliases, generator_xy });

        if let Some(g) = curve.generator() {
            if !curve.oncurve(&g) {
                return Err(Error::NotOnCurve);
            }
            let order_times_g = g.mul(&BigInt::from_biguint(num_bigint::Sign::Plus, curve.n.clone()));
            if !order_times_g.is_neutral() {
                return Err(Error::NotOnCurve);
            }
        }
        Ok(curve)
    }

    /// Constructs a short Weierstrass curve `y^2 = x^3 + ax + b`, validating
    /// non-singularity and (if a generator is supplied) that it lies on the
    /// curve and has order `n`.
    pub fn short_weierstrass(a: BigInt, b: BigInt, params: CurveParams) -> Result<Arc<Curve>> {
        let p = Arc::new(params.p.clone());
        let a = FieldElement::new(a, p.clone());
        let b = FieldElement::new(b, p.clone());
        let four_a3 = a.mul(&a).mul(&a).mul_small(4);
        let twenty_seven_b2 = b.mul(&b).mul_small(27);
        if four_a3.add(&twenty_seven_b2).is_zero() {
            return Err(Error::NotOnCurve);
        }
        Curve::finish(params, Family::ShortWeierstrass { a, b })
    }

    /// Constructs a Montgomery curve `by^2 = x^3 + ax^2 + x`, requiring `b(a^2-4) != 0`.
    pub fn montgomery(a: BigInt, b: BigInt, params: CurveParams) -> Result<Arc<Curve>> {
        let p = Arc::new(params.p.clone());
        let a = FieldElement::new(a, p.clone());
        let b = FieldElement::new(b, p.clone());
        let a2_minus_4 = a.mul(&a).sub(&FieldElement::new(BigInt::from(4), p.clone()));
        if b.is_zero() || a2_minus_4.is_zero() {
            return Err(Error::NotOnCurve);
        }
        Curve::finish(params, Family::Montgomery { a, b })
    }

    /// Constructs a twisted Edwards curve `ax^2 + y^2 = 1 + dx^2y^2`, requiring `d(1-d) != 0`.
    pub fn twisted_edwards(
        a: BigInt,
        d: BigInt,
        eddsa: Option<EdDsaParams>,
        params: CurveParams,
    ) -> Result<Arc<Curve>> {
        let p = Arc::new(params.p.clone());
        let a = FieldElement::new(a, p.clone());
        let d = FieldElement::new(d, p.clone());
        let one = FieldElement::new(BigInt::one(), p.clone());
        if d.mul(&one.sub(&d)).is_zero() {
            return Err(Error::NotOnCurve);
        }
        Curve::finish(params, Family::TwistedEdwards { a, d, eddsa })
    }

    /// The curve's prime modulus.
    pub fn p(&self) -> &Arc<BigUint> {
        &self.p
    }

    /// The order of the subgroup containing the generator.
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// The cofactor: `h = (full curve order) / n`.
    pub fn h(&self) -> &BigUint {
        &self.h
    }

    /// The curve's symbolic name, if registered under one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Aliases this curve is additionally known by in the registry.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// The family-specific coefficients.
    pub fn family(&self) -> &Family {
        &self.family
    }

    /// A short tag identifying the curve family, matching the source's `curvetype`.
    pub fn curve_type(&self) -> &'static str {
        match &self.family {
            Family::ShortWeierstrass { .. } => "shortweierstrass",
            Family::Montgomery { .. } => "montgomery",
            Family::TwistedEdwards { .. } => "twistededwards",
        }
    }

    /// EdDSA parameters, if this is a twisted Edwards curve configured for EdDSA.
    pub fn eddsa_params(&self) -> Option<&EdDsaParams> {
        match &self.family {
            Family::TwistedEdwards { eddsa, .. } => eddsa.as_ref(),
            _ => None,
        }
    }

    /// Bit size `B` used by EdDSA point/signature encoding: `bit_length(p) + 1`.
    pub fn b_bits(&self) -> u64 {
        self.p.bits() + 1
    }

    /// The neutral element of this curve's group.
    pub fn neutral(self: &Arc<Self>) -> AffinePoint {
        AffinePoint::neutral(self.clone())
    }

    /// A fresh [`AffinePoint`] for the registered generator, if one was supplied.
    pub fn generator(self: &Arc<Self>) -> Option<AffinePoint> {
        self.generator_xy
            .as_ref()
            .map(|(x, y)| AffinePoint::from_coords(self.clone(), x.clone(), y.clone()))
    }

    /// Whether `P` satisfies this curve's defining equation (or is neutral).
    pub fn oncurve(&self, point: &AffinePoint) -> bool {
        if point.is_neutral() {
            return true;
        }
        let (x, y) = point.xy().expect("checked non-neutral above");
        match &self.family {
            Family::ShortWeierstrass { a, b } => {
                y.mul(&y) == x.mul(&x).mul(&x).add(&a.mul(&x)).add(b)
            }
            Family::Montgomery { a, b } => {
                b.mul(&y.mul(&y)) == x.mul(&x).mul(&x).add(&a.mul(&x).mul(&x)).add(&x)
            }
            Family::TwistedEdwards { a, d } => {
                let one = FieldElement::new(BigInt::one(), self.p.clone());
                a.mul(&x).mul(&x).add(&y.mul(&y)) == one.add(&d.mul(&x).mul(&x).mul(&y).mul(&y))
            }
        }
    }

    /// Point addition dispatched on the curve family (spec.md §4.2).
    pub(crate) fn point_addition(&self, p: &AffinePoint, q: &AffinePoint) -> AffinePoint {
        match &self.family {
            Family::ShortWeierstrass { a, .. } => weierstrass_add(p, q, a),
            Family::Montgomery { a, b } => montgomery_add(p, q, a, b),
            Family::TwistedEdwards { a, d } => edwards_add(p, q, a, d),
        }
    }

    /// Negation ("point conjugate") dispatched on the curve family.
    pub(crate) fn point_conjugate(&self, p: &AffinePoint) -> AffinePoint {
        if p.is_neutral() {
            return p.clone();
        }
        let (x, y) = p.xy().unwrap();
        match &self.family {
            Family::ShortWeierstrass { .. } | Family::Montgomery { .. } => {
                AffinePoint::from_coords(p.curve().clone(), x.clone(), y.neg())
            }
            Family::TwistedEdwards { .. } => {
                AffinePoint::from_coords(p.curve().clone(), x.neg(), y.clone())
            }
        }
    }

    /// Recovers both points with the given `x` coordinate, short Weierstrass only.
    pub fn getpointwithx(self: &Arc<Self>, x: BigInt) -> Result<Option<(AffinePoint, AffinePoint)>> {
        let Family::ShortWeierstrass { a, b } = &self.family else {
            return Err(Error::UnsupportedOperation);
        };
        let xf = FieldElement::new(x, self.p.clone());
        let rhs = xf.mul(&xf).mul(&xf).add(&a.mul(&xf)).add(b);
        match rhs.sqrt() {
            Ok((y1, y2)) => Ok(Some((
                AffinePoint::from_coords(self.clone(), xf.clone(), y1),
                AffinePoint::from_coords(self.clone(), xf, y2),
            ))),
            Err(Error::NoSquareRoot) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Whether this is a Koblitz curve: `b=0 ∧ p≡1(mod 4)` or `a=0 ∧ p≡1(mod 3)`
    /// (short Weierstrass only; `false` for every other family).
    pub fn is_koblitz(&self) -> bool {
        let Family::ShortWeierstrass { a, b } = &self.family else {
            return false;
        };
        let p_mod4 = (&*self.p).mod_floor(&BigUint::from(4u32));
        let p_mod3 = (&*self.p).mod_floor(&BigUint::from(3u32));
        (b.is_zero() && p_mod4 == BigUint::one()) || (a.is_zero() && p_mod3 == BigUint::one())
    }

    /// Bit-security estimate: `bit_length(n)/2`, minus 4 for Koblitz curves.
    pub fn security_bit_estimate(&self) -> u64 {
        let base = self.n.bits() / 2;
        if self.is_koblitz() {
            base.saturating_sub(4)
        } else {
            base
        }
    }

    /// Short Weierstrass isomorphism `x -> u^2 x, y -> u^3 y` (grounded on
    /// `examples/original_source/ecc/CurveOps.py`'s `isomorphism`).
    pub fn isomorphism(self: &Arc<Self>, u: BigInt, name: Option<String>) -> Result<Arc<Curve>> {
        let Family::ShortWeierstrass { a, b } = &self.family else {
            return Err(Error::UnsupportedOperation);
        };
        if u.is_zero() {
            return Err(Error::ValueOutOfRange);
        }
        let u = FieldElement::new(u, self.p.clone());
        let new_a = a.mul(&u.pow_u64(4));
        let new_b = b.mul(&u.pow_u64(6));
        let generator = self.generator().map(|g| {
            let (gx, gy) = g.xy().unwrap();
            (
                biguint_to_signed(gx.mul(&u.pow_u64(2)).value()),
                biguint_to_signed(gy.mul(&u.pow_u64(3)).value()),
            )
        });
        Curve::short_weierstrass(
            biguint_to_signed(new_a.value()),
            biguint_to_signed(new_b.value()),
            CurveParams {
                p: (*self.p).clone(),
                n: self.n.clone(),
                h: self.h.clone(),
                generator,
                name,
                aliases: Vec::new(),
            },
        )
    }
}

fn biguint_to_signed(v: &BigUint) -> BigInt {
    BigInt::from_biguint(num_bigint::Sign::Plus, v.clone())
}

fn weierstrass_add(p: &AffinePoint, q: &AffinePoint, a: &FieldElement) -> AffinePoint {
    if p.is_neutral() {
        return q.clone();
    }
    if q.is_neutral() {
        return p.clone();
    }
    let (px, py) = p.xy().unwrap();
    let (qx, qy) = q.xy().unwrap();
    if px == qx && py == qy.neg() {
        return AffinePoint::neutral(p.curve().clone());
    }
    let (x3, y3) = if p == q {
        let s = px.mul(&px).mul_small(3).add(a).div(&py.mul_small(2)).expect("doubling denominator nonzero");
        let x3 = s.mul(&s).sub(&px.mul_small(2));
        let y3 = s.mul(&px.sub(&x3)).sub(&py);
        (x3, y3)
    } else {
        let s = qy.sub(&py).div(&qx.sub(&px)).expect("distinct x implies invertible denominator");
        let x3 = s.mul(&s).sub(&px).sub(&qx);
        let y3 = s.mul(&px.sub(&x3)).sub(&py);
        (x3, y3)
    };
    AffinePoint::from_coords(p.curve().clone(), x3, y3)
}

fn montgomery_add(p: &AffinePoint, q: &AffinePoint, a: &FieldElement, b: &FieldElement) -> AffinePoint {
    if p.is_neutral() {
        return q.clone();
    }
    if q.is_neutral() {
        return p.clone();
    }
    let (px, py) = p.xy().unwrap();
    let (qx, qy) = q.xy().unwrap();
    if px == qx && py == qy.neg() {
        return AffinePoint::neutral(p.curve().clone());
    }
    let (x3, y3) = if p == q {
        let one = FieldElement::new(BigInt::one(), px.modulus().clone());
        let num = px.mul(&px).mul_small(3).add(&a.mul_small(2).mul(&px)).add(&one);
        let den = b.mul_small(2).mul(&py);
        let s = num.div(&den).expect("doubling denominator nonzero");
        let x3 = b.mul(&s).mul(&s).sub(a).sub(&px.mul_small(2));
        let y3 = s.mul(&px.sub(&x3)).sub(&py);
        (x3, y3)
    } else {
        let s = qy.sub(&py).div(&qx.sub(&px)).expect("distinct x implies invertible denominator");
        let x3 = b.mul(&s).mul(&s).sub(a).sub(&px).sub(&qx);
        let y3 = s.mul(&px.sub(&x3)).sub(&py);
        (x3, y3)
    };
    AffinePoint::from_coords(p.curve().clone(), x3, y3)
}

fn edwards_add(p: &AffinePoint, q: &AffinePoint, a: &FieldElement, d: &FieldElement) -> AffinePoint {
    let (x1, y1) = p.xy().unwrap_or_else(|| {
        let m = p.curve().p().clone();
        (FieldElement::new(BigInt::zero(), m.clone()), FieldElement::new(BigInt::one(), m))
    });
    let (x2, y2) = q.xy().unwrap_or_else(|| {
        let m = q.curve().p().clone();
        (FieldElement::new(BigInt::zero(), m.clone()), FieldElement::new(BigInt::one(), m))
    });
    let one = FieldElement::new(BigInt::one(), x1.modulus().clone());
    let dx1x2y1y2 = d.mul(&x1).mul(&x2).mul(&y1).mul(&y2);
    let x3 = x1.mul(&y2).add(&x2.mul(&y1)).div(&one.add(&dx1x2y1y2)).expect("twisted Edwards curve is complete");
    let y3 = y1.mul(&y2).sub(&a.mul(&x1).mul(&x2)).div(&one.sub(&dx1x2y1y2)).expect("twisted Edwards curve is complete");
    AffinePoint::from_coords(p.curve().clone(), x3, y3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_weierstrass() -> Arc<Curve> {
        // y^2 = x^3 - 3x + 5 mod 23, G = (13, 22) — spec.md §8 scenario 1.
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
    fn constructs_and_validates_generator() {
        let curve = small_weierstrass();
        let g = curve.generator().unwrap();
        assert!(curve.oncurve(&g));
    }

    #[test]
    fn point_addition_matches_scenario_1() {
        let curve = small_weierstrass();
        let p21_16 = AffinePoint::from_coords(
            curve.clone(),
            FieldElement::new(BigInt::from(21), curve.p().clone()),
            FieldElement::new(BigInt::from(16), curve.p().clone()),
        );
        let p14_19 = AffinePoint::from_coords(
            curve.clone(),
            FieldElement::new(BigInt::from(14), curve.p().clone()),
            FieldElement::new(BigInt::from(19), curve.p().clone()),
        );
        let sum = p21_16.add(&p14_19).unwrap();
        let (x, y) = sum.xy().unwrap();
        assert_eq!(*x.value(), BigUint::from(14u32));
        assert_eq!(*y.value(), BigUint::from(4u32));

        let doubled = p21_16.add(&p21_16).unwrap();
        let (x, y) = doubled.xy().unwrap();
        assert_eq!(*x.value(), BigUint::from(5u32));
        assert_eq!(*y.value(), BigUint::from(0u32));
    }
}
