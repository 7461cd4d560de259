//! ECDSA signing, verification and reused-nonce key recovery.
//!
//! Grounded on `examples/original_source/ecc/PrivKeyOps.py`'s
//! `PrivKeyOpECDSASign` and `EllipticCurveFP.py`'s `exploitidenticalnoncesig`.

use num_bigint::BigInt;
use num_traits::Zero;

use crate::bigint::IntExt;
use crate::error::{Error, Result};
use crate::field::FieldElement;
use crate::keys::{PrivateKey, PublicKey};
use crate::rand::{rand_int_between, RandomSource};
use crate::util::ecdsa_msgdigest_to_int;

/// An ECDSA signature: `(r, s)` plus the digest algorithm name it was produced over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub r: BigInt,
    pub s: BigInt,
}

/// Signs a precomputed message digest. If `nonce` is `Some`, it is used
/// verbatim as `k` rather than drawn randomly — this is the hook that lets
/// [`recover_from_reused_nonce`] be demonstrated/tested, not a production
/// signing mode.
pub fn sign_hash(
    key: &PrivateKey,
    message_digest: &[u8],
    nonce: Option<BigInt>,
    rng: &mut dyn RandomSource,
) -> Result<Signature> {
    let curve = key.curve();
    let n = curve.n().clone();
    let e = ecdsa_msgdigest_to_int(message_digest, &n);

    let k = match nonce {
        Some(k) => k,
        None => rand_int_between(rng, &BigInt::from(1), &(BigInt::from(n.clone()) - 1)),
    };

    let generator = curve.generator().ok_or(Error::UnsupportedOperation)?;
    let r_point = generator.mul(&k);
    let (rx, _) = r_point.xy().ok_or(Error::NotOnCurve)?;
    let r = rx.value() % &n;
    if r.is_zero() {
        return Err(Error::ValueOutOfRange);
    }
    let r = BigInt::from(r);

    let n_arc = std::sync::Arc::new(n.clone());
    let e_mod_n = FieldElement::new(e, n_arc.clone());
    let scalar_mod_n = FieldElement::new(key.scalar().clone(), n_arc.clone());
    let r_mod_n = FieldElement::new(r.clone(), n_arc.clone());
    let k_mod_n = FieldElement::new(k, n_arc);
    let s = e_mod_n.add(&scalar_mod_n.mul(&r_mod_n)).div(&k_mod_n)?;

    Ok(Signature { r, s: BigInt::from(s.value().clone()) })
}

/// Signs `message` by first hashing it with `digest`.
pub fn sign(
    key: &PrivateKey,
    message: &[u8],
    digest: crate::util::DigestAlgorithm,
    rng: &mut dyn RandomSource,
) -> Result<Signature> {
    let message_digest = digest.digest(message);
    sign_hash(key, &message_digest, None, rng)
}

/// Verifies an ECDSA signature over a precomputed message digest.
pub fn verify_hash(pubkey: &PublicKey, message_digest: &[u8], sig: &Signature) -> Result<bool> {
    let curve = pubkey.curve();
    let n = curve.n().clone();
    if sig.r.is_zero() || sig.s.is_zero() || sig.r >= BigInt::from(n.clone()) || sig.s >= BigInt::from(n.clone()) {
        return Ok(false);
    }
    let e = ecdsa_msgdigest_to_int(message_digest, &n);

    let n_arc = std::sync::Arc::new(n.clone());
    let s_inv = FieldElement::new(sig.s.clone(), n_arc.clone()).invert()?;
    let u1 = FieldElement::new(e, n_arc.clone()).mul(&s_inv);
    let u2 = FieldElement::new(sig.r.clone(), n_arc).mul(&s_inv);

    let generator = curve.generator().ok_or(Error::UnsupportedOperation)?;
    let point = generator
        .mul(&BigInt::from(u1.value().clone()))
        .add(&pubkey.point().mul(&BigInt::from(u2.value().clone())))?;
    if point.is_neutral() {
        return Ok(false);
    }
    let (x, _) = point.xy().unwrap();
    let v = BigInt::from(x.value() % &n);
    Ok(v == sig.r)
}

/// Verifies `message` after hashing it with `digest`.
pub fn verify(pubkey: &PublicKey, message: &[u8], digest: crate::util::DigestAlgorithm, sig: &Signature) -> Result<bool> {
    verify_hash(pubkey, &digest.digest(message), sig)
}

/// Recovers the private scalar from two signatures that reused the same
/// nonce `k` over the same curve and public key (spec.md §4.4;
/// `EllipticCurveFP.py`'s `exploitidenticalnoncesig`):
/// `k = (e1 - e2) / (s1 - s2)`, `d = (k*s1 - e1) / r`.
pub fn recover_from_reused_nonce(
    curve_order: &num_bigint::BigUint,
    digest1: &[u8],
    sig1: &Signature,
    digest2: &[u8],
    sig2: &Signature,
) -> Result<BigInt> {
    if sig1.r != sig2.r {
        return Err(Error::ValueOutOfRange);
    }
    let n_arc = std::sync::Arc::new(curve_order.clone());
    let e1 = FieldElement::new(ecdsa_msgdigest_to_int(digest1, curve_order), n_arc.clone());
    let e2 = FieldElement::new(ecdsa_msgdigest_to_int(digest2, curve_order), n_arc.clone());
    let s1 = FieldElement::new(sig1.s.clone(), n_arc.clone());
    let s2 = FieldElement::new(sig2.s.clone(), n_arc.clone());
    let r = FieldElement::new(sig1.r.clone(), n_arc);

    let k = e1.sub(&e2).div(&s1.sub(&s2))?;
    let d = k.mul(&s1).sub(&e1).div(&r)?;
    Ok(BigInt::from(d.value().clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::CurveParams;
    use crate::curve::Curve;
    use crate::keys::PrivateKey;
    use crate::rand::RandomSource;
    use num_bigint::BigUint;
    use num_traits::One;
    use std::sync::Arc;

    struct Counter(u8);
    impl RandomSource for Counter {
        fn fill(&mut self, buf: &mut [u8]) {
            for b in buf.iter_mut() {
                *b = self.0;
                self.0 = self.0.wrapping_add(1);
            }
        }
    }

    fn tiny_curve() -> Arc<Curve> {
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
    fn reused_nonce_recovers_private_key() {
        let curve = tiny_curve();
        let key = PrivateKey::new(BigInt::from(7), curve.clone()).unwrap();
        let mut rng = Counter(1);
        let k = BigInt::from(9);
        let digest1 = [0xaau8; 4];
        let digest2 = [0xbbu8; 4];
        let sig1 = sign_hash(&key, &digest1, Some(k.clone()), &mut rng).unwrap();
        let sig2 = sign_hash(&key, &digest2, Some(k), &mut rng).unwrap();
        let recovered = recover_from_reused_nonce(curve.n(), &digest1, &sig1, &digest2, &sig2).unwrap();
        let order = BigInt::from(curve.n().clone());
        assert_eq!(recovered % order.clone(), BigInt::from(7) % order);
    }

    #[test]
    fn sign_then_verify_round_trips() {
        let curve = tiny_curve();
        let key = PrivateKey::new(BigInt::from(11), curve).unwrap();
        let mut rng = Counter(3);
        let digest = [0x01u8, 0x02, 0x03, 0x04];
        let sig = sign_hash(&key, &digest, Some(BigInt::from(5)), &mut rng).unwrap();
        assert!(verify_hash(key.pubkey(), &digest, &sig).unwrap());
    }
}
