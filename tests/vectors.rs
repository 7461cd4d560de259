//! Integration tests against the concrete scenarios used as grounding
//! throughout the crate: the tiny textbook curves, the RFC 8032 Ed25519 and
//! Ed448-Goldilocks vectors, a secp112r1 ECDSA vector, and a secp192k1
//! reused-nonce recovery modeled on `examples/original_source/ecctest.py`.

use std::sync::Arc;

use curvekit::curve::{Curve, CurveParams};
use curvekit::eddsa;
use curvekit::rand::RandomSource;
use curvekit::registry::get_curve_by_name;
use curvekit::util::DigestAlgorithm;
use curvekit::{ecdsa, PrivateKey};
use num_bigint::{BigInt, BigUint};
use num_traits::One;

struct Counter(u8);
impl RandomSource for Counter {
    fn fill(&mut self, buf: &mut [u8]) {
        for b in buf.iter_mut() {
            *b = self.0;
            self.0 = self.0.wrapping_add(1);
        }
    }
}

fn weierstrass_mod23() -> Arc<Curve> {
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

fn weierstrass_mod101() -> Arc<Curve> {
    Curve::short_weierstrass(
        BigInt::from(3),
        BigInt::from(99),
        CurveParams {
            p: BigUint::from(101u32),
            n: BigUint::from(99u32),
            h: BigUint::one(),
            generator: Some((BigInt::from(12), BigInt::from(34))),
            name: Some("test101".into()),
            aliases: vec![],
        },
    )
    .unwrap()
}

#[test]
fn scenario_1_small_weierstrass_additions() {
    let curve = weierstrass_mod23();
    let p21_16 = curvekit::AffinePoint::from_coords(
        curve.clone(),
        curvekit::FieldElement::new(BigInt::from(21), curve.p().clone()),
        curvekit::FieldElement::new(BigInt::from(16), curve.p().clone()),
    );
    let p14_19 = curvekit::AffinePoint::from_coords(
        curve.clone(),
        curvekit::FieldElement::new(BigInt::from(14), curve.p().clone()),
        curvekit::FieldElement::new(BigInt::from(19), curve.p().clone()),
    );

    let sum = p21_16.add(&p14_19).unwrap();
    let (x, y) = sum.xy().unwrap();
    assert_eq!(*x.value(), BigUint::from(14u32));
    assert_eq!(*y.value(), BigUint::from(4u32));

    let double_21_16 = p21_16.add(&p21_16).unwrap();
    let (x, y) = double_21_16.xy().unwrap();
    assert_eq!(*x.value(), BigUint::from(5u32));
    assert_eq!(*y.value(), BigUint::from(0u32));

    let double_14_19 = p14_19.add(&p14_19).unwrap();
    let (x, y) = double_14_19.xy().unwrap();
    assert_eq!(*x.value(), BigUint::from(21u32));
    assert_eq!(*y.value(), BigUint::from(7u32));
}

#[test]
fn scenario_2_tiny_curve_scalar_multiples() {
    let curve = weierstrass_mod101();
    let g = curve.generator().unwrap();

    let expected = [
        (2, 93, 88),
        (3, 75, 25),
        (4, 47, 72),
        (5, 21, 63),
        (55, 71, 28),
        (123, 91, 33),
    ];
    for (k, x, y) in expected {
        let p = g.mul(&BigInt::from(k));
        let (px, py) = p.xy().unwrap();
        assert_eq!(*px.value(), BigUint::from(x as u32), "k={k}");
        assert_eq!(*py.value(), BigUint::from(y as u32), "k={k}");
    }

    let neutral = g.mul(&BigInt::from(99));
    assert!(neutral.is_neutral());
}

#[test]
fn scenario_3_secp112r1_ecdsa_vector() {
    let curve = get_curve_by_name("secp112r1").unwrap();
    let key = PrivateKey::new(BigInt::parse_bytes(b"deadbeef", 16).unwrap(), curve).unwrap();

    let (px, py) = key.pubkey().point().xy().unwrap();
    assert_eq!(*px.value(), BigUint::from(3029259716094196738484362740763961u128));
    assert_eq!(*py.value(), BigUint::from(2918181739692718713384134377830669u128));

    let digest = DigestAlgorithm::Sha1.digest(b"foobar");
    let mut rng = Counter(0);
    let sig = ecdsa::sign_hash(&key, &digest, Some(BigInt::from(12345)), &mut rng).unwrap();

    assert_eq!(sig.r, BigInt::from(1696427335541514286367855701829018u128));
    assert_eq!(sig.s, BigInt::from(1960761230049936699759766101723490u128));

    assert!(ecdsa::verify_hash(key.pubkey(), &digest, &sig).unwrap());
}

#[test]
fn scenario_4_ed25519_rfc8032_vector_1() {
    let curve = get_curve_by_name("ed25519").unwrap();
    let seed = [0u8; 32];
    let key = eddsa::from_seed(curve, &seed).unwrap();
    let sig = eddsa::sign(&key, b"").unwrap();
    let encoded = sig.encode().unwrap();

    let expected_sig = hex_decode(
        "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e065224901555fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100",
    );
    assert_eq!(encoded, expected_sig);

    let expected_pubkey = hex_decode("d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511");
    let pubkey_encoded = key.pubkey().point().eddsa_encode().unwrap();
    assert_eq!(pubkey_encoded, expected_pubkey);

    assert!(eddsa::verify(key.pubkey(), b"", &sig).unwrap());
}

#[test]
fn scenario_5_ed448_goldilocks_key_derivation() {
    let curve = get_curve_by_name("Ed448-Goldilocks").unwrap();
    let seed = hex_decode(
        "6c82a562cb808d10d632be89c8513ebf6c929f34ddfa8c9f63c9960ef6e348a3528c8a3fcc2f044e39a3fc5b94492f8f032e7549a20098f95b",
    );
    let key = eddsa::from_seed(curve, &seed).unwrap();

    let expected_scalar = BigInt::parse_bytes(
        b"521658399617511624509929819094270498323007786671637499019582168374758478770958028340603419308639592898868374490003595203618871291427304",
        10,
    )
    .unwrap();
    assert_eq!(*key.scalar(), expected_scalar);

    let (x, y) = key.pubkey().point().xy().unwrap();
    let expected_x = BigUint::parse_bytes(
        b"f6882451bdd0174e32c5b38a637659cd839ef9cc40b53843adda3b01886a86edc71e8af14839b8bb21e185775ed3f61a105d0bf339d04ac7",
        16,
    )
    .unwrap();
    let expected_y = BigUint::parse_bytes(
        b"ca023dfc9ed27809e1ca6976cb18618cf066bdd0769dd8962bac9c9535c7bf092090dfa289a997a332ed9c3984ed085dbf9dce6effb489d6",
        16,
    )
    .unwrap();
    assert_eq!(*x.value(), expected_x);
    assert_eq!(*y.value(), expected_y);

    let sig = eddsa::sign(&key, b"Foobar!").unwrap();
    assert!(eddsa::verify(key.pubkey(), b"Foobar!", &sig).unwrap());
    assert!(!eddsa::verify(key.pubkey(), b"Foobar?", &sig).unwrap());
}

#[test]
fn scenario_6_reused_nonce_recovery_on_secp192k1() {
    let curve = get_curve_by_name("secp192k1").unwrap();
    let key = PrivateKey::new(BigInt::from(0x12345), curve.clone()).unwrap();
    let mut rng = Counter(0);

    let digest1 = DigestAlgorithm::Sha1.digest(b"foobar");
    let digest2 = DigestAlgorithm::Sha1.digest(b"foobaz");
    let k = BigInt::from(123456);
    let sig1 = ecdsa::sign_hash(&key, &digest1, Some(k.clone()), &mut rng).unwrap();
    let sig2 = ecdsa::sign_hash(&key, &digest2, Some(k), &mut rng).unwrap();

    let recovered = ecdsa::recover_from_reused_nonce(curve.n(), &digest1, &sig1, &digest2, &sig2).unwrap();
    let order = BigInt::from(curve.n().clone());
    assert_eq!(((recovered % &order) + &order) % &order, ((key.scalar() % &order) + &order) % &order);
}

#[test]
fn eddsa_decode_round_trips_on_ed25519() {
    let curve = get_curve_by_name("ed25519").unwrap();
    let seed = [0u8; 32];
    let key = eddsa::from_seed(curve.clone(), &seed).unwrap();

    let point = key.pubkey().point();
    let encoded = point.eddsa_encode().unwrap();
    let decoded = curvekit::AffinePoint::eddsa_decode(&curve, &encoded).unwrap();
    assert_eq!(&decoded, point);

    let sig = eddsa::sign(&key, b"hello").unwrap();
    let sig_encoded = sig.encode().unwrap();
    let sig_decoded = eddsa::Signature::decode(&curve, &sig_encoded).unwrap();
    assert_eq!(sig_decoded.r, sig.r);
    assert_eq!(sig_decoded.s, sig.s);
    assert!(eddsa::verify(key.pubkey(), b"hello", &sig_decoded).unwrap());
}

fn hex_decode(s: &str) -> Vec<u8> {
    (0..s.len()).step_by(2).map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap()).collect()
}
