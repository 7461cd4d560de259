//! `curvekit` implements elliptic-curve arithmetic and the protocols built on
//! top of it (ECDSA, EdDSA, ECDH, ECIES) over short Weierstrass, Montgomery
//! and twisted Edwards curves, starting from arbitrary-precision field
//! arithmetic rather than fixed-size machine words.
//!
//! A curve is a [`curve::Curve`], reference-counted and immutable once
//! built; [`registry`] resolves 57 named standard curves by name or alias.
//! A point on a curve is a [`point::AffinePoint`]; [`keys::PrivateKey`] and
//! [`keys::PublicKey`] wrap a scalar and a point respectively. The protocol
//! modules (`ecdsa`, `ecdh`, `ecies`, `eddsa`) are free functions taking
//! those types, mirroring the class-mixin structure of
//! `examples/original_source/ecc/PrivKeyOps.py` without the inheritance.

#![forbid(unsafe_code)]

mod bigint;
mod field;

pub mod curve;
pub mod ecdh;
pub mod ecdsa;
pub mod ecies;
pub mod eddsa;
pub mod error;
pub mod keys;
pub mod point;
pub mod rand;
pub mod registry;
pub mod util;

pub use bigint::Int;
pub use curve::{Curve, CurveParams, EdDsaHash, EdDsaParams, EdDsaQuirk, Family};
pub use error::{Error, Result};
pub use field::FieldElement;
pub use keys::{PrivateKey, PublicKey};
pub use point::AffinePoint;
pub use rand::{rand_int_between, RandomSource};
pub use registry::{curve_aliases, curve_names, get_curve_by_name};
pub use util::DigestAlgorithm;
