//! Private and public key types.
//!
//! Grounded on `examples/original_source/ecc/ECPrivateKey.py` and
//! `ECPublicKey.py`: the original composes per-protocol mixins onto these
//! two classes (`PrivKeyOpECDSASign`, `PrivKeyOpECDH`, ...); here the
//! protocol operations live as free functions in `ecdsa`/`ecies`/`ecdh`/
//! `eddsa` taking `&PrivateKey`/`&PublicKey`, and these two types stay plain
//! data holders.

use std::fmt;
use std::sync::Arc;

use num_bigint::BigInt;

use crate::curve::Curve;
use crate::error::{Error, Result};
use crate::point::AffinePoint;
use crate::rand::{rand_int_between, RandomSource};

/// An elliptic-curve public key: a point on some curve.
#[derive(Clone)]
pub struct PublicKey {
    point: AffinePoint,
}

impl PublicKey {
    /// Wraps `point` as a public key, without validating it lies on the curve.
    pub fn new(point: AffinePoint) -> PublicKey {
        PublicKey { point }
    }

    /// The underlying point.
    pub fn point(&self) -> &AffinePoint {
        &self.point
    }

    /// The curve this key is bound to.
    pub fn curve(&self) -> &Arc<Curve> {
        self.point.curve()
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({:?})", self.point)
    }
}

/// An elliptic-curve private key: a scalar on some curve, plus its derived public key.
///
/// `seed` is set only for EdDSA keys, which derive their scalar from a
/// hashed seed rather than holding the scalar as the canonical secret
/// (spec.md §4.6).
pub struct PrivateKey {
    scalar: BigInt,
    curve: Arc<Curve>,
    pubkey: PublicKey,
    seed: Option<Vec<u8>>,
}

impl PrivateKey {
    /// Builds a private key from an explicit scalar, deriving the public key as `[scalar]G`.
    pub fn new(scalar: BigInt, curve: Arc<Curve>) -> Result<PrivateKey> {
        let generator = curve.generator().ok_or(Error::UnsupportedOperation)?;
        let pubkey = PublicKey::new(generator.mul(&scalar));
        Ok(PrivateKey { scalar, curve, pubkey, seed: None })
    }

    /// Builds a private key from an explicit scalar and a seed that scalar was derived from.
    pub(crate) fn with_seed(scalar: BigInt, curve: Arc<Curve>, seed: Vec<u8>) -> Result<PrivateKey> {
        let mut key = PrivateKey::new(scalar, curve)?;
        key.seed = Some(seed);
        Ok(key)
    }

    /// Generates a uniformly random private key: `d` in `[1, n-1]`.
    pub fn generate(curve: Arc<Curve>, rng: &mut dyn RandomSource) -> Result<PrivateKey> {
        let n = curve.n().clone();
        let one = BigInt::from(1);
        let upper = BigInt::from(n) - &one;
        let scalar = rand_int_between(rng, &one, &upper);
        PrivateKey::new(scalar, curve)
    }

    /// The private scalar.
    pub fn scalar(&self) -> &BigInt {
        &self.scalar
    }

    /// The curve this key is bound to.
    pub fn curve(&self) -> &Arc<Curve> {
        &self.curve
    }

    /// The corresponding public key.
    pub fn pubkey(&self) -> &PublicKey {
        &self.pubkey
    }

    /// The seed this key's scalar was derived from, if this is an EdDSA key.
    pub fn seed(&self) -> Option<&[u8]> {
        self.seed.as_deref()
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.seed {
            None => write!(f, "PrivateKey(d = 0x{:x})", self.scalar),
            Some(seed) => {
                write!(f, "PrivateKey(d = 0x{:x}, seed = ", self.scalar)?;
                for byte in seed {
                    write!(f, "{byte:02x}")?;
                }
                write!(f, ")")
            }
        }
    }
}
