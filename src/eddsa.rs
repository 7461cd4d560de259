//! EdDSA key generation, signing and verification.
//!
//! Grounded on `examples/original_source/ecc/PrivKeyOps.py`'s
//! `PrivKeyOpEDDSASign`, `PrivKeyOpEDDSAKeyGen`, `PrivKeyOpEDDSAEncode` and
//! `PointOps.py`'s `PointOpEDDSAEncoding`. The original's name-check
//! (`if curve.name == "ed25519":`) for scalar conditioning is generalized
//! to the curve's registered [`EdDsaQuirk`](crate::curve::EdDsaQuirk) list.

use std::sync::Arc;

use num_bigint::BigInt;
use num_integer::Integer;

use crate::bigint::IntExt;
use crate::curve::{Curve, EdDsaQuirk};
use crate::error::{Error, Result};
use crate::keys::{PrivateKey, PublicKey};
use crate::point::AffinePoint;
use crate::rand::RandomSource;
use crate::util::{bytes_to_int_le, eddsa_hash, int_to_bytes_le};

/// An EdDSA signature: the encoded point `R` and the scalar `s`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub r: AffinePoint,
    pub s: BigInt,
}

impl Signature {
    /// Serializes as `encode(R) || s` little-endian, each half `B/8` bytes.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let byte_len = ((self.r.curve().b_bits() + 7) / 8) as usize;
        let mut out = self.r.eddsa_encode()?;
        out.extend(int_to_bytes_le(&self.s, byte_len));
        Ok(out)
    }

    /// Deserializes a `2 * B/8`-byte signature.
    pub fn decode(curve: &Arc<Curve>, encoded: &[u8]) -> Result<Signature> {
        let byte_len = ((curve.b_bits() + 7) / 8) as usize;
        if encoded.len() != 2 * byte_len {
            return Err(Error::MalformedEncoding);
        }
        let r = AffinePoint::eddsa_decode(curve, &encoded[..byte_len])?;
        let s = bytes_to_int_le(&encoded[byte_len..]);
        Ok(Signature { r, s })
    }
}

/// Derives an EdDSA private key from a random seed of `B/8` bytes.
pub fn generate(curve: Arc<Curve>, rng: &mut dyn RandomSource) -> Result<PrivateKey> {
    let params = curve.eddsa_params().ok_or(Error::UnsupportedOperation)?;
    let byte_len = (params.b / 8) as usize;
    let mut seed = vec![0u8; byte_len];
    rng.fill(&mut seed);
    from_seed(curve, &seed)
}

/// Derives an EdDSA private key deterministically from `seed` (also the
/// private key's own encoding, per `PrivKeyOpEDDSAEncode`).
pub fn from_seed(curve: Arc<Curve>, seed: &[u8]) -> Result<PrivateKey> {
    let params = curve.eddsa_params().ok_or(Error::UnsupportedOperation)?;
    let byte_len = (params.b / 8) as usize;
    if seed.len() != byte_len {
        return Err(Error::ValueOutOfRange);
    }

    let h = eddsa_hash(params.hash, seed, byte_len);
    let b = params.b as u64;
    let mut a = BigInt::from(0);
    for bit in 0..b {
        if eddsa_bit(&h, bit) {
            a += BigInt::from(1) << bit;
        }
    }

    for quirk in &params.quirks {
        a = apply_quirk(*quirk, a, b);
    }

    PrivateKey::with_seed(a, curve, seed.to_vec())
}

fn eddsa_bit(data: &[u8], bitpos: u64) -> bool {
    let byte = data[(bitpos / 8) as usize];
    (byte >> (bitpos % 8)) & 1 == 1
}

/// Forces bit `pos` of `a` to `set`, leaving every other bit untouched.
fn set_bit(a: BigInt, pos: u64, set: bool) -> BigInt {
    let mask = BigInt::from(1) << pos;
    let has_bit = IntExt::test_bit(&a, pos);
    match (has_bit, set) {
        (true, true) | (false, false) => a,
        (false, true) => a + mask,
        (true, false) => a - mask,
    }
}

fn apply_quirk(quirk: EdDsaQuirk, mut a: BigInt, b: u64) -> BigInt {
    match quirk {
        EdDsaQuirk::ClearLowBits(n) => {
            for pos in 0..n as u64 {
                a = set_bit(a, pos, false);
            }
            a
        }
        EdDsaQuirk::ClearTopBits(n) => {
            for pos in (b - n as u64)..b {
                a = set_bit(a, pos, false);
            }
            a
        }
        EdDsaQuirk::SetBit(pos) => set_bit(a, pos as u64, true),
    }
}

/// Signs `message`. Requires `key` to carry a seed (i.e. was produced by
/// [`generate`]/[`from_seed`], not [`PrivateKey::new`]).
pub fn sign(key: &PrivateKey, message: &[u8]) -> Result<Signature> {
    let curve = key.curve();
    let params = curve.eddsa_params().ok_or(Error::UnsupportedOperation)?;
    let seed = key.seed().ok_or(Error::UnsupportedOperation)?;
    let byte_len = (params.b / 8) as usize;

    let h = eddsa_hash(params.hash, seed, 2 * byte_len);
    let prefix = &h[byte_len..2 * byte_len];

    let mut nonce_input = prefix.to_vec();
    nonce_input.extend_from_slice(message);
    let r_hash = eddsa_hash(params.hash, &nonce_input, byte_len);
    let r_scalar = bytes_to_int_le(&r_hash);

    let generator = curve.generator().ok_or(Error::UnsupportedOperation)?;
    let r_point = generator.mul(&r_scalar);

    let mut challenge_input = r_point.eddsa_encode()?;
    challenge_input.extend(key.pubkey().point().eddsa_encode()?);
    challenge_input.extend_from_slice(message);
    let k_hash = eddsa_hash(params.hash, &challenge_input, byte_len);
    let k_scalar = bytes_to_int_le(&k_hash);

    let n = BigInt::from(curve.n().clone());
    let s = (r_scalar + k_scalar * key.scalar()).mod_floor(&n);

    Ok(Signature { r: r_point, s })
}

/// Verifies an EdDSA signature.
pub fn verify(pubkey: &PublicKey, message: &[u8], sig: &Signature) -> Result<bool> {
    let curve = pubkey.curve();
    let params = curve.eddsa_params().ok_or(Error::UnsupportedOperation)?;
    let byte_len = (params.b / 8) as usize;

    let mut challenge_input = sig.r.eddsa_encode()?;
    challenge_input.extend(pubkey.point().eddsa_encode()?);
    challenge_input.extend_from_slice(message);
    let k_hash = eddsa_hash(params.hash, &challenge_input, byte_len);
    let k_scalar = bytes_to_int_le(&k_hash);

    let generator = curve.generator().ok_or(Error::UnsupportedOperation)?;
    let lhs = generator.mul(&sig.s);
    let rhs = sig.r.add(&pubkey.point().mul(&k_scalar))?;
    Ok(lhs == rhs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::get_curve_by_name;

    #[test]
    fn rfc8032_ed25519_test_vector_1() {
        let curve = get_curve_by_name("ed25519").unwrap();
        let seed = hex_decode("9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60");
        let seed = &seed[..32];
        let key = from_seed(curve.clone(), seed).unwrap();
        let sig = sign(&key, b"").unwrap();
        let encoded = sig.encode().unwrap();
        let expected = hex_decode(
            "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e065224901555fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100",
        );
        assert_eq!(encoded, expected);
        assert!(verify(key.pubkey(), b"", &sig).unwrap());
    }

    fn hex_decode(s: &str) -> Vec<u8> {
        (0..s.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
            .collect()
    }
}
