//! Byte/integer conversions and hash dispatch shared by the protocol layer.
//!
//! Grounded on `examples/original_source/ecc/Tools.py`: `bytestoint`,
//! `bytestoint_le`, `inttobytes_le` and `ecdsa_msgdigest_to_int` are carried
//! over as free functions; `eddsa_hash` is generalized from its SHA-512-only
//! form to dispatch per curve (SHA-512 for Ed25519, SHAKE256 for Ed448, per
//! spec.md §4.6 and RFC 8032).

use digest::{Digest, ExtendableOutput, Update, XofReader};
use num_bigint::BigInt;
use num_traits::Zero;
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};
use sha3::{Sha3_256, Sha3_512, Shake256};

use crate::bigint::IntExt;
use crate::curve::EdDsaHash;

/// Named digest algorithms used by ECDSA message-digest truncation (spec.md §4.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestAlgorithm {
    Sha1,
    Sha256,
    Sha384,
    Sha512,
    Sha3_256,
    Sha3_512,
}

impl DigestAlgorithm {
    /// Hashes `message` with this algorithm.
    pub fn digest(self, message: &[u8]) -> Vec<u8> {
        match self {
            DigestAlgorithm::Sha1 => Sha1::digest(message).to_vec(),
            DigestAlgorithm::Sha256 => Sha256::digest(message).to_vec(),
            DigestAlgorithm::Sha384 => Sha384::digest(message).to_vec(),
            DigestAlgorithm::Sha512 => Sha512::digest(message).to_vec(),
            DigestAlgorithm::Sha3_256 => Sha3_256::digest(message).to_vec(),
            DigestAlgorithm::Sha3_512 => Sha3_512::digest(message).to_vec(),
        }
    }
}

/// Big-endian bytes to a non-negative integer.
pub fn bytes_to_int(data: &[u8]) -> BigInt {
    BigInt::from_bytes_be_unsigned(data)
}

/// Little-endian bytes to a non-negative integer.
pub fn bytes_to_int_le(data: &[u8]) -> BigInt {
    BigInt::from_bytes_le_unsigned(data)
}

/// A non-negative integer to `length` little-endian bytes, truncating or
/// zero-padding as needed.
pub fn int_to_bytes_le(value: &BigInt, length: usize) -> Vec<u8> {
    value.to_bytes_le_padded(length)
}

/// Truncates a message digest to the bit length of the curve order (FIPS 186-4 §6.4).
pub fn ecdsa_msgdigest_to_int(message_digest: &[u8], curve_order: &num_bigint::BigUint) -> BigInt {
    let e = bytes_to_int(message_digest);
    let digest_bits = 8 * message_digest.len() as u64;
    let order_bits = curve_order.bits();
    if digest_bits > order_bits {
        let shift = digest_bits - order_bits;
        e >> shift
    } else {
        e
    }
}

/// The EdDSA seed/nonce/challenge hash for a given curve's hash choice
/// (spec.md §4.6; `Tools.py`'s `eddsa_hash`, generalized beyond SHA-512-only).
///
/// For `Shake256` the digest is squeezed out to `output_len` bytes, matching
/// RFC 8032 Ed448's use of SHAKE256 as an XOF rather than a fixed digest.
pub fn eddsa_hash(hash: EdDsaHash, data: &[u8], output_len: usize) -> Vec<u8> {
    match hash {
        EdDsaHash::Sha512 => Sha512::digest(data).to_vec(),
        EdDsaHash::Shake256 => {
            let mut hasher = Shake256::default();
            Update::update(&mut hasher, data);
            let mut reader = hasher.finalize_xof();
            let mut out = vec![0u8; output_len];
            reader.read(&mut out);
            out
        }
    }
}

/// Whether `value` is zero, used by protocol code that treats a zero scalar as invalid.
pub fn is_zero(value: &BigInt) -> bool {
    value.is_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_to_int_round_trips() {
        let v = BigInt::from(0x01_02_03_04u64);
        let bytes = v.to_bytes_be_unsigned();
        assert_eq!(bytes_to_int(&bytes), v);
    }

    #[test]
    fn le_round_trip_with_padding() {
        let v = BigInt::from(258);
        let bytes = int_to_bytes_le(&v, 4);
        assert_eq!(bytes_to_int_le(&bytes), v);
        assert_eq!(bytes.len(), 4);
    }

    #[test]
    fn truncates_oversized_digest() {
        // 256-bit digest, 160-bit order: must shift right by 96 bits.
        let digest = [0xffu8; 32];
        let order = num_bigint::BigUint::from(2u32).pow(160) - num_bigint::BigUint::from(1u32);
        let e = ecdsa_msgdigest_to_int(&digest, &order);
        assert!(e.bits() <= 160);
    }
}
