//! Arbitrary-precision integer facade.
//!
//! `curvekit` does not invent its own bignum representation; every layer
//! above this one talks in terms of [`Int`], a thin alias over
//! `num_bigint::BigInt`. This module only adds the handful of operations
//! the rest of the crate needs that `BigInt` doesn't expose directly:
//! bit-length, single-bit access, and fixed-endianness byte conversion.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{ToPrimitive, Zero};

/// Arbitrary-precision signed integer. Value type, freely cloned.
pub type Int = BigInt;

/// Extension operations on [`Int`] used across field, point and protocol code.
pub trait IntExt {
    /// Number of bits in the magnitude's minimal two's-complement-free representation.
    fn bit_length(&self) -> u64;

    /// Value of bit `i` of the magnitude (0 = least significant).
    fn test_bit(&self, i: u64) -> bool;

    /// Big-endian unsigned byte encoding of the magnitude.
    fn to_bytes_be_unsigned(&self) -> Vec<u8>;

    /// Little-endian unsigned byte encoding of the magnitude, padded/truncated to `len` bytes.
    fn to_bytes_le_padded(&self, len: usize) -> Vec<u8>;

    /// Parses a big-endian unsigned byte string into a non-negative [`Int`].
    fn from_bytes_be_unsigned(bytes: &[u8]) -> Int;

    /// Parses a little-endian unsigned byte string into a non-negative [`Int`].
    fn from_bytes_le_unsigned(bytes: &[u8]) -> Int;
}

impl IntExt for Int {
    fn bit_length(&self) -> u64 {
        self.magnitude().bits()
    }

    fn test_bit(&self, i: u64) -> bool {
        self.magnitude().bit(i)
    }

    fn to_bytes_be_unsigned(&self) -> Vec<u8> {
        self.magnitude().to_bytes_be()
    }

    fn to_bytes_le_padded(&self, len: usize) -> Vec<u8> {
        let mut bytes = self.magnitude().to_bytes_le();
        bytes.resize(len, 0);
        bytes
    }

    fn from_bytes_be_unsigned(bytes: &[u8]) -> Int {
        BigInt::from_biguint(Sign::Plus, BigUint::from_bytes_be(bytes))
    }

    fn from_bytes_le_unsigned(bytes: &[u8]) -> Int {
        BigInt::from_biguint(Sign::Plus, BigUint::from_bytes_le(bytes))
    }
}

/// Converts a non-negative [`Int`] to `u64`, for cofactors and small exponents.
pub fn to_u64(value: &Int) -> Option<u64> {
    if value.sign() == num_bigint::Sign::Minus {
        return None;
    }
    value.to_u64()
}

/// Returns true if `value` is zero.
pub fn is_zero(value: &Int) -> bool {
    value.is_zero()
}
