//! Randomness as an injected capability, rather than a global source.
//!
//! Grounded on `examples/original_source/ecc/Random.py`'s
//! `secure_rand_int_between` (every operation that needs entropy takes the
//! source as a parameter) and on the teacher crates' `rand_core` dependency
//! (`ml-dsa`, `slh-dsa`, `dsa` all take `&mut impl CryptoRngCore`).

use num_bigint::BigInt;
use rand_core::CryptoRngCore;

use crate::bigint::IntExt;

/// A source of cryptographically secure randomness, blanket-implemented for
/// every `rand_core::CryptoRngCore`. Keeping this as a trait (rather than
/// requiring `rand_core` directly in every signature) leaves room for
/// deterministic test doubles.
pub trait RandomSource {
    /// Fills `buf` with random bytes.
    fn fill(&mut self, buf: &mut [u8]);
}

impl<T: CryptoRngCore> RandomSource for T {
    fn fill(&mut self, buf: &mut [u8]) {
        self.fill_bytes(buf);
    }
}

/// A uniformly random integer in `[low, high]`, inclusive (spec.md §4.9;
/// `Random.py`'s `secure_rand_int_between`). Uses rejection sampling over
/// the smallest byte string covering the range's width.
pub fn rand_int_between(rng: &mut dyn RandomSource, low: &BigInt, high: &BigInt) -> BigInt {
    assert!(low <= high, "curvekit: empty random range");
    let width = high - low;
    let byte_len = ((width.bit_length() + 8) / 8).max(1) as usize;
    loop {
        let mut buf = vec![0u8; byte_len];
        rng.fill(&mut buf);
        let candidate = BigInt::from_bytes_be_unsigned(&buf);
        if candidate <= width {
            return low + candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<u8>);
    impl RandomSource for Fixed {
        fn fill(&mut self, buf: &mut [u8]) {
            let n = buf.len();
            buf.copy_from_slice(&self.0[..n]);
        }
    }

    #[test]
    fn stays_within_bounds() {
        let mut rng = Fixed(vec![0x03]);
        let v = rand_int_between(&mut rng, &BigInt::from(1), &BigInt::from(10));
        assert!(v >= BigInt::from(1) && v <= BigInt::from(10));
    }
}
