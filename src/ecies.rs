//! Elliptic Curve Integrated Encryption Scheme.
//!
//! Grounded on `examples/original_source/ecc/PrivKeyOps.py`'s
//! `PrivKeyOpECIESDecrypt` for decryption. Encryption draws the ephemeral
//! scalar `r` from `[1, n-1]` — the corrected range, not the buggy
//! `ECKeypair.py` `[0, 100000)` range spec.md §9 warns against reproducing.

use num_bigint::BigInt;

use crate::error::{Error, Result};
use crate::keys::{PrivateKey, PublicKey};
use crate::point::AffinePoint;
use crate::rand::{rand_int_between, RandomSource};

/// The ephemeral point `R = [r]G` plus the shared secret point `S = [r]Q`
/// it encrypts toward. The caller derives a symmetric key from `S` (e.g.
/// via a KDF over its encoded coordinates) and sends `R` alongside the
/// ciphertext.
pub struct Encrypted {
    pub ephemeral: AffinePoint,
    pub shared_secret: AffinePoint,
}

/// Encrypts toward `recipient`: draws a random `r` in `[1, n-1]`, returning
/// `R = [r]G` and the shared secret `S = [r]Q`.
pub fn encrypt(recipient: &PublicKey, rng: &mut dyn RandomSource) -> Result<Encrypted> {
    let curve = recipient.curve();
    let n = curve.n().clone();
    let r = rand_int_between(rng, &BigInt::from(1), &(BigInt::from(n) - 1));
    let generator = curve.generator().ok_or(Error::UnsupportedOperation)?;
    let ephemeral = generator.mul(&r);
    let shared_secret = recipient.point().mul(&r);
    Ok(Encrypted { ephemeral, shared_secret })
}

/// Decrypts: reconstructs the shared secret point `S = [d]R` from the
/// transmitted ephemeral point `R` and our private scalar `d`.
pub fn decrypt(key: &PrivateKey, ephemeral: &AffinePoint) -> AffinePoint {
    ephemeral.mul(key.scalar())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{Curve, CurveParams};
    use crate::rand::RandomSource;
    use num_bigint::BigUint;
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

    fn tiny_curve() -> std::sync::Arc<Curve> {
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
    fn encrypt_then_decrypt_recovers_shared_secret() {
        let curve = tiny_curve();
        let key = PrivateKey::new(BigInt::from(9), curve).unwrap();
        let mut rng = Counter(2);
        let enc = encrypt(key.pubkey(), &mut rng).unwrap();
        let recovered = decrypt(&key, &enc.ephemeral);
        assert_eq!(recovered, enc.shared_secret);
    }
}
