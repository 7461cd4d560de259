//! Elliptic-curve Diffie-Hellman.
//!
//! Grounded on `examples/original_source/ecc/PrivKeyOps.py`'s `PrivKeyOpECDH`.

use crate::error::Result;
use crate::keys::{PrivateKey, PublicKey};
use crate::point::AffinePoint;

/// Computes the shared secret point `[d]Q` for our private scalar `d` and
/// the peer's public point `Q`.
pub fn compute(key: &PrivateKey, peer_pubkey: &PublicKey) -> Result<AffinePoint> {
    Ok(peer_pubkey.point().mul(key.scalar()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{Curve, CurveParams};
    use crate::keys::PrivateKey;
    use num_bigint::{BigInt, BigUint};
    use num_traits::One;

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
    fn both_sides_agree() {
        let curve = tiny_curve();
        let alice = PrivateKey::new(BigInt::from(6), curve.clone()).unwrap();
        let bob = PrivateKey::new(BigInt::from(15), curve).unwrap();

        let shared_alice = compute(&alice, bob.pubkey()).unwrap();
        let shared_bob = compute(&bob, alice.pubkey()).unwrap();
        assert_eq!(shared_alice, shared_bob);
    }
}
