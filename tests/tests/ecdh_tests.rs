//! ECDH agreement across the named curves

use ecckit_algorithms::{generate_private_key, CurveId};
use ecckit_api::KeyAgreement;
use ecckit_kem::{ecdh, Ecdh};
use ecckit_tests::seeded_rng;

#[test]
fn test_symmetry_on_every_curve() {
    let mut rng = seeded_rng(200);
    for id in CurveId::ALL {
        let curve = id.params();
        for _ in 0..3 {
            let a = generate_private_key(curve, &mut rng).unwrap();
            let b = generate_private_key(curve, &mut rng).unwrap();
            assert_eq!(
                ecdh(&a, b.public_key()).unwrap(),
                ecdh(&b, a.public_key()).unwrap(),
                "{}",
                id
            );
        }
    }
}

#[test]
fn test_three_party_secrets_differ() {
    let mut rng = seeded_rng(201);
    let scheme = Ecdh::new(CurveId::Curve25519);
    let alice = scheme.keypair(&mut rng).unwrap();
    let bob = scheme.keypair(&mut rng).unwrap();
    let carol = scheme.keypair(&mut rng).unwrap();

    let ab = scheme.agree(&alice, &Ecdh::public_key(&bob)).unwrap();
    let ac = scheme.agree(&alice, &Ecdh::public_key(&carol)).unwrap();
    let ba = scheme.agree(&bob, &Ecdh::public_key(&alice)).unwrap();
    assert_eq!(ab, ba);
    assert_ne!(ab, ac);
}

#[test]
fn test_shared_x_bytes_are_field_width() {
    let mut rng = seeded_rng(202);
    for id in CurveId::ALL {
        let scheme = Ecdh::new(id);
        let a = scheme.keypair(&mut rng).unwrap();
        let b = scheme.keypair(&mut rng).unwrap();
        let secret = scheme.agree(&a, &Ecdh::public_key(&b)).unwrap();
        assert_eq!(secret.x_bytes().len(), 32);
        assert_eq!(
            num_bigint::BigUint::from_bytes_be(&secret.x_bytes()[..]),
            secret.point().x
        );
    }
}
