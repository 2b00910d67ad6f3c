//! ECDSA sign/verify across the signature-capable curves

use ecckit_algorithms::{generate_private_key, CurveId};
use ecckit_api::{Error, SignatureScheme};
use ecckit_sign::{sign, verify, Ecdsa, Signature};
use ecckit_tests::{seeded_rng, signing_curves, FailingRng};
use num_bigint::BigUint;

const MESSAGE: &[u8] = b"Hello 123";

#[test]
fn test_hello_round_trip() {
    let mut rng = seeded_rng(300);
    for id in signing_curves() {
        let scheme = Ecdsa::new(id).unwrap();
        let key = scheme.keypair(&mut rng).unwrap();
        let signature = scheme.sign(MESSAGE, &key, &mut rng).unwrap();
        assert!(scheme.verify(MESSAGE, &signature, key.public_key()), "{}", id);
    }
}

#[test]
fn test_signature_is_bound_to_key() {
    let mut rng = seeded_rng(301);
    for id in signing_curves() {
        let curve = id.params();
        let signer = generate_private_key(curve, &mut rng).unwrap();
        let other = generate_private_key(curve, &mut rng).unwrap();
        let signature = sign(&signer, MESSAGE, &mut rng).unwrap();

        assert!(verify(signer.public_key(), MESSAGE, &signature, curve));
        assert!(!verify(other.public_key(), MESSAGE, &signature, curve), "{}", id);
    }
}

#[test]
fn test_modified_public_key_coordinate_fails() {
    let mut rng = seeded_rng(302);
    for id in signing_curves() {
        let curve = id.params();
        let key = generate_private_key(curve, &mut rng).unwrap();
        let signature = sign(&key, MESSAGE, &mut rng).unwrap();

        let mut tampered = key.public_key().clone();
        tampered.x += 1u32;
        assert!(!verify(&tampered, MESSAGE, &signature, curve), "{}", id);
    }
}

#[test]
fn test_empty_and_long_messages() {
    let mut rng = seeded_rng(303);
    let curve = CurveId::Secp256r1.params();
    let key = generate_private_key(curve, &mut rng).unwrap();
    let long = vec![0xa5u8; 10_000];

    for message in [&b""[..], &long[..]] {
        let signature = sign(&key, message, &mut rng).unwrap();
        assert!(verify(key.public_key(), message, &signature, curve));
    }
}

#[test]
fn test_signing_propagates_random_failure() {
    let mut rng = seeded_rng(304);
    let key = generate_private_key(CurveId::Secp256k1.params(), &mut rng).unwrap();
    assert!(matches!(
        sign(&key, MESSAGE, &mut FailingRng),
        Err(Error::RandomSourceFailure { .. })
    ));
}

#[test]
fn test_curve25519_is_key_agreement_only() {
    let mut rng = seeded_rng(305);
    let curve = CurveId::Curve25519.params();
    let key = generate_private_key(curve, &mut rng).unwrap();

    assert!(matches!(
        sign(&key, MESSAGE, &mut rng),
        Err(Error::UnsupportedCurve { .. })
    ));
    assert!(matches!(
        Ecdsa::new(CurveId::Curve25519),
        Err(Error::UnsupportedCurve { .. })
    ));
    let forged = Signature {
        r: BigUint::from(1u32),
        s: BigUint::from(1u32),
    };
    assert!(!verify(key.public_key(), MESSAGE, &forged, curve));
    assert!(!signing_curves().contains(&CurveId::Curve25519));
}
