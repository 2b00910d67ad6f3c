//! Serialization of the public data types

use ecckit_algorithms::{scalar_mul_base, CurveId, Point};
use ecckit_sign::{sign, Signature};
use ecckit_tests::seeded_rng;
use num_bigint::BigUint;

#[test]
fn test_curve_id_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&CurveId::Secp256r1).unwrap(), "\"secp256r1\"");
    let id: CurveId = serde_json::from_str("\"brainpoolp256t1\"").unwrap();
    assert_eq!(id, CurveId::BrainpoolP256t1);
}

#[test]
fn test_point_survives_json() {
    let curve = CurveId::Secp256k1.params();
    let point = scalar_mul_base(&BigUint::from(12345u32), curve).unwrap();

    let json = serde_json::to_string(&point).unwrap();
    let back: Point = serde_json::from_str(&json).unwrap();
    assert_eq!(back, point);
    assert!(curve.is_on_curve(&back));
}

#[test]
fn test_signature_survives_json() {
    let mut rng = seeded_rng(400);
    let curve = CurveId::Secp256k1.params();
    let key = ecckit_algorithms::generate_private_key(curve, &mut rng).unwrap();
    let signature = sign(&key, b"Hello 123", &mut rng).unwrap();

    let json = serde_json::to_string(&signature).unwrap();
    let back: Signature = serde_json::from_str(&json).unwrap();
    assert_eq!(back, signature);
    assert!(ecckit_sign::verify(key.public_key(), b"Hello 123", &back, curve));
}
