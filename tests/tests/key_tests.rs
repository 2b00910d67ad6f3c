//! Key management against the named curves

use ecckit_algorithms::{
    generate_private_key, generate_private_key_with_policy, is_valid_private_key,
    scalar_mul_base, CurveId, CurveParameters, PrivateKey, PrivateKeyPolicy,
};
use ecckit_api::Error;
use ecckit_tests::vectors::PUBLIC_KEY_VECTORS;
use ecckit_tests::{seeded_rng, FailingRng};
use num_bigint::BigUint;

struct Never;

impl PrivateKeyPolicy for Never {
    fn name(&self) -> &'static str {
        "never"
    }

    fn is_valid(&self, _d: &BigUint, _curve: &CurveParameters) -> bool {
        false
    }
}

#[test]
fn test_public_key_vectors() {
    for vector in PUBLIC_KEY_VECTORS {
        let key = PrivateKey::from_scalar(vector.curve.params(), vector.scalar()).unwrap();
        assert_eq!(*key.public_key(), vector.expected(), "{:?}", vector);
        assert!(vector.curve.params().is_on_curve(key.public_key()));
    }
}

#[test]
fn test_generated_keys_are_valid_on_every_curve() {
    let mut rng = seeded_rng(100);
    for id in CurveId::ALL {
        let curve = id.params();
        let mut key = generate_private_key(curve, &mut rng).unwrap();
        assert!(is_valid_private_key(&key, curve), "{}", id);

        let cached = key.public_key().clone();
        assert_eq!(*key.derive_public_key().unwrap(), cached);
        assert_eq!(cached, scalar_mul_base(key.d(), curve).unwrap());
    }
}

#[test]
fn test_weierstrass_public_keys_lie_on_their_curve() {
    let mut rng = seeded_rng(101);
    for id in [CurveId::Secp256k1, CurveId::Secp256r1, CurveId::BrainpoolP256t1] {
        let curve = id.params();
        let key = generate_private_key(curve, &mut rng).unwrap();
        assert!(curve.is_on_curve(key.public_key()), "{}", id);
    }
}

#[test]
fn test_exhaustion_after_one_hundred_attempts() {
    let mut rng = seeded_rng(102);
    for id in CurveId::ALL {
        let err = generate_private_key_with_policy(id.params(), &Never, &mut rng).unwrap_err();
        assert_eq!(
            err,
            Error::KeyGenerationExhausted {
                curve: id.name(),
                attempts: 100,
            }
        );
        assert!(err.to_string().contains("after 100 attempts"));
    }
}

#[test]
fn test_failing_random_source() {
    for id in CurveId::ALL {
        match generate_private_key(id.params(), &mut FailingRng) {
            Err(Error::RandomSourceFailure { message, .. }) => {
                assert!(message.contains("entropy source unavailable"))
            }
            other => panic!("expected a random-source failure, got {:?}", other),
        }
    }
}

#[test]
fn test_keys_are_independent_of_each_other() {
    let mut rng = seeded_rng(103);
    let curve = CurveId::Secp256r1.params();
    let a = generate_private_key(curve, &mut rng).unwrap();
    let b = generate_private_key(curve, &mut rng).unwrap();
    assert_ne!(a.d(), b.d());
    assert_ne!(a.public_key(), b.public_key());
}
