//! Known public-key vectors

use ecckit_algorithms::{CurveId, Point};
use num_bigint::BigUint;

/// A private scalar and the public point it must produce
#[derive(Debug, Clone, Copy)]
pub struct PublicKeyVector {
    pub curve: CurveId,
    /// Private scalar, hex
    pub d: &'static str,
    /// Expected X, in `radix`
    pub x: &'static str,
    /// Expected Y, in `radix`
    pub y: &'static str,
    pub radix: u32,
}

impl PublicKeyVector {
    pub fn scalar(&self) -> BigUint {
        BigUint::parse_bytes(self.d.as_bytes(), 16).expect("vector scalar is hex")
    }

    pub fn expected(&self) -> Point {
        Point::new(
            BigUint::parse_bytes(self.x.as_bytes(), self.radix).expect("vector x parses"),
            BigUint::parse_bytes(self.y.as_bytes(), self.radix).expect("vector y parses"),
        )
    }
}

pub const PUBLIC_KEY_VECTORS: &[PublicKeyVector] = &[
    PublicKeyVector {
        curve: CurveId::Secp256k1,
        d: "2d5a166ee81fff6c3bf30bf6a67f84cd8b56a2e7932f426d5976786d26373271",
        x: "49710557499949598090243477674222998985011332556910391240891128185314495370967",
        y: "64270035363186707307820636791061526699111452494847386479344763071737060553952",
        radix: 10,
    },
    PublicKeyVector {
        curve: CurveId::Secp256k1,
        d: "02",
        x: "c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5",
        y: "1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a",
        radix: 16,
    },
    PublicKeyVector {
        curve: CurveId::Secp256r1,
        d: "2d5a166ee81fff6c3bf30bf6a67f84cd8b56a2e7932f426d5976786d26373271",
        x: "394b6f45c05c8145db054a416bca29964f0cb10b715994702bdb028ea00904fd",
        y: "83e1082781ee34326966880a59a9dad299ac55bd30d210fd0c9b1472dbade1be",
        radix: 16,
    },
    PublicKeyVector {
        curve: CurveId::Secp256r1,
        d: "71f25609dcec384ebc6655ef856242cb36e2f80c1092ceb21d32e3caad9c9d16",
        x: "559a30e8dde8eba0b5fd5b4c5b41d1724155b55d7c297d58f3c26048ff8a8b9c",
        y: "a74db1fec807cded120132df178d0a130c5431ee3c1ad83f0aa84e45594b0ecf",
        radix: 16,
    },
];
