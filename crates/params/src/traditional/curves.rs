//! Domain parameters of the configured curves

/// Raw domain parameters of one curve, as big-endian hex strings.
///
/// `a` and `b` are the short-Weierstrass coefficients of
/// y² = x³ + ax + b, except for Curve25519 where `a` is the Montgomery
/// coefficient A of y² = x³ + Ax² + x and `b` is 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveConstants {
    /// Canonical curve name
    pub name: &'static str,
    /// Prime modulus of the base field
    pub p: &'static str,
    /// Coefficient `a`
    pub a: &'static str,
    /// Coefficient `b`
    pub b: &'static str,
    /// Order of the base point
    pub n: &'static str,
    /// Base point x-coordinate
    pub gx: &'static str,
    /// Base point y-coordinate
    pub gy: &'static str,
}

/// SEC 2 secp256k1 (Koblitz curve, a = 0)
pub const SECP256K1: CurveConstants = CurveConstants {
    name: "secp256k1",
    p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F",
    a: "0000000000000000000000000000000000000000000000000000000000000000",
    b: "0000000000000000000000000000000000000000000000000000000000000007",
    n: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141",
    gx: "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
    gy: "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8",
};

/// SEC 2 secp256r1 / NIST P-256 (a = -3)
pub const SECP256R1: CurveConstants = CurveConstants {
    name: "secp256r1",
    p: "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF",
    a: "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFC",
    b: "5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B",
    n: "FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551",
    gx: "6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296",
    gy: "4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5",
};

/// RFC 5639 brainpoolP256t1 (twisted, a = p - 3)
pub const BRAINPOOL_P256_T1: CurveConstants = CurveConstants {
    name: "brainpoolP256t1",
    p: "A9FB57DBA1EEA9BC3E660A909D838D726E3BF623D52620282013481D1F6E5377",
    a: "A9FB57DBA1EEA9BC3E660A909D838D726E3BF623D52620282013481D1F6E5374",
    b: "662C61C430D84EA4FE66A7733D0B76B7BF93EBC4AF2F49256AE58101FEE92B04",
    n: "A9FB57DBA1EEA9BC3E660A909D838D718C397AA3B561A6F7901E0E82974856A7",
    gx: "A3E8EB3CC1CFE7B7732213B23A656149AFA142C47AAFBC2B79A191562E1305F4",
    gy: "2D996C823439C56D7F7B22E14644417E69BCB6DE39D027001DABE8F35B25C9BE",
};

/// Curve25519 in Montgomery form (A = 486662, B = 1), DH only
pub const CURVE25519: CurveConstants = CurveConstants {
    name: "curve25519",
    p: "7FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFED",
    a: "076D06",
    b: "01",
    n: "1000000000000000000000000000000014DEF9DEA2F79CD65812631A5CF5D3ED",
    gx: "09",
    gy: "20AE19A1B8A086B4E01EDD2C7748D14C923D4D7E6D7C61B229E9C5A27ECED3D9",
};
