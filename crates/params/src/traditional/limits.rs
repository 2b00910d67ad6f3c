//! Sizes and retry ceilings shared by every configured curve

/// Size of a private scalar draw in bytes
pub const EC_SCALAR_SIZE: usize = 32;

/// Size of a field element (one affine coordinate) in bytes
pub const EC_FIELD_ELEMENT_SIZE: usize = 32;

/// Attempts made by private-key generation before giving up
pub const MAX_KEY_GENERATION_ATTEMPTS: usize = 100;

/// Nonce draws made by ECDSA signing before giving up
pub const MAX_NONCE_ATTEMPTS: usize = 100;
