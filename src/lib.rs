//! # ecckit
//!
//! Elliptic-curve arithmetic, key management, ECDH and ECDSA over a small
//! set of 256-bit named curves.
//!
//! ## Usage
//!
//! ```
//! use ecckit::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let scheme = Ecdsa::new(CurveId::Secp256k1)?;
//! let key = scheme.keypair(&mut OsRng)?;
//! let signature = scheme.sign(b"Hello 123", &key, &mut OsRng)?;
//! assert!(scheme.verify(b"Hello 123", &signature, key.public_key()));
//! # Ok::<(), ecckit::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `ecdh` (default): key agreement via [`kem`]
//! - `ecdsa` (default): signatures via [`sign`]
//! - `serde`: `Serialize`/`Deserialize` for points, signatures and curve ids
//! - `full`: all of the above
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - `ecckit-api`: error type, random-source capability, protocol traits
//! - `ecckit-params`: curve constants and limits
//! - `ecckit-algorithms`: field arithmetic, point engine, key management
//! - `ecckit-kem`: ECDH
//! - `ecckit-sign`: ECDSA
//!
//! None of the arithmetic is constant-time.

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use ecckit_algorithms as algorithms;
pub use ecckit_api as api;
pub use ecckit_params as params;

// Feature-gated re-exports
#[cfg(feature = "ecdh")]
pub use ecckit_kem as kem;

#[cfg(feature = "ecdsa")]
pub use ecckit_sign as sign;

// Scalars and coordinates are `BigUint`; keys take any `rand` CSPRNG
pub use num_bigint;
pub use rand;

/// Common imports for ecckit users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{KeyAgreement, RandomSource, SignatureScheme};

    pub use num_bigint::BigUint;

    // Curves, points and keys
    pub use crate::algorithms::{
        generate_private_key, is_valid_private_key, CurveId, CurveParameters, Point, PrivateKey,
    };

    #[cfg(feature = "ecdh")]
    pub use crate::kem::{ecdh, Ecdh, SharedSecret};

    #[cfg(feature = "ecdsa")]
    pub use crate::sign::{Ecdsa, Signature};
}
