//! Error type definitions for elliptic-curve operations

use thiserror::Error as ThisError;

/// Primary error type for ecckit operations
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The injected random source could not produce bytes
    #[error("random source failure in {context}: {message}")]
    RandomSourceFailure {
        context: &'static str,
        message: String,
    },

    /// The curve's private-key policy rejected every candidate
    #[error("could not generate a valid {curve} private key after {attempts} attempts")]
    KeyGenerationExhausted {
        curve: &'static str,
        attempts: usize,
    },

    /// No usable signing nonce was found within the retry ceiling
    #[error("could not find a usable {curve} signing nonce after {attempts} attempts")]
    NonceGenerationExhausted {
        curve: &'static str,
        attempts: usize,
    },

    /// A signature component lies outside [1, N-1]
    #[error("signature component {component} is outside [1, N-1]")]
    InvalidSignatureRange { component: &'static str },

    /// A modular inverse was requested for a non-unit
    #[error("element has no inverse modulo the given modulus ({context})")]
    NonInvertibleElement { context: &'static str },

    /// The operation is not defined on this curve
    #[error("{operation} is not supported on {curve}")]
    UnsupportedCurve {
        curve: &'static str,
        operation: &'static str,
    },

    /// A key was handed to a scheme instance bound to another curve
    #[error("key belongs to {actual}, but the scheme is bound to {expected}")]
    CurveMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// A curve name did not match any configured curve
    #[error("unknown curve name: {name}")]
    UnknownCurve { name: String },
}

/// Result type for ecckit operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create a random-source error
    pub fn rng(context: &'static str, message: impl Into<String>) -> Self {
        Error::RandomSourceFailure {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create a non-invertible-element error
    pub fn not_invertible(context: &'static str) -> Self {
        Error::NonInvertibleElement { context }
    }
}

impl From<rand::Error> for Error {
    fn from(e: rand::Error) -> Self {
        Error::rng("rand", e.to_string())
    }
}
