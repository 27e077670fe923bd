//! Error handling for the ECIES building blocks
//!
//! Primitive errors carry enough detail for logs and tests. They are folded
//! into the coarser [`ecrypt_api::Error`] before crossing the public API, and
//! every decode failure that could leak information about a ciphertext maps
//! to the same `InvalidMessage` variant there.

use std::borrow::Cow;
use std::fmt;

use ecrypt_api::Error as CoreError;

/// The error type for cryptographic primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Input too short to contain its mandatory prefix
    Truncated {
        /// Structure that was being parsed
        context: &'static str,
    },

    /// KDF output would overflow the 32-bit block counter
    KeyDataTooLong {
        /// Requested output length in bytes
        requested: usize,
    },

    /// The random source failed
    RandomSource {
        /// Operation that needed randomness
        context: &'static str,
    },

    /// Bytes that do not decode to a point on the expected curve
    InvalidPoint {
        /// Curve name
        curve: &'static str,
    },

    /// A scalar multiplication produced the identity element
    Identity {
        /// Operation that produced it
        operation: &'static str,
    },

    /// Scalar sampling exhausted its attempts
    ScalarRejected {
        /// Curve name
        curve: &'static str,
    },

    /// Key agreement between different curves
    CurveMismatch {
        /// Curve of the secret scalar
        ours: &'static str,
        /// Curve of the peer point
        theirs: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for cryptographic primitives operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length { context, expected, actual } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Truncated { context } => write!(f, "Truncated {}", context),
            Error::KeyDataTooLong { requested } => {
                write!(f, "Cannot derive {} bytes of key data", requested)
            }
            Error::RandomSource { context } => {
                write!(f, "Random source failed during {}", context)
            }
            Error::InvalidPoint { curve } => write!(f, "Invalid {} point encoding", curve),
            Error::Identity { operation } => {
                write!(f, "{} produced the point at infinity", operation)
            }
            Error::ScalarRejected { curve } => {
                write!(f, "No valid {} scalar after repeated sampling", curve)
            }
            Error::CurveMismatch { ours, theirs } => {
                write!(f, "Curve mismatch: {} key with {} point", ours, theirs)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: "primitives",
                message: format!("{}: {}", name, reason),
            },
            Error::Length { context, expected, actual } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Truncated { .. } => CoreError::InvalidMessage,
            Error::KeyDataTooLong { requested } => CoreError::KeyDataTooLong { requested },
            Error::RandomSource { context } => CoreError::RandomGeneration { context },
            Error::InvalidPoint { .. } => CoreError::InvalidPublicKey,
            Error::Identity { .. } => CoreError::PointAtInfinity,
            Error::ScalarRejected { .. } => CoreError::KeyGeneration {
                context: "scalar sampling exhausted",
            },
            Error::CurveMismatch { .. } => CoreError::CurveMismatch,
        }
    }
}

pub mod validate;

#[cfg(test)]
mod tests;
