//! Error type definitions for ECIES operations

use thiserror::Error as ThisError;

/// Primary error type for ECIES operations
///
/// Every failure is terminal for the call that produced it; nothing in the
/// library retries internally.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The random source failed or every scalar draw was rejected
    #[error("ecies: key generation failed: {context}")]
    KeyGeneration {
        context: &'static str,
    },

    /// Key agreement between keys on different curves
    #[error("ecies: invalid elliptic curve")]
    CurveMismatch,

    /// Requested key material is longer than the curve's field size
    #[error("ecies: shared key params are too big ({requested} bytes, max {max})")]
    SharedKeyTooLarge {
        requested: usize,
        max: usize,
    },

    /// The ECDH product is the identity element
    #[error("ecies: shared key is point at infinity")]
    PointAtInfinity,

    /// The curve has no registered ECIES parameter bundle
    #[error("ecies: unsupported ECIES parameters")]
    UnsupportedParams,

    /// Malformed envelope or failed authentication.
    ///
    /// Deliberately carries no detail so that parse failures and tag
    /// mismatches are indistinguishable to the caller.
    #[error("ecies: invalid message")]
    InvalidMessage,

    /// Malformed point encoding or a point that is not on the curve
    #[error("ecies: invalid public key")]
    InvalidPublicKey,

    /// The KDF was asked for more output than its 32-bit counter can produce
    #[error("ecies: can't supply requested key data ({requested} bytes)")]
    KeyDataTooLong {
        requested: usize,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Random generation error
    #[error("random generation error: {context}")]
    RandomGeneration {
        context: &'static str,
    },

    /// A serialized key could not be imported
    #[error("ecies: failed to import key: {context}")]
    KeyImport {
        context: &'static str,
    },

    /// A key could not be serialized
    #[error("ecies: failed to export key: {context}")]
    KeyExport {
        context: &'static str,
    },
}

/// Coarse classification used by transports to pick a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The caller supplied bad input (HTTP 400-class)
    Input,
    /// Key agreement, randomness or another internal step failed (500-class)
    Internal,
}

impl Error {
    /// Classify this error for an external collaborator.
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::InvalidMessage
            | Self::InvalidPublicKey
            | Self::InvalidLength { .. }
            | Self::InvalidParameter { .. }
            | Self::KeyImport { .. } => ErrorClass::Input,
            Self::KeyGeneration { .. }
            | Self::CurveMismatch
            | Self::SharedKeyTooLarge { .. }
            | Self::PointAtInfinity
            | Self::UnsupportedParams
            | Self::KeyDataTooLong { .. }
            | Self::RandomGeneration { .. }
            | Self::KeyExport { .. } => ErrorClass::Internal,
        }
    }

    /// Shorthand to create an `InvalidParameter` error
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }
}

/// Result type for ECIES operations
pub type Result<T> = core::result::Result<T, Error>;
