//! Error handling for ECIES operations.
//!
//! The public error type is [`ecrypt_api::Error`]. This module only holds the
//! context-specific conversions from primitive errors that the blanket
//! `From` impl cannot express.

use ecrypt_algorithms::Error as PrimitiveError;

pub use ecrypt_api::{Error, Result};

/// Key generation reports every primitive failure, random-source outages
/// included, as [`Error::KeyGeneration`].
pub(crate) fn keygen(err: PrimitiveError) -> Error {
    match err {
        PrimitiveError::RandomSource { .. } => Error::KeyGeneration {
            context: "random source failed",
        },
        PrimitiveError::ScalarRejected { .. } => Error::KeyGeneration {
            context: "scalar sampling exhausted",
        },
        other => other.into(),
    }
}

/// Collapse any failure while opening an envelope into the single opaque
/// message error, keeping point-decoding failures distinguishable.
pub(crate) fn opaque(err: PrimitiveError) -> Error {
    match err {
        PrimitiveError::InvalidPoint { .. } => Error::InvalidPublicKey,
        _ => Error::InvalidMessage,
    }
}
