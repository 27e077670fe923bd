//! Constant values for ecrypt cryptographic operations
//!
//! This crate holds the curve identities and the four standard ECIES parameter
//! bundles, plus the size constants they are built from. Everything here is a
//! compile-time constant or a `static` table; nothing is mutated after start.

#![no_std]

pub mod traditional;
pub mod utils;

pub use traditional::curve::{Curve, UnknownCurve, DEFAULT_CURVE};
pub use traditional::ecies::{
    params_for_curve, BlockCipherKind, EciesParams, HashAlgorithm, ALL_PARAMS,
    ECIES_AES128_SHA256, ECIES_AES256_SHA256, ECIES_AES256_SHA384, ECIES_AES256_SHA512,
};
