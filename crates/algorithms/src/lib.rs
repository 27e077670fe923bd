//! ECIES building blocks
//!
//! This crate provides the primitives the ECIES orchestrator in
//! `ecrypt-pke` is composed from:
//!
//! - [`ec`]: key generation and ECDH over P-256, P-384, P-521 and secp256k1
//! - [`kdf`]: the NIST SP 800-56A concatenation KDF
//! - [`mac`]: HMAC tags with constant-time verification
//! - [`block`]: AES in CTR mode wrapped as `IV ‖ ciphertext`
//!
//! Group arithmetic, AES, SHA-2 and HMAC come from the RustCrypto crates.
//! Everything here returns the crate-local [`Error`], which converts into
//! [`ecrypt_api::Error`] at the public boundary.

#![forbid(unsafe_code)]

pub mod error;
pub use error::{validate, Error, Result};

pub mod block;
pub use block::{sym_decrypt, sym_encrypt, CtrCipher};

pub mod ec;
pub use ec::{generate_keypair, shared_x_coordinate, CurveInfo, PublicPoint, SecretScalar};

pub mod hash;

pub mod kdf;
pub use kdf::concat_kdf;

pub mod mac;
pub use mac::{message_tag, verify_tag};
