//! Public Key Encryption for the ecrypt library: ECIES over NIST curves.
//!
//! The free functions [`generate_key`] and [`encrypt`] together with
//! [`PrivateKey::decrypt`] are the core interface. [`EciesP256`],
//! [`EciesP384`] and [`EciesP521`] expose the same operations through the
//! [`ecrypt_api::Pke`] trait with each curve's default parameters.

#![forbid(unsafe_code)]

pub mod ecies;
pub mod error;
#[cfg(feature = "pem")]
pub mod pem;

// Re-export key items
pub use ecies::{
    encrypt, generate_key, max_shared_key_length, EciesP256, EciesP384, EciesP521, PrivateKey,
    PublicKey,
};
pub use error::{Error, Result};
