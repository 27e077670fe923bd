//! # ecrypt
//!
//! Elliptic Curve Integrated Encryption Scheme (ECIES) over the NIST P-256,
//! P-384 and P-521 curves.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ecrypt = "0.3"
//! ```
//!
//! ```
//! use ecrypt::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let sk = generate_key(&mut OsRng, Curve::P256, None)?;
//! let envelope = encrypt(&mut OsRng, sk.public_key(), b"hello world", None, None)?;
//! assert_eq!(sk.decrypt(&envelope, None, None)?, b"hello world");
//! # Ok::<(), ecrypt::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `pem` (default): PEM import and export of keys
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`ecrypt-api`]: error taxonomy and the `Pke` trait
//! - [`ecrypt-params`]: curve identities and ECIES parameter bundles
//! - [`ecrypt-algorithms`]: ECDH, ConcatKDF, HMAC tags, AES-CTR
//! - [`ecrypt-pke`]: the ECIES scheme itself

pub use ecrypt_algorithms as algorithms;
pub use ecrypt_api as api;
pub use ecrypt_internal as internal;
pub use ecrypt_params as params;
pub use ecrypt_pke as pke;

/// Common imports for ecrypt users
pub mod prelude {
    pub use crate::api::{Error, ErrorClass, Pke, Result, SharedInfo};

    pub use crate::params::{params_for_curve, Curve, EciesParams, DEFAULT_CURVE};

    pub use crate::pke::{
        encrypt, generate_key, max_shared_key_length, EciesP256, EciesP384, EciesP521,
        PrivateKey, PublicKey,
    };

    #[cfg(feature = "pem")]
    pub use crate::pke::pem::{
        export_private_pem, export_public_pem, import_private_pem, import_public_pem,
    };

    pub use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};
}
