//! Per-curve ECIES schemes behind the [`Pke`] trait.
//!
//! Each scheme fixes its curve and the curve's default parameter bundle.
//! Ciphertexts are the Base64 envelopes produced by [`encrypt`].

use ecrypt_api::{Pke, SharedInfo};
use ecrypt_params::Curve;
use rand::{CryptoRng, RngCore};

use super::{encrypt, generate_key, PrivateKey, PublicKey};
use crate::error::{Error, Result};

macro_rules! ecies_scheme {
    ($(#[$meta:meta])* $scheme:ident, $curve:expr, $name:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $scheme;

        impl $scheme {
            /// Curve this scheme operates on.
            pub const CURVE: Curve = $curve;

            fn check_curve(curve: Curve) -> Result<()> {
                if curve != Self::CURVE {
                    return Err(Error::CurveMismatch);
                }
                Ok(())
            }
        }

        impl Pke for $scheme {
            type PublicKey = PublicKey;
            type SecretKey = PrivateKey;
            type Ciphertext = String;

            fn name() -> &'static str {
                $name
            }

            fn keypair<R: CryptoRng + RngCore>(
                rng: &mut R,
            ) -> Result<(Self::PublicKey, Self::SecretKey)> {
                let sk = generate_key(rng, Self::CURVE, None)?;
                Ok((sk.public_key().clone(), sk))
            }

            fn encrypt<R: RngCore + CryptoRng>(
                pk_recipient: &Self::PublicKey,
                plaintext: &[u8],
                shared_info: SharedInfo<'_>,
                rng: &mut R,
            ) -> Result<Self::Ciphertext> {
                Self::check_curve(pk_recipient.curve())?;
                encrypt(rng, pk_recipient, plaintext, shared_info.s1, shared_info.s2)
            }

            fn decrypt(
                sk_recipient: &Self::SecretKey,
                ciphertext: &Self::Ciphertext,
                shared_info: SharedInfo<'_>,
            ) -> Result<Vec<u8>> {
                Self::check_curve(sk_recipient.curve())?;
                sk_recipient.decrypt(ciphertext, shared_info.s1, shared_info.s2)
            }
        }
    };
}

ecies_scheme!(
    /// ECIES over P-256 with AES-128-CTR and HMAC-SHA-256.
    EciesP256,
    Curve::P256,
    "ECIES-P256-AES128-CTR-HMAC-SHA256"
);

ecies_scheme!(
    /// ECIES over P-384 with AES-256-CTR and HMAC-SHA-384.
    EciesP384,
    Curve::P384,
    "ECIES-P384-AES256-CTR-HMAC-SHA384"
);

ecies_scheme!(
    /// ECIES over P-521 with AES-256-CTR and HMAC-SHA-512.
    EciesP521,
    Curve::P521,
    "ECIES-P521-AES256-CTR-HMAC-SHA512"
);
