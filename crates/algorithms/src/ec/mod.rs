//! Elliptic curve key agreement over the supported short-Weierstrass curves
//!
//! The group arithmetic comes from the RustCrypto curve crates. This module
//! only adds a runtime curve selector on top of them: keys are held in
//! enums indexed by [`Curve`], and every operation that mixes two keys
//! checks that their curves agree first.

use ecrypt_params::Curve;
use elliptic_curve::sec1::ToEncodedPoint;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::error::{validate, Error, Result};

mod generic;

/// Upper bound on rejected scalar candidates before key generation gives up.
///
/// After masking, a candidate is rejected with probability below 2^-32 on
/// every supported curve, so hitting this bound means the random source is
/// broken.
pub const MAX_SCALAR_ATTEMPTS: usize = 32;

/// A validated curve point that is not the identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PublicPoint {
    P256(p256::PublicKey),
    P384(p384::PublicKey),
    P521(p521::PublicKey),
    K256(k256::PublicKey),
}

/// A non-zero scalar in `[1, n)`. Zeroized on drop.
pub enum SecretScalar {
    P256(p256::SecretKey),
    P384(p384::SecretKey),
    P521(p521::SecretKey),
    K256(k256::SecretKey),
}

impl core::fmt::Debug for SecretScalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SecretScalar")
            .field("curve", &self.curve())
            .finish_non_exhaustive()
    }
}

impl PublicPoint {
    pub fn curve(&self) -> Curve {
        match self {
            PublicPoint::P256(_) => Curve::P256,
            PublicPoint::P384(_) => Curve::P384,
            PublicPoint::P521(_) => Curve::P521,
            PublicPoint::K256(_) => Curve::K256,
        }
    }

    /// Decode a SEC1 point (compressed or uncompressed) and check that it is
    /// on `curve` and not the identity.
    pub fn from_sec1_bytes(curve: Curve, bytes: &[u8]) -> Result<Self> {
        let invalid = |_| Error::InvalidPoint { curve: curve.name() };
        Ok(match curve {
            Curve::P256 => {
                PublicPoint::P256(p256::PublicKey::from_sec1_bytes(bytes).map_err(invalid)?)
            }
            Curve::P384 => {
                PublicPoint::P384(p384::PublicKey::from_sec1_bytes(bytes).map_err(invalid)?)
            }
            Curve::P521 => {
                PublicPoint::P521(p521::PublicKey::from_sec1_bytes(bytes).map_err(invalid)?)
            }
            Curve::K256 => {
                PublicPoint::K256(k256::PublicKey::from_sec1_bytes(bytes).map_err(invalid)?)
            }
        })
    }

    /// SEC1 uncompressed encoding `0x04 ‖ X ‖ Y`, `2 * field_size + 1` bytes.
    pub fn to_uncompressed(&self) -> Vec<u8> {
        self.encode(false)
    }

    /// SEC1 compressed encoding, `field_size + 1` bytes.
    pub fn to_compressed(&self) -> Vec<u8> {
        self.encode(true)
    }

    fn encode(&self, compress: bool) -> Vec<u8> {
        match self {
            PublicPoint::P256(pk) => pk.to_encoded_point(compress).as_bytes().to_vec(),
            PublicPoint::P384(pk) => pk.to_encoded_point(compress).as_bytes().to_vec(),
            PublicPoint::P521(pk) => pk.to_encoded_point(compress).as_bytes().to_vec(),
            PublicPoint::K256(pk) => pk.to_encoded_point(compress).as_bytes().to_vec(),
        }
    }

    /// Big-endian affine coordinates, each left-padded to the field size.
    pub fn coordinates(&self) -> (Vec<u8>, Vec<u8>) {
        let field_size = self.curve().field_size();
        let encoded = self.to_uncompressed();
        let (x, y) = encoded[1..].split_at(field_size);
        (x.to_vec(), y.to_vec())
    }
}

impl SecretScalar {
    pub fn curve(&self) -> Curve {
        match self {
            SecretScalar::P256(_) => Curve::P256,
            SecretScalar::P384(_) => Curve::P384,
            SecretScalar::P521(_) => Curve::P521,
            SecretScalar::K256(_) => Curve::K256,
        }
    }

    /// Import a big-endian scalar of exactly `field_size` bytes.
    ///
    /// Zero and values `>= n` are rejected.
    pub fn from_bytes(curve: Curve, bytes: &[u8]) -> Result<Self> {
        validate::length("secret scalar", bytes.len(), curve.field_size())?;
        let invalid = |_| Error::param("secret scalar", "not in [1, n)");
        Ok(match curve {
            Curve::P256 => SecretScalar::P256(p256::SecretKey::from_slice(bytes).map_err(invalid)?),
            Curve::P384 => SecretScalar::P384(p384::SecretKey::from_slice(bytes).map_err(invalid)?),
            Curve::P521 => SecretScalar::P521(p521::SecretKey::from_slice(bytes).map_err(invalid)?),
            Curve::K256 => SecretScalar::K256(k256::SecretKey::from_slice(bytes).map_err(invalid)?),
        })
    }

    /// Big-endian scalar bytes, `field_size` long.
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(match self {
            SecretScalar::P256(sk) => sk.to_bytes().to_vec(),
            SecretScalar::P384(sk) => sk.to_bytes().to_vec(),
            SecretScalar::P521(sk) => sk.to_bytes().to_vec(),
            SecretScalar::K256(sk) => sk.to_bytes().to_vec(),
        })
    }

    /// `d·G`
    pub fn public_point(&self) -> PublicPoint {
        match self {
            SecretScalar::P256(sk) => PublicPoint::P256(sk.public_key()),
            SecretScalar::P384(sk) => PublicPoint::P384(sk.public_key()),
            SecretScalar::P521(sk) => PublicPoint::P521(sk.public_key()),
            SecretScalar::K256(sk) => PublicPoint::K256(sk.public_key()),
        }
    }
}

/// Generate a key pair on `curve` by rejection sampling.
pub fn generate_keypair<R: CryptoRng + RngCore>(
    curve: Curve,
    rng: &mut R,
) -> Result<(SecretScalar, PublicPoint)> {
    let secret = match curve {
        Curve::P256 => SecretScalar::P256(generic::random_secret(curve, rng)?),
        Curve::P384 => SecretScalar::P384(generic::random_secret(curve, rng)?),
        Curve::P521 => SecretScalar::P521(generic::random_secret(curve, rng)?),
        Curve::K256 => SecretScalar::K256(generic::random_secret(curve, rng)?),
    };
    let public = secret.public_point();
    Ok((secret, public))
}

/// ECDH: the affine x-coordinate of `secret · public`, big-endian and
/// `field_size` bytes long.
///
/// Fails with [`Error::CurveMismatch`] when the keys live on different
/// curves and with [`Error::Identity`] when the product is the point at
/// infinity.
pub fn shared_x_coordinate(
    secret: &SecretScalar,
    public: &PublicPoint,
) -> Result<Zeroizing<Vec<u8>>> {
    match (secret, public) {
        (SecretScalar::P256(sk), PublicPoint::P256(pk)) => generic::ecdh_x(sk, pk),
        (SecretScalar::P384(sk), PublicPoint::P384(pk)) => generic::ecdh_x(sk, pk),
        (SecretScalar::P521(sk), PublicPoint::P521(pk)) => generic::ecdh_x(sk, pk),
        (SecretScalar::K256(sk), PublicPoint::K256(pk)) => generic::ecdh_x(sk, pk),
        _ => Err(Error::CurveMismatch {
            ours: secret.curve().name(),
            theirs: public.curve().name(),
        }),
    }
}

/// Public domain parameters read back from the curve implementation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveInfo {
    pub curve: Curve,
    /// Group order `n` as lowercase hex, no prefix or leading zeros
    pub order_hex: String,
    /// Base point, SEC1 uncompressed
    pub generator: Vec<u8>,
}

impl CurveInfo {
    pub fn of(curve: Curve) -> Self {
        let (order_hex, generator) = match curve {
            Curve::P256 => generic::domain::<p256::NistP256>(),
            Curve::P384 => generic::domain::<p384::NistP384>(),
            Curve::P521 => generic::domain::<p521::NistP521>(),
            Curve::K256 => generic::domain::<k256::Secp256k1>(),
        };
        CurveInfo {
            curve,
            order_hex,
            generator,
        }
    }
}
