//! ECIES key pairs
//!
//! A [`PublicKey`] is a validated curve point plus the ECIES parameter
//! bundle used when encrypting to it. A [`PrivateKey`] adds the secret
//! scalar and is the only type that can open envelopes.

use core::fmt;

use ecrypt_algorithms::{generate_keypair, shared_x_coordinate, PublicPoint, SecretScalar};
use ecrypt_internal::endian::copy_right_aligned;
use ecrypt_params::{params_for_curve, Curve, EciesParams};
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::{ZeroizeOnDrop, Zeroizing};

use crate::error::{self, Error, Result};

/// Recipient public key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    point: PublicPoint,
    params: Option<&'static EciesParams>,
}

impl PublicKey {
    pub fn new(point: PublicPoint, params: Option<&'static EciesParams>) -> Self {
        Self { point, params }
    }

    /// Decode a SEC1 point on `curve`.
    ///
    /// Off-curve points, the identity and malformed encodings are all
    /// [`Error::InvalidPublicKey`].
    pub fn from_sec1_bytes(
        curve: Curve,
        bytes: &[u8],
        params: Option<&'static EciesParams>,
    ) -> Result<Self> {
        let point = PublicPoint::from_sec1_bytes(curve, bytes).map_err(error::opaque)?;
        Ok(Self::new(point, params))
    }

    pub fn curve(&self) -> Curve {
        self.point.curve()
    }

    /// ECIES bundle used for encryption, if the curve has one.
    pub fn params(&self) -> Option<&'static EciesParams> {
        self.params
    }

    /// Replace the attached bundle.
    pub fn with_params(mut self, params: Option<&'static EciesParams>) -> Self {
        self.params = params;
        self
    }

    pub fn point(&self) -> &PublicPoint {
        &self.point
    }

    /// SEC1 uncompressed encoding.
    pub fn to_uncompressed(&self) -> Vec<u8> {
        self.point.to_uncompressed()
    }

    /// Big-endian affine `(x, y)`.
    pub fn coordinates(&self) -> (Vec<u8>, Vec<u8>) {
        self.point.coordinates()
    }
}

/// Recipient private key.
///
/// Not `Clone`. The scalar is wiped when the key is dropped and never shows
/// up in `Debug` output.
pub struct PrivateKey {
    public: PublicKey,
    secret: SecretScalar,
}

// The scalar's own Drop impl zeroizes it.
impl ZeroizeOnDrop for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("public", &self.public)
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl PrivateKey {
    /// Wrap an existing scalar, deriving the public point from it.
    pub fn from_secret(secret: SecretScalar, params: Option<&'static EciesParams>) -> Self {
        let public = PublicKey::new(secret.public_point(), params);
        Self { public, secret }
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    pub fn curve(&self) -> Curve {
        self.public.curve()
    }

    pub fn params(&self) -> Option<&'static EciesParams> {
        self.public.params
    }

    /// Replace the attached bundle. Decryption must use the bundle the
    /// sender encrypted with.
    pub fn with_params(mut self, params: Option<&'static EciesParams>) -> Self {
        self.public.params = params;
        self
    }

    pub(crate) fn secret(&self) -> &SecretScalar {
        &self.secret
    }

    /// Derive `key_len + mac_len` bytes of shared secret with `peer`.
    ///
    /// The result is the ECDH x-coordinate right-aligned in the output
    /// buffer: shorter coordinates are left-padded with zeros and wider
    /// ones keep their low-order bytes.
    pub fn generate_shared(
        &self,
        peer: &PublicKey,
        key_len: usize,
        mac_len: usize,
    ) -> Result<Zeroizing<Vec<u8>>> {
        if self.curve() != peer.curve() {
            return Err(Error::CurveMismatch);
        }

        let max = max_shared_key_length(peer);
        let requested = key_len.checked_add(mac_len).unwrap_or(usize::MAX);
        if requested > max {
            return Err(Error::SharedKeyTooLarge { requested, max });
        }

        let x = shared_x_coordinate(&self.secret, &peer.point)?;
        let mut shared = Zeroizing::new(vec![0u8; requested]);
        copy_right_aligned(&mut shared, &x);
        Ok(shared)
    }
}

/// Largest shared secret key agreement with `public` can produce: the
/// curve's field size in bytes.
pub fn max_shared_key_length(public: &PublicKey) -> usize {
    public.curve().field_size()
}

/// Generate a key pair on `curve`.
///
/// `params` overrides the bundle that would otherwise be looked up with
/// [`params_for_curve`]; curves without one get `None` and can only be
/// used once a bundle is attached.
pub fn generate_key<R: CryptoRng + RngCore>(
    rng: &mut R,
    curve: Curve,
    params: Option<&'static EciesParams>,
) -> Result<PrivateKey> {
    let (secret, point) = generate_keypair(curve, rng).map_err(error::keygen)?;
    let params = params.or_else(|| params_for_curve(curve));
    debug!(
        curve = curve.name(),
        params = params.map(|p| p.name),
        "generated ECIES key pair"
    );
    Ok(PrivateKey {
        public: PublicKey::new(point, params),
        secret,
    })
}
