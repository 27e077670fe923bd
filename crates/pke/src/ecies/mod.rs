//! Elliptic Curve Integrated Encryption Scheme (ECIES)
//!
//! Encryption composes an ephemeral ECDH agreement, the concatenation KDF,
//! AES-CTR and an HMAC tag. The wire envelope is
//!
//! ```text
//! Rb (SEC1 uncompressed) ‖ IV ‖ AES-CTR(m) ‖ HMAC(Km, IV ‖ ct)
//! ```
//!
//! Base64-encoded with the standard padded alphabet. The tag is a full
//! digest of the bundle's hash, independent of the bundle's `mac_len`.

use base64::prelude::*;
use ecrypt_algorithms::{
    concat_kdf, hash, message_tag, sym_decrypt, sym_encrypt, validate, verify_tag,
};
use ecrypt_params::traditional::ecdh::{
    SEC1_TAG_COMPRESSED_EVEN, SEC1_TAG_COMPRESSED_ODD, SEC1_TAG_UNCOMPRESSED,
};
use ecrypt_params::EciesParams;
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::Zeroizing;

use crate::error::{self, Error, Result};

pub mod key;
pub mod scheme;

pub use key::{generate_key, max_shared_key_length, PrivateKey, PublicKey};
pub use scheme::{EciesP256, EciesP384, EciesP521};

/// Split the KDF output into the encryption key `Ke = K[..key_len]` and the
/// MAC key `Km = hash(K[mac_len..])`.
fn derive_keys(
    params: &EciesParams,
    shared: &[u8],
    s1: Option<&[u8]>,
) -> Result<(Zeroizing<Vec<u8>>, Zeroizing<Vec<u8>>)> {
    let k = concat_kdf(params.hash, shared, s1, params.derived_key_len())?;
    let ke = Zeroizing::new(k[..params.key_len].to_vec());
    let km = hash::digest(params.hash, &k[params.mac_len..]);
    Ok((ke, km))
}

/// Encrypt `plaintext` to `public` and return the Base64 envelope.
///
/// `s1` is mixed into the key derivation. `s2` is accepted for interface
/// compatibility but does not affect the tag. Empty plaintexts are rejected
/// with [`Error::InvalidMessage`].
pub fn encrypt<R: RngCore + CryptoRng>(
    rng: &mut R,
    public: &PublicKey,
    plaintext: &[u8],
    s1: Option<&[u8]>,
    s2: Option<&[u8]>,
) -> Result<String> {
    let params = public.params().ok_or(Error::UnsupportedParams)?;
    let ephemeral = generate_key(rng, public.curve(), Some(params))?;
    let shared = ephemeral.generate_shared(public, params.key_len, params.mac_len)?;
    let (ke, km) = derive_keys(params, &shared, s1)?;

    let em = sym_encrypt(rng, params, &ke, plaintext)?;
    validate::longer_than("ECIES ciphertext", em.len(), params.block_size)?;
    let tag = message_tag(params.hash, &km, &em, s2)?;

    let rb = ephemeral.public_key().to_uncompressed();
    let mut envelope = Vec::with_capacity(rb.len() + em.len() + tag.len());
    envelope.extend_from_slice(&rb);
    envelope.extend_from_slice(&em);
    envelope.extend_from_slice(&tag);

    debug!(
        curve = public.curve().name(),
        params = params.name,
        plaintext_len = plaintext.len(),
        envelope_len = envelope.len(),
        "ECIES encrypt"
    );
    Ok(BASE64_STANDARD.encode(envelope))
}

impl PrivateKey {
    /// Open a Base64 envelope produced by [`encrypt`].
    ///
    /// Malformed input, truncation and authentication failure all return
    /// [`Error::InvalidMessage`]. A leading byte that cannot start a SEC1
    /// point, or an ephemeral key that is not on this key's curve, returns
    /// [`Error::InvalidPublicKey`].
    pub fn decrypt(
        &self,
        ciphertext: &str,
        s1: Option<&[u8]>,
        s2: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        let c = BASE64_STANDARD
            .decode(ciphertext)
            .map_err(|_| Error::InvalidMessage)?;
        if c.is_empty() {
            return Err(Error::InvalidMessage);
        }

        let params = self.params().ok_or(Error::UnsupportedParams)?;
        let curve = self.curve();

        match c[0] {
            SEC1_TAG_COMPRESSED_EVEN | SEC1_TAG_COMPRESSED_ODD | SEC1_TAG_UNCOMPRESSED => {}
            _ => return Err(Error::InvalidPublicKey),
        }

        let r_len = curve.uncompressed_point_len();
        let tag_len = params.tag_len();
        if c.len() < r_len + tag_len + 1 {
            return Err(Error::InvalidMessage);
        }

        let (rb, rest) = c.split_at(r_len);
        let (em, tag) = rest.split_at(rest.len() - tag_len);

        let ephemeral = PublicKey::from_sec1_bytes(curve, rb, Some(params))?;
        let shared = self.generate_shared(&ephemeral, params.key_len, params.mac_len)?;
        let (ke, km) = derive_keys(params, &shared, s1)?;

        if !verify_tag(params.hash, &km, em, s2, tag)? {
            debug!(curve = curve.name(), params = params.name, "ECIES tag mismatch");
            return Err(Error::InvalidMessage);
        }

        let plaintext = sym_decrypt(params, &ke, em).map_err(error::opaque)?;
        debug!(
            curve = curve.name(),
            params = params.name,
            plaintext_len = plaintext.len(),
            "ECIES decrypt"
        );
        Ok(plaintext.to_vec())
    }
}
