//! HMAC tags over the ECIES ciphertext
//!
//! The tag is a full-length HMAC digest keyed with the re-hashed MAC key.

use ::hmac::{Hmac, Mac};
use ecrypt_internal::ct_eq;
use ecrypt_params::HashAlgorithm;
use sha2::{Sha256, Sha384, Sha512};

use crate::error::{Error, Result};

macro_rules! hmac_tag {
    ($digest:ty, $key:expr, $msg:expr) => {{
        let mut mac = <Hmac<$digest> as Mac>::new_from_slice($key)
            .map_err(|_| Error::param("hmac key", "rejected by HMAC"))?;
        mac.update($msg);
        mac.finalize().into_bytes().to_vec()
    }};
}

/// Compute `HMAC(km, msg)`.
///
/// `_s2` is accepted so callers can thread the second shared-information
/// value through, but it is not bound into the tag. Envelopes produced with
/// different `s2` values therefore verify against each other.
pub fn message_tag(
    hash: HashAlgorithm,
    km: &[u8],
    msg: &[u8],
    _s2: Option<&[u8]>,
) -> Result<Vec<u8>> {
    let tag = match hash {
        HashAlgorithm::Sha256 => hmac_tag!(Sha256, km, msg),
        HashAlgorithm::Sha384 => hmac_tag!(Sha384, km, msg),
        HashAlgorithm::Sha512 => hmac_tag!(Sha512, km, msg),
    };
    Ok(tag)
}

/// Recompute the tag and compare it with `tag` in constant time.
pub fn verify_tag(
    hash: HashAlgorithm,
    km: &[u8],
    msg: &[u8],
    s2: Option<&[u8]>,
    tag: &[u8],
) -> Result<bool> {
    let expected = message_tag(hash, km, msg, s2)?;
    Ok(ct_eq(&expected, tag))
}
