//! Hash dispatch over the SHA-2 family
//!
//! The ECIES bundles name their hash with [`HashAlgorithm`]; this module
//! turns that selector into a concrete `sha2` hasher.

use ecrypt_params::HashAlgorithm;
use sha2::{Digest, Sha256, Sha384, Sha512};
use zeroize::Zeroizing;

/// One-shot digest of `data` with the selected hash.
///
/// The output is wrapped in [`Zeroizing`] because the ECIES MAC key is
/// itself a digest.
pub fn digest(hash: HashAlgorithm, data: &[u8]) -> Zeroizing<Vec<u8>> {
    let out = match hash {
        HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
        HashAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
        HashAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
    };
    Zeroizing::new(out)
}
