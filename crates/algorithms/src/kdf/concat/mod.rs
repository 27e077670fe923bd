//! NIST SP 800-56A concatenation KDF
//!
//! `K = H(1 ‖ Z ‖ S1) ‖ H(2 ‖ Z ‖ S1) ‖ …`, truncated to the requested
//! length, where the counter is a 32-bit big-endian integer starting at 1.

use ecrypt_internal::endian::u32_to_be_bytes;
use ecrypt_params::HashAlgorithm;
use sha2::{Digest, Sha256, Sha384, Sha512};
use zeroize::{Zeroize, Zeroizing};

use crate::error::{Error, Result};

/// Largest number of hash blocks the 32-bit counter can address.
const MAX_BLOCKS: u64 = u32::MAX as u64;

/// Derive `out_len` bytes from the shared secret `z` and optional shared
/// information `s1`.
///
/// An absent `s1` contributes nothing to the hash input.
pub fn concat_kdf(
    hash: HashAlgorithm,
    z: &[u8],
    s1: Option<&[u8]>,
    out_len: usize,
) -> Result<Zeroizing<Vec<u8>>> {
    let s1 = s1.unwrap_or_default();
    match hash {
        HashAlgorithm::Sha256 => derive::<Sha256>(z, s1, out_len),
        HashAlgorithm::Sha384 => derive::<Sha384>(z, s1, out_len),
        HashAlgorithm::Sha512 => derive::<Sha512>(z, s1, out_len),
    }
}

fn derive<D: Digest>(z: &[u8], s1: &[u8], out_len: usize) -> Result<Zeroizing<Vec<u8>>> {
    let hash_len = <D as Digest>::output_size();
    let blocks = out_len.div_ceil(hash_len);
    if blocks as u64 > MAX_BLOCKS {
        return Err(Error::KeyDataTooLong { requested: out_len });
    }

    let mut okm = Zeroizing::new(Vec::with_capacity(blocks * hash_len));
    for counter in 1..=blocks as u32 {
        let mut hasher = D::new();
        hasher.update(u32_to_be_bytes(counter));
        hasher.update(z);
        hasher.update(s1);
        let mut block = hasher.finalize();
        okm.extend_from_slice(&block);
        block.as_mut_slice().zeroize();
    }
    okm.truncate(out_len);
    Ok(okm)
}

#[cfg(test)]
mod tests;
