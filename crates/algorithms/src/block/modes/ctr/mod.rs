//! Counter (CTR) mode and the `IV ‖ ciphertext` envelope
//!
//! The whole 16-byte IV is the initial counter block and is incremented as a
//! single 128-bit big-endian integer (NIST SP 800-38A). A fresh IV is drawn
//! from the caller's random source on every encryption.

use aes::{Aes128, Aes192, Aes256};
use ctr::cipher::{KeyIvInit, StreamCipher};
use ecrypt_params::utils::symmetric::{AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE};
use ecrypt_params::{BlockCipherKind, EciesParams};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::error::{validate, Error, Result};

type Aes128Ctr = ctr::Ctr128BE<Aes128>;
type Aes192Ctr = ctr::Ctr128BE<Aes192>;
type Aes256Ctr = ctr::Ctr128BE<Aes256>;

enum Inner {
    Aes128(Aes128Ctr),
    Aes192(Aes192Ctr),
    Aes256(Aes256Ctr),
}

/// A keyed CTR keystream positioned at the start of its IV.
pub struct CtrCipher {
    inner: Inner,
}

impl CtrCipher {
    /// Key the cipher. AES picks its variant from `key.len()`.
    pub fn new(kind: BlockCipherKind, key: &[u8], iv: &[u8]) -> Result<Self> {
        validate::length("CTR IV", iv.len(), kind.block_size())?;

        let inner = match (kind, key.len()) {
            (BlockCipherKind::Aes, AES128_KEY_SIZE) => {
                Inner::Aes128(Aes128Ctr::new_from_slices(key, iv).map_err(|_| key_err(key))?)
            }
            (BlockCipherKind::Aes, AES192_KEY_SIZE) => {
                Inner::Aes192(Aes192Ctr::new_from_slices(key, iv).map_err(|_| key_err(key))?)
            }
            (BlockCipherKind::Aes, AES256_KEY_SIZE) => {
                Inner::Aes256(Aes256Ctr::new_from_slices(key, iv).map_err(|_| key_err(key))?)
            }
            (BlockCipherKind::Aes, _) => return Err(key_err(key)),
        };
        Ok(Self { inner })
    }

    /// XOR the next `buf.len()` keystream bytes into `buf`.
    pub fn apply_keystream(&mut self, buf: &mut [u8]) {
        match &mut self.inner {
            Inner::Aes128(c) => c.apply_keystream(buf),
            Inner::Aes192(c) => c.apply_keystream(buf),
            Inner::Aes256(c) => c.apply_keystream(buf),
        }
    }
}

fn key_err(key: &[u8]) -> Error {
    Error::param("AES key", format!("{} bytes is not a valid AES key length", key.len()))
}

/// Encrypt `plaintext` under `key` with a fresh random IV.
///
/// Returns `IV ‖ ciphertext`, `params.block_size` bytes longer than the
/// plaintext.
pub fn sym_encrypt<R: RngCore + CryptoRng>(
    rng: &mut R,
    params: &EciesParams,
    key: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    validate::parameter(
        params.block_size == params.cipher.block_size(),
        "block_size",
        "bundle block size does not match its cipher",
    )?;

    let mut out = vec![0u8; params.block_size + plaintext.len()];
    let (iv, body) = out.split_at_mut(params.block_size);
    rng.try_fill_bytes(iv)
        .map_err(|_| Error::RandomSource { context: "CTR IV" })?;

    body.copy_from_slice(plaintext);
    CtrCipher::new(params.cipher, key, iv)?.apply_keystream(body);
    Ok(out)
}

/// Split `envelope` into IV and ciphertext and decrypt.
///
/// Inputs shorter than one block are reported as truncated. An envelope of
/// exactly one block decrypts to an empty plaintext.
pub fn sym_decrypt(
    params: &EciesParams,
    key: &[u8],
    envelope: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    validate::at_least("CTR envelope", envelope.len(), params.block_size)?;

    let (iv, body) = envelope.split_at(params.block_size);
    let mut plaintext = Zeroizing::new(body.to_vec());
    CtrCipher::new(params.cipher, key, iv)?.apply_keystream(&mut plaintext);
    Ok(plaintext)
}
