//! ECIES parameter bundles and the curve-to-bundle registry.
//!
//! Standard ECIES parameters:
//! * ECIES using AES128 and HMAC-SHA-256-16
//! * ECIES using AES256 and HMAC-SHA-256-32
//! * ECIES using AES256 and HMAC-SHA-384-48
//! * ECIES using AES256 and HMAC-SHA-512-64

use super::curve::Curve;
use crate::utils::hash::{SHA256_OUTPUT_SIZE, SHA384_OUTPUT_SIZE, SHA512_OUTPUT_SIZE};
use crate::utils::symmetric::{AES128_KEY_SIZE, AES256_KEY_SIZE, AES_BLOCK_SIZE};

/// Hash function selector for the KDF, the MAC-key re-hash and HMAC.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    /// Digest length in bytes. This is also the ECIES tag length.
    pub const fn output_size(self) -> usize {
        match self {
            HashAlgorithm::Sha256 => SHA256_OUTPUT_SIZE,
            HashAlgorithm::Sha384 => SHA384_OUTPUT_SIZE,
            HashAlgorithm::Sha512 => SHA512_OUTPUT_SIZE,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha384 => "SHA-384",
            HashAlgorithm::Sha512 => "SHA-512",
        }
    }
}

/// Block cipher run in CTR mode by the symmetric envelope.
///
/// AES picks its variant from the key length (16, 24 or 32 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockCipherKind {
    Aes,
}

impl BlockCipherKind {
    pub const fn block_size(self) -> usize {
        match self {
            BlockCipherKind::Aes => AES_BLOCK_SIZE,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            BlockCipherKind::Aes => "AES",
        }
    }
}

/// A named ECIES parameter bundle.
///
/// `mac_len` is the nominal MAC-key length used when splitting the KDF
/// output. The tag itself is always a full `hash` digest, see
/// [`EciesParams::tag_len`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EciesParams {
    /// Short identifier, e.g. `aes128-sha256`
    pub id: &'static str,
    /// Display name, e.g. `AES128 HMAC-SHA-256-16`
    pub name: &'static str,
    /// Hash function
    pub hash: HashAlgorithm,
    /// Symmetric cipher
    pub cipher: BlockCipherKind,
    /// Block size of the symmetric cipher
    pub block_size: usize,
    /// Length of the symmetric key
    pub key_len: usize,
    /// Nominal HMAC key length
    pub mac_len: usize,
}

impl EciesParams {
    /// Bytes of KDF output (and of ECDH shared secret) this bundle consumes.
    pub const fn derived_key_len(&self) -> usize {
        self.key_len + self.mac_len
    }

    /// Length of the tag appended to every envelope.
    pub const fn tag_len(&self) -> usize {
        self.hash.output_size()
    }

    /// Whether key agreement on `curve` can supply enough material.
    pub const fn fits(&self, curve: Curve) -> bool {
        self.derived_key_len() <= curve.field_size()
    }

    /// Look a bundle up by identifier or display name, ignoring ASCII case.
    pub fn by_name(name: &str) -> Option<&'static EciesParams> {
        let name = name.trim();
        ALL_PARAMS
            .iter()
            .copied()
            .find(|p| p.id.eq_ignore_ascii_case(name) || p.name.eq_ignore_ascii_case(name))
    }
}

pub static ECIES_AES128_SHA256: EciesParams = EciesParams {
    id: "aes128-sha256",
    name: "AES128 HMAC-SHA-256-16",
    hash: HashAlgorithm::Sha256,
    cipher: BlockCipherKind::Aes,
    block_size: AES_BLOCK_SIZE,
    key_len: AES128_KEY_SIZE,
    mac_len: 16,
};

pub static ECIES_AES256_SHA256: EciesParams = EciesParams {
    id: "aes256-sha256",
    name: "AES256 HMAC-SHA-256-32",
    hash: HashAlgorithm::Sha256,
    cipher: BlockCipherKind::Aes,
    block_size: AES_BLOCK_SIZE,
    key_len: AES256_KEY_SIZE,
    mac_len: 16,
};

pub static ECIES_AES256_SHA384: EciesParams = EciesParams {
    id: "aes256-sha384",
    name: "AES256 HMAC-SHA-384-48",
    hash: HashAlgorithm::Sha384,
    cipher: BlockCipherKind::Aes,
    block_size: AES_BLOCK_SIZE,
    key_len: AES256_KEY_SIZE,
    mac_len: 16,
};

pub static ECIES_AES256_SHA512: EciesParams = EciesParams {
    id: "aes256-sha512",
    name: "AES256 HMAC-SHA-512-64",
    hash: HashAlgorithm::Sha512,
    cipher: BlockCipherKind::Aes,
    block_size: AES_BLOCK_SIZE,
    key_len: AES256_KEY_SIZE,
    mac_len: 32,
};

/// All four standard bundles, weakest first.
pub static ALL_PARAMS: [&EciesParams; 4] = [
    &ECIES_AES128_SHA256,
    &ECIES_AES256_SHA256,
    &ECIES_AES256_SHA384,
    &ECIES_AES256_SHA512,
];

// Stronger curve, stronger hash. P-256 deliberately gets the AES-128 bundle.
static CURVE_PARAMS: [(Curve, &EciesParams); 3] = [
    (Curve::P256, &ECIES_AES128_SHA256),
    (Curve::P384, &ECIES_AES256_SHA384),
    (Curve::P521, &ECIES_AES256_SHA512),
];

/// Selects the parameters matched to the curve's security level.
///
/// Returns `None` for curves without a registered bundle; callers must treat
/// that as a configuration error rather than fall back to a default.
pub fn params_for_curve(curve: Curve) -> Option<&'static EciesParams> {
    CURVE_PARAMS
        .iter()
        .find(|(c, _)| *c == curve)
        .map(|(_, params)| *params)
}
