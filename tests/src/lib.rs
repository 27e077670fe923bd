//! Shared fixtures for the ecrypt integration tests and benchmarks

use base64::prelude::*;
use ecrypt::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Curves with a registered ECIES bundle.
pub const NIST_CURVES: [Curve; 3] = [Curve::P256, Curve::P384, Curve::P521];

/// Deterministic CSPRNG for reproducible fixtures.
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// A key pair on `curve` with its default bundle, derived from `seed`.
pub fn fixture_key(curve: Curve, seed: u64) -> PrivateKey {
    generate_key(&mut seeded_rng(seed), curve, None).expect("fixture key generation failed")
}

/// Raw envelope bytes of a Base64 ciphertext.
pub fn decode_envelope(envelope: &str) -> Vec<u8> {
    BASE64_STANDARD.decode(envelope).expect("envelope is not Base64")
}

/// Base64-encode raw envelope bytes.
pub fn encode_envelope(raw: &[u8]) -> String {
    BASE64_STANDARD.encode(raw)
}

/// Expected raw envelope length for `plaintext_len` bytes under `key`.
pub fn expected_envelope_len(key: &PublicKey, plaintext_len: usize) -> usize {
    let params = key.params().expect("key has no ECIES bundle");
    key.curve().uncompressed_point_len() + params.block_size + plaintext_len + params.tag_len()
}
