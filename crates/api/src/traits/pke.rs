//! Trait definition for Public Key Encryption (PKE) schemes.

use crate::error::Result;
use crate::types::SharedInfo;
use rand::{CryptoRng, RngCore};
use zeroize::ZeroizeOnDrop;

/// Trait for Public Key Encryption schemes.
pub trait Pke {
    /// Public key type for the PKE scheme.
    type PublicKey: Clone;

    /// Secret key type for the PKE scheme.
    /// Must wipe its secret material when dropped.
    type SecretKey: ZeroizeOnDrop;

    /// Ciphertext type produced by the PKE scheme.
    type Ciphertext: AsRef<[u8]> + Clone;

    /// Returns the PKE algorithm name.
    fn name() -> &'static str;

    /// Generates a new key pair for the PKE scheme.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(Self::PublicKey, Self::SecretKey)>;

    /// Encrypts a plaintext message using the recipient's public key.
    ///
    /// # Arguments
    /// * `pk_recipient` - The recipient's public key.
    /// * `plaintext` - The message to encrypt.
    /// * `shared_info` - Out-of-band context both parties must agree on.
    ///   Nothing about it is transmitted in the ciphertext.
    /// * `rng` - A cryptographically secure random number generator.
    fn encrypt<R: RngCore + CryptoRng>(
        pk_recipient: &Self::PublicKey,
        plaintext: &[u8],
        shared_info: SharedInfo<'_>,
        rng: &mut R,
    ) -> Result<Self::Ciphertext>;

    /// Decrypts a ciphertext using the recipient's secret key.
    ///
    /// Returns the original plaintext if parsing and authentication succeed.
    fn decrypt(
        sk_recipient: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
        shared_info: SharedInfo<'_>,
    ) -> Result<Vec<u8>>;
}
