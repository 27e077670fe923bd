//! Constants for Elliptic Curve Diffie-Hellman

/// Size of a P-256 field element (and of its ECDH shared secret) in bytes
pub const ECDH_P256_FIELD_SIZE: usize = 32;

/// Size of a P-384 field element (and of its ECDH shared secret) in bytes
pub const ECDH_P384_FIELD_SIZE: usize = 48;

/// Size of a P-521 field element (and of its ECDH shared secret) in bytes
pub const ECDH_P521_FIELD_SIZE: usize = 66;

/// Size of a secp256k1 field element (and of its ECDH shared secret) in bytes
pub const ECDH_K256_FIELD_SIZE: usize = 32;

/// Size of public key for ECDH using P-256 in bytes (uncompressed format)
pub const ECDH_P256_PUBLIC_KEY_SIZE: usize = 2 * ECDH_P256_FIELD_SIZE + 1;

/// Size of public key for ECDH using P-384 in bytes (uncompressed format)
pub const ECDH_P384_PUBLIC_KEY_SIZE: usize = 2 * ECDH_P384_FIELD_SIZE + 1;

/// Size of public key for ECDH using P-521 in bytes (uncompressed format)
pub const ECDH_P521_PUBLIC_KEY_SIZE: usize = 2 * ECDH_P521_FIELD_SIZE + 1;

/// Size of public key for ECDH using secp256k1 in bytes (uncompressed format)
pub const ECDH_K256_PUBLIC_KEY_SIZE: usize = 2 * ECDH_K256_FIELD_SIZE + 1;

/// SEC 1 tag byte of a compressed point with even Y
pub const SEC1_TAG_COMPRESSED_EVEN: u8 = 0x02;

/// SEC 1 tag byte of a compressed point with odd Y
pub const SEC1_TAG_COMPRESSED_ODD: u8 = 0x03;

/// SEC 1 tag byte of an uncompressed point
pub const SEC1_TAG_UNCOMPRESSED: u8 = 0x04;
