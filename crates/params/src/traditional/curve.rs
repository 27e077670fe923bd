//! Elliptic-curve identities understood by the group library.

use core::fmt;
use core::str::FromStr;

use super::ecdh::{
    ECDH_K256_FIELD_SIZE, ECDH_K256_PUBLIC_KEY_SIZE, ECDH_P256_FIELD_SIZE,
    ECDH_P256_PUBLIC_KEY_SIZE, ECDH_P384_FIELD_SIZE, ECDH_P384_PUBLIC_KEY_SIZE,
    ECDH_P521_FIELD_SIZE, ECDH_P521_PUBLIC_KEY_SIZE,
};

/// A named short-Weierstrass curve.
///
/// Only the three NIST curves have a registered ECIES bundle; secp256k1 keys
/// can be generated and used with an explicit bundle, but implicit parameter
/// lookup yields nothing for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Curve {
    /// NIST P-256 (secp256r1), 128-bit security
    P256,
    /// NIST P-384 (secp384r1), 192-bit security
    P384,
    /// NIST P-521 (secp521r1), 256-bit security
    P521,
    /// secp256k1
    K256,
}

/// The default curve: NIST P-256, security equivalent to AES-128.
pub const DEFAULT_CURVE: Curve = Curve::P256;

impl Curve {
    /// Every curve identity, strongest NIST curve last.
    pub const ALL: [Curve; 4] = [Curve::P256, Curve::P384, Curve::P521, Curve::K256];

    /// Canonical curve name.
    pub const fn name(self) -> &'static str {
        match self {
            Curve::P256 => "P-256",
            Curve::P384 => "P-384",
            Curve::P521 => "P-521",
            Curve::K256 => "secp256k1",
        }
    }

    /// Bit length of the field prime.
    pub const fn bit_size(self) -> usize {
        match self {
            Curve::P256 | Curve::K256 => 256,
            Curve::P384 => 384,
            Curve::P521 => 521,
        }
    }

    /// Byte length of a field element, `ceil(bit_size / 8)`.
    ///
    /// This is also the largest amount of key material ECDH on this curve can
    /// supply.
    pub const fn field_size(self) -> usize {
        match self {
            Curve::P256 => ECDH_P256_FIELD_SIZE,
            Curve::P384 => ECDH_P384_FIELD_SIZE,
            Curve::P521 => ECDH_P521_FIELD_SIZE,
            Curve::K256 => ECDH_K256_FIELD_SIZE,
        }
    }

    /// Length of the SEC 1 uncompressed encoding `04 || X || Y`.
    pub const fn uncompressed_point_len(self) -> usize {
        match self {
            Curve::P256 => ECDH_P256_PUBLIC_KEY_SIZE,
            Curve::P384 => ECDH_P384_PUBLIC_KEY_SIZE,
            Curve::P521 => ECDH_P521_PUBLIC_KEY_SIZE,
            Curve::K256 => ECDH_K256_PUBLIC_KEY_SIZE,
        }
    }

    /// Length of the SEC 1 compressed encoding `02|03 || X`.
    pub const fn compressed_point_len(self) -> usize {
        self.field_size() + 1
    }

    const fn aliases(self) -> &'static [&'static str] {
        match self {
            Curve::P256 => &["p256", "p-256", "secp256r1", "prime256v1"],
            Curve::P384 => &["p384", "p-384", "secp384r1"],
            Curve::P521 => &["p521", "p-521", "secp521r1"],
            Curve::K256 => &["k256", "secp256k1"],
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a curve name is not recognised.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownCurve;

impl fmt::Display for UnknownCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown curve (expected one of p256, p384, p521, k256)")
    }
}

impl FromStr for Curve {
    type Err = UnknownCurve;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Curve::ALL
            .into_iter()
            .find(|curve| curve.aliases().iter().any(|alias| s.eq_ignore_ascii_case(alias)))
            .ok_or(UnknownCurve)
    }
}
