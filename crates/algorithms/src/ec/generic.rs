//! Curve-generic helpers behind the runtime-dispatched key enums

use ecrypt_params::Curve;
use elliptic_curve::ff::PrimeField;
use elliptic_curve::group::{Curve as _, Group};
use elliptic_curve::point::AffineCoordinates;
use elliptic_curve::sec1::{FromEncodedPoint, ModulusSize, ToEncodedPoint};
use elliptic_curve::{
    AffinePoint, CurveArithmetic, FieldBytes, FieldBytesSize, PublicKey, SecretKey,
};
use rand::{CryptoRng, RngCore};
use tracing::trace;
use zeroize::{Zeroize, Zeroizing};

use super::MAX_SCALAR_ATTEMPTS;
use crate::error::{Error, Result};

/// Draw `field_size` random bytes, clear the bits above the curve's bit
/// length and accept the candidate if it lies in `[1, n)`.
pub(super) fn random_secret<C, R>(curve: Curve, rng: &mut R) -> Result<SecretKey<C>>
where
    C: CurveArithmetic,
    R: CryptoRng + RngCore,
{
    let mut candidate = FieldBytes::<C>::default();
    let excess_bits = candidate.len() * 8 - curve.bit_size();

    for attempt in 1..=MAX_SCALAR_ATTEMPTS {
        if rng.try_fill_bytes(&mut candidate).is_err() {
            candidate.as_mut_slice().zeroize();
            return Err(Error::RandomSource { context: "scalar sampling" });
        }
        candidate[0] &= 0xffu8 >> excess_bits;

        if let Ok(secret) = SecretKey::<C>::from_bytes(&candidate) {
            candidate.as_mut_slice().zeroize();
            return Ok(secret);
        }
        trace!(curve = curve.name(), attempt, "scalar candidate rejected");
    }

    candidate.as_mut_slice().zeroize();
    Err(Error::ScalarRejected { curve: curve.name() })
}

pub(super) fn ecdh_x<C>(secret: &SecretKey<C>, public: &PublicKey<C>) -> Result<Zeroizing<Vec<u8>>>
where
    C: CurveArithmetic,
{
    let product = public.to_projective() * *secret.to_nonzero_scalar();
    if bool::from(product.is_identity()) {
        return Err(Error::Identity { operation: "ECDH" });
    }

    let mut x = product.to_affine().x();
    let shared = Zeroizing::new(x.to_vec());
    x.as_mut_slice().zeroize();
    Ok(shared)
}

/// Group order and uncompressed generator of `C`.
pub(super) fn domain<C>() -> (String, Vec<u8>)
where
    C: CurveArithmetic,
    FieldBytesSize<C>: ModulusSize,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
{
    let order = <C::Scalar as PrimeField>::MODULUS
        .trim_start_matches("0x")
        .trim_start_matches('0')
        .to_ascii_lowercase();
    let generator = C::ProjectivePoint::generator()
        .to_affine()
        .to_encoded_point(false)
        .as_bytes()
        .to_vec();
    (order, generator)
}
