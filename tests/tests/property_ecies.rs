//! Property-based tests for the ECIES envelope

use ecrypt::prelude::*;
use ecrypt_tests::{decode_envelope, encode_envelope, fixture_key, seeded_rng};
use proptest::prelude::*;

fn curve() -> impl Strategy<Value = Curve> {
    prop_oneof![Just(Curve::P256), Just(Curve::P384), Just(Curve::P521)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn roundtrip(
        curve in curve(),
        seed in any::<u64>(),
        plaintext in prop::collection::vec(any::<u8>(), 1..512),
        s1 in prop::option::of(prop::collection::vec(any::<u8>(), 0..32)),
    ) {
        let sk = fixture_key(curve, seed);
        let mut rng = seeded_rng(seed ^ 1);
        let envelope =
            encrypt(&mut rng, sk.public_key(), &plaintext, s1.as_deref(), None).unwrap();
        let decrypted = sk.decrypt(&envelope, s1.as_deref(), None).unwrap();
        prop_assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn tampering_after_ephemeral_key_is_rejected(
        curve in curve(),
        plaintext in prop::collection::vec(any::<u8>(), 1..128),
        position in any::<prop::sample::Index>(),
        mask in 1u8..=255,
    ) {
        let sk = fixture_key(curve, 1234);
        let envelope =
            encrypt(&mut seeded_rng(99), sk.public_key(), &plaintext, None, None).unwrap();
        let mut raw = decode_envelope(&envelope);

        let r_len = curve.uncompressed_point_len();
        let i = r_len + position.index(raw.len() - r_len);
        raw[i] ^= mask;

        prop_assert_eq!(sk.decrypt(&encode_envelope(&raw), None, None), Err(Error::InvalidMessage));
    }

    #[test]
    fn kdf_shared_info_must_match(
        s1 in prop::collection::vec(any::<u8>(), 1..32),
        other in prop::collection::vec(any::<u8>(), 1..32),
    ) {
        prop_assume!(s1 != other);
        let sk = fixture_key(Curve::P256, 77);
        let mut rng = seeded_rng(5);
        let envelope =
            encrypt(&mut rng, sk.public_key(), b"bound to s1", Some(&s1), None).unwrap();
        prop_assert_eq!(sk.decrypt(&envelope, Some(&other), None), Err(Error::InvalidMessage));
    }

    #[test]
    fn arbitrary_input_never_panics(input in ".{0,300}") {
        let sk = fixture_key(Curve::P384, 8);
        let _ = sk.decrypt(&input, None, None);
    }
}
