//! End-to-end tests of the ECIES facade

use std::thread;

use ecrypt::prelude::*;
use ecrypt_tests::{
    decode_envelope, encode_envelope, expected_envelope_len, fixture_key, seeded_rng, NIST_CURVES,
};
use rand::rngs::OsRng;

#[test]
fn test_roundtrip_all_curves_and_lengths() {
    for (i, curve) in NIST_CURVES.into_iter().enumerate() {
        let sk = fixture_key(curve, i as u64);
        for len in [1usize, 15, 16, 17, 31, 32, 33, 1000, 4096] {
            let plaintext: Vec<u8> = (0..len).map(|b| b as u8).collect();
            let envelope = encrypt(&mut OsRng, sk.public_key(), &plaintext, None, None).unwrap();
            assert_eq!(
                decode_envelope(&envelope).len(),
                expected_envelope_len(sk.public_key(), len),
                "{} / {} bytes",
                curve,
                len
            );
            assert_eq!(sk.decrypt(&envelope, None, None).unwrap(), plaintext);
        }
    }
}

#[test]
fn test_hello_world_envelope() {
    let sk = generate_key(&mut OsRng, DEFAULT_CURVE, None).unwrap();
    let envelope = encrypt(&mut OsRng, sk.public_key(), b"hello world", None, None).unwrap();
    assert_eq!(decode_envelope(&envelope).len(), 124);
    assert_eq!(envelope.len(), 168);
    assert_eq!(sk.decrypt(&envelope, None, None).unwrap(), b"hello world");
}

#[test]
fn test_every_ciphertext_and_tag_byte_is_authenticated() {
    for curve in NIST_CURVES {
        let sk = fixture_key(curve, 42);
        let envelope =
            encrypt(&mut seeded_rng(7), sk.public_key(), b"integrity", None, None).unwrap();
        let raw = decode_envelope(&envelope);
        let r_len = curve.uncompressed_point_len();

        for i in r_len..raw.len() {
            let mut bad = raw.clone();
            bad[i] = bad[i].wrapping_add(1);
            assert_eq!(
                sk.decrypt(&encode_envelope(&bad), None, None).unwrap_err(),
                Error::InvalidMessage,
                "{}: byte {}",
                curve,
                i
            );
        }
    }
}

#[test]
fn test_wrong_recipient() {
    for curve in NIST_CURVES {
        let alice = fixture_key(curve, 1);
        let bob = fixture_key(curve, 2);
        let envelope = encrypt(&mut OsRng, alice.public_key(), b"for alice", None, None).unwrap();
        assert_eq!(bob.decrypt(&envelope, None, None).unwrap_err(), Error::InvalidMessage);
    }
}

#[test]
fn test_shared_key_bound_per_curve() {
    for curve in Curve::ALL {
        let a = generate_key(&mut OsRng, curve, None).unwrap();
        let b = generate_key(&mut OsRng, curve, None).unwrap();
        let max = max_shared_key_length(b.public_key());
        assert_eq!(max, curve.field_size());
        assert!(a.generate_shared(b.public_key(), max - 16, 16).is_ok());
        assert_eq!(
            a.generate_shared(b.public_key(), max - 15, 16).unwrap_err(),
            Error::SharedKeyTooLarge { requested: max + 1, max }
        );
    }
}

#[test]
fn test_encryptions_are_randomized() {
    let sk = fixture_key(Curve::P384, 3);
    let a = encrypt(&mut OsRng, sk.public_key(), b"same plaintext", None, None).unwrap();
    let b = encrypt(&mut OsRng, sk.public_key(), b"same plaintext", None, None).unwrap();
    assert_ne!(a, b);

    let (ra, rb) = (decode_envelope(&a), decode_envelope(&b));
    let iv = 97..97 + 16;
    assert_ne!(ra[iv.clone()], rb[iv]);
}

#[test]
fn test_secp256k1_needs_explicit_params() {
    let sk = generate_key(&mut OsRng, Curve::K256, None).unwrap();
    let err = encrypt(&mut OsRng, sk.public_key(), b"m", None, None).unwrap_err();
    assert_eq!(err, Error::UnsupportedParams);
    assert_eq!(err.class(), ErrorClass::Internal);

    let bundle = params_for_curve(Curve::P256);
    let pk = sk.public_key().clone().with_params(bundle);
    let envelope = encrypt(&mut OsRng, &pk, b"m", None, None).unwrap();
    assert_eq!(decode_envelope(&envelope).len(), 65 + 16 + 1 + 32);
}

#[test]
fn test_error_classes() {
    let sk = fixture_key(Curve::P256, 5);
    let err = sk.decrypt("%%%", None, None).unwrap_err();
    assert_eq!(err.class(), ErrorClass::Input);

    let err = encrypt(&mut OsRng, sk.public_key(), b"", None, None).unwrap_err();
    assert_eq!(err, Error::InvalidMessage);
    assert_eq!(err.class(), ErrorClass::Input);
}

fn pke_roundtrip<S>()
where
    S: Pke<Ciphertext = String>,
{
    let mut rng = OsRng;
    let (pk, sk) = S::keypair(&mut rng).unwrap();
    let info = SharedInfo::new(b"session-42", b"");
    let ct = S::encrypt(&pk, b"through the trait", info, &mut rng).unwrap();
    assert_eq!(S::decrypt(&sk, &ct, info).unwrap(), b"through the trait");
    assert!(S::decrypt(&sk, &ct, SharedInfo::none()).is_err(), "{}", S::name());
}

#[test]
fn test_pke_trait_schemes() {
    pke_roundtrip::<EciesP256>();
    pke_roundtrip::<EciesP384>();
    pke_roundtrip::<EciesP521>();
}

#[test]
fn test_pem_roundtrip_through_facade() {
    let sk = fixture_key(Curve::P521, 9);
    let private_pem = export_private_pem(&sk).unwrap();
    let public_pem = export_public_pem(sk.public_key()).unwrap();

    let recipient = import_public_pem(&public_pem).unwrap();
    let envelope = encrypt(&mut OsRng, &recipient, b"via pem", None, None).unwrap();

    let restored = import_private_pem(&private_pem).unwrap();
    assert_eq!(restored.decrypt(&envelope, None, None).unwrap(), b"via pem");
}

#[test]
fn test_concurrent_use_of_shared_keys() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PublicKey>();
    assert_send_sync::<PrivateKey>();

    let sk = fixture_key(Curve::P256, 11);
    thread::scope(|scope| {
        for t in 0..8u8 {
            let sk = &sk;
            scope.spawn(move || {
                let message = vec![t; 64 + t as usize];
                for _ in 0..8 {
                    let envelope =
                        encrypt(&mut OsRng, sk.public_key(), &message, None, None).unwrap();
                    assert_eq!(sk.decrypt(&envelope, None, None).unwrap(), message);
                }
            });
        }
    });
}
