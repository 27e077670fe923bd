use super::*;

#[test]
fn test_error_conversion() {
    let err = Error::param("key", "empty");
    match CoreError::from(err) {
        CoreError::InvalidParameter { context, message } => {
            assert_eq!(context, "primitives");
            assert_eq!(message, "key: empty");
        }
        e => panic!("Expected InvalidParameter error, got {:?}", e),
    }

    let err = Error::Length {
        context: "AES key",
        expected: 32,
        actual: 16,
    };
    match CoreError::from(err) {
        CoreError::InvalidLength { context, expected, actual } => {
            assert_eq!(context, "AES key");
            assert_eq!(expected, 32);
            assert_eq!(actual, 16);
        }
        e => panic!("Expected InvalidLength error, got {:?}", e),
    }
}

#[test]
fn test_decode_failures_collapse_to_public_variants() {
    assert_eq!(
        CoreError::from(Error::Truncated { context: "CTR envelope" }),
        CoreError::InvalidMessage
    );
    assert_eq!(
        CoreError::from(Error::InvalidPoint { curve: "P-256" }),
        CoreError::InvalidPublicKey
    );
    assert_eq!(
        CoreError::from(Error::Identity { operation: "ECDH" }),
        CoreError::PointAtInfinity
    );
    assert_eq!(
        CoreError::from(Error::CurveMismatch { ours: "P-256", theirs: "P-384" }),
        CoreError::CurveMismatch
    );
}

#[test]
fn test_validation_functions() {
    assert!(validate::parameter(true, "test", "should pass").is_ok());
    match validate::parameter(false, "test", "should fail").unwrap_err() {
        Error::Parameter { name, reason } => {
            assert_eq!(name, "test");
            assert_eq!(reason, "should fail");
        }
        e => panic!("Expected Parameter error, got {:?}", e),
    }

    assert!(validate::length("buffer", 32, 32).is_ok());
    assert_eq!(
        validate::length("buffer", 16, 32).unwrap_err(),
        Error::Length { context: "buffer", expected: 32, actual: 16 }
    );

    assert!(validate::longer_than("envelope", 17, 16).is_ok());
    assert_eq!(
        validate::longer_than("envelope", 16, 16).unwrap_err(),
        Error::Truncated { context: "envelope" }
    );

    assert!(validate::at_least("envelope", 16, 16).is_ok());
    assert!(validate::at_least("envelope", 15, 16).is_err());
}
