use super::*;

fn z32() -> Vec<u8> {
    (0u8..32).collect()
}

#[test]
fn test_single_block_sha256() {
    let okm = concat_kdf(HashAlgorithm::Sha256, &z32(), None, 32).unwrap();
    assert_eq!(
        hex::encode(&*okm),
        "22b288a146b89e364069f6f367618a0ebeb5b83e5462685ab127b8edf8d2690a"
    );
}

#[test]
fn test_first_block_is_counter_one_hash() {
    let z = z32();
    let okm = concat_kdf(HashAlgorithm::Sha256, &z, Some(b"ecies"), 32).unwrap();

    let mut hasher = Sha256::new();
    hasher.update([0u8, 0, 0, 1]);
    hasher.update(&z);
    hasher.update(b"ecies");
    assert_eq!(&okm[..], hasher.finalize().as_slice());
}

#[test]
fn test_two_blocks_truncated_with_shared_info() {
    let okm = concat_kdf(HashAlgorithm::Sha256, &z32(), Some(b"ecies"), 48).unwrap();
    assert_eq!(
        hex::encode(&*okm),
        "c0471b82e75e932df17f6440110a93b099b31ac842686fa939a492d176c99b78\
         7917a1c9a63aaaad5d8678d7e3cf57a3"
    );
}

#[test]
fn test_sha512_p521_sized_secret() {
    let z: Vec<u8> = (0u8..66).collect();
    let okm = concat_kdf(HashAlgorithm::Sha512, &z, None, 64).unwrap();
    assert_eq!(
        hex::encode(&*okm),
        "0bd33256567c583b5ef487a3091ae9593ee1926211f3626c5520e028f13312f5\
         55967c224b85c168993fef1e5d43c2e3f5aa40825177be6d859391b0773edc31"
    );
}

#[test]
fn test_empty_shared_info_equals_absent() {
    let z = z32();
    let absent = concat_kdf(HashAlgorithm::Sha384, &z, None, 40).unwrap();
    let empty = concat_kdf(HashAlgorithm::Sha384, &z, Some(&[]), 40).unwrap();
    assert_eq!(absent, empty);
}

#[test]
fn test_prefix_stable_across_lengths() {
    let z = z32();
    let short = concat_kdf(HashAlgorithm::Sha256, &z, None, 20).unwrap();
    let long = concat_kdf(HashAlgorithm::Sha256, &z, None, 100).unwrap();
    assert_eq!(long.len(), 100);
    assert_eq!(&long[..20], &short[..]);
}

#[test]
fn test_zero_length_output() {
    let okm = concat_kdf(HashAlgorithm::Sha256, &z32(), None, 0).unwrap();
    assert!(okm.is_empty());
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_counter_overflow_rejected() {
    let requested = (MAX_BLOCKS as usize + 1) * 32;
    let err = concat_kdf(HashAlgorithm::Sha256, &z32(), None, requested).unwrap_err();
    assert_eq!(err, Error::KeyDataTooLong { requested });
}
