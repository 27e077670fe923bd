//! Endianness utility functions

/// Convert a u32 from native byte order to big-endian bytes
pub fn u32_to_be_bytes(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

/// Copy `src` into the low-order end of `dst`, big-endian style.
///
/// When `src` is shorter than `dst` the leading bytes of `dst` are zeroed;
/// when it is longer only its trailing `dst.len()` bytes are kept.
pub fn copy_right_aligned(dst: &mut [u8], src: &[u8]) {
    if src.len() >= dst.len() {
        dst.copy_from_slice(&src[src.len() - dst.len()..]);
    } else {
        let pad = dst.len() - src.len();
        dst[..pad].fill(0);
        dst[pad..].copy_from_slice(src);
    }
}
