//! Value types shared across ecrypt schemes

/// The two optional shared-information strings of SEC 1 ECIES.
///
/// `s1` is fed into the key derivation; `s2` accompanies the MAC. Neither is
/// carried in the ciphertext, so sender and recipient must supply identical
/// values out of band (or both omit them).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SharedInfo<'a> {
    /// Key-derivation shared information
    pub s1: Option<&'a [u8]>,
    /// MAC shared information
    pub s2: Option<&'a [u8]>,
}

impl<'a> SharedInfo<'a> {
    /// No shared information on either side.
    pub const fn none() -> Self {
        Self { s1: None, s2: None }
    }

    /// Both shared-information strings.
    pub const fn new(s1: &'a [u8], s2: &'a [u8]) -> Self {
        Self {
            s1: Some(s1),
            s2: Some(s2),
        }
    }
}
