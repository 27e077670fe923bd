//! Block ciphers and their modes of operation

pub mod modes;

pub use modes::ctr::{sym_decrypt, sym_encrypt, CtrCipher};
