//! Block cipher modes of operation

pub mod ctr;

pub use ctr::CtrCipher;
