//! Key derivation functions

pub mod concat;

pub use concat::concat_kdf;
