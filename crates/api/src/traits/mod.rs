//! Traits implemented by ecrypt schemes

pub mod pke;

pub use pke::Pke;
