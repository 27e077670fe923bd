//! Constants for traditional (elliptic-curve) cryptography

pub mod curve;
pub mod ecdh;
pub mod ecies;
