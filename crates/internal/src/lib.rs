//! Internal utilities shared by the ecrypt crates.
//!
//! Nothing in here is part of the public ecrypt API surface; it exists so the
//! primitive and scheme crates agree on how secrets are compared and how
//! integers are laid out on the wire.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;
pub mod endian;

pub use constant_time::{ct_eq, ct_eq_choice};
