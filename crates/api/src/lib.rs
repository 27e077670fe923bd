//! Public API traits and types for the ecrypt library
//!
//! This crate provides the public API surface for the ecrypt workspace: the
//! error taxonomy every scheme reports through, the [`Pke`] trait implemented
//! by the per-curve ECIES schemes, and the small value types shared by them.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, ErrorClass, Result};
pub use traits::Pke;
pub use types::SharedInfo;

// Re-export trait modules for direct access
pub use traits::pke;
