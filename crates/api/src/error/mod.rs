//! Error handling for the ecrypt ecosystem

pub mod types;

// Re-export the primary error type and result
pub use types::{Error, ErrorClass, Result};
