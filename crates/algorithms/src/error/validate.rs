//! Validation utilities for cryptographic primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate an exact length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Require more than `prefix` bytes, reporting a short input as truncated
#[inline(always)]
pub fn longer_than(context: &'static str, actual: usize, prefix: usize) -> Result<()> {
    if actual <= prefix {
        return Err(Error::Truncated { context });
    }
    Ok(())
}

/// Require at least `min` bytes, reporting a short input as truncated
#[inline(always)]
pub fn at_least(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::Truncated { context });
    }
    Ok(())
}
