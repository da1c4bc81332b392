//! Error types for the bignum crate
//!
//! Unsigned arithmetic on well-formed values cannot fail, so the taxonomy
//! is small: malformed construction input, narrowing conversions that do
//! not fit, and limb buffers that could not be allocated.

use thiserror::Error;

/// Errors produced by `BigUint` construction, conversion and the fallible
/// `try_*` arithmetic entry points.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input cannot describe a value (e.g. an empty limb sequence).
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// A limb buffer of the requested size could not be allocated.
    #[error("failed to allocate a buffer of {limbs} limbs")]
    ResourceExhaustion { limbs: usize },

    /// The value does not fit into the requested native integer type.
    #[error("value does not fit into {bits} bits")]
    Overflow { bits: u32 },
}

/// Result alias used across the crate.
pub type Result<T> = core::result::Result<T, Error>;
