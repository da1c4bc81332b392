//! Arbitrary-precision unsigned integer
//!
//! `BigUint` stores a non-negative integer as a canonical,
//! most-significant-first sequence of limbs and grows as needed, so
//! addition and multiplication are exact.

mod add;
mod conv;
mod core;
mod fmt;
mod mul;
mod ops;

/// Arbitrary-precision unsigned integer.
pub use self::core::BigUint;
