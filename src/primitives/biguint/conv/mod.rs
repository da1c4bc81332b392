//! Conversion utilities
//!
//! Explicit conversions between `BigUint` and other representations:
//! - big-endian byte strings
//! - native unsigned integers (widening is infallible, narrowing is
//!   checked)
//! - raw limb sequences
//!
//! Every conversion into `BigUint` produces a canonical value.

mod bytes;
mod limbs;
mod native;
