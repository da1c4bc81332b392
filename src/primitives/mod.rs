//! Primitive types
//!
//! This module defines the low-level building blocks of the crate:
//! - `Limb`: the fixed-width machine word used as a digit
//! - `BigUint`: an arbitrary-precision unsigned integer made of limbs
//!
//! Arithmetic is exact: results grow by whole limbs instead of wrapping.

mod biguint;
mod limb;

pub use biguint::BigUint;
pub use limb::{HALF_BITS, Limb};
