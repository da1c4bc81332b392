//! Arbitrary-precision unsigned integers
//!
//! This crate provides `BigUint`, an unsigned integer of unbounded width
//! built from fixed-width machine words ("limbs"), together with exact
//! addition and multiplication.
//!
//! The focus is on **clarity, predictability, and auditability**: the
//! representation is a plain most-significant-first limb vector kept in
//! canonical form, and the arithmetic is written out explicitly so every
//! carry can be followed by hand.
//!
//! # Module overview
//!
//! - `primitives`  
//!   The `Limb` word type and the `BigUint` value type with its
//!   normalization, addition, multiplication, operator, conversion and
//!   formatting code.
//!
//! - `error`  
//!   The crate error type. Arithmetic on well-formed values never fails;
//!   errors come only from malformed construction input, narrowing
//!   conversions and refused allocations.
//!
//! # Design goals
//!
//! - Exact results, no truncation
//! - Canonical values: one encoding per integer
//! - Immutable operands, fresh results
//! - Limb width selectable at compile time (`limb32` feature)
//!
//! Signed values, subtraction, division, modulo and exponentiation are not
//! provided.

pub mod error;
pub mod primitives;

pub use error::{Error, Result};
pub use primitives::{BigUint, Limb};
