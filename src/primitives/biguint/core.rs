//! Arbitrary-precision unsigned integer representation
//!
//! This module defines `BigUint`, a non-negative integer stored as a
//! sequence of limbs, **most-significant limb first**.
//!
//! Every value is kept in canonical form: the most-significant limb is
//! non-zero, except for zero itself, which is exactly one zero limb. All
//! constructors normalize their input and every arithmetic operation
//! restores the invariant before returning, so equality and ordering can be
//! decided from the limbs alone.

use crate::error::{Error, Result};
use crate::primitives::limb::{Limb, try_limb_buffer};

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use tracing::trace;

/// Arbitrary-precision unsigned integer.
///
/// Values are immutable from the caller's point of view: arithmetic always
/// returns a freshly allocated value and `Clone` is a deep copy.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigUint {
    pub(crate) limbs: Vec<Limb>,
    pub(crate) length: usize,
}

impl BigUint {
    /// The value zero.
    pub fn zero() -> Self {
        Self::from_word(0)
    }

    /// The value one.
    pub fn one() -> Self {
        Self::from_word(1)
    }

    /// Creates a single-limb value.
    pub fn from_word(w: Limb) -> Self {
        BigUint {
            limbs: vec![w],
            length: 1,
        }
    }

    /// Creates a value from a most-significant-first limb sequence.
    ///
    /// Leading zero limbs are stripped, so `[0, 0, 7]` and `[7]` produce the
    /// same value and an all-zero sequence collapses to zero.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] if `limbs` is empty.
    pub fn from_limbs(limbs: &[Limb]) -> Result<Self> {
        if limbs.is_empty() {
            return Err(Error::InvalidInput("empty limb sequence"));
        }

        Ok(Self::from_buffer(limbs.to_vec()))
    }

    /// Same as [`BigUint::from_limbs`], reusing the given buffer.
    pub fn from_limb_vec(limbs: Vec<Limb>) -> Result<Self> {
        if limbs.is_empty() {
            return Err(Error::InvalidInput("empty limb sequence"));
        }

        Ok(Self::from_buffer(limbs))
    }

    /// Freezes a working buffer into a canonical value.
    ///
    /// Leading zero limbs are dropped, never below a single limb. An empty
    /// buffer becomes zero.
    pub(crate) fn from_buffer(mut limbs: Vec<Limb>) -> Self {
        if limbs.is_empty() {
            limbs.push(0);
        }

        let first = limbs
            .iter()
            .position(|&l| l != 0)
            .unwrap_or(limbs.len() - 1);

        if first > 0 {
            trace!(stripped = first, "normalized leading zero limbs");
            limbs.drain(..first);
        }

        let length = limbs.len();
        BigUint { limbs, length }
    }

    /// Returns `true` if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.length == 1 && self.limbs[0] == 0
    }

    /// Returns `true` if the value is one.
    #[inline]
    pub fn is_one(&self) -> bool {
        self.length == 1 && self.limbs[0] == 1
    }

    /// Number of limbs in use.
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    /// The limbs, most-significant first.
    #[inline]
    pub fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    /// Consumes the value and returns its limbs, most-significant first.
    pub fn into_limbs(self) -> Vec<Limb> {
        self.limbs
    }

    /// Counts the leading zero bits of the most-significant limb.
    ///
    /// Only the top limb is inspected. The true bit length of the value is
    /// available through [`BigUint::bits`].
    pub fn leading_zeros(&self) -> u32 {
        self.limbs[0].leading_zeros()
    }

    /// Counts the leading one bits of the most-significant limb.
    pub fn leading_ones(&self) -> u32 {
        self.limbs[0].leading_ones()
    }

    /// Number of significant bits. Zero has a bit length of zero.
    pub fn bits(&self) -> u64 {
        self.length as u64 * Limb::BITS as u64 - self.leading_zeros() as u64
    }

    /// Returns an independent copy of the value.
    pub fn deep_copy(&self) -> Self {
        self.clone()
    }

    /// Like [`BigUint::deep_copy`], but reports allocation failure.
    pub(crate) fn try_deep_copy(&self) -> Result<Self> {
        let mut limbs = try_limb_buffer(self.length)?;
        limbs.extend_from_slice(&self.limbs);

        Ok(BigUint {
            limbs,
            length: self.length,
        })
    }

    /// Full bit pattern of every limb, most-significant limb first.
    ///
    /// Each limb contributes exactly `Limb::BITS` characters, so the top
    /// limb's leading zeros are included.
    pub fn to_bit_string(&self) -> String {
        let width = Limb::BITS as usize;
        let mut out = String::with_capacity(self.length * width);

        for limb in self.limbs.iter() {
            out.push_str(&format!("{:0width$b}", limb, width = width));
        }

        out
    }

    pub(crate) fn is_canonical(&self) -> bool {
        self.length == self.limbs.len()
            && self.length >= 1
            && (self.length == 1 || self.limbs[0] != 0)
    }
}

impl Default for BigUint {
    fn default() -> Self {
        Self::zero()
    }
}

/// Canonical form makes a longer value strictly larger, so only values of
/// equal length need a limb-by-limb comparison.
impl Ord for BigUint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.length
            .cmp(&other.length)
            .then_with(|| self.limbs.cmp(&other.limbs))
    }
}

impl PartialOrd for BigUint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Debug for BigUint {
    /// Shows the limb count and the raw limb values.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BigUint")
            .field("length", &self.length)
            .field("limbs", &self.limbs)
            .finish()
    }
}

impl Display for BigUint {
    /// Formats the value as colon-separated hexadecimal limbs.
    ///
    /// Each limb is printed zero-padded in uppercase, separated by `:`.
    ///
    /// Example (64-bit limbs):
    /// `0000000000000001:0000000000000000`
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let width = (Limb::BITS / 4) as usize;

        for (i, limb) in self.limbs.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }

            write!(f, "{:0width$X}", limb, width = width)?;
        }

        Ok(())
    }
}
