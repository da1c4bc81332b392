//! Addition for `BigUint`
//!
//! Limbs are processed from least-significant to most-significant with a
//! single-bit carry. The result buffer is sized one limb wider than the
//! longer operand so a carry out of the top limb always has room; the
//! spare limb is dropped again when it stays zero.

use crate::error::Result;
use crate::primitives::biguint::BigUint;
use crate::primitives::limb::{Limb, try_limb_buffer};

use tracing::trace;

/// Orders two operands as `(augend, addend)`, longer first.
fn by_length<'a>(a: &'a BigUint, b: &'a BigUint) -> (&'a BigUint, &'a BigUint) {
    if a.length >= b.length { (a, b) } else { (b, a) }
}

/// Adds `short` into `long` using `out` as the result buffer.
///
/// `out` must be empty; it is grown to `long.len() + 1` limbs. Both slices
/// are most-significant first and `long.len() >= short.len()`.
pub(crate) fn add_limbs(long: &[Limb], short: &[Limb], mut out: Vec<Limb>) -> BigUint {
    debug_assert!(long.len() >= short.len());
    debug_assert!(out.is_empty());

    out.resize(long.len() + 1, 0);

    // Index in `long` of the most-significant limb shared with `short`.
    let offset = long.len() - short.len();
    let mut carry = false;

    for i in (0..long.len()).rev() {
        let slot = i + 1;

        if i >= offset {
            let (sum, first) = long[i].overflowing_add(short[i - offset]);
            let (sum, second) = sum.overflowing_add(carry as Limb);

            out[slot] = sum;
            // At most one of the two can overflow.
            carry = first | second;
        } else if carry {
            let (sum, overflow) = long[i].overflowing_add(1);

            out[slot] = sum;
            carry = overflow;
        } else {
            out[1..=slot].copy_from_slice(&long[..=i]);
            break;
        }
    }

    if carry {
        out[0] = 1;
    } else {
        out.remove(0);
    }

    let sum = BigUint::from_buffer(out);
    debug_assert!(sum.is_canonical());

    sum
}

impl BigUint {
    /// Adds a single limb.
    pub fn add_word(&self, w: Limb) -> BigUint {
        if w == 0 {
            return self.clone();
        }

        trace!(len = self.length, "add word");
        add_limbs(&self.limbs, &[w], Vec::with_capacity(self.length + 1))
    }

    /// Adds another big integer.
    ///
    /// The result has `max(len)` limbs, or one more when the sum carries
    /// out of the top limb.
    pub fn add_big(&self, rhs: &BigUint) -> BigUint {
        let (long, short) = by_length(self, rhs);

        if short.is_zero() {
            return long.clone();
        }

        trace!(lhs = long.length, rhs = short.length, "add");
        add_limbs(
            &long.limbs,
            &short.limbs,
            Vec::with_capacity(long.length + 1),
        )
    }

    /// Same as [`BigUint::add_word`], reporting allocation failure.
    pub fn try_add_word(&self, w: Limb) -> Result<BigUint> {
        if w == 0 {
            return self.try_deep_copy();
        }

        let out = try_limb_buffer(self.length + 1)?;
        Ok(add_limbs(&self.limbs, &[w], out))
    }

    /// Same as [`BigUint::add_big`], reporting allocation failure.
    pub fn try_add_big(&self, rhs: &BigUint) -> Result<BigUint> {
        let (long, short) = by_length(self, rhs);

        if short.is_zero() {
            return long.try_deep_copy();
        }

        let out = try_limb_buffer(long.length + 1)?;
        Ok(add_limbs(&long.limbs, &short.limbs, out))
    }
}
