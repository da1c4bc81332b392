//! Multiplication for `BigUint`
//!
//! Limb products are formed from half-word partial products (see
//! `limb::mul_wide`) so that no single multiply can overflow a limb. The
//! full product accumulates every limb pair into a zeroed buffer of
//! `len_a + len_b` limbs; each addition is checked, and the carry it
//! produces is propagated further left, where adding the carry can
//! overflow again.

use crate::error::Result;
use crate::primitives::biguint::BigUint;
use crate::primitives::limb::{Limb, mul_wide, try_limb_buffer};

use tracing::{trace, trace_span};

/// Pending carry units for one limb position.
///
/// A position can receive an overflow from the partial product and another
/// from the carry folded in after it, so this counts units rather than
/// holding a flag.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct CarryAccumulator {
    units: u8,
}

impl CarryAccumulator {
    #[inline]
    fn absorb(&mut self, overflow: bool) {
        self.units += overflow as u8;
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.units == 0
    }

    #[inline]
    fn take(&mut self) -> Limb {
        let units = self.units as Limb;
        self.units = 0;
        units
    }
}

/// Adds `high:low` into `out` at positions `pos - 1` and `pos`, then
/// ripples any carry toward the most-significant end.
fn accumulate(out: &mut [Limb], pos: usize, high: Limb, low: Limb) {
    let mut carry = CarryAccumulator::default();

    let (sum, overflow) = out[pos].overflowing_add(low);
    out[pos] = sum;
    carry.absorb(overflow);

    let mut pos = pos - 1;

    let (sum, overflow) = out[pos].overflowing_add(high);
    let (sum, carry_of_carry) = sum.overflowing_add(carry.take());
    out[pos] = sum;
    carry.absorb(overflow);
    carry.absorb(carry_of_carry);

    while !carry.is_empty() {
        // The running total never exceeds the final product, which fits.
        debug_assert!(pos > 0, "carry escaped the product buffer");
        pos -= 1;

        let (sum, overflow) = out[pos].overflowing_add(carry.take());
        out[pos] = sum;
        carry.absorb(overflow);
    }
}

/// Full product of two most-significant-first limb slices into `out`.
///
/// `out` must be empty; it is grown to `long.len() + short.len()` zero
/// limbs. The product of `long[i]` and `short[j]` lands in positions `i + j`
/// and `i + j + 1`.
pub(crate) fn mul_limbs(long: &[Limb], short: &[Limb], mut out: Vec<Limb>) -> BigUint {
    debug_assert!(out.is_empty());

    out.resize(long.len() + short.len(), 0);

    for (i, &a) in long.iter().enumerate() {
        if a == 0 {
            continue;
        }

        for (j, &b) in short.iter().enumerate() {
            let (high, low) = mul_wide(a, b);
            accumulate(&mut out, i + j + 1, high, low);
        }
    }

    let product = BigUint::from_buffer(out);
    debug_assert!(product.is_canonical());

    product
}

/// Scales a most-significant-first limb slice by one limb into `out`.
///
/// `out` must be empty; it is grown to `limbs.len() + 1` limbs.
pub(crate) fn mul_word_limbs(limbs: &[Limb], w: Limb, mut out: Vec<Limb>) -> BigUint {
    debug_assert!(out.is_empty());

    out.resize(limbs.len() + 1, 0);

    let mut carry: Limb = 0;

    for (i, &a) in limbs.iter().enumerate().rev() {
        let (high, low) = mul_wide(a, w);
        let (low, overflow) = low.overflowing_add(carry);

        out[i + 1] = low;
        // `high` is at most 2^W - 2, so folding in one unit cannot wrap.
        carry = high + overflow as Limb;
    }

    out[0] = carry;

    let product = BigUint::from_buffer(out);
    debug_assert!(product.is_canonical());

    product
}

/// Orders two factors, longer first.
fn by_length<'a>(a: &'a BigUint, b: &'a BigUint) -> (&'a BigUint, &'a BigUint) {
    if a.length >= b.length { (a, b) } else { (b, a) }
}

impl BigUint {
    /// Multiplies by a single limb.
    pub fn mul_word(&self, w: Limb) -> BigUint {
        if w == 0 || self.is_zero() {
            return BigUint::zero();
        }
        if w == 1 {
            return self.clone();
        }

        trace!(len = self.length, "mul word");
        mul_word_limbs(&self.limbs, w, Vec::with_capacity(self.length + 1))
    }

    /// Multiplies by another big integer.
    ///
    /// The result has `len_a + len_b` limbs, or one fewer when the top limb
    /// of the product is zero.
    pub fn mul_big(&self, rhs: &BigUint) -> BigUint {
        let (long, short) = by_length(self, rhs);

        if short.is_zero() || long.is_zero() {
            return BigUint::zero();
        }
        if short.is_one() {
            return long.clone();
        }
        if long.is_one() {
            return short.clone();
        }

        let _span = trace_span!("mul", lhs = long.length, rhs = short.length).entered();
        mul_limbs(
            &long.limbs,
            &short.limbs,
            Vec::with_capacity(long.length + short.length),
        )
    }

    /// Same as [`BigUint::mul_word`], reporting allocation failure.
    pub fn try_mul_word(&self, w: Limb) -> Result<BigUint> {
        if w == 0 || self.is_zero() {
            return Ok(BigUint::zero());
        }
        if w == 1 {
            return self.try_deep_copy();
        }

        let out = try_limb_buffer(self.length + 1)?;
        Ok(mul_word_limbs(&self.limbs, w, out))
    }

    /// Same as [`BigUint::mul_big`], reporting allocation failure.
    pub fn try_mul_big(&self, rhs: &BigUint) -> Result<BigUint> {
        let (long, short) = by_length(self, rhs);

        if short.is_zero() || long.is_zero() {
            return Ok(BigUint::zero());
        }
        if short.is_one() {
            return long.try_deep_copy();
        }
        if long.is_one() {
            return short.try_deep_copy();
        }

        let out = try_limb_buffer(long.length + short.length)?;
        Ok(mul_limbs(&long.limbs, &short.limbs, out))
    }
}
