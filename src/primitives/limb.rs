//! Limb primitive
//!
//! A limb is one fixed-width unsigned machine word used as a base-2^W digit
//! of a `BigUint`. The width is chosen at compile time: `u64` by default,
//! `u32` with the `limb32` feature. Every algorithm in this crate is written
//! against `Limb::BITS` and `HALF_BITS` so both widths behave identically.

use crate::error::{Error, Result};

use tracing::warn;

/// A single base-2^W digit.
#[cfg(not(feature = "limb32"))]
pub type Limb = u64;

/// A single base-2^W digit.
#[cfg(feature = "limb32")]
pub type Limb = u32;

/// Width of one half of a limb, in bits.
pub const HALF_BITS: u32 = Limb::BITS / 2;

/// Number of bytes in one limb.
pub(crate) const LIMB_BYTES: usize = (Limb::BITS / 8) as usize;

const LOWER_MASK: Limb = Limb::MAX >> HALF_BITS;

/// Splits a limb into its `(upper, lower)` halves.
///
/// Both halves are right-aligned, so any product of two halves fits in a
/// single limb.
#[inline]
pub(crate) const fn split(w: Limb) -> (Limb, Limb) {
    (w >> HALF_BITS, w & LOWER_MASK)
}

/// Full-width product of two limbs as `(high, low)`.
///
/// The four half-word partial products never overflow a limb. The two
/// cross terms are shifted into the low limb with checked additions, and
/// each of the two overflow flags contributes one unit to the high limb.
#[inline]
pub(crate) fn mul_wide(a: Limb, b: Limb) -> (Limb, Limb) {
    let (upper_a, lower_a) = split(a);
    let (upper_b, lower_b) = split(b);

    let ll = lower_a * lower_b;
    let ul = upper_a * lower_b;
    let lu = lower_a * upper_b;
    let uu = upper_a * upper_b;

    let (low, first) = ll.overflowing_add(ul << HALF_BITS);
    let (low, second) = low.overflowing_add(lu << HALF_BITS);

    // Bounded by (2^W - 1)^2 >> W, so this cannot wrap.
    let high = uu + (ul >> HALF_BITS) + (lu >> HALF_BITS) + first as Limb + second as Limb;

    (high, low)
}

/// Reserves an empty limb buffer able to hold exactly `limbs` limbs,
/// reporting allocation failure instead of aborting.
pub(crate) fn try_limb_buffer(limbs: usize) -> Result<Vec<Limb>> {
    let mut buf = Vec::new();

    if buf.try_reserve_exact(limbs).is_err() {
        warn!(limbs, "limb buffer allocation refused");
        return Err(Error::ResourceExhaustion { limbs });
    }

    Ok(buf)
}
