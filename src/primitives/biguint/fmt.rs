//! Radix formatting for `BigUint`
//!
//! Hexadecimal and binary output without leading zeros. The `#` flag adds
//! the usual `0x` / `0b` prefix.

use crate::primitives::biguint::BigUint;
use crate::primitives::limb::Limb;

use std::fmt::{self, Binary, Formatter, LowerHex, UpperHex};

macro_rules! impl_radix {
    ($trait:ident, $prefix:literal, $digit_bits:literal, $head:literal, $tail:literal) => {
        impl $trait for BigUint {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                let width = (Limb::BITS / $digit_bits) as usize;

                if f.alternate() {
                    f.write_str($prefix)?;
                }

                write!(f, $head, self.limbs[0])?;

                for limb in self.limbs[1..].iter() {
                    write!(f, $tail, limb, width = width)?;
                }

                Ok(())
            }
        }
    };
}

impl_radix!(LowerHex, "0x", 4, "{:x}", "{:0width$x}");
impl_radix!(UpperHex, "0x", 4, "{:X}", "{:0width$X}");
impl_radix!(Binary, "0b", 1, "{:b}", "{:0width$b}");
