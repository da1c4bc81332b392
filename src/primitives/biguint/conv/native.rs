//! Conversions between `BigUint` and native unsigned integers
//!
//! Widening into `BigUint` always succeeds. Narrowing back succeeds only
//! when the value's bit length fits the target type.

use crate::error::Error;
use crate::primitives::biguint::BigUint;
use crate::primitives::biguint::conv::bytes::pack_be_bytes;
use crate::primitives::limb::Limb;

macro_rules! impl_native {
    ($($t:ty),* $(,)?) => {
        $(
            /// Places the value in the least significant limbs.
            impl From<$t> for BigUint {
                fn from(value: $t) -> Self {
                    BigUint::from_buffer(pack_be_bytes(&value.to_be_bytes()))
                }
            }

            /// Fails with [`Error::Overflow`] if the value has more
            /// significant bits than the target type.
            impl TryFrom<&BigUint> for $t {
                type Error = Error;

                fn try_from(value: &BigUint) -> Result<Self, Self::Error> {
                    if value.bits() > <$t>::BITS as u64 {
                        return Err(Error::Overflow { bits: <$t>::BITS });
                    }

                    // At most 128 significant bits remain.
                    let wide = value
                        .limbs
                        .iter()
                        .fold(0u128, |acc, &l| (acc << Limb::BITS) | l as u128);

                    Ok(wide as $t)
                }
            }

            impl TryFrom<BigUint> for $t {
                type Error = Error;

                fn try_from(value: BigUint) -> Result<Self, Self::Error> {
                    <$t>::try_from(&value)
                }
            }
        )*
    };
}

impl_native!(u8, u16, u32, u64, u128, usize);
