//! Conversions between `BigUint` and raw limb sequences
//!
//! Limb sequences are always most-significant limb first.

use crate::error::Error;
use crate::primitives::biguint::BigUint;
use crate::primitives::limb::Limb;

/// Normalizes an owned limb sequence.
///
/// Fails with [`Error::InvalidInput`] if the sequence is empty.
impl TryFrom<Vec<Limb>> for BigUint {
    type Error = Error;

    fn try_from(value: Vec<Limb>) -> Result<Self, Self::Error> {
        BigUint::from_limb_vec(value)
    }
}

/// Normalizes a borrowed limb sequence.
///
/// Fails with [`Error::InvalidInput`] if the sequence is empty.
impl TryFrom<&[Limb]> for BigUint {
    type Error = Error;

    fn try_from(value: &[Limb]) -> Result<Self, Self::Error> {
        BigUint::from_limbs(value)
    }
}

impl From<BigUint> for Vec<Limb> {
    fn from(value: BigUint) -> Self {
        value.into_limbs()
    }
}

impl AsRef<[Limb]> for BigUint {
    fn as_ref(&self) -> &[Limb] {
        self.limbs()
    }
}
