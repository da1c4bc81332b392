//! Conversions between `BigUint` and big-endian byte strings

use crate::error::{Error, Result};
use crate::primitives::biguint::BigUint;
use crate::primitives::limb::{LIMB_BYTES, Limb};

/// Packs big-endian bytes into most-significant-first limbs.
///
/// The input is implicitly left-padded with zeros to a whole number of
/// limbs. An empty input yields no limbs.
pub(crate) fn pack_be_bytes(bytes: &[u8]) -> Vec<Limb> {
    let head = bytes.len() % LIMB_BYTES;
    let mut limbs = Vec::with_capacity(bytes.len().div_ceil(LIMB_BYTES));

    if head > 0 {
        limbs.push(fold_be(&bytes[..head]));
    }

    limbs.extend(bytes[head..].chunks_exact(LIMB_BYTES).map(fold_be));
    limbs
}

#[inline]
fn fold_be(chunk: &[u8]) -> Limb {
    chunk.iter().fold(0, |acc, &b| (acc << 8) | b as Limb)
}

impl BigUint {
    /// Creates a value from big-endian bytes.
    ///
    /// Leading zero bytes are accepted and ignored.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] if `bytes` is empty.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::InvalidInput("empty byte string"));
        }

        Ok(BigUint::from_buffer(pack_be_bytes(bytes)))
    }

    /// Minimal big-endian encoding. Zero encodes as a single `0x00` byte.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut out: Vec<u8> = self.limbs.iter().flat_map(|l| l.to_be_bytes()).collect();

        let first = out
            .iter()
            .position(|&b| b != 0)
            .unwrap_or(out.len() - 1);
        out.drain(..first);

        out
    }
}
