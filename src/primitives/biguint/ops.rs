//! Operator traits for `BigUint`
//!
//! The operators are thin wrappers over `add_big`, `add_word`, `mul_big`
//! and `mul_word`. Operands are only borrowed: owned and borrowed forms are
//! accepted for convenience, and every operator returns a new value.

use crate::primitives::biguint::BigUint;
use crate::primitives::limb::Limb;

use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Mul, MulAssign};

/// Implements `$trait` for every owned/borrowed operand combination by
/// forwarding to the by-reference method `$method`.
macro_rules! forward_big_binop {
    ($trait:ident, $fn:ident, $method:ident) => {
        impl $trait<&BigUint> for &BigUint {
            type Output = BigUint;

            fn $fn(self, rhs: &BigUint) -> BigUint {
                self.$method(rhs)
            }
        }

        impl $trait<BigUint> for BigUint {
            type Output = BigUint;

            fn $fn(self, rhs: BigUint) -> BigUint {
                (&self).$method(&rhs)
            }
        }

        impl $trait<&BigUint> for BigUint {
            type Output = BigUint;

            fn $fn(self, rhs: &BigUint) -> BigUint {
                (&self).$method(rhs)
            }
        }

        impl $trait<BigUint> for &BigUint {
            type Output = BigUint;

            fn $fn(self, rhs: BigUint) -> BigUint {
                self.$method(&rhs)
            }
        }
    };
}

/// Same as `forward_big_binop!` for a single-limb right-hand side.
macro_rules! forward_word_binop {
    ($trait:ident, $fn:ident, $method:ident) => {
        impl $trait<Limb> for &BigUint {
            type Output = BigUint;

            fn $fn(self, rhs: Limb) -> BigUint {
                self.$method(rhs)
            }
        }

        impl $trait<Limb> for BigUint {
            type Output = BigUint;

            fn $fn(self, rhs: Limb) -> BigUint {
                (&self).$method(rhs)
            }
        }
    };
}

forward_big_binop!(Add, add, add_big);
forward_big_binop!(Mul, mul, mul_big);
forward_word_binop!(Add, add, add_word);
forward_word_binop!(Mul, mul, mul_word);

impl AddAssign<&BigUint> for BigUint {
    fn add_assign(&mut self, rhs: &BigUint) {
        *self = self.add_big(rhs);
    }
}

impl AddAssign<BigUint> for BigUint {
    fn add_assign(&mut self, rhs: BigUint) {
        *self = self.add_big(&rhs);
    }
}

impl AddAssign<Limb> for BigUint {
    fn add_assign(&mut self, rhs: Limb) {
        *self = self.add_word(rhs);
    }
}

impl MulAssign<&BigUint> for BigUint {
    fn mul_assign(&mut self, rhs: &BigUint) {
        *self = self.mul_big(rhs);
    }
}

impl MulAssign<BigUint> for BigUint {
    fn mul_assign(&mut self, rhs: BigUint) {
        *self = self.mul_big(&rhs);
    }
}

impl MulAssign<Limb> for BigUint {
    fn mul_assign(&mut self, rhs: Limb) {
        *self = self.mul_word(rhs);
    }
}

impl Sum for BigUint {
    fn sum<I: Iterator<Item = BigUint>>(iter: I) -> Self {
        iter.fold(BigUint::zero(), |acc, x| acc.add_big(&x))
    }
}

impl<'a> Sum<&'a BigUint> for BigUint {
    fn sum<I: Iterator<Item = &'a BigUint>>(iter: I) -> Self {
        iter.fold(BigUint::zero(), |acc, x| acc.add_big(x))
    }
}

impl Product for BigUint {
    fn product<I: Iterator<Item = BigUint>>(iter: I) -> Self {
        iter.fold(BigUint::one(), |acc, x| acc.mul_big(&x))
    }
}

impl<'a> Product<&'a BigUint> for BigUint {
    fn product<I: Iterator<Item = &'a BigUint>>(iter: I) -> Self {
        iter.fold(BigUint::one(), |acc, x| acc.mul_big(x))
    }
}
