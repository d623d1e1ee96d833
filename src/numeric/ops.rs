// ============================================================================
// Operator Implementations
// Arithmetic operator traits for owned and borrowed BigInt operands
// ============================================================================
//
// The `*Assign<&BigInt>` impls hold the logic; every other combination
// forwards to them. `/` and `%` use flooring semantics and, like primitive
// integers, panic on a zero divisor (use `checked_*` to handle that case).

use super::big_int::BigInt;
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

impl AddAssign<&BigInt> for BigInt {
    #[inline]
    fn add_assign(&mut self, rhs: &BigInt) {
        self.add_signed(rhs.is_negative(), rhs.limbs());
    }
}

impl SubAssign<&BigInt> for BigInt {
    #[inline]
    fn sub_assign(&mut self, rhs: &BigInt) {
        self.add_signed(!rhs.is_negative(), rhs.limbs());
    }
}

impl MulAssign<&BigInt> for BigInt {
    #[inline]
    fn mul_assign(&mut self, rhs: &BigInt) {
        self.mul_by(rhs);
    }
}

impl DivAssign<&BigInt> for BigInt {
    fn div_assign(&mut self, rhs: &BigInt) {
        *self = self
            .checked_div_floor(rhs)
            .expect("attempt to divide by zero");
    }
}

impl RemAssign<&BigInt> for BigInt {
    fn rem_assign(&mut self, rhs: &BigInt) {
        *self = self
            .checked_rem_floor(rhs)
            .expect("attempt to calculate the remainder with a divisor of zero");
    }
}

macro_rules! forward_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl $OpAssign<BigInt> for BigInt {
            #[inline]
            fn $op_assign(&mut self, rhs: BigInt) {
                self.$op_assign(&rhs);
            }
        }

        impl $Op<&BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $op(mut self, rhs: &BigInt) -> BigInt {
                self.$op_assign(rhs);
                self
            }
        }

        impl $Op<BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $op(mut self, rhs: BigInt) -> BigInt {
                self.$op_assign(&rhs);
                self
            }
        }

        impl $Op<&BigInt> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $op(self, rhs: &BigInt) -> BigInt {
                let mut out = self.clone();
                out.$op_assign(rhs);
                out
            }
        }

        impl $Op<BigInt> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $op(self, rhs: BigInt) -> BigInt {
                self.$op(&rhs)
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign);
forward_binop!(Sub, sub, SubAssign, sub_assign);
forward_binop!(Mul, mul, MulAssign, mul_assign);
forward_binop!(Div, div, DivAssign, div_assign);
forward_binop!(Rem, rem, RemAssign, rem_assign);

impl Neg for BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(mut self) -> BigInt {
        self.negate();
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        -self.clone()
    }
}

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, x| acc + x)
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::one(), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a BigInt> for BigInt {
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::one(), |acc, x| acc * x)
    }
}
