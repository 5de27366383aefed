/*
    Arithmetic
*/

use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Signed};

use super::Rational;
use crate::{Error, Result};

impl Rational {
    /// Returns the absolute value.
    pub fn abs(&self) -> Self {
        Self {
            num: self.num.abs(),
            den: self.den.clone(),
        }
    }

    /// Returns `1 / self`.
    /// Fails if this value is zero.
    pub fn inverse(&self) -> Result<Self> {
        if self.is_zero() {
            log::debug!("inverse of zero");
            return Err(Error::DivideByZero);
        }

        // already coprime, only the sign moves
        let (num, den) = if self.num.is_negative() {
            (-&self.den, -&self.num)
        } else {
            (self.den.clone(), self.num.clone())
        };
        Ok(Self { num, den })
    }

    /// Returns `self^k`.
    ///
    /// `k = 0` gives one for every base, zero included.
    /// Negative powers are powers of the inverse and fail on zero.
    pub fn power(&self, k: i32) -> Result<Self> {
        if k == 0 {
            return Ok(Self::one());
        }

        let base = if k < 0 { self.inverse()? } else { self.clone() };
        let e = k.unsigned_abs();
        Ok(Self {
            num: base.num.pow(e),
            den: base.den.pow(e),
        })
    }

    /// Returns `self / other`.
    /// Fails if `other` is zero.
    pub fn checked_div(&self, other: &Self) -> Result<Self> {
        Ok(self * &other.inverse()?)
    }
}

impl<'a, 'b> Add<&'b Rational> for &'a Rational {
    type Output = Rational;

    fn add(self, other: &'b Rational) -> Rational {
        if self.den == other.den {
            Rational::reduced(&self.num + &other.num, self.den.clone())
        } else {
            let num = &self.num * &other.den + &other.num * &self.den;
            Rational::reduced(num, &self.den * &other.den)
        }
    }
}

impl<'a, 'b> Sub<&'b Rational> for &'a Rational {
    type Output = Rational;

    fn sub(self, other: &'b Rational) -> Rational {
        self + &(-other)
    }
}

impl<'a, 'b> Mul<&'b Rational> for &'a Rational {
    type Output = Rational;

    fn mul(self, other: &'b Rational) -> Rational {
        if self.is_zero() || other.is_zero() {
            return Rational::zero();
        }
        if self.den.is_one() && other.den.is_one() {
            return Rational::from_integer(&self.num * &other.num);
        }
        Rational::reduced(&self.num * &other.num, &self.den * &other.den)
    }
}

impl<'a> Neg for &'a Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            num: -&self.num,
            den: self.den.clone(),
        }
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            num: -self.num,
            den: self.den,
        }
    }
}

// Forwards owned and mixed operands to the borrowed implementations
macro_rules! forward_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<Rational> for Rational {
            type Output = Rational;

            fn $method(self, other: Rational) -> Rational {
                (&self).$method(&other)
            }
        }

        impl<'a> $imp<&'a Rational> for Rational {
            type Output = Rational;

            fn $method(self, other: &'a Rational) -> Rational {
                (&self).$method(other)
            }
        }

        impl<'a> $imp<Rational> for &'a Rational {
            type Output = Rational;

            fn $method(self, other: Rational) -> Rational {
                self.$method(&other)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);

impl std::iter::Sum for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Rational::zero(), |acc, x| &acc + &x)
    }
}
