/*
    Exact rational numbers
*/

use std::cmp::Ordering;
use std::fmt;

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::ieee754::Ieee754;
use crate::{Error, Result};

mod arithmetic;
mod round;

pub use round::*;

/// Largest bit length `checked_multiply_two_power` will produce.
pub const MAX_SCALED_BITS: u64 = 1 << 32;

/// An arbitrary-precision rational number.
///
/// Always kept in lowest terms with a positive denominator,
/// so zero is `0/1` and structural equality is numeric equality.
/// Every finite binary32 or binary64 value is exactly representable
/// (as a dyadic fraction), which makes `Rational` the exact intermediate
/// for arithmetic on floating-point inputs.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    num: BigInt,
    den: BigInt,
}

// Constructors and getters
impl Rational {
    /// Creates the rational `num / den` in lowest terms.
    /// Fails if `den` is zero.
    pub fn new(num: impl Into<BigInt>, den: impl Into<BigInt>) -> Result<Self> {
        let den = den.into();
        if den.is_zero() {
            log::debug!("rational constructed with a zero denominator");
            return Err(Error::DivideByZero);
        }
        Ok(Self::reduced(num.into(), den))
    }

    // Normalizes sign and common factors. Requires `den != 0`.
    pub(crate) fn reduced(mut num: BigInt, mut den: BigInt) -> Self {
        if den.is_negative() {
            num = -num;
            den = -den;
        }
        let g = num.gcd(&den);
        if !g.is_one() {
            num /= &g;
            den /= &g;
        }
        Self { num, den }
    }

    /// Creates the integer `n` as a rational.
    pub fn from_integer(n: impl Into<BigInt>) -> Self {
        Self {
            num: n.into(),
            den: BigInt::one(),
        }
    }

    /// Returns the rational zero.
    pub fn zero() -> Self {
        Self::from_integer(0)
    }

    /// Returns the rational one.
    pub fn one() -> Self {
        Self::from_integer(1)
    }

    /// Creates the exact value of a finite floating-point number.
    /// Both zeros map to `0`.
    /// Fails with a domain error for infinities and NaN.
    pub fn from_float<F: Ieee754>(x: F) -> Result<Self> {
        let (s, exp, c) = match x.decode() {
            Some(v) => v,
            None => {
                log::debug!("no exact rational for non-finite {:?}", x);
                return Err(Error::Domain("non-finite value has no exact rational"));
            }
        };

        let sign = if s { Sign::Minus } else { Sign::Plus };
        let c = BigInt::from_biguint(sign, c.into());
        Ok(Self::from_integer(c).multiply_two_power(exp))
    }

    /// Returns the numerator, carrying the sign.
    pub fn numerator(&self) -> &BigInt {
        &self.num
    }

    /// Returns the (positive) denominator.
    pub fn denominator(&self) -> &BigInt {
        &self.den
    }

    /// Returns -1, 0, or 1 according to the sign of this value.
    pub fn signum(&self) -> i32 {
        match self.num.sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        }
    }

    /// Returns true if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    /// Returns true if this value is negative.
    pub fn is_negative(&self) -> bool {
        self.num.is_negative()
    }

    /// Returns true if this value is an integer.
    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }
}

// Exact operations that only touch exponents
impl Rational {
    /// Returns `self * 2^k`.
    ///
    /// Factors of two are moved between numerator and denominator
    /// by shifting only, so the result stays in lowest terms.
    ///
    /// Panics if the result is too large to represent,
    /// see `checked_multiply_two_power`.
    pub fn multiply_two_power(&self, k: i64) -> Self {
        match self.checked_multiply_two_power(k) {
            Ok(v) => v,
            Err(e) => panic!("cannot scale by 2^{}: {}", k, e),
        }
    }

    /// Returns `self * 2^k`.
    /// Fails if the numerator or denominator of the result would
    /// need more than `MAX_SCALED_BITS` bits.
    pub fn checked_multiply_two_power(&self, k: i64) -> Result<Self> {
        if k == 0 || self.is_zero() {
            return Ok(self.clone());
        }

        // `grow` is shifted left, `shrink` gives up its trailing zeros
        let k_abs = k.unsigned_abs();
        let (grow, shrink) = if k > 0 {
            (&self.num, &self.den)
        } else {
            (&self.den, &self.num)
        };
        let cancel = u64::min(shrink.trailing_zeros().unwrap_or(0), k_abs);
        let shift = k_abs - cancel;
        if grow.bits() + shift > MAX_SCALED_BITS {
            log::debug!("scaling by 2^{} needs more than {} bits", k, MAX_SCALED_BITS);
            return Err(Error::Overflow(k));
        }

        let grown = grow << shift;
        let shrunk = shrink >> cancel;
        Ok(if k > 0 {
            Self {
                num: grown,
                den: shrunk,
            }
        } else {
            Self {
                num: shrunk,
                den: grown,
            }
        })
    }

    /// Returns the largest integer not greater than this value.
    pub fn floor(&self) -> BigInt {
        self.num.div_floor(&self.den)
    }

    /// Returns the tightest integers `(lo, hi)` with
    /// `2^lo <= |self| <= 2^hi`. The bounds coincide exactly
    /// when `|self|` is a power of two.
    /// Fails with a domain error for zero.
    pub fn log2_interval(&self) -> Result<(i64, i64)> {
        if self.is_zero() {
            log::debug!("log2_interval called on zero");
            return Err(Error::Domain("log2 of zero"));
        }

        let lo = self.log2_floor();
        let num = self.num.magnitude();
        let den = self.den.magnitude();
        // in lowest terms a power of two has a power of two on both sides
        let exact = num.count_ones() == 1 && den.count_ones() == 1;
        Ok(if exact { (lo, lo) } else { (lo, lo + 1) })
    }

    // Returns floor(log2(|self|)). Requires a nonzero value.
    pub(crate) fn log2_floor(&self) -> i64 {
        let num = self.num.magnitude();
        let den = self.den.magnitude();

        // 2^(k-1) < |self| < 2^(k+1)
        let k = num.bits() as i64 - den.bits() as i64;
        let at_least = if k >= 0 {
            *num >= den << (k as u64)
        } else {
            num << (k.unsigned_abs()) >= *den
        };
        if at_least {
            k
        } else {
            k - 1
        }
    }
}

// Conversions with the default rounding
impl Rational {
    /// Returns the binary64 value nearest to this value, ties to even.
    pub fn to_f64(&self) -> f64 {
        self.round_to(crate::RoundingMode::NearestEven)
    }

    /// Returns the binary32 value nearest to this value, ties to even.
    pub fn to_f32(&self) -> f32 {
        self.round_to(crate::RoundingMode::NearestEven)
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // denominators are positive
        (&self.num * &other.den).cmp(&(&other.num * &self.den))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den.is_one() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Rational {
                fn from(n: $t) -> Self {
                    Self::from_integer(n)
                }
            }
        )*
    };
}

impl_from_integer!(i32, i64, u32, u64, BigInt);

impl TryFrom<f64> for Rational {
    type Error = Error;

    fn try_from(x: f64) -> Result<Self> {
        Self::from_float(x)
    }
}

impl TryFrom<f32> for Rational {
    type Error = Error;

    fn try_from(x: f32) -> Result<Self> {
        Self::from_float(x)
    }
}
