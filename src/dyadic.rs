/*
    Compact exact decomposition of binary64 values
*/

use std::cmp::Ordering;

use crate::ieee754::{pow2, Ieee754};
use crate::{Error, Rational, Result};

/// Exponent stored alongside a zero mantissa.
pub const ZERO_EXPONENT: i32 = 0;

/// A dyadic number `mantissa * 2^exponent` with an odd mantissa.
///
/// Every finite binary64 value has exactly one such decomposition,
/// so this is an exact and much lighter alternative to `Rational`
/// when only ordering and reconstruction are needed.
/// Zero is stored with `ZERO_EXPONENT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dyadic {
    mantissa: i64,
    exponent: i32,
}

impl Dyadic {
    /// Creates `mantissa * 2^exponent` normalized to an odd mantissa.
    ///
    /// Trailing zero bits of the mantissa are shifted into the exponent.
    /// Fails if the normalized exponent does not fit in an `i32`.
    pub fn new(mantissa: i64, exponent: i32) -> Result<Self> {
        if mantissa == 0 {
            return Ok(Self::zero());
        }

        let tz = mantissa.trailing_zeros();
        let exp = exponent as i64 + tz as i64;
        let exponent = match i32::try_from(exp) {
            Ok(e) => e,
            Err(_) => {
                log::debug!("make-odd of {} * 2^{} overflows", mantissa, exponent);
                return Err(Error::Overflow(exp));
            }
        };

        Ok(Self {
            mantissa: mantissa >> tz,
            exponent,
        })
    }

    /// Returns the decomposition of zero.
    pub fn zero() -> Self {
        Self {
            mantissa: 0,
            exponent: ZERO_EXPONENT,
        }
    }

    /// Decomposes a finite binary64 value.
    /// Both zeros map to `Dyadic::zero()`.
    /// Fails with a domain error for infinities and NaN.
    pub fn from_f64(x: f64) -> Result<Self> {
        let (s, exp, c) = match x.decode() {
            Some(v) => v,
            None => {
                log::debug!("no dyadic decomposition for non-finite {}", x);
                return Err(Error::Domain("non-finite value has no decomposition"));
            }
        };

        // `c` has at most 53 bits and `exp` is within [-1074, 971]
        let m = if s { -(c as i64) } else { c as i64 };
        Self::new(m, exp as i32)
    }

    /// Returns the odd mantissa, or 0.
    pub fn mantissa(&self) -> i64 {
        self.mantissa
    }

    /// Returns the exponent.
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Returns true if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.mantissa == 0
    }

    /// Returns -1, 0, or 1 according to the sign of this value.
    pub fn signum(&self) -> i32 {
        self.mantissa.signum() as i32
    }

    /// Reconstructs the binary64 value.
    ///
    /// Exact for the decomposition of any finite binary64 value.
    /// Other values are rounded to nearest, ties to even.
    pub fn to_f64(&self) -> f64 {
        if self.mantissa == 0 {
            return 0.0;
        }

        // |self| lies in [2^(top - 1), 2^top)
        let width = self.bit_length();
        let exp = self.exponent as i64;
        let top = exp + width;
        let s = self.mantissa < 0;
        if top > f64::EMAX + 1 {
            return f64::infinity(s);
        }
        if top < f64::EXPMIN - 1 {
            // below half the smallest subnormal
            return f64::zero(s);
        }

        if width <= f64::PREC as i64 && exp >= f64::EXPMIN {
            // representable, so both the conversion and the scaling are exact
            self.mantissa as f64 * pow2(self.exponent)
        } else {
            Rational::from(*self).to_f64()
        }
    }

    // Number of significant bits of |mantissa|.
    fn bit_length(&self) -> i64 {
        64 - self.mantissa.unsigned_abs().leading_zeros() as i64
    }

    // Compares |self| and |other|. Both must be nonzero.
    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        let top = self.exponent as i64 + self.bit_length();
        let other_top = other.exponent as i64 + other.bit_length();
        top.cmp(&other_top).then_with(|| {
            // same leading bit position, so the exponents differ by less than 64
            let x = self.mantissa.unsigned_abs() as u128;
            let y = other.mantissa.unsigned_abs() as u128;
            let shift = self.exponent as i64 - other.exponent as i64;
            if shift >= 0 {
                (x << shift).cmp(&y)
            } else {
                x.cmp(&(y << -shift))
            }
        })
    }
}

impl Default for Dyadic {
    fn default() -> Self {
        Self::zero()
    }
}

impl Ord for Dyadic {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.signum(), other.signum());
        if a != b || a == 0 {
            return a.cmp(&b);
        }

        let magnitude = self.cmp_magnitude(other);
        if a > 0 {
            magnitude
        } else {
            magnitude.reverse()
        }
    }
}

impl PartialOrd for Dyadic {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl TryFrom<f64> for Dyadic {
    type Error = Error;

    fn try_from(x: f64) -> Result<Self> {
        Self::from_f64(x)
    }
}

impl TryFrom<f32> for Dyadic {
    type Error = Error;

    fn try_from(x: f32) -> Result<Self> {
        Self::from_f64(x as f64)
    }
}

impl From<Dyadic> for Rational {
    fn from(d: Dyadic) -> Self {
        Rational::from(d.mantissa).multiply_two_power(d.exponent as i64)
    }
}
