//! Extreme representable values of binary32 and binary64.
//!
//! These are fixed reference points: boundaries between the subnormal
//! and normal ranges and the thresholds at which a narrowing conversion
//! under round-to-nearest-even stops being finite or non-zero.

use lazy_static::lazy_static;
use num_bigint::BigInt;

use crate::Rational;

/// Smallest positive subnormal binary32 value, `2^-149`.
pub const F32_MIN_SUBNORMAL: f32 = f32::MIN_POSITIVE / 8388608.0;

/// Largest subnormal binary32 value, `2^-126 - 2^-149`.
pub const F32_MAX_SUBNORMAL: f32 = f32::MIN_POSITIVE - F32_MIN_SUBNORMAL;

/// Smallest positive normal binary32 value, `2^-126`.
pub const F32_MIN_NORMAL: f32 = f32::MIN_POSITIVE;

/// Largest finite binary32 value, `2^128 - 2^104`.
pub const F32_MAX: f32 = f32::MAX;

/// Smallest positive subnormal binary64 value, `2^-1074`.
pub const F64_MIN_SUBNORMAL: f64 = f64::MIN_POSITIVE / 4503599627370496.0;

/// Largest subnormal binary64 value, `2^-1022 - 2^-1074`.
pub const F64_MAX_SUBNORMAL: f64 = f64::MIN_POSITIVE - F64_MIN_SUBNORMAL;

/// Smallest positive normal binary64 value, `2^-1022`.
pub const F64_MIN_NORMAL: f64 = f64::MIN_POSITIVE;

/// Largest finite binary64 value, `2^1024 - 2^971`.
pub const F64_MAX: f64 = f64::MAX;

/// Smallest binary64 value that rounds up to binary32 infinity,
/// `2^128 - 2^103`. It is the midpoint between `F32_MAX` and `2^128`,
/// and the tie goes to the even side.
pub const F32_OVERFLOW_THRESHOLD: f64 = F32_MAX as f64 + 10141204801825835211973625643008.0;

/// Largest binary64 value that rounds to binary32 zero, `2^-150`.
/// It is the midpoint between zero and `F32_MIN_SUBNORMAL`.
pub const F32_UNDERFLOW_THRESHOLD: f64 = F32_MIN_SUBNORMAL as f64 / 2.0;

lazy_static! {
    /// Smallest value that rounds up to binary64 infinity,
    /// `2^1024 - 2^970`. Not itself a binary64 value.
    pub static ref F64_OVERFLOW_THRESHOLD: Rational =
        Rational::from((BigInt::from(1) << 1024_u32) - (BigInt::from(1) << 970_u32));

    /// Largest value that rounds to binary64 zero, `2^-1075`.
    pub static ref F64_UNDERFLOW_THRESHOLD: Rational =
        Rational::from(1).multiply_two_power(-1075);
}
