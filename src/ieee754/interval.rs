/*
    Bracketing and exact comparisons
*/

use std::cmp::Ordering;

use super::*;
use crate::{Error, Result};

/// Returns the tightest pair `(lo, hi)` of binary64 values
/// with `lo <= n <= hi`. The bounds coincide exactly when
/// `n` is representable.
pub fn double_interval(n: i64) -> (f64, f64) {
    let d = n as f64;
    // `d` is integral and below 2^64 in magnitude, so this is exact
    match (d as i128).cmp(&(n as i128)) {
        Ordering::Equal => (d, d),
        Ordering::Greater => (previous(d), d),
        Ordering::Less => (d, next(d)),
    }
}

/// Returns the tightest pair `(lo, hi)` of binary32 values
/// with `lo <= d <= hi`. The bounds coincide exactly when
/// `d` is representable. Values beyond the finite range are
/// bracketed by infinity and NaN gives a pair of NaNs.
pub fn float_interval(d: f64) -> (f32, f32) {
    let f = d as f32;
    match (f as f64).partial_cmp(&d) {
        Some(Ordering::Equal) => (f, f),
        Some(Ordering::Greater) => (previous(f), f),
        Some(Ordering::Less) => (f, next(f)),
        None => (f32::NAN, f32::NAN),
    }
}

/// Returns true if `d` is an integer inside the contiguous range of
/// integers the format represents exactly, `[-2^PREC, 2^PREC]`.
/// False for NaN and infinities.
pub fn is_exact_long<F: Ieee754>(d: F) -> bool {
    let (_, exp, c) = match d.decode() {
        Some(v) => v,
        None => return false,
    };
    if c == 0 {
        return true;
    }

    let tz = c.trailing_zeros();
    let (c, exp) = (c >> tz, exp + tz as i64);
    if exp < 0 {
        // fraction bits remain
        return false;
    }

    let width = 64 - c.leading_zeros() as i64;
    let prec = F::PREC as i64;
    width + exp <= prec || (c == 1 && exp == prec)
}

/// Returns true if `n <= d`, compared exactly.
/// Fails with a domain error when `d` is NaN.
pub fn less_than_or_equal<F: Ieee754>(n: i64, d: F) -> Result<bool> {
    if d.is_nan() {
        log::debug!("less_than_or_equal called with NaN");
        return Err(Error::Domain("ordering comparison against NaN"));
    }

    let d = d.to_f64();
    let bound = pow2(63);
    if d >= bound {
        Ok(true)
    } else if d < -bound {
        Ok(false)
    } else {
        // floor(d) lies in [-2^63, 2^63) so the cast is exact
        Ok(n <= floor(d) as i64)
    }
}
