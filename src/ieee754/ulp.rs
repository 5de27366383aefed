/*
    Navigation between adjacent values
*/

use super::*;

/// Returns the least value greater than `x`.
///
/// Both zeros step to the smallest positive subnormal,
/// the largest finite value steps to +infinity and +infinity stays put.
/// NaN is returned unchanged.
pub fn next<F: Ieee754>(x: F) -> F {
    if x.is_nan() || x == F::infinity(false) {
        x
    } else if x == F::zero(false) {
        // matches -0 as well
        F::min_subnormal(false)
    } else if x > F::zero(false) {
        F::from_raw(x.to_raw() + 1)
    } else {
        F::from_raw(x.to_raw() - 1)
    }
}

/// Returns the greatest value less than `x`.
///
/// Both zeros step to the smallest negative subnormal,
/// the most negative finite value steps to -infinity and -infinity stays put.
/// NaN is returned unchanged.
pub fn previous<F: Ieee754>(x: F) -> F {
    if x.is_nan() || x == F::infinity(true) {
        x
    } else if x == F::zero(false) {
        F::min_subnormal(true)
    } else if x > F::zero(false) {
        F::from_raw(x.to_raw() - 1)
    } else {
        F::from_raw(x.to_raw() + 1)
    }
}

/// Returns `2^e` as a binary64 value.
/// Exponents above the normal range give +infinity,
/// exponents below the subnormal range give +0.
pub fn pow2(e: i32) -> f64 {
    let e = e as i64;
    if e > f64::EMAX {
        f64::INFINITY
    } else if e >= f64::EMIN {
        f64::pack(false, (e + f64::BIAS) as u64, 0)
    } else if e >= f64::EXPMIN {
        f64::pack(false, 0, 1 << (e - f64::EXPMIN))
    } else {
        0.0
    }
}

/// Rounds `x` toward -infinity to an integral value.
///
/// Works on the encoding directly: NaN payloads and infinities pass through,
/// zeros keep their sign, and every negative value in `(-1, 0)` becomes -1.
pub fn floor<F: Ieee754>(x: F) -> F {
    let (s, e, m) = x.split();
    if e == exponent_field_max::<F>() {
        return x;
    }

    let unbiased = e as i64 - F::BIAS;
    if unbiased >= F::M as i64 {
        // no fraction bits left
        x
    } else if unbiased < 0 {
        // |x| < 1
        if !s {
            F::zero(false)
        } else if e == 0 && m == 0 {
            x
        } else {
            F::pack(true, F::BIAS as u64, 0)
        }
    } else {
        let frac_bits = (F::M as i64 - unbiased) as u32;
        let frac = (1_u64 << frac_bits) - 1;
        if m & frac == 0 {
            x
        } else if !s {
            F::pack(false, e, m & !frac)
        } else {
            // truncation moved toward zero, step one further
            let int = ((m | (1 << F::M)) >> frac_bits) + 1;
            exact_integer(true, int)
        }
    }
}

// Encodes the integer `(-1)^s * n`. Requires `0 < n <= 2^PREC`.
pub(crate) fn exact_integer<F: Ieee754>(s: bool, n: u64) -> F {
    let width = 64 - n.leading_zeros() as usize;
    assert!(
        n != 0 && width <= F::PREC + 1,
        "integer is not exactly representable: {}",
        n
    );
    if width > F::PREC {
        // exactly 2^PREC
        F::encode(s, 1, n >> 1)
    } else {
        let shift = F::PREC - width;
        F::encode(s, -(shift as i64), n << shift)
    }
}
