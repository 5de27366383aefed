/*
    IEEE-754 binary formats
*/

use std::fmt::Debug;

use bitvec::prelude::*;

pub mod constants;
mod interval;
mod ulp;
mod util;

pub use interval::*;
pub use ulp::*;
pub use util::*;

/// A binary floating-point format as specified by the IEEE-754 standard.
///
/// Implemented by `f32` (binary32) and `f64` (binary64).
/// The associated constants describe the layout of the format
/// and all bit-level operations in this crate are written against them,
/// so every algorithm is shared between both widths.
pub trait Ieee754: Copy + PartialEq + PartialOrd + Debug + Send + Sync + 'static {
    /// Bitwidth of the representation.
    const N: usize;

    /// Bitwidth of the exponent field.
    const E: usize;

    /// Number of (binary) digits when the significand is expressed
    /// as an integer. This is just `Self::M + 1`.
    const PREC: usize = Self::N - Self::E;

    /// Bitwidth of the mantissa field.
    const M: usize = Self::PREC - 1;

    /// Exponent of the largest finite floating-point value in
    /// this representation when it is in the form `(-1)^s 2^e m`
    /// where `m` is a fraction between 1 and 2.
    const EMAX: i64 = i64::pow(2, (Self::E - 1) as u32) - 1;

    /// Exponent of the smallest normal floating-point value in
    /// this representation when it is in the form `(-1)^s 2^e m`
    /// where `m` is a fraction between 1 and 2.
    /// This is just `1 - Self::EMAX`.
    const EMIN: i64 = 1 - Self::EMAX;

    /// Exponent of the largest finite floating-point value in
    /// this representation when it is in the form `(-1)^s 2^e c`
    /// where `c` is an integer.
    /// This is just `Self::EMAX - Self::M`.
    const EXPMAX: i64 = Self::EMAX - Self::M as i64;

    /// Exponent of the smallest normal floating-point value in
    /// this representation when it is in the form `(-1)^s 2^e c`
    /// where `c` is an integer. Subnormals share this exponent.
    /// This is just `Self::EMIN - Self::M`.
    const EXPMIN: i64 = Self::EMIN - Self::M as i64;

    /// The exponent field bias.
    /// This is just `Self::EMAX`.
    const BIAS: i64 = Self::EMAX;

    /// Returns the encoding of this value, zero-extended to 64 bits.
    fn to_raw(self) -> u64;

    /// Reinterprets the low `Self::N` bits of `bits` as a value.
    fn from_raw(bits: u64) -> Self;

    /// Widens this value to binary64. Always exact.
    fn to_f64(self) -> f64;

    /// Returns true if this value is a NaN.
    fn is_nan(self) -> bool;

    /// Returns true if this value is neither infinite nor NaN.
    fn is_finite(self) -> bool;

    /// Splices this value into the sign, exponent, and mantissa field.
    fn split(self) -> (bool, u64, u64) {
        let raw = self.to_raw();
        let bits = raw.view_bits::<Lsb0>();
        let e: u64 = bits[Self::M..(Self::N - 1)].load_le();
        let m: u64 = bits[..Self::M].load_le();
        (bits[Self::N - 1], e, m)
    }

    /// Packs a sign, exponent field, and mantissa field into a value.
    /// Fields wider than their slot are truncated.
    fn pack(s: bool, e: u64, m: u64) -> Self {
        let mut raw = 0_u64;
        let bits = raw.view_bits_mut::<Lsb0>();
        bits[..Self::M].store_le(m);
        bits[Self::M..(Self::N - 1)].store_le(e);
        bits.set(Self::N - 1, s);
        Self::from_raw(raw)
    }

    /// Decodes a finite value into `(s, exp, c)` such that the value
    /// is exactly `(-1)^s * c * 2^exp`. Subnormals (and zero) have
    /// no implicit leading bit and use `Self::EXPMIN`.
    /// Returns `None` for infinities and NaN.
    fn decode(self) -> Option<(bool, i64, u64)> {
        let (s, e, m) = self.split();
        if e == exponent_field_max::<Self>() {
            None
        } else if e == 0 {
            Some((s, Self::EXPMIN, m))
        } else {
            let exp = e as i64 - Self::BIAS - Self::M as i64;
            Some((s, exp, m | (1 << Self::M)))
        }
    }

    /// Encodes `(-1)^s * c * 2^exp` where `c` fits in `Self::PREC` bits
    /// and the result is in range. A significand without its leading bit
    /// is a subnormal and must sit at `Self::EXPMIN`.
    fn encode(s: bool, exp: i64, c: u64) -> Self {
        assert!(
            c >> Self::PREC == 0,
            "significand wider than precision {}: {:#x}",
            Self::PREC,
            c
        );
        if c >> Self::M == 0 {
            assert!(
                c == 0 || exp == Self::EXPMIN,
                "subnormal significand at exponent {}, expected {}",
                exp,
                Self::EXPMIN
            );
            Self::pack(s, 0, c)
        } else {
            assert!(
                (Self::EXPMIN..=Self::EXPMAX).contains(&exp),
                "unexpected exponent: {} [{}, {}]",
                exp,
                Self::EXPMIN,
                Self::EXPMAX
            );
            let e = exp + Self::BIAS + Self::M as i64;
            Self::pack(s, e as u64, c)
        }
    }

    /// Returns a zero with a particular sign.
    fn zero(sign: bool) -> Self {
        Self::pack(sign, 0, 0)
    }

    /// Returns an infinity with a particular sign.
    fn infinity(sign: bool) -> Self {
        Self::pack(sign, exponent_field_max::<Self>(), 0)
    }

    /// Returns the finite value of largest magnitude with a particular sign.
    fn max_finite(sign: bool) -> Self {
        Self::pack(sign, exponent_field_max::<Self>() - 1, mantissa_field_max::<Self>())
    }

    /// Returns the normal value of smallest magnitude with a particular sign.
    fn min_normal(sign: bool) -> Self {
        Self::pack(sign, 1, 0)
    }

    /// Returns the subnormal value of largest magnitude with a particular sign.
    fn max_subnormal(sign: bool) -> Self {
        Self::pack(sign, 0, mantissa_field_max::<Self>())
    }

    /// Returns the subnormal value of smallest magnitude with a particular sign.
    fn min_subnormal(sign: bool) -> Self {
        Self::pack(sign, 0, 1)
    }
}

#[inline]
fn exponent_field_max<F: Ieee754>() -> u64 {
    (1_u64 << F::E) - 1
}

#[inline]
fn mantissa_field_max<F: Ieee754>() -> u64 {
    (1_u64 << F::M) - 1
}

macro_rules! impl_ieee754 {
    ($t:ty, $bits:ty, $E:expr, $N:expr) => {
        impl Ieee754 for $t {
            const N: usize = $N;
            const E: usize = $E;

            #[inline]
            fn to_raw(self) -> u64 {
                self.to_bits() as u64
            }

            #[inline]
            fn from_raw(bits: u64) -> Self {
                <$t>::from_bits(bits as $bits)
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn is_nan(self) -> bool {
                <$t>::is_nan(self)
            }

            #[inline]
            fn is_finite(self) -> bool {
                <$t>::is_finite(self)
            }
        }
    };
}

impl_ieee754!(f32, u32, 8, 32);
impl_ieee754!(f64, u64, 11, 64);
