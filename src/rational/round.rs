/*
    Rounding
*/

use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use super::Rational;
use crate::ieee754::Ieee754;
use crate::{IEEEContext, Round, RoundResult, RoundingMode};

// Rounding utilities
impl Rational {
    /// Rounds this value to the format `F` using the rounding mode `rm`.
    pub fn round_to<F: Ieee754>(&self, rm: RoundingMode) -> F {
        self.round_with(&IEEEContext::new().rounding_mode(rm)).value()
    }

    /// Rounds this value to the format `F` under the context `ctx`,
    /// reporting whether the result is exact.
    pub fn round_with<F: Ieee754>(&self, ctx: &IEEEContext) -> RoundResult<F> {
        if self.is_zero() {
            return RoundResult::Exact(F::zero(false));
        }

        // The value lies in the binade [2^lo, 2^(lo+1)), so a quantum of
        // 2^(lo - M) leaves exactly `PREC` integer digits. Below the normal
        // range the quantum is pinned to the subnormal spacing.
        let s = self.is_negative();
        let lo = self.log2_floor();
        if lo > F::EMAX {
            // at least 2^(EMAX + 1), past every finite value
            log::trace!("overflow rounding from binade 2^{} under {:?}", lo, ctx.rm);
            return RoundResult::Inexact(overflow_value(s, ctx.rm));
        }

        let mut exp = i64::max(lo - F::M as i64, F::EXPMIN);
        let (mut c, half_bit, sticky_bit) = if lo < F::EXPMIN - 1 {
            // below half the smallest subnormal
            (0, false, true)
        } else {
            self.split_at_quantum(exp)
        };
        let inexact = half_bit || sticky_bit;

        if ctx.rm.requires_increment(s, c & 1 == 1, half_bit, sticky_bit) {
            c += 1;
            if c >> F::PREC != 0 {
                // carried into the next binade
                c >>= 1;
                exp += 1;
            }
        }

        if exp > F::EXPMAX {
            log::trace!("overflow rounding from binade 2^{} under {:?}", lo, ctx.rm);
            return RoundResult::Inexact(overflow_value(s, ctx.rm));
        }

        let subnormal = c >> F::M == 0;
        if subnormal && inexact {
            log::trace!("underflow rounding from binade 2^{} under {:?}", lo, ctx.rm);
        }

        if subnormal && ctx.ftz && c != 0 {
            RoundResult::Inexact(F::zero(s))
        } else if inexact {
            RoundResult::Inexact(F::encode(s, exp, c))
        } else {
            RoundResult::Exact(F::encode(s, exp, c))
        }
    }

    // Splits `|self|` at the quantum `2^exp` into the truncated significand
    // `c` with `c * 2^exp <= |self| < (c + 1) * 2^exp`, the half bit
    // (remainder at least half a quantum) and the sticky bit (remainder
    // neither zero nor exactly half a quantum).
    fn split_at_quantum(&self, exp: i64) -> (u64, bool, bool) {
        let num = self.num.magnitude();
        let den = self.den.magnitude();
        let (num, den) = if exp < 0 {
            (num << exp.unsigned_abs(), den.clone())
        } else {
            (num.clone(), den << exp.unsigned_abs())
        };
        let (c, r) = num.div_rem(&den);
        let c = c
            .to_u64()
            .expect("truncated significand exceeds the format precision");

        let twice = &r << 1_u8;
        let half_bit = twice >= den;
        let sticky_bit = !r.is_zero() && twice != den;
        (c, half_bit, sticky_bit)
    }
}

// Result of a rounding that overflowed the finite range.
fn overflow_value<F: Ieee754>(s: bool, rm: RoundingMode) -> F {
    if rm.overflows_to_infinity(s) {
        F::infinity(s)
    } else {
        F::max_finite(s)
    }
}

impl<F: Ieee754> Round<F> for Rational {
    type Ctx = IEEEContext;

    fn round_exact(&self, ctx: &Self::Ctx) -> RoundResult<F> {
        self.round_with(ctx)
    }
}

/// A `Rational` paired with a rounding context.
///
/// Converts the wrapped value on demand with whatever rounding mode
/// is currently set. Converting the same value under several modes
/// is a matter of changing the mode between queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundRational {
    value: Rational,
    ctx: IEEEContext,
}

impl RoundRational {
    /// Wraps `value` with `RoundingMode::NearestEven`.
    pub fn new(value: Rational) -> Self {
        Self {
            value,
            ctx: IEEEContext::new(),
        }
    }

    /// Wraps `value` with an explicit rounding context.
    pub fn with_context(value: Rational, ctx: IEEEContext) -> Self {
        Self { value, ctx }
    }

    /// Returns the wrapped value.
    pub fn value(&self) -> &Rational {
        &self.value
    }

    /// Returns the rounding context.
    pub fn context(&self) -> &IEEEContext {
        &self.ctx
    }

    /// Returns the current rounding mode.
    pub fn rounding_mode(&self) -> RoundingMode {
        self.ctx.rm
    }

    /// Sets the rounding mode used by subsequent conversions.
    pub fn set_rounding_mode(&mut self, rm: RoundingMode) {
        self.ctx.rm = rm;
    }

    /// Sets the rounding mode, consuming and returning the wrapper.
    pub fn with_rounding_mode(mut self, rm: RoundingMode) -> Self {
        self.ctx.rm = rm;
        self
    }

    /// Rounds the wrapped value to the format `F`.
    pub fn round<F: Ieee754>(&self) -> F {
        self.value.round_with(&self.ctx).value()
    }

    /// Rounds the wrapped value to the format `F`,
    /// reporting whether the result is exact.
    pub fn round_exact<F: Ieee754>(&self) -> RoundResult<F> {
        self.value.round_with(&self.ctx)
    }

    /// Rounds the wrapped value to binary64.
    pub fn double_value(&self) -> f64 {
        self.round()
    }

    /// Rounds the wrapped value to binary32.
    pub fn float_value(&self) -> f32 {
        self.round()
    }
}

impl From<Rational> for RoundRational {
    fn from(value: Rational) -> Self {
        Self::new(value)
    }
}
