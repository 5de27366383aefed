/*
    Rounding modes and contexts
*/

/// A description of rounding behavior.
///
/// Every conversion from an exact value to a floating-point format
/// decomposes into two steps:
///  - an exact operation producing a rational number, and
///  - a rounding operation `R -> F`.
/// A `Context` describes the second step, the rounding behavior that
/// should be used to apply a "fit-to-representation" on an exact result.
pub trait Context: Sized {}

/// Rounding modes for conversions to IEEE-754 formats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Nearest value, ties to the even significand.
    #[default]
    NearestEven,
    /// Nearest value, ties away from zero.
    NearestAway,
    /// Toward +infinity.
    Ceiling,
    /// Toward -infinity.
    Floor,
    /// Toward zero.
    ToZero,
    /// Away from zero.
    AwayZero,
    /// Toward the value with an odd significand.
    ToOdd,
}

/// Sign-independent rounding directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoundingDirection {
    ToZero,
    AwayZero,
    ToEven,
    ToOdd,
}

impl RoundingMode {
    /// Translates a `RoundingMode` and sign bit to a `RoundingDirection`
    /// and a boolean indicating if the direction only specifies tie-breaking behavior.
    pub fn direction(&self, sign: bool) -> (bool, RoundingDirection) {
        match (self, sign) {
            (RoundingMode::NearestEven, _) => (true, RoundingDirection::ToEven),
            (RoundingMode::NearestAway, _) => (true, RoundingDirection::AwayZero),
            (RoundingMode::Ceiling, false) => (false, RoundingDirection::AwayZero),
            (RoundingMode::Ceiling, true) => (false, RoundingDirection::ToZero),
            (RoundingMode::Floor, false) => (false, RoundingDirection::ToZero),
            (RoundingMode::Floor, true) => (false, RoundingDirection::AwayZero),
            (RoundingMode::ToZero, _) => (false, RoundingDirection::ToZero),
            (RoundingMode::AwayZero, _) => (false, RoundingDirection::AwayZero),
            (RoundingMode::ToOdd, _) => (false, RoundingDirection::ToOdd),
        }
    }

    // Returns true if the rounding information implies the significand,
    // as viewed as an integer, should be incremented by 1.
    // `half_bit` is set when the discarded part is at least half an ULP,
    // `sticky_bit` when it is neither zero nor exactly half an ULP.
    pub(crate) fn requires_increment(
        &self,
        sign: bool,
        lsb: bool,
        half_bit: bool,
        sticky_bit: bool,
    ) -> bool {
        match self.direction(sign) {
            (true, RoundingDirection::ToEven) => {
                // no half bit => truncate
                // half bit and sticky bit => increment
                // tie => increment if lsb since we want it to be 0
                half_bit && (sticky_bit || lsb)
            }
            (true, RoundingDirection::AwayZero) => {
                // tie requires increment
                half_bit
            }
            (false, RoundingDirection::AwayZero) => {
                // increment if not exact
                half_bit || sticky_bit
            }
            (false, RoundingDirection::ToZero) => false,
            (false, RoundingDirection::ToOdd) => {
                // inexact results need an odd lsb
                (half_bit || sticky_bit) && !lsb
            }
            (nearest, dir) => {
                unreachable!("no rounding mode maps to {:?} (nearest: {})", dir, nearest)
            }
        }
    }

    // Assuming overflow has occured, return true if
    // the result should be rounded to +/- infinity
    // (rather than +/- MAX_FLOAT).
    pub(crate) fn overflows_to_infinity(&self, sign: bool) -> bool {
        match self.direction(sign) {
            // nearest carries all overflows to infinity
            (true, _) => true,
            (_, RoundingDirection::AwayZero) => true,
            // carry all overflows to MAX_FLOAT
            (_, RoundingDirection::ToZero) => false,
            // MAX_FLOAT has an odd lsb
            (_, RoundingDirection::ToOdd) => false,
            (false, RoundingDirection::ToEven) => unreachable!("no directed mode rounds to even"),
        }
    }
}

/// Rounding context for conversions to IEEE-754 formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IEEEContext {
    pub(crate) rm: RoundingMode,
    pub(crate) ftz: bool,
}

impl IEEEContext {
    /// Creates a new rounding context
    /// with `rm` set to `RoundingMode::NearestEven`
    /// and `ftz` set to false.
    pub fn new() -> Self {
        Self {
            rm: RoundingMode::NearestEven,
            ftz: false,
        }
    }

    /// Sets the rounding mode.
    pub fn rounding_mode(mut self, rm: RoundingMode) -> Self {
        self.rm = rm;
        self
    }

    /// Sets the flush-to-zero option.
    /// When set, subnormal results become a zero of the same sign.
    pub fn flush_subnormals(mut self, ftz: bool) -> Self {
        self.ftz = ftz;
        self
    }

    /// Returns the rounding mode.
    pub fn rm(&self) -> RoundingMode {
        self.rm
    }

    /// Returns true if subnormal results are flushed to zero.
    pub fn ftz(&self) -> bool {
        self.ftz
    }
}

impl Context for IEEEContext {}

impl Default for IEEEContext {
    fn default() -> Self {
        Self::new()
    }
}

impl From<RoundingMode> for IEEEContext {
    fn from(rm: RoundingMode) -> Self {
        Self::new().rounding_mode(rm)
    }
}
