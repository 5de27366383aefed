/*
    Operations
*/

use crate::Context;

/// The result of a rounding operation, tagged by whether
/// the rounded value equals the value before rounding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RoundResult<N> {
    Exact(N),
    Inexact(N),
}

impl<N> RoundResult<N> {
    /// Returns the rounded value.
    pub fn value(self) -> N {
        match self {
            RoundResult::Exact(v) => v,
            RoundResult::Inexact(v) => v,
        }
    }

    /// Returns true if no rounding error occured.
    pub fn is_exact(&self) -> bool {
        matches!(self, RoundResult::Exact(_))
    }
}

/// Rounding an exact value into a representation `N`.
pub trait Round<N> {
    /// The rounding context accepted by this operation.
    type Ctx: Context;

    /// Performs a rounding operation returning the result.
    fn round(&self, ctx: &Self::Ctx) -> N {
        self.round_exact(ctx).value()
    }

    /// Performs a rounding operation returning the result
    /// and whether it is exact.
    fn round_exact(&self, ctx: &Self::Ctx) -> RoundResult<N>;
}
