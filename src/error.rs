/*
    Errors
*/

/// Failure conditions of exact operations.
///
/// Every failure is reported to the immediate caller.
/// Since all values are immutable, nothing is left half-updated.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An exponent left the range of its representation.
    #[error("exponent out of range: {0}")]
    Overflow(i64),
    /// Inverse or division applied to a zero value.
    #[error("division by zero")]
    DivideByZero,
    /// An argument outside the domain of the operation.
    #[error("invalid argument: {0}")]
    Domain(&'static str),
}

/// Result type of fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;
