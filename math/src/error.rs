use thiserror::Error;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type for exact arithmetic and interpolation.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("Invalid index: {0} >= {1}")]
    InvalidIndex(usize, usize),
    #[error(transparent)]
    ParseRational(#[from] ParseRationalError),
}

pub type Error = MathError;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum ParseRationalError {
    #[error("invalid integer literal `{0}`")]
    InvalidInteger(String),
    #[error("zero denominator in `{0}`")]
    ZeroDenominator(String),
}
