pub mod error;
pub mod lagrange;
pub mod macros;
pub mod prelude;
pub mod rational;
pub mod traits;

pub use num_bigint::BigInt;

pub use crate::{
    error::{MathError, Result},
    lagrange::Interpolant,
    rational::Rational,
    traits::Point,
};
