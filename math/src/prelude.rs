pub use crate::{points, rat};
pub use crate::{
    error::MathError,
    lagrange::{distinct_abscissae, evaluate, interpolate_at_zero, Interpolant},
    rational::Rational,
    traits::Point,
};
pub use num_bigint::BigInt;
