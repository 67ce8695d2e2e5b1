//! Exact Lagrange interpolation over the rationals.
//!
//! For points `(x_i, y_i)` with pairwise-distinct abscissae the unique
//! polynomial of degree `< points.len()` through them is
//!
//! ```text
//! f(x) = Σ_i y_i · Π_{j≠i} (x - x_j) / (x_i - x_j)
//! ```
//!
//! [`Interpolant`] folds `y_i / Π_{j≠i} (x_i - x_j)` into one weight per point
//! up front, so evaluating at many abscissae only pays for the numerators.

use std::collections::HashSet;

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::error::{MathError, Result};
use crate::rational::Rational;
use crate::traits::Point;

/// The interpolating polynomial through a fixed set of points, in Lagrange form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpolant {
    xs: Vec<BigInt>,
    weights: Vec<Rational>,
}

impl Interpolant {
    /// Prepare the interpolant through `points`.
    ///
    /// Fails with [`MathError::DivisionByZero`] if two points share an abscissa.
    pub fn new<P: Point>(points: &[P]) -> Result<Self> {
        let xs: Vec<BigInt> = points.iter().map(|p| p.x().clone()).collect();

        let weights = points
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let xi = point.x();
                let denominator = xs
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .fold(BigInt::one(), |acc, (_, xj)| acc * (xi - xj));
                Rational::new(point.y().clone(), denominator)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { xs, weights })
    }

    /// Number of points the interpolant passes through.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Evaluate the interpolating polynomial at `x`.
    pub fn evaluate(&self, x: &BigInt) -> Rational {
        self.weights
            .iter()
            .enumerate()
            .filter(|(_, weight)| !weight.is_zero())
            .map(|(i, weight)| {
                let basis_numerator = self
                    .xs
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .fold(BigInt::one(), |acc, (_, xj)| acc * (x - xj));
                weight * Rational::from_integer(basis_numerator)
            })
            .sum()
    }

    /// The constant term `f(0)`.
    #[inline]
    pub fn at_zero(&self) -> Rational {
        self.evaluate(&BigInt::zero())
    }
}

/// Evaluate the polynomial through `points` at `x`.
///
/// Fails with [`MathError::DivisionByZero`] when two points collide on `x`.
pub fn evaluate<P: Point>(points: &[P], x: &BigInt) -> Result<Rational> {
    Interpolant::new(points).map(|f| f.evaluate(x))
}

/// Lagrange interpolate over `points` and return `f(0)`.
pub fn interpolate_at_zero<P: Point>(points: &[P]) -> Result<Rational> {
    evaluate(points, &BigInt::zero())
}

/// Whether every point in `points` has a distinct abscissa.
pub fn distinct_abscissae<P: Point>(points: &[P]) -> bool {
    let mut seen = HashSet::with_capacity(points.len());
    points.iter().all(|p| seen.insert(p.x()))
}

/// Compute a single Lagrange basis value `L_i(x)` for the points.
pub fn basis<P: Point>(points: &[P], i: usize, x: &BigInt) -> Result<Rational> {
    let xi = points
        .get(i)
        .map(|p| p.x())
        .ok_or(MathError::InvalidIndex(i, points.len()))?;

    points
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != i)
        .try_fold(Rational::one(), |acc, (_, pj)| {
            let ratio = Rational::new(x - pj.x(), xi - pj.x())?;
            Ok(acc * ratio)
        })
}
