//! Shared macros for constructing exact rationals.

/// Simplifies constructing [`Rational`](crate::rational::Rational)s.
///
/// With one argument the value is an integer and the macro is infallible.
/// With two arguments it builds `numer / denom` and yields a
/// [`Result`](crate::error::Result), failing on a zero denominator.
///
/// ```
/// use math::prelude::*;
///
/// let a = rat!(3);
/// let b = rat!(6, 2).unwrap();
/// assert_eq!(a, b);
/// assert!(rat!(1, 0).is_err());
/// ```
#[macro_export]
macro_rules! rat {
    ($numer:expr) => {
        $crate::rational::Rational::from($numer)
    };
    ($numer:expr, $denom:expr $(,)?) => {
        $crate::rational::Rational::new(
            $crate::BigInt::from($numer),
            $crate::BigInt::from($denom),
        )
    };
}

/// Create a [`Vec`] of `(BigInt, BigInt)` points from integer pairs.
///
/// ```
/// use math::prelude::*;
///
/// let pts = points![(1, 2), (2, 5), (4, 17)];
/// assert_eq!(interpolate_at_zero(&pts).unwrap(), rat!(1));
/// ```
#[macro_export]
macro_rules! points {
    ($(($x:expr, $y:expr)),* $(,)?) => {
        vec![$(($crate::BigInt::from($x), $crate::BigInt::from($y))),*]
    };
}
