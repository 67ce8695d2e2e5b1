use std::cmp::Ordering;
use std::fmt;
use std::iter::{Product, Sum};
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Mul;
use std::ops::MulAssign;
use std::ops::Neg;
use std::ops::Sub;
use std::ops::SubAssign;
use std::str::FromStr;

use arbitrary::Arbitrary;
use arbitrary::Unstructured;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::One;
use num_traits::Signed;
use num_traits::Zero;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

use crate::error::{MathError, ParseRationalError, Result};

/// Exact fraction over arbitrary-precision integers.
///
/// Always kept in lowest terms with a strictly positive denominator, so two
/// values are equal iff their fields are equal. Zero is stored as `0/1`.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

impl Rational {
    /// Build `numer / denom`, reducing to lowest terms.
    ///
    /// Fails with [`MathError::DivisionByZero`] when `denom` is zero.
    pub fn new(numer: BigInt, denom: BigInt) -> Result<Self> {
        if denom.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        Ok(Self::reduce(numer, denom))
    }

    /// Integer `value` as `value / 1`.
    #[inline]
    pub fn from_integer(value: BigInt) -> Self {
        Self {
            numer: value,
            denom: BigInt::one(),
        }
    }

    // caller guarantees `denom != 0`
    fn reduce(numer: BigInt, denom: BigInt) -> Self {
        let (mut numer, mut denom) = if denom.is_negative() {
            (-numer, -denom)
        } else {
            (numer, denom)
        };

        if numer.is_zero() {
            return Self::zero();
        }

        let divisor = numer.gcd(&denom);
        if !divisor.is_one() {
            numer /= &divisor;
            denom /= &divisor;
        }

        Self { numer, denom }
    }

    #[inline]
    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    #[inline]
    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// The integer value if the denominator divides the numerator.
    ///
    /// Since the value is kept reduced this is exactly the `denom == 1` case.
    pub fn to_integer_if_exact(&self) -> Option<BigInt> {
        self.is_integer().then(|| self.numer.clone())
    }

    /// Owned variant of [`Self::to_integer_if_exact`].
    pub fn into_integer_if_exact(self) -> Option<BigInt> {
        self.is_integer().then_some(self.numer)
    }

    /// Multiplicative inverse, failing on zero.
    pub fn recip(&self) -> Result<Self> {
        if self.numer.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        Ok(Self::reduce(self.denom.clone(), self.numer.clone()))
    }

    /// `self / rhs`, failing with [`MathError::DivisionByZero`] when `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        if rhs.numer.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        Ok(Self::reduce(
            &self.numer * &rhs.denom,
            &self.denom * &rhs.numer,
        ))
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl FromStr for Rational {
    type Err = ParseRationalError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parse_int = |part: &str| {
            part.trim()
                .parse::<BigInt>()
                .map_err(|_| ParseRationalError::InvalidInteger(part.to_string()))
        };

        match s.split_once('/') {
            None => parse_int(s).map(Self::from_integer),
            Some((numer, denom)) => {
                let numer = parse_int(numer)?;
                let denom = parse_int(denom)?;
                Self::new(numer, denom)
                    .map_err(|_| ParseRationalError::ZeroDenominator(s.to_string()))
            }
        }
    }
}

impl Serialize for Rational {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

impl<'a> Arbitrary<'a> for Rational {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let numer: i64 = u.arbitrary()?;
        let denom: i64 = u.arbitrary()?;
        let denom = if denom == 0 { 1 } else { denom };
        Ok(Self::reduce(numer.into(), denom.into()))
    }
}

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl From<&BigInt> for Rational {
    fn from(value: &BigInt) -> Self {
        Self::from_integer(value.clone())
    }
}

macro_rules! impl_from_int_for_rational {
    ($($t:ident),+ $(,)?) => {$(
        impl From<$t> for Rational {
            fn from(value: $t) -> Self {
                Self::from_integer(BigInt::from(value))
            }
        }
    )+};
}

impl_from_int_for_rational!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    // denominators are positive, so cross-multiplying keeps the order
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.numer * &other.denom).cmp(&(&other.numer * &self.denom))
    }
}

impl Zero for Rational {
    #[inline]
    fn zero() -> Self {
        Self {
            numer: BigInt::zero(),
            denom: BigInt::one(),
        }
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl One for Rational {
    #[inline]
    fn one() -> Self {
        Self {
            numer: BigInt::one(),
            denom: BigInt::one(),
        }
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.numer.is_one() && self.denom.is_one()
    }
}

impl Add<&Rational> for &Rational {
    type Output = Rational;

    fn add(self, rhs: &Rational) -> Rational {
        if self.denom == rhs.denom {
            return Rational::reduce(&self.numer + &rhs.numer, self.denom.clone());
        }
        Rational::reduce(
            &self.numer * &rhs.denom + &rhs.numer * &self.denom,
            &self.denom * &rhs.denom,
        )
    }
}

impl Sub<&Rational> for &Rational {
    type Output = Rational;

    fn sub(self, rhs: &Rational) -> Rational {
        if self.denom == rhs.denom {
            return Rational::reduce(&self.numer - &rhs.numer, self.denom.clone());
        }
        Rational::reduce(
            &self.numer * &rhs.denom - &rhs.numer * &self.denom,
            &self.denom * &rhs.denom,
        )
    }
}

impl Mul<&Rational> for &Rational {
    type Output = Rational;

    fn mul(self, rhs: &Rational) -> Rational {
        Rational::reduce(&self.numer * &rhs.numer, &self.denom * &rhs.denom)
    }
}

macro_rules! forward_binop {
    ($($imp:ident, $method:ident, $op:tt);+ $(;)?) => {$(
        impl $imp<Rational> for Rational {
            type Output = Rational;

            #[inline]
            fn $method(self, rhs: Rational) -> Rational {
                &self $op &rhs
            }
        }

        impl $imp<&Rational> for Rational {
            type Output = Rational;

            #[inline]
            fn $method(self, rhs: &Rational) -> Rational {
                &self $op rhs
            }
        }

        impl $imp<Rational> for &Rational {
            type Output = Rational;

            #[inline]
            fn $method(self, rhs: Rational) -> Rational {
                self $op &rhs
            }
        }
    )+};
}

forward_binop!(Add, add, +; Sub, sub, -; Mul, mul, *);

impl AddAssign<&Rational> for Rational {
    #[inline]
    fn add_assign(&mut self, rhs: &Rational) {
        *self = &*self + rhs;
    }
}

impl AddAssign for Rational {
    #[inline]
    fn add_assign(&mut self, rhs: Rational) {
        *self = &*self + &rhs;
    }
}

impl SubAssign<&Rational> for Rational {
    #[inline]
    fn sub_assign(&mut self, rhs: &Rational) {
        *self = &*self - rhs;
    }
}

impl MulAssign<&Rational> for Rational {
    #[inline]
    fn mul_assign(&mut self, rhs: &Rational) {
        *self = &*self * rhs;
    }
}

impl MulAssign for Rational {
    #[inline]
    fn mul_assign(&mut self, rhs: Rational) {
        *self = &*self * &rhs;
    }
}

impl Neg for Rational {
    type Output = Rational;

    #[inline]
    fn neg(self) -> Rational {
        Rational {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    #[inline]
    fn neg(self) -> Rational {
        self.clone().neg()
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Rational::zero(), |acc, item| acc + item)
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.fold(Rational::zero(), |acc, item| acc + item)
    }
}

impl Product for Rational {
    fn product<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Rational::one(), |acc, item| acc * item)
    }
}
