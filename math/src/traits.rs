use num_bigint::BigInt;

/// Abstract sample `(x, y)` of a polynomial, used as interpolation input.
pub trait Point {
    /// The abscissa of this sample.
    fn x(&self) -> &BigInt;

    /// The value of the polynomial at [`Point::x`].
    fn y(&self) -> &BigInt;
}

impl Point for (BigInt, BigInt) {
    #[inline]
    fn x(&self) -> &BigInt {
        &self.0
    }

    #[inline]
    fn y(&self) -> &BigInt {
        &self.1
    }
}

impl<P: Point + ?Sized> Point for &P {
    #[inline]
    fn x(&self) -> &BigInt {
        (**self).x()
    }

    #[inline]
    fn y(&self) -> &BigInt {
        (**self).y()
    }
}
