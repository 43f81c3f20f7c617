use std::fmt::{Debug, Display};
use std::num::ParseIntError;
use std::str::FromStr;

use num_traits::{PrimInt, Signed};

/// Primitive signed integer usable as the numerator and denominator of a
/// [`Rational`](crate::math::rational::Rational).
pub trait SignedInt:
    PrimInt + Signed + Debug + Display + FromStr<Err = ParseIntError>
{
}

impl<T> SignedInt for T where T: PrimInt + Signed + Debug + Display + FromStr<Err = ParseIntError> {}

/// Returns the greatest common divisor of `|a|` and `|b|`.
///
/// If either argument is zero the result is 1, not the other argument. A zero numerator therefore
/// never shrinks its denominator during normalization.
#[inline]
pub fn gcd<T: SignedInt>(a: T, b: T) -> T {
    let (mut a, mut b) = (a.abs(), b.abs());
    if a.is_zero() || b.is_zero() {
        return T::one();
    }
    while !b.is_zero() {
        (a, b) = (b, a % b);
    }
    a
}
