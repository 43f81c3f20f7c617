use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::Zero;

use super::rational::Rational;
use super::utils::SignedInt;

// No overflow checks: the cross products must fit in `T`.

impl<T: SignedInt> Add for Rational<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        // a/b + c/d = (ad + cb) / bd.
        Self::new(
            self.numer() * rhs.denom() + rhs.numer() * self.denom(),
            self.denom() * rhs.denom(),
        )
    }
}

impl<T: SignedInt> Sub for Rational<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(
            self.numer() * rhs.denom() - rhs.numer() * self.denom(),
            self.denom() * rhs.denom(),
        )
    }
}

impl<T: SignedInt> Mul for Rational<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.numer() * rhs.numer(), self.denom() * rhs.denom())
    }
}

/// Dividing by a zero value produces a zero denominator, which [`Rational::new`] replaces by 1.
impl<T: SignedInt> Div for Rational<T> {
    type Output = Self;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Self) -> Self::Output {
        Self::new(self.numer() * rhs.denom(), self.denom() * rhs.numer())
    }
}

impl<T: SignedInt> Neg for Rational<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.numer(), self.denom())
    }
}

macro_rules! impl_scalar_op {
    ($op_trait: ident, $op_fn: ident) => {
        impl<T: SignedInt> $op_trait<T> for Rational<T> {
            type Output = Self;

            fn $op_fn(self, rhs: T) -> Self::Output {
                <Self as $op_trait>::$op_fn(self, Self::from(rhs))
            }
        }
    };
}

impl_scalar_op!(Add, add);
impl_scalar_op!(Sub, sub);
impl_scalar_op!(Mul, mul);
impl_scalar_op!(Div, div);

macro_rules! impl_assign_op {
    ($assign_trait: ident, $assign_fn: ident, $op: tt) => {
        impl<T: SignedInt> $assign_trait for Rational<T> {
            fn $assign_fn(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }

        impl<T: SignedInt> $assign_trait<T> for Rational<T> {
            fn $assign_fn(&mut self, rhs: T) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_assign_op!(AddAssign, add_assign, +);
impl_assign_op!(SubAssign, sub_assign, -);
impl_assign_op!(MulAssign, mul_assign, *);
impl_assign_op!(DivAssign, div_assign, /);

/// Operators with a primitive integer on the left. Coherence rules out a blanket impl over `T`.
macro_rules! impl_int_lhs_ops {
    ($($int: ty),*) => {
        $(
            impl Add<Rational<$int>> for $int {
                type Output = Rational<$int>;

                fn add(self, rhs: Rational<$int>) -> Self::Output {
                    // n + c/d = (nd + c) / d.
                    Rational::new(self * rhs.denom() + rhs.numer(), rhs.denom())
                }
            }

            impl Sub<Rational<$int>> for $int {
                type Output = Rational<$int>;

                fn sub(self, rhs: Rational<$int>) -> Self::Output {
                    Rational::from(self) - rhs
                }
            }

            impl Mul<Rational<$int>> for $int {
                type Output = Rational<$int>;

                fn mul(self, rhs: Rational<$int>) -> Self::Output {
                    Rational::from(self) * rhs
                }
            }
        )*
    };
}

impl_int_lhs_ops!(i8, i16, i32, i64, i128, isize);

impl<T: SignedInt> Sum for Rational<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<'a, T: SignedInt> Sum<&'a Self> for Rational<T> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use rand::Rng;

    use crate::math::rational::Rational;

    fn random_rational(rng: &mut impl Rng) -> Rational<i64> {
        Rational::new(rng.gen_range(-1000..=1000), rng.gen_range(1..=1000))
    }

    #[test]
    fn test_add_sub() {
        let r1 = Rational::new(3, 4);
        let r2 = Rational::new(1, 2);
        assert_eq!((r1 + r2).to_string(), "5/4");
        assert_eq!((r1 - r2).to_string(), "1/4");
        assert_eq!((r2 - r1).to_string(), "-1/4");
    }

    #[test]
    fn test_int_operands() {
        let r1: Rational = Rational::new(3, 4);
        assert_eq!((5 + r1).to_string(), "23/4");
        assert_eq!((r1 + 5).to_string(), "23/4");
        assert_eq!((1 - r1).to_string(), "1/4");
        assert_eq!((r1 - 1).to_string(), "-1/4");
        assert_eq!((2 * r1).to_string(), "3/2");
        assert_eq!((r1 / 3).to_string(), "1/4");
        assert_eq!((5i64 + Rational::new(3i64, 4)).to_string(), "23/4");
    }

    #[test]
    fn test_mul_div_neg() {
        let a = Rational::new(2, 3);
        let b = Rational::new(-9, 4);
        assert_eq!((a * b).to_string(), "-3/2");
        assert_eq!((a / b).to_string(), "-8/27");
        assert_eq!((-a).to_string(), "-2/3");
        assert_eq!((-b).to_string(), "9/4");
    }

    #[test]
    fn test_div_by_zero_is_corrected() {
        let r = Rational::new(2, 3) / Rational::<i32>::zero();
        assert_eq!(r.to_string(), "2/1");
    }

    #[test]
    fn test_difference_to_zero_keeps_denominator() {
        let r = Rational::new(3, 4) - Rational::new(3, 4);
        assert!(r.is_zero());
        assert_eq!(r.to_string(), "0/16");
    }

    #[test]
    fn test_assign_ops() {
        let mut r: Rational = Rational::new(1, 2);
        r += Rational::new(1, 3);
        assert_eq!(r, Rational::new(5, 6));
        r -= Rational::new(1, 6);
        assert_eq!(r, Rational::new(2, 3));
        r *= Rational::new(3, 4);
        assert_eq!(r, Rational::new(1, 2));
        r /= Rational::new(1, 4);
        assert_eq!(r, Rational::from(2));
        r += 1;
        assert_eq!(r, Rational::from(3));
        r /= 6;
        assert_eq!(r, Rational::new(1, 2));
    }

    #[test]
    fn test_sum() {
        let values = [Rational::new(1, 2), Rational::new(1, 3), Rational::new(1, 6)];
        assert_eq!(values.iter().sum::<Rational>(), Rational::one());
        assert_eq!(values.into_iter().sum::<Rational>(), Rational::one());
        assert_eq!(std::iter::empty::<Rational>().sum::<Rational>(), Rational::zero());
    }

    #[test]
    fn test_random_ops() {
        let mut rng = rand::thread_rng();
        for _ in 0..10000 {
            let a = random_rational(&mut rng);
            let b = random_rational(&mut rng);
            let (an, ad, bn, bd) = (a.numer(), a.denom(), b.numer(), b.denom());

            let sum = a + b;
            assert_eq!(sum.numer() * ad * bd, (an * bd + bn * ad) * sum.denom());
            let diff = a - b;
            assert_eq!(diff.numer() * ad * bd, (an * bd - bn * ad) * diff.denom());
            let prod = a * b;
            assert_eq!(prod.numer() * ad * bd, an * bn * prod.denom());

            for r in [sum, diff, prod] {
                assert!(r.denom() > 0);
            }
            if !a.is_zero() {
                assert_eq!(sum - b, a);
            }
            assert_eq!(a + (-a), Rational::new(0, ad * ad));

            let mut acc = a;
            acc += b;
            assert_eq!(acc, sum);
        }
    }
}
