use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;

use num_traits::{One, Zero};
use tracing::warn;

use super::error::RationalError;
use super::utils::{gcd, SignedInt};

/// A fraction `numer/denom` kept in normalized form.
///
/// Every constructor and mutator reduces the fraction and moves the sign onto the numerator, so
/// the denominator is always positive. A zero numerator is the one case that is not fully
/// reduced: [`gcd`] is 1 whenever one side is zero, so `0/5` keeps its denominator.
///
/// Equality is structural. Since every value is normalized, `Rational::new(2, 4)` and
/// `Rational::new(1, 2)` hold the same fields and compare equal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rational<T = i32> {
    numer: T,
    denom: T,
}

pub type Rational32 = Rational<i32>;
pub type Rational64 = Rational<i64>;

impl<T: SignedInt> Rational<T> {
    /// Creates the normalized form of `numer/denom`.
    ///
    /// A zero denominator is replaced by 1, see [`Rational::set_denom`].
    pub fn new(numer: T, denom: T) -> Self {
        let mut res = Self {
            numer,
            denom: T::one(),
        };
        // A zero denominator is already corrected and logged by the setter.
        let _ = res.set_denom(denom);
        res
    }

    /// Like [`Rational::new`], but rejects a zero denominator instead of correcting it.
    pub fn try_new(numer: T, denom: T) -> Result<Self, RationalError> {
        if denom.is_zero() {
            return Err(RationalError::InvalidDenominator);
        }
        Ok(Self::new(numer, denom))
    }

    pub fn numer(&self) -> T {
        self.numer
    }

    pub fn denom(&self) -> T {
        self.denom
    }

    pub fn set_numer(&mut self, numer: T) {
        self.numer = numer;
        self.simplify();
    }

    /// Sets the denominator and normalizes.
    ///
    /// Setting a zero denominator stores 1 instead, keeps the numerator as it is, emits a warning
    /// and returns [`RationalError::InvalidDenominator`]. The value is valid in both cases.
    pub fn set_denom(&mut self, denom: T) -> Result<(), RationalError> {
        if denom.is_zero() {
            warn!(numer = %self.numer, "denominator cannot be zero, setting it to 1");
            self.denom = T::one();
            return Err(RationalError::InvalidDenominator);
        }
        self.denom = denom;
        self.simplify();
        Ok(())
    }

    /// Adds one in place and returns the updated value (prefix `++`).
    pub fn increment(&mut self) -> &mut Self {
        self.numer = self.numer + self.denom;
        self.simplify();
        self
    }

    /// Adds one in place and returns the value it had before (postfix `++`).
    pub fn post_increment(&mut self) -> Self {
        let prev = *self;
        self.increment();
        prev
    }

    /// Subtracts one in place and returns the updated value (prefix `--`).
    pub fn decrement(&mut self) -> &mut Self {
        self.numer = self.numer - self.denom;
        self.simplify();
        self
    }

    /// Subtracts one in place and returns the value it had before (postfix `--`).
    pub fn post_decrement(&mut self) -> Self {
        let prev = *self;
        self.decrement();
        prev
    }

    fn simplify(&mut self) {
        // Never zero.
        let common = gcd(self.numer, self.denom);
        self.numer = self.numer / common;
        self.denom = self.denom / common;

        if self.denom.is_negative() {
            self.numer = -self.numer;
            self.denom = -self.denom;
        }
    }
}

impl<T: SignedInt> Default for Rational<T> {
    fn default() -> Self {
        Self::one()
    }
}

impl<T: SignedInt> From<T> for Rational<T> {
    fn from(value: T) -> Self {
        Self {
            numer: value,
            denom: T::one(),
        }
    }
}

impl<T: SignedInt> Zero for Rational<T> {
    fn zero() -> Self {
        Self::from(T::zero())
    }

    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl<T: SignedInt> One for Rational<T> {
    fn one() -> Self {
        Self::from(T::one())
    }
}

/// Orders by cross-multiplication, which relies on both denominators being positive.
///
/// Zero numerators over different denominators (`0/1` and `0/5`) are structurally unequal, so
/// they are left unordered rather than reported as equal.
impl<T: SignedInt> PartialOrd for Rational<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.numer * other.denom).cmp(&(other.numer * self.denom)) {
            Ordering::Equal => (self == other).then_some(Ordering::Equal),
            ord => Some(ord),
        }
    }
}

impl<T: SignedInt> Display for Rational<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}

/// Parses `numer/denom` or a bare integer `numer`. Surrounding whitespace is ignored.
impl<T: SignedInt> FromStr for Rational<T> {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parse = |part: &str| {
            part.parse::<T>().map_err(|source| RationalError::ParseInt {
                input: part.to_string(),
                source,
            })
        };

        match s.split_once('/') {
            None if s.is_empty() => Err(RationalError::Malformed {
                input: s.to_string(),
            }),
            None => parse(s).map(Self::from),
            Some((_, denom)) if denom.contains('/') => Err(RationalError::Malformed {
                input: s.to_string(),
            }),
            Some((numer, denom)) => Self::try_new(parse(numer)?, parse(denom)?),
        }
    }
}
