use std::num::ParseIntError;

use thiserror::Error;

/// Error encountered while building a [`Rational`](crate::math::rational::Rational).
///
/// Constructors and setters that correct their input ([`Rational::new`], [`Rational::set_denom`],
/// the arithmetic operators) still complete when they report
/// [`RationalError::InvalidDenominator`]; the strict paths ([`Rational::try_new`], parsing) fail.
///
/// [`Rational::new`]: crate::math::rational::Rational::new
/// [`Rational::set_denom`]: crate::math::rational::Rational::set_denom
/// [`Rational::try_new`]: crate::math::rational::Rational::try_new
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RationalError {
    #[error("denominator cannot be zero")]
    InvalidDenominator,
    #[error("expected `numerator/denominator` or `numerator`, got `{input}`")]
    Malformed { input: String },
    #[error("invalid integer `{input}`: {source}")]
    ParseInt {
        input: String,
        #[source]
        source: ParseIntError,
    },
}
