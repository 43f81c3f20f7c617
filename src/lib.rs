pub mod math;

pub use math::error::RationalError;
pub use math::rational::{Rational, Rational32, Rational64};
pub use math::utils::{gcd, SignedInt};
