pub mod error;
mod ops;
pub mod rational;
pub mod utils;
