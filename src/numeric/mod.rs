//! Arithmetic over lists of [`Decimal`](rust_decimal::Decimal)s.
//!
//! Only available with the `decimal` feature, which is enabled by default.

mod sum;

pub use sum::*;
