//! Copying operations over insertion-ordered [`Map`](crate::Map)s.
//!
//! None of these change the maps they're given. Where a result keeps keys from an input, it keeps
//! their order too.

mod ops;
mod tests;

pub use ops::*;
