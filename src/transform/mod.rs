//! Non-destructive transformations over lists.
//!
//! Every function here borrows its input and returns a newly allocated result, so the source list
//! is never reordered or shortened in place.

mod group;
mod order;
mod sequence;

pub use group::*;
pub use order::*;
pub use sequence::*;
