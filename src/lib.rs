//! This crate is a small set of free functions that make building and transforming lists, maps and
//! sets less verbose.
//!
//! # Purpose
//! Most of what's here is a one or two line wrapper around [`Iterator`] adapters or slice methods.
//! The point is the call site: `sort_by(&words, |w| w.len())` reads better than cloning into a
//! [`Vec`], sorting it in place and handing it back, and the same goes for grouping, zipping,
//! merging maps and so on.
//!
//! # Method
//! Every function borrows its input and returns a newly allocated result. Nothing is mutated in
//! place, so the input of one call can be reused freely in the next. Functions are grouped by what
//! they operate on, but all of them are re-exported here so that `use listkit::*;` is enough.
//!
//! Lists are [`Vec`]s (or slices, when borrowed), maps are insertion-ordered [`Map`]s and sets are
//! unordered [`Set`]s.
//!
//! # Error Handling
//! There are two kinds of "failure" and they're handled very differently.
//!
//! Asking for something that isn't there, like the [`first`] item of an empty list, isn't an
//! error. These functions return [`Option`]s and it's up to the caller to deal with absence.
//!
//! Breaking a function's contract, like reducing an empty list or building a map from an odd
//! number of interleaved keys and values, has no sensible result. Those functions panic, in the
//! same way that indexing out of bounds does. Each of them has a `try_*` twin which returns a
//! [`ContractViolation`] instead, for callers that would rather check.
//!
//! # Dependencies
//! - `indexmap` provides [`Map`], so that construction and merging keep key order.
//! - `rust_decimal` and `num-bigint` back [`sum`] (behind the default `decimal` feature), which
//!   accumulates exactly and refuses to round.
//! - `tracing` logs contract violations before they panic (behind the default `tracing` feature).
//!   No subscriber is installed, that's left to the application.
//! - `derive_more` removes some very repetitive programming from the error types.

#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod access;
pub mod construct;
pub mod mapping;
#[cfg(feature = "decimal")]
pub mod numeric;
pub mod transform;

pub(crate) mod util;

#[doc(inline)]
pub use access::*;
#[doc(inline)]
pub use construct::*;
#[doc(inline)]
pub use mapping::*;
#[cfg(feature = "decimal")]
#[doc(inline)]
pub use numeric::*;
#[doc(inline)]
pub use transform::*;
#[doc(inline)]
pub use util::error::{
    ContractViolation, EmptyReduction, InexactSum, LengthMismatch, OddKeyValueCount,
    ZeroGroupSize,
};

/// An insertion-ordered map. Every map this crate builds or returns is one of these.
pub type Map<K, V> = indexmap::IndexMap<K, V>;

/// An unordered set without duplicates.
pub type Set<T> = std::collections::HashSet<T>;
