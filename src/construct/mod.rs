//! Construction helpers for lists, arrays, sets and maps.
//!
//! Maps are built as insertion-ordered [`Map`](crate::Map)s. The three ways of building one
//! (interleaved keys and values, parallel key and value slices, or a sequence of pairs) are
//! separate functions rather than overloads, see [`map_from_pairs`], [`map_from_keys_values`] and
//! [`map_from_entries`].

mod list;
mod map;
mod set;

pub use list::*;
pub use map::*;
pub use set::*;
