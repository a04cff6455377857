use std::hash::Hash;

use crate::Set;

/// Returns a set of the provided items, dropping duplicates.
pub fn set<T: Hash + Eq, I: IntoIterator<Item = T>>(items: I) -> Set<T> {
    items.into_iter().collect()
}

/// Returns a set containing copies of the items in `list`.
pub fn hash_set<T: Hash + Eq + Clone>(list: &[T]) -> Set<T> {
    list.iter().cloned().collect()
}
