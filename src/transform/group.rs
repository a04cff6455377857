use std::hash::Hash;

use crate::Map;
use crate::util::error::{ContractViolation, ZeroGroupSize};
use crate::util::result::ResultExtension;

/// Returns a map from each key produced by `key` to the items that produced it, in their original
/// order. Keys are ordered by their first occurrence in `list`.
///
/// # Examples
/// ```
/// # use listkit::group_by;
/// let groups = group_by(&["one", "two", "three", "four"], |word| word.len());
/// assert_eq!(groups.keys().copied().collect::<Vec<_>>(), [3, 5, 4]);
/// assert_eq!(groups[&3_usize], ["one", "two"]);
/// ```
pub fn group_by<T, K, F>(list: &[T], mut key: F) -> Map<K, Vec<T>>
where
    T: Clone,
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    let mut groups = Map::new();
    for item in list {
        groups
            .entry(key(item))
            .or_insert_with(Vec::new)
            .push(item.clone());
    }
    groups
}

/// Splits `list` into consecutive groups of `size` items. The last group holds whatever remains
/// and may be shorter.
///
/// An empty list gives a single empty group, not zero groups.
///
/// # Panics
/// Panics if `size` is 0. See [`try_in_groups_of`] for a non-panicking version.
///
/// # Examples
/// ```
/// # use listkit::in_groups_of;
/// assert_eq!(
///     in_groups_of(3, &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]),
///     [vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9], vec![10]]
/// );
/// assert_eq!(in_groups_of::<u8>(3, &[]), [Vec::<u8>::new()]);
/// ```
pub fn in_groups_of<T: Clone>(size: usize, list: &[T]) -> Vec<Vec<T>> {
    try_in_groups_of(size, list).throw()
}

/// Splits `list` into consecutive groups of `size` items, or returns [`ZeroGroupSize`] if `size`
/// is 0.
pub fn try_in_groups_of<T: Clone>(
    size: usize,
    list: &[T],
) -> Result<Vec<Vec<T>>, ContractViolation> {
    if size == 0 {
        return ContractViolation::reject(ZeroGroupSize);
    }

    if list.is_empty() {
        return Ok(vec![Vec::new()]);
    }

    Ok(list.chunks(size).map(<[T]>::to_vec).collect())
}
