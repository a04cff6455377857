use std::collections::HashSet;
use std::hash::Hash;

use indexmap::Equivalent;

use crate::Map;

/// Returns a new map with the values of `map` as keys and its keys as values.
///
/// If several keys share a value, the last of them wins, in the position of the first.
///
/// # Examples
/// ```
/// # use listkit::{invert, map_from_entries};
/// let inverted = invert(&map_from_entries([("A", 1), ("B", 2)]));
/// assert_eq!(inverted, map_from_entries([(1, "A"), (2, "B")]));
/// ```
pub fn invert<K, V>(map: &Map<K, V>) -> Map<V, K>
where
    K: Clone,
    V: Hash + Eq + Clone,
{
    map.iter()
        .map(|(key, value)| (value.clone(), key.clone()))
        .collect()
}

/// Returns a new map containing the entries of `a` overwritten by those of `b`.
///
/// Keys of `a` keep their positions, even where `b` replaces their values. Keys only in `b` are
/// appended in `b`'s order.
///
/// # Examples
/// ```
/// # use listkit::{map_from_entries, merge};
/// let merged = merge(
///     &map_from_entries([("A", 1), ("B", 2), ("C", 3)]),
///     &map_from_entries([("C", 10), ("D", 11)]),
/// );
/// assert_eq!(
///     merged.into_iter().collect::<Vec<_>>(),
///     [("A", 1), ("B", 2), ("C", 10), ("D", 11)]
/// );
/// ```
pub fn merge<K, V>(a: &Map<K, V>, b: &Map<K, V>) -> Map<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    let mut merged = a.clone();
    merged.extend(b.iter().map(|(key, value)| (key.clone(), value.clone())));
    merged
}

/// Returns a copy of `map` without any of the provided `keys`. Keys that aren't in `map` are
/// ignored.
pub fn except<K, V>(map: &Map<K, V>, keys: &[K]) -> Map<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    let excluded: HashSet<&K> = keys.iter().collect();
    map.iter()
        .filter(|(key, _)| !excluded.contains(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Returns a copy of the value for `key`, or `default` if `map` has no such key.
pub fn get<K, V, Q>(map: &Map<K, V>, key: &Q, default: V) -> V
where
    K: Hash + Eq,
    V: Clone,
    Q: Hash + Equivalent<K> + ?Sized,
{
    map.get(key).cloned().unwrap_or(default)
}

/// Returns a copy of the value for `key`, or `default` if `map` has no such key or the key maps to
/// [`None`].
pub fn get_present<K, V, Q>(map: &Map<K, Option<V>>, key: &Q, default: V) -> V
where
    K: Hash + Eq,
    V: Clone,
    Q: Hash + Equivalent<K> + ?Sized,
{
    map.get(key).cloned().flatten().unwrap_or(default)
}
