use std::hash::Hash;

use crate::Map;
use crate::util::error::{ContractViolation, LengthMismatch, OddKeyValueCount};
use crate::util::result::ResultExtension;

/// Returns a map built from an interleaved sequence of keys and values (`key, value, key, value,
/// ...`), in order. A repeated key keeps its first position and takes the last value.
///
/// # Panics
/// Panics if `objects` has an odd number of elements. See [`try_map_from_pairs`] for a
/// non-panicking version.
///
/// # Examples
/// ```
/// # use listkit::map_from_pairs;
/// let greeting = map_from_pairs(&["greeting", "Hey", "name", "Joe"]);
/// assert_eq!(greeting["greeting"], "Hey");
/// assert_eq!(greeting["name"], "Joe");
/// ```
pub fn map_from_pairs<T: Hash + Eq + Clone>(objects: &[T]) -> Map<T, T> {
    try_map_from_pairs(objects).throw()
}

/// Returns a map built from an interleaved sequence of keys and values, or
/// [`OddKeyValueCount`] if the final key has no value.
pub fn try_map_from_pairs<T: Hash + Eq + Clone>(
    objects: &[T],
) -> Result<Map<T, T>, ContractViolation> {
    if objects.len() % 2 != 0 {
        return ContractViolation::reject(OddKeyValueCount { len: objects.len() });
    }

    Ok(objects
        .chunks_exact(2)
        .map(|pair| (pair[0].clone(), pair[1].clone()))
        .collect())
}

/// Returns a map pairing each of `keys` with the value at the same position in `values`.
///
/// # Panics
/// Panics if `keys` and `values` differ in length. See [`try_map_from_keys_values`] for a
/// non-panicking version.
///
/// # Examples
/// ```
/// # use listkit::map_from_keys_values;
/// let greeting = map_from_keys_values(&["greeting", "name"], &["Hey", "Joe"]);
/// assert_eq!(greeting.get("name"), Some(&"Joe"));
/// ```
pub fn map_from_keys_values<K, V>(keys: &[K], values: &[V]) -> Map<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    try_map_from_keys_values(keys, values).throw()
}

/// Returns a map pairing each of `keys` with the value at the same position in `values`, or
/// [`LengthMismatch`] if there isn't exactly one value per key.
pub fn try_map_from_keys_values<K, V>(
    keys: &[K],
    values: &[V],
) -> Result<Map<K, V>, ContractViolation>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    if keys.len() != values.len() {
        return ContractViolation::reject(LengthMismatch {
            keys: keys.len(),
            values: values.len(),
        });
    }

    Ok(keys.iter().cloned().zip(values.iter().cloned()).collect())
}

/// Returns a map of the provided key / value pairs, in order.
pub fn map_from_entries<K, V, I>(entries: I) -> Map<K, V>
where
    K: Hash + Eq,
    I: IntoIterator<Item = (K, V)>,
{
    entries.into_iter().collect()
}
