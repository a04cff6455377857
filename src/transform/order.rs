use std::cmp::Ordering;

/// Returns a copy of `list` sorted by natural order. Equal items keep their relative order.
pub fn sort<T: Ord + Clone>(list: &[T]) -> Vec<T> {
    let mut sorted = list.to_vec();
    sorted.sort();
    sorted
}

/// Returns a copy of `list` sorted by the natural order of the key derived from each item.
///
/// The sort is stable: items with equal keys keep their relative order from `list`.
///
/// # Examples
/// ```
/// # use listkit::sort_by;
/// let words = ["The", "Quick", "Brown", "Fox", "Jumped", "over", "the", "lazy", "dogs"];
/// assert_eq!(
///     sort_by(&words, |word| word.len()),
///     ["The", "Fox", "the", "over", "lazy", "dogs", "Quick", "Brown", "Jumped"]
/// );
/// ```
pub fn sort_by<T, K, F>(list: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut sorted = list.to_vec();
    sorted.sort_by_key(key);
    sorted
}

/// Returns a copy of `list` sorted with the provided `comparator`. The sort is stable.
pub fn sort_with<T, F>(list: &[T], comparator: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted = list.to_vec();
    sorted.sort_by(comparator);
    sorted
}
