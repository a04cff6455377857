/// Returns a list containing the provided items, in order.
///
/// # Examples
/// ```
/// # use listkit::list;
/// let letters = list(["A", "B", "C", "D"]);
/// assert_eq!(letters, vec!["A", "B", "C", "D"]);
/// ```
pub fn list<T, I: IntoIterator<Item = T>>(items: I) -> Vec<T> {
    items.into_iter().collect()
}

/// Returns a list containing copies of the items in any borrowed collection, in its iteration
/// order.
///
/// # Examples
/// ```
/// # use listkit::{array, list_from};
/// let letters = array(["A", "B", "C", "D"]);
/// assert_eq!(list_from(letters.iter()), vec!["A", "B", "C", "D"]);
/// ```
pub fn list_from<'a, T, I>(items: I) -> Vec<T>
where
    T: Clone + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().cloned().collect()
}

/// Returns a fixed size array containing the provided items, in order.
pub fn array<T, I: IntoIterator<Item = T>>(items: I) -> Box<[T]> {
    items.into_iter().collect()
}

/// Returns a fixed size array containing copies of the items in `list`. An empty list gives an
/// empty array.
pub fn array_from_list<T: Clone>(list: &[T]) -> Box<[T]> {
    Box::from(list)
}

/// Returns a shallow copy of `list`.
pub fn copy<T: Clone>(list: &[T]) -> Vec<T> {
    list.to_vec()
}

/// Returns the integers from `start_inclusive` up to, but not including, `end_exclusive`. The
/// list is empty if `end_exclusive <= start_inclusive`.
///
/// # Examples
/// ```
/// # use listkit::range;
/// assert_eq!(range(0, 5), vec![0, 1, 2, 3, 4]);
/// assert!(range(5, 0).is_empty());
/// ```
pub fn range(start_inclusive: i32, end_exclusive: i32) -> Vec<i32> {
    (start_inclusive..end_exclusive).collect()
}
