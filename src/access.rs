//! Accessors for the ends of a list.
//!
//! Each accessor takes anything that converts into `Option<&[T]>`, so a slice can be passed
//! directly and `None` stands in for a list that doesn't exist at all. Absence is never an error
//! here: missing or empty input gives [`None`] (or an empty list for [`rest`]) instead of a panic.


/// Returns a reference to the first item in the list, or [`None`] if the list is empty or absent.
///
/// # Examples
/// ```
/// # use listkit::first;
/// let empty: &[u8] = &[];
/// assert_eq!(first(["A", "B", "C", "D"].as_slice()), Some(&"A"));
/// assert_eq!(first(empty), None);
/// assert_eq!(first::<u8>(None), None);
/// ```
pub fn first<'a, T: 'a>(list: impl Into<Option<&'a [T]>>) -> Option<&'a T> {
    list.into()?.first()
}

/// Returns a reference to the last item in the list, or [`None`] if the list is empty or absent.
pub fn last<'a, T: 'a>(list: impl Into<Option<&'a [T]>>) -> Option<&'a T> {
    list.into()?.last()
}

/// Returns a copy of the first `n` items in the list. A list with fewer than `n` items is copied
/// in full.
///
/// Returns [`None`] only if the list itself is absent.
pub fn head<'a, T: Clone + 'a>(list: impl Into<Option<&'a [T]>>, n: usize) -> Option<Vec<T>> {
    let list = list.into()?;
    Some(list[..n.min(list.len())].to_vec())
}

/// Returns a copy of the last `n` items in the list. A list with fewer than `n` items is copied
/// in full.
///
/// Returns [`None`] only if the list itself is absent.
pub fn tail<'a, T: Clone + 'a>(list: impl Into<Option<&'a [T]>>, n: usize) -> Option<Vec<T>> {
    let list = list.into()?;
    Some(list[list.len().saturating_sub(n)..].to_vec())
}

/// Returns a copy of every item after the first.
///
/// Unlike [`first`], an empty list gives an empty list rather than [`None`]. Only an absent list
/// gives [`None`].
///
/// # Examples
/// ```
/// # use listkit::rest;
/// let empty: &[u8] = &[];
/// assert_eq!(rest(["A", "B", "C"].as_slice()), Some(vec!["B", "C"]));
/// assert_eq!(rest(empty), Some(vec![]));
/// assert_eq!(rest::<u8>(None), None);
/// ```
pub fn rest<'a, T: Clone + 'a>(list: impl Into<Option<&'a [T]>>) -> Option<Vec<T>> {
    let list = list.into()?;
    Some(list.split_first().map_or_else(Vec::new, |(_, rest)| rest.to_vec()))
}
