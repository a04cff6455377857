use std::collections::HashSet;
use std::hash::Hash;

use crate::Set;
use crate::util::error::{ContractViolation, EmptyReduction};
use crate::util::result::ResultExtension;

/// Returns a new list of the results of applying `func` to each item in `list`.
///
/// # Examples
/// ```
/// # use listkit::{map, range};
/// let fizz_buzz = map(&range(1, 16), |i| match (i % 3, i % 5) {
///     (0, 0) => "FizzBuzz".to_string(),
///     (0, _) => "Fizz".to_string(),
///     (_, 0) => "Buzz".to_string(),
///     _ => i.to_string(),
/// });
/// assert_eq!(fizz_buzz[2], "Fizz");
/// assert_eq!(fizz_buzz[14], "FizzBuzz");
/// ```
pub fn map<T, R, F: FnMut(&T) -> R>(list: &[T], func: F) -> Vec<R> {
    list.iter().map(func).collect()
}

/// Returns a new list of the items in `list` that match `predicate`, in order.
pub fn filter<T, F>(list: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    list.iter().filter(|item| predicate(*item)).cloned().collect()
}

/// Combines the items of `list` from left to right with `accumulator`, starting from the first
/// item.
///
/// # Panics
/// Panics if `list` is empty, as there is nothing to start from. See [`try_reduce`] for a
/// non-panicking version.
///
/// # Examples
/// ```
/// # use listkit::reduce;
/// assert_eq!(reduce(&[1, 2, 3, 4, 5], |a, b| a + b), 15);
/// ```
pub fn reduce<T, F>(list: &[T], accumulator: F) -> T
where
    T: Clone,
    F: FnMut(T, T) -> T,
{
    try_reduce(list, accumulator).throw()
}

/// Combines the items of `list` from left to right with `accumulator`, or returns
/// [`EmptyReduction`] if `list` is empty.
pub fn try_reduce<T, F>(list: &[T], accumulator: F) -> Result<T, ContractViolation>
where
    T: Clone,
    F: FnMut(T, T) -> T,
{
    match list.iter().cloned().reduce(accumulator) {
        Some(reduced) => Ok(reduced),
        None => ContractViolation::reject(EmptyReduction),
    }
}

/// Returns the first occurrence of each distinct item in `list`, in order.
pub fn distinct<T: Hash + Eq + Clone>(list: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(list.len());
    list.iter().filter(|item| seen.insert(*item)).cloned().collect()
}

/// Returns the present items of `list`, dropping every [`None`].
pub fn compact<T: Clone>(list: &[Option<T>]) -> Vec<T> {
    list.iter().flatten().cloned().collect()
}

/// Concatenates one level of nested lists into a single list. Deeper nesting is left as is.
pub fn flatten<T: Clone, L: AsRef<[T]>>(lists: &[L]) -> Vec<T> {
    lists
        .iter()
        .flat_map(|items| items.as_ref().iter().cloned())
        .collect()
}

/// Returns a copy of `list` in reverse order.
pub fn reverse<T: Clone>(list: &[T]) -> Vec<T> {
    list.iter().rev().cloned().collect()
}

/// Pairs each item of `a` with the item at the same position in `b`.
///
/// The result always has one pair per item of `a`. If `b` is shorter, the missing slots are
/// [`None`]. If `b` is longer, its extra items are dropped.
///
/// # Examples
/// ```
/// # use listkit::zip;
/// assert_eq!(
///     zip(&["A", "C", "E"], &["B", "D"]),
///     [("A", Some("B")), ("C", Some("D")), ("E", None)]
/// );
/// assert_eq!(zip(&["A"], &["B", "D"]), [("A", Some("B"))]);
/// ```
pub fn zip<A: Clone, B: Clone>(a: &[A], b: &[B]) -> Vec<(A, Option<B>)> {
    a.iter()
        .enumerate()
        .map(|(index, item)| (item.clone(), b.get(index).cloned()))
        .collect()
}

/// Returns the set of items in `a` that aren't in `b` (`a \ b`). The result has no meaningful
/// order.
pub fn difference<T: Hash + Eq + Clone>(a: &[T], b: &[T]) -> Set<T> {
    let excluded: HashSet<&T> = b.iter().collect();
    a.iter()
        .filter(|item| !excluded.contains(item))
        .cloned()
        .collect()
}
