#![cfg(test)]

use super::*;
use crate::construct::{map_from_entries, map_from_pairs};

#[test]
fn test_invert() {
    assert_eq!(
        invert(&map_from_entries([("A", 1), ("B", 2)])),
        map_from_entries([(1, "A"), (2, "B")])
    );

    let inverted = invert(&map_from_entries([("A", 1), ("B", 2), ("C", 1)]));
    assert_eq!(
        inverted.into_iter().collect::<Vec<_>>(),
        [(1, "C"), (2, "B")],
        "The last key for a shared value should win."
    );
}

#[test]
fn test_merge() {
    let a = map_from_entries([("A", 1), ("B", 2), ("C", 3)]);
    let b = map_from_entries([("C", 10), ("D", 11)]);

    let merged = merge(&a, &b);
    assert_eq!(
        merged.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>(),
        [("A", 1), ("B", 2), ("C", 10), ("D", 11)],
        "The right map should win while the left map's key order is kept."
    );
    assert_eq!(a.len(), 3, "Merging shouldn't change the left map.");
    assert_eq!(a["C"], 3);

    let merged = merge(&b, &a);
    assert_eq!(
        merged.keys().copied().collect::<Vec<_>>(),
        ["C", "D", "A", "B"]
    );
    assert_eq!(merged["C"], 3);
}

#[test]
fn test_except() {
    let map = map_from_pairs(&["a", "1", "b", "2", "c", "3"]);

    let without = except(&map, &["b", "z"]);
    assert_eq!(
        without.into_iter().collect::<Vec<_>>(),
        [("a", "1"), ("c", "3")],
        "Absent keys should be ignored and the rest should keep their order."
    );
    assert_eq!(except(&map, &[]), map);
    assert_eq!(map.len(), 3);
}

#[test]
fn test_get() {
    let map = map_from_entries([("A", 1), ("B", 2)]);
    assert_eq!(get(&map, "A", 0), 1);
    assert_eq!(get(&map, "Z", 0), 0);

    let map = map_from_entries([("A", Some(1)), ("B", None)]);
    assert_eq!(get_present(&map, "A", 0), 1);
    assert_eq!(get_present(&map, "B", 0), 0, "A key mapped to nothing should use the default.");
    assert_eq!(get_present(&map, "Z", 0), 0);
    assert_eq!(
        get(&map, "B", Some(5)),
        None,
        "Plain get should hand back whatever is stored."
    );
}
