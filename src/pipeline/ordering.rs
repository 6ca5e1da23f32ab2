//! Element ordering and equality helpers.
//!
//! Sorting here is a stable merge sort driven by a fallible comparator. It
//! never panics on an inconsistent comparator; instead the sorted output can
//! be checked pair by pair and a violation reported as
//! [`PipelineError::Comparison`].

use crate::errors::{BoxError, PipelineError, Result};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::Hash;

/// Ascending natural order.
pub fn natural<T: Ord + ?Sized>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

/// Descending natural order.
pub fn reverse<T: Ord + ?Sized>(a: &T, b: &T) -> Ordering {
    b.cmp(a)
}

/// Build a comparator that orders elements by an extracted key.
///
/// ```rust
/// use seqflow::pipeline::ordering::comparing;
///
/// let by_len = comparing(|s: &&str| s.len());
/// assert_eq!(by_len(&"API", &"Docker"), std::cmp::Ordering::Less);
/// ```
pub fn comparing<T, K, F>(key: F) -> impl Fn(&T, &T) -> Ordering
where
    F: Fn(&T) -> K,
    K: Ord,
{
    move |a, b| key(a).cmp(&key(b))
}

/// Sort `items` stably with `cmp`, optionally checking the result.
pub(crate) fn stable_sort<T, C>(items: Vec<T>, cmp: &mut C, verify: bool) -> Result<Vec<T>>
where
    C: FnMut(&T, &T) -> std::result::Result<Ordering, BoxError>,
{
    let sorted = merge_sort(items, cmp)?;
    if verify {
        verify_total_order(&sorted, cmp)?;
    }
    Ok(sorted)
}

fn compare<T, C>(cmp: &mut C, a: &T, b: &T) -> Result<Ordering>
where
    C: FnMut(&T, &T) -> std::result::Result<Ordering, BoxError>,
{
    cmp(a, b).map_err(|e| PipelineError::transform("sorted", e))
}

fn merge_sort<T, C>(mut items: Vec<T>, cmp: &mut C) -> Result<Vec<T>>
where
    C: FnMut(&T, &T) -> std::result::Result<Ordering, BoxError>,
{
    if items.len() <= 1 {
        return Ok(items);
    }

    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, cmp)?;
    let right = merge_sort(right, cmp)?;
    merge(left, right, cmp)
}

fn merge<T, C>(left: Vec<T>, right: Vec<T>, cmp: &mut C) -> Result<Vec<T>>
where
    C: FnMut(&T, &T) -> std::result::Result<Ordering, BoxError>,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        // Ties go to the left run, which keeps the sort stable.
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(cmp, r, l)? == Ordering::Less,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        merged.extend(if take_right { right.next() } else { left.next() });
    }

    Ok(merged)
}

fn verify_total_order<T, C>(sorted: &[T], cmp: &mut C) -> Result<()>
where
    C: FnMut(&T, &T) -> std::result::Result<Ordering, BoxError>,
{
    for (index, pair) in sorted.windows(2).enumerate() {
        let forward = compare(cmp, &pair[0], &pair[1])?;
        let backward = compare(cmp, &pair[1], &pair[0])?;

        if forward == Ordering::Greater || backward != forward.reverse() {
            return Err(PipelineError::comparison(format!(
                "elements at positions {} and {} compare as {:?} forwards and {:?} backwards",
                index,
                index + 1,
                forward,
                backward
            )));
        }
    }
    Ok(())
}

/// Remove later duplicates, keeping the order of first occurrence.
pub fn distinct_first_occurrence<T: Eq + Hash>(items: Vec<T>) -> Vec<T> {
    let keep: Vec<bool> = {
        let mut seen = HashSet::with_capacity(items.len());
        items.iter().map(|item| seen.insert(item)).collect()
    };

    items
        .into_iter()
        .zip(keep)
        .filter_map(|(item, keep)| keep.then_some(item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn infallible<T: Ord>(a: &T, b: &T) -> std::result::Result<Ordering, BoxError> {
        Ok(a.cmp(b))
    }

    #[test]
    fn test_sort_matches_std() {
        let input = vec![5, 3, 9, 1, 3, 7, 2, 8];
        let mut expected = input.clone();
        expected.sort();

        let sorted = stable_sort(input, &mut infallible::<i32>, true).unwrap();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn test_sort_is_stable() {
        let input = vec![(2, "a"), (1, "b"), (2, "c"), (1, "d"), (1, "e")];
        let mut by_key = |a: &(i32, &'static str), b: &(i32, &'static str)| -> std::result::Result<_, BoxError> {
            Ok(a.0.cmp(&b.0))
        };

        let sorted = stable_sort(input, &mut by_key, true).unwrap();
        assert_eq!(sorted, vec![(1, "b"), (1, "d"), (1, "e"), (2, "a"), (2, "c")]);
    }

    #[test]
    fn test_sort_empty_and_single() {
        let empty: Vec<i32> = stable_sort(Vec::new(), &mut infallible::<i32>, true).unwrap();
        assert!(empty.is_empty());
        assert_eq!(stable_sort(vec![4], &mut infallible::<i32>, true).unwrap(), vec![4]);
    }

    #[test]
    fn test_inconsistent_comparator_detected() {
        let mut always_less =
            |_: &i32, _: &i32| -> std::result::Result<_, BoxError> { Ok(Ordering::Less) };

        let err = stable_sort(vec![3, 1, 2], &mut always_less, true).unwrap_err();
        assert!(matches!(err, PipelineError::Comparison(_)));
    }

    #[test]
    fn test_inconsistent_comparator_tolerated_without_verification() {
        let mut always_less =
            |_: &i32, _: &i32| -> std::result::Result<_, BoxError> { Ok(Ordering::Less) };

        let sorted = stable_sort(vec![3, 1, 2], &mut always_less, false).unwrap();
        assert_eq!(sorted.len(), 3);
    }

    #[test]
    fn test_comparator_failure_is_transform_error() {
        let mut failing =
            |_: &i32, _: &i32| -> std::result::Result<Ordering, BoxError> { Err("boom".into()) };

        let err = stable_sort(vec![2, 1], &mut failing, true).unwrap_err();
        assert_eq!(err.stage(), Some("sorted"));
    }

    #[test]
    fn test_comparators() {
        assert_eq!(natural(&1, &2), Ordering::Less);
        assert_eq!(reverse(&1, &2), Ordering::Greater);

        let by_second = comparing(|pair: &(i32, i32)| pair.1);
        assert_eq!(by_second(&(9, 1), &(0, 2)), Ordering::Less);
    }

    #[test]
    fn test_distinct_keeps_first_occurrence() {
        assert_eq!(distinct_first_occurrence(vec![3, 1, 3, 2, 1]), vec![3, 1, 2]);
        assert_eq!(
            distinct_first_occurrence(vec!["b", "a", "b"]),
            vec!["b", "a"]
        );
        assert!(distinct_first_occurrence(Vec::<i32>::new()).is_empty());
    }
}
