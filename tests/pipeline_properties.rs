//! Property-based tests for pipeline evaluation
//!
//! These tests verify invariants that should hold for all inputs:
//! - map and filter agree with element-wise application, order preserved
//! - distinct keeps exactly the first occurrence of each value
//! - sorting is stable and ordered
//! - reductions and counts agree with direct iteration
//! - partitioning loses nothing and respects the predicate
//! - equivalent pipelines give identical results

use proptest::collection::vec;
use proptest::prelude::*;
use seqflow::Pipeline;
use std::collections::HashSet;

proptest! {
    #[test]
    fn prop_map_is_elementwise(items in vec(any::<i32>(), 0..64)) {
        let mapped = Pipeline::from_source(items.clone())
            .map(|x| x.wrapping_mul(3))
            .collect_to_list()
            .unwrap();
        let expected: Vec<i32> = items.iter().map(|x| x.wrapping_mul(3)).collect();
        prop_assert_eq!(mapped, expected);
    }

    #[test]
    fn prop_filter_keeps_matching_subsequence(items in vec(-100i32..100, 0..64), threshold in -100i32..100) {
        let kept = Pipeline::from_source(items.clone())
            .filter(move |x| *x >= threshold)
            .collect_to_list()
            .unwrap();
        let expected: Vec<i32> = items.into_iter().filter(|x| *x >= threshold).collect();
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn prop_distinct_keeps_first_occurrences(items in vec(0u8..16, 0..64)) {
        let result = Pipeline::from_source(items.clone())
            .distinct()
            .collect_to_list()
            .unwrap();

        let mut seen = HashSet::new();
        let expected: Vec<u8> = items.into_iter().filter(|x| seen.insert(*x)).collect();
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn prop_sorted_is_stable(keys in vec(0u8..8, 0..64)) {
        let tagged: Vec<(u8, usize)> = keys.into_iter().enumerate().map(|(i, k)| (k, i)).collect();

        let sorted = Pipeline::from_source(tagged.clone())
            .sorted_by_key(|pair| pair.0)
            .collect_to_list()
            .unwrap();

        let mut expected = tagged;
        expected.sort_by_key(|pair| pair.0);
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn prop_reduce_matches_sum(items in vec(any::<i32>(), 0..64)) {
        let total = Pipeline::from_source(items.clone())
            .map(i64::from)
            .reduce(0i64, |acc, x| acc + x)
            .unwrap();
        prop_assert_eq!(total, items.iter().map(|x| i64::from(*x)).sum::<i64>());
    }

    #[test]
    fn prop_reduce_first_is_none_only_when_empty(items in vec(any::<u16>(), 0..16)) {
        let max = Pipeline::from_source(items.clone())
            .reduce_first(|a, b| a.max(b))
            .unwrap();
        prop_assert_eq!(max, items.iter().copied().max());
    }

    #[test]
    fn prop_find_first_matches_iterator(items in vec(0i32..50, 0..32)) {
        let found = Pipeline::from_source(items.clone())
            .filter(|x| x % 7 == 0)
            .find_first()
            .unwrap();
        prop_assert_eq!(found, items.into_iter().find(|x| x % 7 == 0));
    }

    #[test]
    fn prop_partition_is_complete(items in vec(any::<i16>(), 0..64)) {
        let partition = Pipeline::from_source(items.clone())
            .collect_partitioned_by(|x| *x > 0)
            .unwrap();

        prop_assert_eq!(partition.len(), items.len());
        prop_assert!(partition.true_group.iter().all(|x| *x > 0));
        prop_assert!(partition.false_group.iter().all(|x| *x <= 0));
    }

    #[test]
    fn prop_limit_bounds_count(items in vec(any::<u8>(), 0..64), max in 0usize..80) {
        let count = Pipeline::from_source(items.clone()).limit(max).count().unwrap();
        prop_assert_eq!(count, items.len().min(max));
    }

    #[test]
    fn prop_equivalent_pipelines_agree(items in vec(0i32..30, 0..64)) {
        let run = |source: Vec<i32>| {
            Pipeline::from_source(source)
                .filter(|x| x % 2 == 1)
                .flat_map(|x| vec![x, x + 100])
                .distinct()
                .sorted()
                .collect_to_list()
                .unwrap()
        };
        prop_assert_eq!(run(items.clone()), run(items));
    }

    #[test]
    fn prop_to_array_matches_list(items in vec(any::<u32>(), 0..32)) {
        let array = Pipeline::from_source(items.clone()).to_array().unwrap();
        let list = Pipeline::from_source(items).collect_to_list().unwrap();
        prop_assert_eq!(array.into_vec(), list);
    }
}
