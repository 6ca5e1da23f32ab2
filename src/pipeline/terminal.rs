//! Terminal operations: each one evaluates the whole chain in a single pass.

use super::collectors::{self, Partition};
use super::sequence::Pipeline;
use super::source::Elements;
use crate::errors::{BoxError, PipelineError, Result};
use std::collections::HashMap;
use std::hash::Hash;

fn finish<R>(terminal: &'static str, result: Result<R>) -> Result<R> {
    match &result {
        Ok(_) => tracing::debug!(terminal, "pipeline evaluation complete"),
        Err(e) => tracing::warn!(terminal, error = %e, "pipeline evaluation failed"),
    }
    result
}

fn fold_first<T, F>(mut elements: Elements<'_, T>, mut combiner: F) -> Result<Option<T>>
where
    F: FnMut(T, T) -> T,
{
    let Some(first) = elements.next() else {
        return Ok(None);
    };
    let seed = first?;
    elements
        .try_fold(seed, |acc, item| -> Result<T> { Ok(combiner(acc, item?)) })
        .map(Some)
}

impl<'a, T: 'a> Pipeline<'a, T> {
    /// Run `action` on every surviving element in order.
    pub fn for_each<F>(self, mut action: F) -> Result<()>
    where
        F: FnMut(T),
    {
        let result = self
            .evaluate("for_each")
            .try_for_each(|item| item.map(&mut action));
        finish("for_each", result)
    }

    /// Like [`for_each`](Self::for_each) but `action` may fail, aborting the pass.
    pub fn try_for_each<E, F>(self, mut action: F) -> Result<()>
    where
        E: Into<BoxError>,
        F: FnMut(T) -> std::result::Result<(), E>,
    {
        let result = self.evaluate("for_each").try_for_each(|item| -> Result<()> {
            action(item?).map_err(|e| PipelineError::transform("for_each", e))
        });
        finish("for_each", result)
    }

    /// Left fold in encounter order starting from `identity`.
    ///
    /// ```rust
    /// use seqflow::Pipeline;
    ///
    /// let sum = Pipeline::from_source(vec![2, 3, 3, 34, 54, 1, 12])
    ///     .reduce(0, |acc, x| acc + x)
    ///     .unwrap();
    /// assert_eq!(sum, 109);
    /// ```
    pub fn reduce<R, F>(self, identity: R, mut combiner: F) -> Result<R>
    where
        F: FnMut(R, T) -> R,
    {
        let result = self
            .evaluate("reduce")
            .try_fold(identity, |acc, item| -> Result<R> {
                Ok(combiner(acc, item?))
            });
        finish("reduce", result)
    }

    /// Fold seeded with the first element; `None` on empty input.
    pub fn reduce_first<F>(self, combiner: F) -> Result<Option<T>>
    where
        F: FnMut(T, T) -> T,
    {
        let result = fold_first(self.evaluate("reduce_first"), combiner);
        finish("reduce_first", result)
    }

    /// Fold seeded with the first element; empty input is an error.
    pub fn reduce_non_empty<F>(self, combiner: F) -> Result<T>
    where
        F: FnMut(T, T) -> T,
    {
        let result = fold_first(self.evaluate("reduce_non_empty"), combiner)
            .and_then(|folded| folded.ok_or(PipelineError::EmptySequence));
        finish("reduce_non_empty", result)
    }

    /// Materialize surviving elements, in order, into a new `Vec`.
    pub fn collect_to_list(self) -> Result<Vec<T>> {
        let result = self.evaluate("collect_to_list").collect::<Result<Vec<T>>>();
        if let Ok(items) = &result {
            tracing::debug!(elements = items.len(), "collected list");
        }
        finish("collect_to_list", result)
    }

    /// Materialize into a fixed-length boxed slice.
    pub fn to_array(self) -> Result<Box<[T]>> {
        let result = self
            .evaluate("to_array")
            .collect::<Result<Vec<T>>>()
            .map(Vec::into_boxed_slice);
        finish("to_array", result)
    }

    /// Group elements by key. Each group keeps encounter order; key order is unspecified.
    pub fn collect_grouped_by<K, F>(self, key: F) -> Result<HashMap<K, Vec<T>>>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let result = collectors::group(self.evaluate("collect_grouped_by"), key, |element| element);
        finish("collect_grouped_by", result)
    }

    /// Group elements by key and store `value(element)` in each group.
    pub fn collect_grouped_mapping<K, V, KF, VF>(
        self,
        key: KF,
        value: VF,
    ) -> Result<HashMap<K, Vec<V>>>
    where
        K: Eq + Hash,
        KF: FnMut(&T) -> K,
        VF: FnMut(T) -> V,
    {
        let result = collectors::group(self.evaluate("collect_grouped_mapping"), key, value);
        finish("collect_grouped_mapping", result)
    }

    /// Split elements into exactly two groups by `pred`.
    pub fn collect_partitioned_by<F>(self, pred: F) -> Result<Partition<T>>
    where
        F: FnMut(&T) -> bool,
    {
        let result = collectors::partition(self.evaluate("collect_partitioned_by"), pred);
        finish("collect_partitioned_by", result)
    }

    /// First surviving element, if any.
    ///
    /// Stops pulling as soon as one element survives, so upstream functions
    /// never see later elements. Materializing stages still buffer everything
    /// upstream of themselves.
    pub fn find_first(self) -> Result<Option<T>> {
        let result = self.evaluate("find_first").next().transpose();
        finish("find_first", result)
    }

    pub fn count(self) -> Result<usize> {
        let result = self
            .evaluate("count")
            .try_fold(0usize, |n, item| -> Result<usize> {
                item?;
                Ok(n + 1)
            });
        finish("count", result)
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::PipelineError;
    use crate::Pipeline;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    #[test]
    fn test_reduce_with_identity() {
        let sum = Pipeline::from_source(vec![2, 3, 3, 34, 54, 1, 12])
            .reduce(0, |a, b| a + b)
            .unwrap();
        assert_eq!(sum, 109);
    }

    #[test]
    fn test_reduce_changes_accumulator_type() {
        let joined = Pipeline::from_source(vec!["a", "b", "c"])
            .reduce(String::new(), |mut acc, s| {
                acc.push_str(s);
                acc
            })
            .unwrap();
        assert_eq!(joined, "abc");
    }

    #[test]
    fn test_reduce_empty_inputs() {
        assert_eq!(
            Pipeline::from_source(Vec::<i32>::new())
                .reduce(0, |a, b| a + b)
                .unwrap(),
            0
        );
        assert_eq!(
            Pipeline::from_source(Vec::<i32>::new())
                .reduce_first(|a, b| a + b)
                .unwrap(),
            None
        );
        assert!(matches!(
            Pipeline::from_source(Vec::<i32>::new()).reduce_non_empty(|a, b| a + b),
            Err(PipelineError::EmptySequence)
        ));
    }

    #[test]
    fn test_reduce_first_min_and_max() {
        let nums = vec![2, 3, 3, 34, 54, 1, 12];
        let min = Pipeline::from_source(nums.clone())
            .reduce_first(|a, b| if a > b { b } else { a })
            .unwrap();
        let max = Pipeline::from_source(nums)
            .reduce_non_empty(|a, b| if a < b { b } else { a })
            .unwrap();
        assert_eq!(min, Some(1));
        assert_eq!(max, 54);
    }

    #[test]
    fn test_to_array_is_fixed_length() {
        let array = Pipeline::from_source(1..=3).map(|x| x * 2).to_array().unwrap();
        assert_eq!(array.len(), 3);
        assert_eq!(&*array, &[2, 4, 6]);
    }

    #[test]
    fn test_for_each_order() {
        let seen = RefCell::new(Vec::new());
        Pipeline::from_source(vec![3, 1, 2])
            .for_each(|x| seen.borrow_mut().push(x))
            .unwrap();
        assert_eq!(seen.into_inner(), vec![3, 1, 2]);
    }

    #[test]
    fn test_try_for_each_stops_at_failure() {
        let seen = RefCell::new(Vec::new());
        let result = Pipeline::from_source(vec![1, 2, 3]).try_for_each(|x| {
            if x == 2 {
                return Err("two");
            }
            seen.borrow_mut().push(x);
            Ok(())
        });

        let err = result.unwrap_err();
        assert_eq!(err.stage(), Some("for_each"));
        assert_eq!(seen.into_inner(), vec![1]);
    }

    #[test]
    fn test_grouped_mapping() {
        let groups = Pipeline::from_source(vec![("a", 1), ("b", 2), ("a", 3)])
            .collect_grouped_mapping(|(name, _)| *name, |(_, n)| n)
            .unwrap();
        assert_eq!(groups["a"], vec![1, 3]);
        assert_eq!(groups["b"], vec![2]);
    }

    #[test]
    fn test_count_and_find_first() {
        assert_eq!(Pipeline::from_source(0..10).filter(|x| x % 3 == 0).count().unwrap(), 4);
        assert_eq!(Pipeline::from_source(0..10).filter(|x| *x > 6).find_first().unwrap(), Some(7));
        assert_eq!(Pipeline::<i32>::empty().find_first().unwrap(), None);
    }
}
