//! Accumulators behind the grouping and partitioning terminals.

use super::source::Elements;
use crate::errors::Result;
use std::collections::HashMap;
use std::hash::Hash;

/// Elements split by a predicate, each group in encounter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<T> {
    /// Elements for which the predicate held
    pub true_group: Vec<T>,
    /// Elements for which it did not
    pub false_group: Vec<T>,
}

impl<T> Default for Partition<T> {
    fn default() -> Self {
        Self {
            true_group: Vec::new(),
            false_group: Vec::new(),
        }
    }
}

impl<T> Partition<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, matched: bool, value: T) {
        if matched {
            self.true_group.push(value);
        } else {
            self.false_group.push(value);
        }
    }

    /// The group for `matched`, as `partitioningBy` exposes `map.get(true)`.
    pub fn get(&self, matched: bool) -> &[T] {
        if matched {
            &self.true_group
        } else {
            &self.false_group
        }
    }

    pub fn len(&self) -> usize {
        self.true_group.len() + self.false_group.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(true_group, false_group)`
    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        (self.true_group, self.false_group)
    }
}

pub(crate) fn partition<T, P>(elements: Elements<'_, T>, mut pred: P) -> Result<Partition<T>>
where
    P: FnMut(&T) -> bool,
{
    let mut partition = Partition::new();
    for item in elements {
        let value = item?;
        let matched = pred(&value);
        partition.push(matched, value);
    }
    Ok(partition)
}

/// Group elements under `key`, storing `value(element)` in encounter order.
pub(crate) fn group<T, K, V, KF, VF>(
    elements: Elements<'_, T>,
    mut key: KF,
    mut value: VF,
) -> Result<HashMap<K, Vec<V>>>
where
    K: Eq + Hash,
    KF: FnMut(&T) -> K,
    VF: FnMut(T) -> V,
{
    let mut groups: HashMap<K, Vec<V>> = HashMap::new();
    for item in elements {
        let element = item?;
        groups.entry(key(&element)).or_default().push(value(element));
    }
    Ok(groups)
}
