//! Stage descriptors for lazy pipelines.
//!
//! Every intermediate call appends one descriptor to a pipeline's plan. The
//! public [`StageKind`] tag names the operation; the crate-private [`Stage`]
//! carries the caller's function for type-preserving stages. Map and flat-map
//! change the element type, so they start a new typed segment instead of
//! living in a segment's stage list (see `source.rs`).

use super::ordering;
use super::source::{Elements, EvalContext};
use crate::errors::{BoxError, PipelineError, Result};
use std::cmp::Ordering;
use std::fmt;

/// Tag identifying a pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
    Map,
    Filter,
    FlatMap,
    Distinct,
    Sorted,
    Peek,
    Limit,
}

impl StageKind {
    /// Stage name used in errors and log events.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Map => "map",
            Self::Filter => "filter",
            Self::FlatMap => "flat_map",
            Self::Distinct => "distinct",
            Self::Sorted => "sorted",
            Self::Peek => "peek",
            Self::Limit => "limit",
        }
    }

    /// Whether the stage must see all upstream output before yielding.
    pub const fn requires_materialization(self) -> bool {
        matches!(self, Self::Distinct | Self::Sorted)
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub(crate) type Predicate<'a, T> = Box<dyn FnMut(&T) -> std::result::Result<bool, BoxError> + 'a>;
pub(crate) type Comparator<'a, T> =
    Box<dyn FnMut(&T, &T) -> std::result::Result<Ordering, BoxError> + 'a>;

/// Type-preserving stage carrying the caller's function.
pub(crate) enum Stage<'a, T> {
    Filter(Predicate<'a, T>),
    Peek(Box<dyn FnMut(&T) + 'a>),
    Distinct(fn(Vec<T>) -> Vec<T>),
    Sorted(Comparator<'a, T>),
    Limit(usize),
}

impl<'a, T: 'a> Stage<'a, T> {
    pub(crate) fn kind(&self) -> StageKind {
        match self {
            Self::Filter(_) => StageKind::Filter,
            Self::Peek(_) => StageKind::Peek,
            Self::Distinct(_) => StageKind::Distinct,
            Self::Sorted(_) => StageKind::Sorted,
            Self::Limit(_) => StageKind::Limit,
        }
    }

    /// Wrap `upstream` with this stage. Nothing is evaluated here.
    pub(crate) fn attach(self, upstream: Elements<'a, T>, ctx: &EvalContext) -> Elements<'a, T> {
        match self {
            Self::Filter(mut pred) => Box::new(upstream.filter_map(move |item| match item {
                Ok(value) => match pred(&value) {
                    Ok(true) => Some(Ok(value)),
                    Ok(false) => None,
                    Err(e) => Some(Err(PipelineError::transform(StageKind::Filter.name(), e))),
                },
                Err(e) => Some(Err(e)),
            })),
            Self::Peek(mut action) => Box::new(upstream.map(move |item| {
                item.map(|value| {
                    action(&value);
                    value
                })
            })),
            Self::Limit(max) => Box::new(upstream.take(max)),
            Self::Distinct(dedup) => Box::new(Materialized::new(
                upstream,
                Box::new(move |items| Ok(dedup(items))),
            )),
            Self::Sorted(mut cmp) => {
                let verify = ctx.config.verify_ordering;
                Box::new(Materialized::new(
                    upstream,
                    Box::new(move |items| ordering::stable_sort(items, &mut cmp, verify)),
                ))
            }
        }
    }
}

type Barrier<'a, T> = Box<dyn FnOnce(Vec<T>) -> Result<Vec<T>> + 'a>;

enum BarrierState<'a, T> {
    Pending {
        upstream: Elements<'a, T>,
        barrier: Barrier<'a, T>,
    },
    Draining(std::vec::IntoIter<T>),
    Done,
}

/// Buffers all upstream output on first pull, then yields the barrier's result.
struct Materialized<'a, T> {
    state: BarrierState<'a, T>,
}

impl<'a, T> Materialized<'a, T> {
    fn new(upstream: Elements<'a, T>, barrier: Barrier<'a, T>) -> Self {
        Self {
            state: BarrierState::Pending { upstream, barrier },
        }
    }
}

impl<T> Iterator for Materialized<'_, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match std::mem::replace(&mut self.state, BarrierState::Done) {
                BarrierState::Pending { upstream, barrier } => {
                    match upstream.collect::<Result<Vec<T>>>().and_then(barrier) {
                        Ok(items) => self.state = BarrierState::Draining(items.into_iter()),
                        Err(e) => return Some(Err(e)),
                    }
                }
                BarrierState::Draining(mut items) => {
                    let next = items.next()?;
                    self.state = BarrierState::Draining(items);
                    return Some(Ok(next));
                }
                BarrierState::Done => return None,
            }
        }
    }
}
