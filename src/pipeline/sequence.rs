//! The lazy pipeline value and its intermediate stages.

use super::cancel::CancellationToken;
use super::ordering;
use super::source::{Elements, EvalContext, FlatMapHead, MapHead, SourceHead, Upstream};
use super::stage::{Stage, StageKind};
use crate::config::PipelineConfig;
use crate::errors::BoxError;
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

/// A lazy, single-use chain of transformations over a sequence.
///
/// Intermediate stages consume the pipeline and return a new one; nothing is
/// evaluated until a terminal operation runs. Terminal operations also consume
/// the pipeline, so a spent pipeline cannot be evaluated again.
///
/// Evaluation is fail-fast and non-transactional. The first failure from a
/// caller-supplied function aborts the terminal call, and side effects already
/// performed by `peek` or `for_each` are not undone.
///
/// # Example
///
/// ```rust
/// use seqflow::Pipeline;
///
/// let squares_of_evens = Pipeline::from_source(vec![1, 2, 3, 4, 5])
///     .filter(|x| x % 2 == 0)
///     .map(|x| x * x)
///     .collect_to_list()
///     .unwrap();
///
/// assert_eq!(squares_of_evens, vec![4, 16]);
/// ```
pub struct Pipeline<'a, T> {
    head: Box<dyn Upstream<'a, T> + 'a>,
    stages: Vec<Stage<'a, T>>,
    plan: Vec<StageKind>,
    ctx: EvalContext,
}

impl<'a, T: 'a> Pipeline<'a, T> {
    /// Create a pipeline reading from `source`.
    ///
    /// The source is pulled lazily and may be unbounded; pair unbounded
    /// sources with [`limit`](Self::limit), a short-circuiting terminal, or a
    /// [`CancellationToken`].
    pub fn from_source<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Self {
            head: Box::new(SourceHead {
                iter: source.into_iter(),
            }),
            stages: Vec::new(),
            plan: Vec::new(),
            ctx: EvalContext::default(),
        }
    }

    pub fn empty() -> Self {
        Self::from_source(std::iter::empty())
    }

    /// Unbounded source: `seed`, `step(seed)`, `step(step(seed))`, ...
    pub fn iterate<F>(seed: T, mut step: F) -> Self
    where
        F: FnMut(&T) -> T + 'a,
    {
        Self::from_source(std::iter::successors(Some(seed), move |prev| {
            Some(step(prev))
        }))
    }

    /// Replace the evaluation settings.
    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.ctx.config = config;
        self
    }

    /// Attach a token that halts evaluation between elements once cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.ctx.cancel = Some(token);
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.ctx.config
    }

    /// Stages in application order, across all segments.
    pub fn plan(&self) -> &[StageKind] {
        &self.plan
    }

    fn push(mut self, stage: Stage<'a, T>) -> Self {
        self.plan.push(stage.kind());
        self.stages.push(stage);
        self
    }

    /// Close this segment and start a new one headed by `make(self)`.
    fn segment<U, H>(self, kind: StageKind, make: impl FnOnce(Self) -> H) -> Pipeline<'a, U>
    where
        H: Upstream<'a, U> + 'a,
    {
        let mut plan = self.plan.clone();
        plan.push(kind);
        let ctx = self.ctx.clone();

        Pipeline {
            head: Box::new(make(self)),
            stages: Vec::new(),
            plan,
            ctx,
        }
    }

    pub fn map<U, F>(self, mut f: F) -> Pipeline<'a, U>
    where
        U: 'a,
        F: FnMut(T) -> U + 'a,
    {
        self.segment(StageKind::Map, move |upstream| MapHead {
            upstream,
            f: move |value: T| Ok::<U, BoxError>(f(value)),
        })
    }

    /// Map with a fallible function. A failure aborts evaluation at that element.
    pub fn try_map<U, E, F>(self, mut f: F) -> Pipeline<'a, U>
    where
        U: 'a,
        E: Into<BoxError>,
        F: FnMut(T) -> Result<U, E> + 'a,
    {
        self.segment(StageKind::Map, move |upstream| MapHead {
            upstream,
            f: move |value: T| f(value).map_err(Into::<BoxError>::into),
        })
    }

    pub fn filter<F>(self, mut pred: F) -> Self
    where
        F: FnMut(&T) -> bool + 'a,
    {
        self.push(Stage::Filter(Box::new(move |value: &T| {
            Ok::<bool, BoxError>(pred(value))
        })))
    }

    pub fn try_filter<E, F>(self, mut pred: F) -> Self
    where
        E: Into<BoxError>,
        F: FnMut(&T) -> Result<bool, E> + 'a,
    {
        self.push(Stage::Filter(Box::new(move |value: &T| {
            pred(value).map_err(Into::<BoxError>::into)
        })))
    }

    /// Replace each element with the elements of `f(element)`, one level deep.
    pub fn flat_map<U, J, F>(self, mut f: F) -> Pipeline<'a, U>
    where
        U: 'a,
        J: IntoIterator<Item = U> + 'a,
        J::IntoIter: 'a,
        F: FnMut(T) -> J + 'a,
    {
        self.segment(StageKind::FlatMap, move |upstream| FlatMapHead {
            upstream,
            f: move |value: T| Ok::<J, BoxError>(f(value)),
        })
    }

    pub fn try_flat_map<U, J, E, F>(self, mut f: F) -> Pipeline<'a, U>
    where
        U: 'a,
        J: IntoIterator<Item = U> + 'a,
        J::IntoIter: 'a,
        E: Into<BoxError>,
        F: FnMut(T) -> Result<J, E> + 'a,
    {
        self.segment(StageKind::FlatMap, move |upstream| FlatMapHead {
            upstream,
            f: move |value: T| f(value).map_err(Into::<BoxError>::into),
        })
    }

    /// Drop later duplicates, keeping first occurrences in order.
    ///
    /// Buffers all upstream output before yielding anything.
    pub fn distinct(self) -> Self
    where
        T: Eq + Hash,
    {
        self.push(Stage::Distinct(ordering::distinct_first_occurrence::<T>))
    }

    /// Stable sort in natural order. Buffers all upstream output.
    pub fn sorted(self) -> Self
    where
        T: Ord,
    {
        self.sorted_by(ordering::natural::<T>)
    }

    /// Stable sort with a comparator. Buffers all upstream output.
    pub fn sorted_by<F>(self, mut cmp: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering + 'a,
    {
        self.push(Stage::Sorted(Box::new(move |a: &T, b: &T| {
            Ok::<Ordering, BoxError>(cmp(a, b))
        })))
    }

    pub fn sorted_by_key<K, F>(self, mut key: F) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K + 'a,
    {
        self.sorted_by(move |a, b| key(a).cmp(&key(b)))
    }

    pub fn try_sorted_by<E, F>(self, mut cmp: F) -> Self
    where
        E: Into<BoxError>,
        F: FnMut(&T, &T) -> Result<Ordering, E> + 'a,
    {
        self.push(Stage::Sorted(Box::new(move |a: &T, b: &T| {
            cmp(a, b).map_err(Into::<BoxError>::into)
        })))
    }

    /// Observe each element as it passes, without changing it.
    ///
    /// Runs exactly once per element per evaluation, in pipeline order.
    pub fn peek<F>(self, action: F) -> Self
    where
        F: FnMut(&T) + 'a,
    {
        self.push(Stage::Peek(Box::new(action)))
    }

    /// Keep at most `max` elements and stop pulling upstream after that.
    pub fn limit(self, max: usize) -> Self {
        self.push(Stage::Limit(max))
    }

    /// Open every segment with `ctx` and chain this segment's stages.
    pub(crate) fn open_with(self, ctx: &EvalContext) -> Elements<'a, T> {
        let Pipeline { head, stages, .. } = self;
        stages
            .into_iter()
            .fold(head.open(ctx), |elements, stage| stage.attach(elements, ctx))
    }

    /// Start a terminal evaluation named `terminal`.
    pub(super) fn evaluate(self, terminal: &'static str) -> Elements<'a, T> {
        tracing::debug!(terminal, plan = ?self.plan, "evaluating pipeline");
        let ctx = self.ctx.clone();
        self.open_with(&ctx)
    }
}

impl<T> fmt::Debug for Pipeline<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("plan", &self.plan)
            .field("config", &self.ctx.config)
            .finish_non_exhaustive()
    }
}

/// Start a pipeline from any iterable, the way `.iter()` starts an iterator.
pub trait PipelineExt: IntoIterator + Sized {
    fn pipeline<'a>(self) -> Pipeline<'a, Self::Item>
    where
        Self::Item: 'a,
        Self::IntoIter: 'a,
    {
        Pipeline::from_source(self)
    }
}

impl<I: IntoIterator> PipelineExt for I {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    #[test]
    fn test_plan_records_application_order() {
        let pipeline = Pipeline::from_source(vec![3, 1, 2])
            .filter(|x| *x > 1)
            .map(|x| x * 10)
            .sorted()
            .peek(|_| {})
            .flat_map(|x| vec![x, x])
            .distinct()
            .limit(2);

        assert_eq!(
            pipeline.plan(),
            &[
                StageKind::Filter,
                StageKind::Map,
                StageKind::Sorted,
                StageKind::Peek,
                StageKind::FlatMap,
                StageKind::Distinct,
                StageKind::Limit,
            ]
        );
    }

    #[test]
    fn test_no_evaluation_before_terminal() {
        let calls = Cell::new(0);
        let pipeline = Pipeline::from_source(vec![1, 2, 3])
            .map(|x| {
                calls.set(calls.get() + 1);
                x
            })
            .filter(|_| {
                calls.set(calls.get() + 1);
                true
            })
            .sorted();

        assert_eq!(calls.get(), 0);
        drop(pipeline);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_config_carries_across_segments() {
        let config = PipelineConfig::default().with_trace_elements(true);
        let pipeline = Pipeline::from_source(vec![1])
            .with_config(config.clone())
            .map(|x| x + 1)
            .flat_map(|x| vec![x]);

        assert_eq!(pipeline.config(), &config);
    }

    #[test]
    fn test_iterate_is_unbounded_until_limited() {
        let powers = Pipeline::iterate(1u64, |x| x * 2)
            .limit(5)
            .collect_to_list()
            .unwrap();
        assert_eq!(powers, vec![1, 2, 4, 8, 16]);
    }

    #[test]
    fn test_pipeline_ext() {
        let words = ["API", "PCF", "Docker"];
        let long = words.iter().pipeline().filter(|w| w.len() > 3).count().unwrap();
        assert_eq!(long, 1);
    }

    #[test]
    fn test_debug_shows_plan() {
        let pipeline = Pipeline::from_source(vec![1]).distinct();
        let rendered = format!("{:?}", pipeline);
        assert!(rendered.contains("Distinct"));
    }
}
