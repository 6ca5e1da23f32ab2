//! Segment heads: where a typed segment's elements come from.
//!
//! A pipeline is a chain of typed segments. The first segment reads from the
//! caller's source; each `map` or `flat_map` closes the current segment and
//! becomes the head of the next one. Heads are opened only when a terminal
//! operation runs, and they are opened with the terminal pipeline's context so
//! its configuration and cancellation token govern every upstream segment.

use super::cancel::CancellationToken;
use super::sequence::Pipeline;
use super::stage::StageKind;
use crate::config::PipelineConfig;
use crate::errors::{BoxError, PipelineError, Result};

/// Lazily produced elements of a segment.
pub(crate) type Elements<'a, T> = Box<dyn Iterator<Item = Result<T>> + 'a>;

/// Settings shared by every segment during one evaluation.
#[derive(Debug, Clone, Default)]
pub(crate) struct EvalContext {
    pub(crate) config: PipelineConfig,
    pub(crate) cancel: Option<CancellationToken>,
}

impl EvalContext {
    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }
}

/// Producer of a segment's elements.
pub(crate) trait Upstream<'a, T> {
    fn open(self: Box<Self>, ctx: &EvalContext) -> Elements<'a, T>;
}

/// Head reading from the caller's source iterator.
pub(crate) struct SourceHead<I> {
    pub(crate) iter: I,
}

impl<'a, I> Upstream<'a, I::Item> for SourceHead<I>
where
    I: Iterator + 'a,
{
    fn open(self: Box<Self>, ctx: &EvalContext) -> Elements<'a, I::Item> {
        Box::new(Checkpointed {
            inner: self.iter,
            ctx: ctx.clone(),
            processed: 0,
            halted: false,
        })
    }
}

/// Source iterator that checks for cancellation before each pull.
struct Checkpointed<I> {
    inner: I,
    ctx: EvalContext,
    processed: usize,
    halted: bool,
}

impl<I: Iterator> Iterator for Checkpointed<I> {
    type Item = Result<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }
        if self.ctx.is_cancelled() {
            self.halted = true;
            tracing::debug!(processed = self.processed, "source observed cancellation");
            return Some(Err(PipelineError::Cancelled {
                processed: self.processed,
            }));
        }

        let item = self.inner.next()?;
        if self.ctx.config.trace_elements {
            tracing::trace!(index = self.processed, "source element");
        }
        self.processed += 1;
        Some(Ok(item))
    }
}

/// Head applying a mapping function to the previous segment.
pub(crate) struct MapHead<'a, S, F> {
    pub(crate) upstream: Pipeline<'a, S>,
    pub(crate) f: F,
}

impl<'a, S, T, F> Upstream<'a, T> for MapHead<'a, S, F>
where
    S: 'a,
    T: 'a,
    F: FnMut(S) -> std::result::Result<T, BoxError> + 'a,
{
    fn open(self: Box<Self>, ctx: &EvalContext) -> Elements<'a, T> {
        let MapHead { upstream, mut f } = *self;
        Box::new(upstream.open_with(ctx).map(move |item| {
            item.and_then(|value| {
                f(value).map_err(|e| PipelineError::transform(StageKind::Map.name(), e))
            })
        }))
    }
}

/// Head flattening the sequences produced from the previous segment.
pub(crate) struct FlatMapHead<'a, S, F> {
    pub(crate) upstream: Pipeline<'a, S>,
    pub(crate) f: F,
}

impl<'a, S, J, F> Upstream<'a, J::Item> for FlatMapHead<'a, S, F>
where
    S: 'a,
    J: IntoIterator + 'a,
    J::IntoIter: 'a,
    F: FnMut(S) -> std::result::Result<J, BoxError> + 'a,
{
    fn open(self: Box<Self>, ctx: &EvalContext) -> Elements<'a, J::Item> {
        let FlatMapHead { upstream, f } = *self;
        Box::new(Flattened::<'a, S, F, J> {
            upstream: upstream.open_with(ctx),
            f,
            current: None,
            ctx: ctx.clone(),
            emitted: 0,
        })
    }
}

struct Flattened<'a, S, F, J>
where
    J: IntoIterator,
{
    upstream: Elements<'a, S>,
    f: F,
    current: Option<J::IntoIter>,
    ctx: EvalContext,
    emitted: usize,
}

impl<S, J, F> Iterator for Flattened<'_, S, F, J>
where
    J: IntoIterator,
    F: FnMut(S) -> std::result::Result<J, BoxError>,
{
    type Item = Result<J::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current.is_some() && self.ctx.is_cancelled() {
                self.current = None;
                return Some(Err(PipelineError::Cancelled {
                    processed: self.emitted,
                }));
            }

            if let Some(inner) = self.current.as_mut() {
                match inner.next() {
                    Some(value) => {
                        self.emitted += 1;
                        return Some(Ok(value));
                    }
                    None => self.current = None,
                }
            }

            match self.upstream.next()? {
                Ok(value) => match (self.f)(value) {
                    Ok(expansion) => self.current = Some(expansion.into_iter()),
                    Err(e) => {
                        return Some(Err(PipelineError::transform(
                            StageKind::FlatMap.name(),
                            e,
                        )))
                    }
                },
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
