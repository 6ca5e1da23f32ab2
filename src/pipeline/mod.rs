//! Lazy sequence pipelines.
//!
//! A [`Pipeline`] is built from a source, extended with intermediate stages
//! (map, filter, flat_map, distinct, sorted, peek, limit) and consumed by one
//! terminal operation (for_each, reduce, collect, grouping, partitioning,
//! find_first, to_array, count). Stages run element by element in pipeline
//! order, except `distinct` and `sorted`, which buffer everything upstream of
//! themselves before yielding.

pub mod builder;
pub mod cancel;
pub mod collectors;
pub mod ordering;
mod sequence;
mod source;
pub mod stage;
mod terminal;

pub use builder::SourceBuilder;
pub use cancel::CancellationToken;
pub use collectors::Partition;
pub use sequence::{Pipeline, PipelineExt};
pub use stage::StageKind;

/// Start a pipeline over `source`.
pub fn from<'a, I>(source: I) -> Pipeline<'a, I::Item>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: 'a,
{
    Pipeline::from_source(source)
}
