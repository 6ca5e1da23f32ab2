//! Incremental construction of a pipeline source.
//!
//! Useful when elements arrive one at a time before the pipeline is built:
//!
//! ```rust
//! use seqflow::SourceBuilder;
//!
//! let mut builder = SourceBuilder::new();
//! builder.accept("Jeff");
//! builder.accept("Bill");
//! let names = builder.add("Mark").build().collect_to_list().unwrap();
//!
//! assert_eq!(names, vec!["Jeff", "Bill", "Mark"]);
//! ```

use super::sequence::Pipeline;

/// Collects elements, then turns them into a pipeline source.
#[derive(Debug, Clone)]
pub struct SourceBuilder<T> {
    elements: Vec<T>,
}

impl<T> Default for SourceBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SourceBuilder<T> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Append an element in place.
    pub fn accept(&mut self, element: T) {
        self.elements.push(element);
    }

    /// Append an element, fluent style.
    pub fn add(mut self, element: T) -> Self {
        self.accept(element);
        self
    }

    /// Append an element only when `condition` holds.
    pub fn add_when(self, condition: bool, element: T) -> Self {
        if condition {
            self.add(element)
        } else {
            self
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Finish building. The pipeline owns the accepted elements.
    pub fn build<'a>(self) -> Pipeline<'a, T>
    where
        T: 'a,
    {
        Pipeline::from_source(self.elements)
    }
}

impl<T> Extend<T> for SourceBuilder<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}
