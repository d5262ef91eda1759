//! # Span Trees
//!
//! Turns a flat, unordered, possibly-overlapping collection of spans into a
//! forest of properly nested spans, then flattens that forest back into an
//! ordered stream.
//!
//! ## Architecture
//!
//! - **`build`**: `build_tree()` / `add_spans()`, work-queue insertion that
//!   resolves partial overlaps by splitting the incoming span
//! - **`flatten`**: pre-order traversal into a flat sequence, plus the
//!   shape-preserving `map()`
//!
//! ## Invariant
//!
//! Nodes never partially overlap after construction: any two ranges in the
//! tree are disjoint or one fully encloses the other. Partial overlaps in the
//! input are eliminated by splitting at build time.

pub mod build;
pub mod flatten;

pub use build::{add_spans, build_tree};
pub use flatten::{flatten, map};

/// Something with a start and a length over grapheme positions.
///
/// The range is half-open: `[index, index + length)`. Implementors supply
/// `with_range` so the builder can manufacture the two halves of a split
/// span while carrying every other field across unchanged.
pub trait Span: Clone {
    fn index(&self) -> usize;
    fn length(&self) -> usize;

    /// A copy of this span covering a different range.
    fn with_range(&self, index: usize, length: usize) -> Self;

    /// Exclusive end of the range.
    fn end(&self) -> usize {
        self.index() + self.length()
    }
}

/// A single item in a span tree, with children of the same type.
///
/// Children are each fully enclosed in the parent's range and kept in
/// ascending order of `index` (ties broken by descending `length`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanTreeNode<T> {
    pub item: T,
    pub children: Vec<SpanTreeNode<T>>,
}

impl<T> SpanTreeNode<T> {
    pub fn leaf(item: T) -> Self {
        Self {
            item,
            children: Vec::new(),
        }
    }
}

/// The top level of a span tree: an ordered forest of root nodes.
pub type SpanTree<T> = Vec<SpanTreeNode<T>>;

/// Whether two spans intersect in any way.
///
/// Ranges are half-open, so a span beginning exactly where another ends does
/// not overlap it.
pub fn is_overlapping(left: &impl Span, right: &impl Span) -> bool {
    left.index() < right.end() && left.end() > right.index()
}

/// Whether `inner` lies wholly inside `outer`.
///
/// A zero-length span is enclosed by any span whose range contains its
/// position, which is how point markers (e.g. line breaks) nest.
pub fn is_fully_enclosed(outer: &impl Span, inner: &impl Span) -> bool {
    inner.index() >= outer.index() && inner.end() <= outer.end()
}
