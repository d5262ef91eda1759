use std::collections::VecDeque;

use super::{Span, SpanTree, SpanTreeNode, is_fully_enclosed, is_overlapping};

/// Creates a span tree from a collection of spans.
///
/// Spans are processed in ascending `index` order, ties broken by descending
/// `length` so that wider spans become the ancestors of narrower ones
/// starting at the same point. A span that partially overlaps an existing
/// node is split: the part inside the node's extent becomes a child, the
/// remainder goes back on the work queue and is re-inserted on a later pop
/// (possibly splitting again). After all insertions every level of the
/// forest is re-sorted by the same ordering rule, so output is
/// deterministic regardless of input order.
///
/// Two spans with identical ranges keep their input order (the sort is
/// stable) and the earlier one becomes the ancestor.
///
/// Total, pure and infallible: malformed ranges are the caller's to clamp,
/// zero-length spans insert as point markers, and a split remainder that
/// comes back empty settles as a zero-length node rather than looping.
pub fn build_tree<T: Span>(spans: Vec<T>) -> SpanTree<T> {
    let mut queue: VecDeque<T> = sort_spans(spans).into();
    let mut tree = SpanTree::new();
    while let Some(span) = queue.pop_front() {
        add_span(&mut tree, span, &mut queue);
    }
    sort_tree(&mut tree);
    tree
}

/// Adds additional spans into an already-built tree.
///
/// Uses the same per-span insertion (and splitting) logic as [`build_tree`],
/// then re-sorts the whole tree. Unlike `build_tree` the incoming batch is
/// not pre-sorted, so ancestor selection among the new spans follows their
/// given order.
pub fn add_spans<T: Span>(tree: &mut SpanTree<T>, spans: Vec<T>) {
    let mut queue: VecDeque<T> = spans.into();
    while let Some(span) = queue.pop_front() {
        add_span(tree, span, &mut queue);
    }
    sort_tree(tree);
}

/// Sort spans by ascending index; for equal indexes the longer span comes
/// first. The sort is stable, which fixes ancestor selection for spans with
/// identical ranges.
fn sort_spans<T: Span>(mut spans: Vec<T>) -> Vec<T> {
    spans.sort_by(|a, b| {
        a.index()
            .cmp(&b.index())
            .then_with(|| b.length().cmp(&a.length()))
    });
    spans
}

fn sort_tree<T: Span>(nodes: &mut [SpanTreeNode<T>]) {
    nodes.sort_by(|left, right| {
        left.item
            .index()
            .cmp(&right.item.index())
            .then_with(|| right.item.length().cmp(&left.item.length()))
    });
    for node in nodes {
        sort_tree(&mut node.children);
    }
}

fn add_span<T: Span>(tree: &mut SpanTree<T>, span: T, queue: &mut VecDeque<T>) {
    if let Some(span) = add_to_nodes(tree, span, queue) {
        // No enclosure and no overlap anywhere: new root-level node.
        tree.push(SpanTreeNode::leaf(span));
    }
}

fn add_to_node<T: Span>(node: &mut SpanTreeNode<T>, span: T, queue: &mut VecDeque<T>) {
    if let Some(span) = add_to_nodes(&mut node.children, span, queue) {
        node.children.push(SpanTreeNode::leaf(span));
    }
}

/// Tries to place `span` under one of `nodes`. Hands the span back to the
/// caller if no node encloses or overlaps it.
fn add_to_nodes<T: Span>(
    nodes: &mut [SpanTreeNode<T>],
    span: T,
    queue: &mut VecDeque<T>,
) -> Option<T> {
    for node in nodes.iter_mut() {
        if is_fully_enclosed(&node.item, &span) {
            add_to_node(node, span, queue);
            return None;
        }
        if is_overlapping(&node.item, &span) {
            // Only the first overlapping node (in current order) is used;
            // the remainder re-enters the queue and is resolved on a later
            // pop, however many further splits that takes.
            let (kept, remainder) = split_span(&node.item, span);
            queue.push_back(remainder);
            add_to_node(node, kept, queue);
            return None;
        }
    }
    Some(span)
}

/// Splits `span` against the node that owns the overlap: the kept part runs
/// from the span's start to the owner's end, the remainder covers whatever
/// lies beyond the owner. The remainder's length saturates at zero so the
/// total pending length strictly decreases and construction terminates.
fn split_span<T: Span>(owner: &T, span: T) -> (T, T) {
    let split_length = owner.end() - span.index();
    let kept = span.with_range(span.index(), split_length);
    let remainder = span.with_range(owner.end(), span.length().saturating_sub(split_length));
    (kept, remainder)
}
