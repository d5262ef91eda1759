use super::{Span, SpanTree, SpanTreeNode};

/// Converts a tree into a flat sequence.
///
/// Nodes are visited pre-order, children in their existing order; that
/// order is the contract, since it determines tag ordering for renderers.
/// The projection turns each item into a `(start, end)` pair: `start` is
/// emitted, then the flattened children, then `end`. A projection returning
/// `None` opts the item out of wrapping, but its children are still
/// flattened rather than silently dropped.
pub fn flatten<T, U, F>(tree: &SpanTree<T>, mut project: F) -> Vec<U>
where
    T: Span,
    F: FnMut(&T) -> Option<(U, U)>,
{
    let mut out = Vec::new();
    for node in tree {
        flatten_node(node, &mut project, &mut out);
    }
    out
}

fn flatten_node<T, U, F>(node: &SpanTreeNode<T>, project: &mut F, out: &mut Vec<U>)
where
    T: Span,
    F: FnMut(&T) -> Option<(U, U)>,
{
    match project(&node.item) {
        Some((start, end)) => {
            out.push(start);
            for child in &node.children {
                flatten_node(child, project, out);
            }
            out.push(end);
        }
        None => {
            for child in &node.children {
                flatten_node(child, project, out);
            }
        }
    }
}

/// Maps one tree onto another of the same shape.
pub fn map<T, U, F>(tree: &SpanTree<T>, f: F) -> SpanTree<U>
where
    T: Span,
    U: Span,
    F: Fn(&T) -> U,
{
    tree.iter().map(|node| map_node(node, &f)).collect()
}

fn map_node<T, U, F>(node: &SpanTreeNode<T>, f: &F) -> SpanTreeNode<U>
where
    T: Span,
    U: Span,
    F: Fn(&T) -> U,
{
    SpanTreeNode {
        item: f(&node.item),
        children: node.children.iter().map(|child| map_node(child, f)).collect(),
    }
}
