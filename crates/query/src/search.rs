//! Forest search in document order
//!
//! Both searches run on an explicit stack. Roots and children are pushed in
//! reverse so pops come out pre-order, left to right.

use crate::access::TreeAccess;
use crate::element::Element;

/// Every node of the forest that passes `predicate` and is an element.
///
/// The predicate sees every node, element or not, and a node's subtree is
/// searched whether or not the node itself matched.
pub(crate) fn find_all<T, F>(
    tree: &T,
    mut predicate: F,
    roots: &[T::Node],
) -> Vec<Element<T::Node>>
where
    T: TreeAccess,
    F: FnMut(&T::Node) -> bool,
{
    let mut results = Vec::new();
    let mut stack: Vec<T::Node> = roots.iter().rev().cloned().collect();
    let mut visited = 0usize;

    while let Some(node) = stack.pop() {
        visited += 1;
        let children = tree.children(&node);

        if predicate(&node) && tree.is_element(&node) {
            results.push(Element::new_unchecked(node));
        }

        stack.extend(children.into_iter().rev());
    }

    tracing::trace!("find_all matched {} of {} nodes", results.len(), visited);
    results
}

/// First element in document order that passes `predicate`.
///
/// A node is tested before anything in its subtree, and nothing after the
/// first match is visited.
pub(crate) fn find_one<T, F>(
    tree: &T,
    mut predicate: F,
    roots: &[T::Node],
) -> Option<Element<T::Node>>
where
    T: TreeAccess,
    F: FnMut(&T::Node) -> bool,
{
    let mut stack: Vec<T::Node> = roots.iter().rev().cloned().collect();

    while let Some(node) = stack.pop() {
        if predicate(&node) && tree.is_element(&node) {
            return Some(Element::new_unchecked(node));
        }
        stack.extend(tree.children(&node).into_iter().rev());
    }

    None
}

/// Shallow check over `nodes` only
pub(crate) fn exists_one<T, F>(tree: &T, mut predicate: F, nodes: &[T::Node]) -> bool
where
    T: TreeAccess,
    F: FnMut(&Element<T::Node>) -> bool,
{
    nodes
        .iter()
        .filter(|node| tree.is_element(node))
        .any(|node| predicate(&Element::new_unchecked(node.clone())))
}
