//! Ancestor walks and subset removal

use crate::access::TreeAccess;
use ahash::{AHashMap, AHashSet};

/// Proper ancestors of a node, nearest first
pub struct Ancestors<'t, T: TreeAccess> {
    tree: &'t T,
    next: Option<T::Node>,
}

impl<'t, T: TreeAccess> Ancestors<'t, T> {
    pub(crate) fn new(tree: &'t T, node: &T::Node) -> Self {
        Self {
            tree,
            next: tree.parent(node),
        }
    }
}

impl<T: TreeAccess> Iterator for Ancestors<'_, T> {
    type Item = T::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = self.tree.parent(&current);
        Some(current)
    }
}

/// Keep only the members of `nodes` that have no ancestor in `nodes`.
///
/// Duplicates collapse to their first occurrence and survivors keep input
/// order. Ancestor chains are walked at most once per call: every node
/// passed on the way up records whether it lies under a member, so later
/// walks stop at the first node already seen.
pub(crate) fn remove_subsets<T: TreeAccess>(tree: &T, nodes: &[T::Node]) -> Vec<T::Node> {
    let members: AHashSet<T::Node> = nodes.iter().cloned().collect();

    // node -> "this node or one of its ancestors is a member"
    let mut under_member: AHashMap<T::Node, bool> = AHashMap::with_capacity(members.len());
    let mut emitted: AHashSet<T::Node> = AHashSet::with_capacity(members.len());
    let mut path: Vec<T::Node> = Vec::new();
    let mut kept = Vec::with_capacity(members.len());

    for node in nodes {
        if emitted.contains(node) {
            continue;
        }

        path.clear();
        let mut covered = false;
        for ancestor in Ancestors::new(tree, node) {
            if let Some(&known) = under_member.get(&ancestor) {
                covered = known;
                break;
            }
            if members.contains(&ancestor) {
                under_member.insert(ancestor, true);
                covered = true;
                break;
            }
            path.push(ancestor);
        }

        // Nothing on the path is a member, so each inherits the answer from above
        for visited in path.drain(..) {
            under_member.insert(visited, covered);
        }

        if !covered {
            emitted.insert(node.clone());
            kept.push(node.clone());
        }
    }

    tracing::trace!(
        "remove_subsets kept {} of {} nodes",
        kept.len(),
        members.len()
    );
    kept
}
