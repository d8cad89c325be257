//! Default binding: `dom::DomArena` as a queryable tree

use crate::access::{Attr, TreeAccess};
use crate::adapter::TreeAdapter;
use dom::{DomArena, DomNode, NodeId};

/// Adapter borrowing an arena
pub type DomAdapter<'a> = TreeAdapter<&'a DomArena>;

/// Adapter over the default tree representation
pub fn dom_adapter(arena: &DomArena) -> DomAdapter<'_> {
    TreeAdapter::new(arena)
}

/// Node lookup for ids handed out by this arena.
///
/// A foreign id breaks the protocol contract, so there is nothing to recover.
fn node(arena: &DomArena, id: NodeId) -> &DomNode {
    match arena.get(id) {
        Ok(node) => node,
        Err(err) => panic!("node handle from another tree: {err}"),
    }
}

impl TreeAccess for DomArena {
    type Node = NodeId;

    fn is_element(&self, id: &NodeId) -> bool {
        node(self, *id).is_element()
    }

    fn parent(&self, id: &NodeId) -> Option<NodeId> {
        node(self, *id).parent_id
    }

    fn children(&self, id: &NodeId) -> Vec<NodeId> {
        node(self, *id).children_ids.to_vec()
    }

    fn attributes<'a>(&'a self, id: &'a NodeId) -> impl Iterator<Item = Attr<'a>> + 'a {
        node(self, *id)
            .attributes
            .iter()
            .map(|attr| Attr::new(&attr.name, &attr.value))
    }

    fn tag_name<'a>(&'a self, id: &'a NodeId) -> &'a str {
        node(self, *id).tag_name().unwrap_or("")
    }

    fn is_text(&self, id: &NodeId) -> bool {
        node(self, *id).is_text()
    }

    fn text<'a>(&'a self, id: &'a NodeId) -> &'a str {
        &node(self, *id).node_value
    }
}
