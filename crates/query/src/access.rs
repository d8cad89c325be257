//! Tree Access Protocol
//!
//! The capability set a tree must expose before it can be queried. The
//! adapter never looks past this trait, so any tree shape works: arenas
//! with integer handles, `Rc` graphs, borrowed views over foreign ASTs.

use std::hash::Hash;

/// Borrowed name/value pair as exposed by a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attr<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

impl<'a> Attr<'a> {
    pub fn new(name: &'a str, value: &'a str) -> Self {
        Self { name, value }
    }
}

/// Primitive read-only accessors over a tree.
///
/// Implementations must keep child order stable (document order) for as long
/// as a query runs, and the parent links must form an acyclic tree. Passing a
/// node that does not belong to this tree is a contract violation; an
/// implementation may panic.
pub trait TreeAccess {
    /// Opaque node handle. Hashable so node sets can be built over it.
    type Node: Clone + Eq + Hash;

    fn is_element(&self, node: &Self::Node) -> bool;

    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Children in document order. Empty for leaves.
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Attributes in list order, duplicates included. Empty for non-elements.
    fn attributes<'a>(&'a self, node: &'a Self::Node) -> impl Iterator<Item = Attr<'a>> + 'a;

    /// Tag name of an element
    fn tag_name<'a>(&'a self, node: &'a Self::Node) -> &'a str;

    fn is_text(&self, node: &Self::Node) -> bool;

    /// Raw payload of a text node
    fn text<'a>(&'a self, node: &'a Self::Node) -> &'a str;
}

impl<T: TreeAccess + ?Sized> TreeAccess for &T {
    type Node = T::Node;

    fn is_element(&self, node: &Self::Node) -> bool {
        (**self).is_element(node)
    }

    fn parent(&self, node: &Self::Node) -> Option<Self::Node> {
        (**self).parent(node)
    }

    fn children(&self, node: &Self::Node) -> Vec<Self::Node> {
        (**self).children(node)
    }

    fn attributes<'a>(&'a self, node: &'a Self::Node) -> impl Iterator<Item = Attr<'a>> + 'a {
        (**self).attributes(node)
    }

    fn tag_name<'a>(&'a self, node: &'a Self::Node) -> &'a str {
        (**self).tag_name(node)
    }

    fn is_text(&self, node: &Self::Node) -> bool {
        (**self).is_text(node)
    }

    fn text<'a>(&'a self, node: &'a Self::Node) -> &'a str {
        (**self).text(node)
    }
}
