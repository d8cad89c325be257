//! Selector-Engine Adapter interface
//!
//! The complete surface a selector-matching engine sees. Engines are written
//! generically against this trait and never touch a concrete tree type.

use std::hash::Hash;

/// Traversal primitives a selector engine needs to evaluate tag, attribute,
/// class and combinator selectors.
///
/// Absence is never an error: a missing attribute is `""`, a missing parent
/// is `None`, no match is an empty `Vec` or `None`.
pub trait SelectorAdapter {
    type Node: Clone + Eq + Hash;
    type Element: Clone;

    /// Element test
    fn is_element(&self, node: &Self::Node) -> bool;

    /// Element test that narrows on success
    fn as_element(&self, node: &Self::Node) -> Option<Self::Element>;

    /// Widen an element back to its node
    fn element_node<'e>(&self, elem: &'e Self::Element) -> &'e Self::Node;

    /// Value of the first attribute called `name`, or `""` when the node is
    /// not an element or has no such attribute.
    fn get_attribute_value<'a>(&'a self, node: &'a Self::Node, name: &str) -> &'a str;

    fn has_attribute(&self, node: &Self::Node, name: &str) -> bool;

    /// Children in document order, freshly collected
    fn get_children(&self, node: &Self::Node) -> Vec<Self::Node>;

    fn get_tag_name<'a>(&'a self, elem: &'a Self::Element) -> &'a str;

    fn get_parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// The parent's children, `node` included. Empty for a root.
    fn get_siblings(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Text payload for a text node, otherwise every descendant text node
    /// concatenated in document order
    fn get_text(&self, node: &Self::Node) -> String;

    /// Whether `predicate` holds for any element in `nodes`. Does not descend.
    fn exists_one<F>(&self, predicate: F, nodes: &[Self::Node]) -> bool
    where
        F: FnMut(&Self::Element) -> bool;

    /// Every matching element of the forest rooted at `nodes`, in document order
    fn find_all<F>(&self, predicate: F, nodes: &[Self::Node]) -> Vec<Self::Element>
    where
        F: FnMut(&Self::Node) -> bool;

    /// First matching element of the forest rooted at `nodes`, in document order
    fn find_one<F>(&self, predicate: F, nodes: &[Self::Node]) -> Option<Self::Element>
    where
        F: FnMut(&Self::Node) -> bool;

    /// Drop every node that has an ancestor in `nodes`
    fn remove_subsets(&self, nodes: &[Self::Node]) -> Vec<Self::Node>;
}
