//! Tree Query Adapter
//!
//! Binds the selector-engine surface to any `TreeAccess` implementation.
//! Accessors are pass-throughs; search, text and subset removal live in
//! their own modules.

use crate::access::TreeAccess;
use crate::element::Element;
use crate::search;
use crate::selector::SelectorAdapter;
use crate::subsets::{self, Ancestors};

/// Selector adapter over a tree.
///
/// Holds nothing but the tree binding. Pass `&tree` to borrow: the tree then
/// stays frozen for as long as the adapter is alive.
#[derive(Debug, Clone, Copy)]
pub struct TreeAdapter<T> {
    tree: T,
}

impl<T: TreeAccess> TreeAdapter<T> {
    pub fn new(tree: T) -> Self {
        Self { tree }
    }

    pub fn tree(&self) -> &T {
        &self.tree
    }

    pub fn into_inner(self) -> T {
        self.tree
    }

    /// Proper ancestors of `node`, nearest first
    pub fn ancestors(&self, node: &T::Node) -> Ancestors<'_, T> {
        Ancestors::new(&self.tree, node)
    }

    /// Nearest proper ancestor passing `predicate`
    pub fn find_ancestor<F>(&self, mut predicate: F, node: &T::Node) -> Option<T::Node>
    where
        F: FnMut(&T::Node) -> bool,
    {
        self.ancestors(node).find(|ancestor| predicate(ancestor))
    }
}

impl<T: TreeAccess> SelectorAdapter for TreeAdapter<T> {
    type Node = T::Node;
    type Element = Element<T::Node>;

    fn is_element(&self, node: &Self::Node) -> bool {
        self.tree.is_element(node)
    }

    fn as_element(&self, node: &Self::Node) -> Option<Self::Element> {
        self.tree
            .is_element(node)
            .then(|| Element::new_unchecked(node.clone()))
    }

    fn element_node<'e>(&self, elem: &'e Self::Element) -> &'e Self::Node {
        elem.node()
    }

    fn get_attribute_value<'a>(&'a self, node: &'a Self::Node, name: &str) -> &'a str {
        if !self.tree.is_element(node) {
            return "";
        }
        self.tree
            .attributes(node)
            .find(|attr| attr.name == name)
            .map_or("", |attr| attr.value)
    }

    fn has_attribute(&self, node: &Self::Node, name: &str) -> bool {
        self.tree.is_element(node) && self.tree.attributes(node).any(|attr| attr.name == name)
    }

    fn get_children(&self, node: &Self::Node) -> Vec<Self::Node> {
        self.tree.children(node)
    }

    fn get_tag_name<'a>(&'a self, elem: &'a Self::Element) -> &'a str {
        self.tree.tag_name(elem.node())
    }

    fn get_parent(&self, node: &Self::Node) -> Option<Self::Node> {
        self.tree.parent(node)
    }

    fn get_siblings(&self, node: &Self::Node) -> Vec<Self::Node> {
        self.tree
            .parent(node)
            .map(|parent| self.tree.children(&parent))
            .unwrap_or_default()
    }

    fn get_text(&self, node: &Self::Node) -> String {
        let mut text = String::new();
        let mut stack = vec![node.clone()];

        while let Some(current) = stack.pop() {
            if self.tree.is_text(&current) {
                text.push_str(self.tree.text(&current));
            } else {
                stack.extend(self.tree.children(&current).into_iter().rev());
            }
        }

        text
    }

    fn exists_one<F>(&self, predicate: F, nodes: &[Self::Node]) -> bool
    where
        F: FnMut(&Self::Element) -> bool,
    {
        search::exists_one(&self.tree, predicate, nodes)
    }

    fn find_all<F>(&self, predicate: F, nodes: &[Self::Node]) -> Vec<Self::Element>
    where
        F: FnMut(&Self::Node) -> bool,
    {
        search::find_all(&self.tree, predicate, nodes)
    }

    fn find_one<F>(&self, predicate: F, nodes: &[Self::Node]) -> Option<Self::Element>
    where
        F: FnMut(&Self::Node) -> bool,
    {
        search::find_one(&self.tree, predicate, nodes)
    }

    fn remove_subsets(&self, nodes: &[Self::Node]) -> Vec<Self::Node> {
        subsets::remove_subsets(&self.tree, nodes)
    }
}
