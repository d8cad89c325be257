//! Narrowed element handle

/// A node that passed the tree's element test.
///
/// Only the adapter hands these out (see `SelectorAdapter::as_element`), so
/// element-only operations can take an `Element` instead of checking at
/// runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Element<N>(N);

impl<N> Element<N> {
    /// Caller has already run the element test
    pub(crate) fn new_unchecked(node: N) -> Self {
        Self(node)
    }

    /// The underlying node
    pub fn node(&self) -> &N {
        &self.0
    }

    pub fn into_node(self) -> N {
        self.0
    }
}

impl<N> AsRef<N> for Element<N> {
    fn as_ref(&self) -> &N {
        &self.0
    }
}
