//! Selector-engine adapter over arbitrary DOM trees
//!
//! A selector engine only ever talks to [`SelectorAdapter`]. The adapter only
//! ever talks to [`TreeAccess`]. Neither side knows the other's types.
//!
//! ```text
//! selector engine → SelectorAdapter (TreeAdapter) → TreeAccess → tree
//! ```
//!
//! [`dom_adapter`] binds the default tree, `dom::DomArena`. Any other tree
//! works by implementing [`TreeAccess`] and wrapping it in [`TreeAdapter`].
//!
//! ```
//! use dom::DomArena;
//! use dom_query::{dom_adapter, SelectorAdapter};
//!
//! let mut arena = DomArena::new();
//! let body = arena.create_element("body", &[]);
//! let span = arena.create_element("span", &[("class", "zomg")]);
//! let text = arena.create_text("first paragraph");
//! arena.append_child(body, span).unwrap();
//! arena.append_child(span, text).unwrap();
//!
//! let adapter = dom_adapter(&arena);
//! let spans = adapter.find_all(
//!     |node| adapter.get_attribute_value(node, "class") == "zomg",
//!     &[body],
//! );
//! assert_eq!(spans.len(), 1);
//! assert_eq!(adapter.get_text(spans[0].node()), "first paragraph");
//! assert_eq!(adapter.remove_subsets(&[span, body]), vec![body]);
//! ```

pub mod access;
pub mod adapter;
pub mod binding;
pub mod element;
mod search;
pub mod selector;
mod subsets;


pub use access::{Attr, TreeAccess};
pub use adapter::TreeAdapter;
pub use binding::{dom_adapter, DomAdapter};
pub use element::Element;
pub use selector::SelectorAdapter;
pub use subsets::Ancestors;
