//! DOM tree storage
//!
//! Index-based DOM tree with zero pointer chasing. Trees come from CDP
//! `DOM.getDocument` responses or are assembled by hand.
//!
//! ## Core Design
//!
//! ```text
//! CDP JSON → DomService → DomArena (owned) → NodeId (u32) lookups
//! ```

pub mod arena;
pub mod error;
pub mod service;
pub mod types;

pub use arena::DomArena;
pub use error::{DomError, Result};
pub use service::{DomService, DomServiceConfig};
pub use types::*;
