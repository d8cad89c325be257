//! Core node type definitions
//!
//! Key design principles:
//! 1. Use u32 for indices (4 bytes vs 8 bytes pointer)
//! 2. Use SmallVec for small arrays (avoid heap allocation)
//! 3. Keep attribute order exactly as the source produced it

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Node identifier (index into arena)
/// u32 allows 4 billion nodes, enough for any webpage
pub type NodeId = u32;

/// Node type matching DOM specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum NodeType {
    Element = 1,
    Attribute = 2,
    Text = 3,
    CdataSection = 4,
    EntityReference = 5,
    Entity = 6,
    ProcessingInstruction = 7,
    Comment = 8,
    Document = 9,
    DocumentType = 10,
    DocumentFragment = 11,
    Notation = 12,
}

impl NodeType {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(NodeType::Element),
            2 => Some(NodeType::Attribute),
            3 => Some(NodeType::Text),
            4 => Some(NodeType::CdataSection),
            5 => Some(NodeType::EntityReference),
            6 => Some(NodeType::Entity),
            7 => Some(NodeType::ProcessingInstruction),
            8 => Some(NodeType::Comment),
            9 => Some(NodeType::Document),
            10 => Some(NodeType::DocumentType),
            11 => Some(NodeType::DocumentFragment),
            12 => Some(NodeType::Notation),
            _ => None,
        }
    }

    /// Name CDP reports in `nodeName` for non-element nodes
    pub fn default_node_name(self) -> &'static str {
        match self {
            NodeType::Text => "#text",
            NodeType::CdataSection => "#cdata-section",
            NodeType::Comment => "#comment",
            NodeType::Document => "#document",
            NodeType::DocumentFragment => "#document-fragment",
            _ => "",
        }
    }
}

/// A single name/value pair on an element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Attribute list in source order. Duplicate names are kept.
pub type Attributes = SmallVec<[Attribute; 4]>;

/// The main DOM tree node structure
///
/// Design philosophy:
/// - Small fixed-size fields first (better packing)
/// - Use indices instead of pointers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomNode {
    // IDs (12 bytes)
    pub node_id: NodeId,
    pub backend_node_id: u32,
    pub node_type: NodeType, // 1 byte

    // Navigation indices
    pub parent_id: Option<NodeId>,
    pub children_ids: SmallVec<[NodeId; 4]>, // Most nodes have <4 children

    /// Raw `nodeName` (upper-case for HTML elements)
    pub node_name: String,
    /// Lower-case tag name for elements, empty otherwise
    pub local_name: String,
    /// Text payload for text, comment and CDATA nodes
    pub node_value: String,
    pub attributes: Attributes,
}

impl DomNode {
    /// Create a new node with required fields
    pub fn new(
        node_id: NodeId,
        backend_node_id: u32,
        node_type: NodeType,
        node_name: String,
    ) -> Self {
        let local_name = if node_type == NodeType::Element {
            node_name.to_ascii_lowercase()
        } else {
            String::new()
        };

        Self {
            node_id,
            backend_node_id,
            node_type,
            parent_id: None,
            children_ids: SmallVec::new(),
            node_name,
            local_name,
            node_value: String::new(),
            attributes: SmallVec::new(),
        }
    }

    /// Get tag name for element nodes
    pub fn tag_name(&self) -> Option<&str> {
        if self.node_type == NodeType::Element {
            Some(&self.local_name)
        } else {
            None
        }
    }

    /// Check if node is an element
    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    /// Character data: text nodes and CDATA sections
    pub fn is_text(&self) -> bool {
        matches!(self.node_type, NodeType::Text | NodeType::CdataSection)
    }
}
