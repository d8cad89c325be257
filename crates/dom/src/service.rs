//! DOM Service - builds a `DomArena` from CDP data
//!
//! This handles:
//! - Parsing CDP `DOM.getDocument` responses
//! - Shadow root and frame content document splicing
//! - Depth limiting for hostile input

use crate::arena::DomArena;
use crate::error::{DomError, Result};
use crate::types::*;
use serde_json::Value;

/// Configuration for DOM service
#[derive(Debug, Clone)]
pub struct DomServiceConfig {
    /// Attach `shadowRoots` as children of their host, ahead of light-DOM children
    pub include_shadow_roots: bool,
    /// Attach an iframe's `contentDocument` as the last child of the frame owner
    pub include_content_documents: bool,
    pub max_depth: usize,
}

impl Default for DomServiceConfig {
    fn default() -> Self {
        Self {
            include_shadow_roots: true,
            include_content_documents: true,
            max_depth: 512,
        }
    }
}

/// Main DOM service
pub struct DomService {
    config: DomServiceConfig,
    arena: DomArena,
}

impl DomService {
    /// Create new DOM service with default config
    pub fn new() -> Self {
        Self::with_config(DomServiceConfig::default())
    }

    /// Create DOM service with custom config
    pub fn with_config(config: DomServiceConfig) -> Self {
        Self {
            config,
            arena: DomArena::new(),
        }
    }

    pub fn config(&self) -> &DomServiceConfig {
        &self.config
    }

    /// Get reference to internal arena
    pub fn arena(&self) -> &DomArena {
        &self.arena
    }

    /// Give up the service and keep the arena
    pub fn into_arena(self) -> DomArena {
        self.arena
    }

    /// Parse a CDP response from its JSON text
    pub fn parse_cdp_json(&mut self, json: &str) -> Result<NodeId> {
        let value: Value = serde_json::from_str(json)?;
        self.parse_cdp_dom_tree(&value)
    }

    /// Parse CDP DOM tree response and build arena
    ///
    /// This is the main entry point that takes CDP JSON and constructs
    /// the internal DOM tree representation. The previous tree is replaced
    /// only when the whole response parses.
    ///
    /// Input format matches CDP's DOM.getDocument response:
    /// ```json
    /// {
    ///   "root": {
    ///     "nodeId": 1,
    ///     "backendNodeId": 1,
    ///     "nodeType": 9,
    ///     "nodeName": "#document",
    ///     "children": [...]
    ///   }
    /// }
    /// ```
    pub fn parse_cdp_dom_tree(&mut self, cdp_response: &Value) -> Result<NodeId> {
        let root = cdp_response
            .get("root")
            .ok_or_else(|| DomError::CdpError("Missing 'root' in CDP response".to_string()))?;

        let mut arena = DomArena::new();
        let root_id = parse_node(&self.config, &mut arena, root, None, 0)?;
        self.arena = arena;

        tracing::debug!(
            "Built DOM arena with {} nodes (root {})",
            self.arena.len(),
            root_id
        );

        Ok(root_id)
    }
}

/// Recursively parse a CDP node
fn parse_node(
    config: &DomServiceConfig,
    arena: &mut DomArena,
    cdp_node: &Value,
    parent_id: Option<NodeId>,
    depth: usize,
) -> Result<NodeId> {
    if depth > config.max_depth {
        return Err(DomError::MaxDepthExceeded {
            current: depth,
            max: config.max_depth,
        });
    }

    let backend_node_id = cdp_node["backendNodeId"]
        .as_u64()
        .ok_or_else(|| DomError::CdpError("Missing backendNodeId".to_string()))?;
    let backend_node_id = u32::try_from(backend_node_id).map_err(|_| {
        DomError::CdpError(format!("backendNodeId out of range: {}", backend_node_id))
    })?;

    // nodeId is only checked: the arena assigns its own indices
    cdp_node["nodeId"]
        .as_u64()
        .ok_or_else(|| DomError::CdpError("Missing nodeId".to_string()))?;

    let node_type_val = cdp_node["nodeType"]
        .as_u64()
        .ok_or_else(|| DomError::CdpError("Missing nodeType".to_string()))?;

    let node_type = u8::try_from(node_type_val)
        .ok()
        .and_then(NodeType::from_u8)
        .ok_or_else(|| DomError::InvalidNodeType {
            expected: "valid NodeType".to_string(),
            actual: format!("{}", node_type_val),
        })?;

    let node_name = cdp_node["nodeName"]
        .as_str()
        .unwrap_or_else(|| node_type.default_node_name())
        .to_string();

    let mut node = DomNode::new(0, backend_node_id, node_type, node_name);

    if node_type == NodeType::Element {
        if let Some(local_name) = cdp_node["localName"].as_str() {
            if !local_name.is_empty() {
                node.local_name = local_name.to_string();
            }
        }
    }

    node.node_value = cdp_node["nodeValue"].as_str().unwrap_or("").to_string();
    node.attributes = parse_attributes(&cdp_node["attributes"]);
    node.parent_id = parent_id;

    // Add node to arena
    let current_node_id = arena.add_node(node);

    let mut child_ids = smallvec::SmallVec::<[NodeId; 4]>::new();

    // Shadow roots render in place of the host's light DOM, so they come first
    if config.include_shadow_roots {
        if let Some(shadow_roots) = cdp_node["shadowRoots"].as_array() {
            for shadow in shadow_roots {
                let shadow_id = parse_node(config, arena, shadow, Some(current_node_id), depth + 1)?;
                child_ids.push(shadow_id);
            }
        }
    }

    if let Some(children) = cdp_node["children"].as_array() {
        for child in children {
            let child_id = parse_node(config, arena, child, Some(current_node_id), depth + 1)?;
            child_ids.push(child_id);
        }
    }

    if config.include_content_documents {
        if let Some(content_doc) = cdp_node.get("contentDocument") {
            let doc_id = parse_node(config, arena, content_doc, Some(current_node_id), depth + 1)?;
            child_ids.push(doc_id);
        }
    }

    arena.get_mut(current_node_id)?.children_ids = child_ids;

    Ok(current_node_id)
}

/// CDP sends attributes flattened: `[name0, value0, name1, value1, ...]`
fn parse_attributes(value: &Value) -> Attributes {
    let mut attributes = Attributes::new();
    if let Some(attrs) = value.as_array() {
        for pair in attrs.chunks_exact(2) {
            if let (Some(name), Some(value)) = (pair[0].as_str(), pair[1].as_str()) {
                attributes.push(Attribute::new(name, value));
            }
        }
    }
    attributes
}

impl Default for DomService {
    fn default() -> Self {
        Self::new()
    }
}
