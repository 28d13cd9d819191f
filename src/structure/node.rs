//! Semantic node tree: identity, node variants and node-level validation.
//!
//! A tree is made of [`SemanticNode`] values. Each node owns its children by
//! value, so a tree can never contain a cycle. Nodes compare and hash by
//! their [`NodeId`] only: two nodes with identical content but different
//! identities are unequal.

use super::attributes::{keys, non_empty_str, AttributeValue, Attributes};
use super::figure::FigureNode;
use super::types::SemanticType;
use crate::elements::TextBlock;
use crate::error::Result;
use crate::geometry::BoundingBox;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Stable identity of a node, independent of its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Generate a fresh random identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Findings recorded on a single node by node-level validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeErrorCode {
    /// Figure with visual content but no alternative text
    FigureMissingAltText,
    /// Formula without alternative text
    FormulaMissingAltText,
    /// Table without any header cell
    TableMissingHeaders,
    /// List item without a label
    ListItemMissingLabel,
    /// Heading with no text
    EmptyHeading,
}

impl NodeErrorCode {
    /// Human-readable description of the finding.
    pub fn description(&self) -> &'static str {
        match self {
            NodeErrorCode::FigureMissingAltText => "Figure is missing alternative text",
            NodeErrorCode::FormulaMissingAltText => "Formula is missing alternative text",
            NodeErrorCode::TableMissingHeaders => "Table has no header cells",
            NodeErrorCode::ListItemMissingLabel => "List item has no label",
            NodeErrorCode::EmptyHeading => "Heading has no text",
        }
    }
}

impl fmt::Display for NodeErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            NodeErrorCode::FigureMissingAltText => "UA-FIG-001",
            NodeErrorCode::FormulaMissingAltText => "UA-FIG-002",
            NodeErrorCode::TableMissingHeaders => "UA-TBL-001",
            NodeErrorCode::ListItemMissingLabel => "UA-LST-001",
            NodeErrorCode::EmptyHeading => "UA-STRUCT-001",
        };
        write!(f, "{}", code)
    }
}

/// A node of the semantic tree.
///
/// The set of variants is closed; code that inspects nodes matches on it
/// exhaustively.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SemanticNode {
    /// Generic structural or text-bearing node
    Content(ContentNode),
    /// Figure with image and line-art content
    Figure(FigureNode),
}

impl SemanticNode {
    /// Identity of the node.
    pub fn id(&self) -> NodeId {
        match self {
            SemanticNode::Content(node) => node.id,
            SemanticNode::Figure(node) => node.id,
        }
    }

    /// Semantic type of the node. Figures always report [`SemanticType::Figure`].
    pub fn semantic_type(&self) -> SemanticType {
        match self {
            SemanticNode::Content(node) => node.semantic_type,
            SemanticNode::Figure(_) => SemanticType::Figure,
        }
    }

    /// Location of the node.
    ///
    /// For figures without an explicit box this falls back to the box
    /// computed from their visual content.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        match self {
            SemanticNode::Content(node) => node.bounding_box,
            SemanticNode::Figure(node) => node.computed_bounding_box(),
        }
    }

    /// Ordered children.
    pub fn children(&self) -> &[SemanticNode] {
        match self {
            SemanticNode::Content(node) => &node.children,
            SemanticNode::Figure(node) => &node.children,
        }
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<SemanticNode> {
        match self {
            SemanticNode::Content(node) => &mut node.children,
            SemanticNode::Figure(node) => &mut node.children,
        }
    }

    /// Attribute map.
    pub fn attributes(&self) -> &Attributes {
        match self {
            SemanticNode::Content(node) => &node.attributes,
            SemanticNode::Figure(node) => &node.attributes,
        }
    }

    /// Look up a single attribute.
    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes().get(key)
    }

    /// Nesting depth (root is 0).
    pub fn depth(&self) -> u32 {
        match self {
            SemanticNode::Content(node) => node.depth,
            SemanticNode::Figure(node) => node.depth,
        }
    }

    pub(crate) fn set_depth(&mut self, depth: u32) {
        match self {
            SemanticNode::Content(node) => node.depth = depth,
            SemanticNode::Figure(node) => node.depth = depth,
        }
    }

    /// Error codes accumulated on the node.
    pub fn error_codes(&self) -> &BTreeSet<NodeErrorCode> {
        match self {
            SemanticNode::Content(node) => &node.error_codes,
            SemanticNode::Figure(node) => &node.error_codes,
        }
    }

    pub(crate) fn error_codes_mut(&mut self) -> &mut BTreeSet<NodeErrorCode> {
        match self {
            SemanticNode::Content(node) => &mut node.error_codes,
            SemanticNode::Figure(node) => &mut node.error_codes,
        }
    }

    /// Text of the node and its descendants.
    pub fn text_content(&self) -> String {
        match self {
            SemanticNode::Content(node) => node.text_content(),
            SemanticNode::Figure(node) => node.text_content(),
        }
    }

    /// Non-empty `Alt` or `ActualText` attribute present.
    pub fn has_alt_text(&self) -> bool {
        has_alt_text(self.attributes())
    }

    /// Run node-level validation on this node only.
    pub fn validate_accessibility(&self) -> BTreeSet<NodeErrorCode> {
        match self {
            SemanticNode::Content(node) => node.validate_accessibility(),
            SemanticNode::Figure(node) => node.validate_accessibility(),
        }
    }

    /// Run node-level validation over the whole subtree.
    ///
    /// Returns the findings of every node that has any, in pre-order.
    pub fn validate_tree(&self) -> Vec<(NodeId, BTreeSet<NodeErrorCode>)> {
        self.iter()
            .filter_map(|node| {
                let codes = node.validate_accessibility();
                (!codes.is_empty()).then(|| (node.id(), codes))
            })
            .collect()
    }

    /// The content node, if this is one.
    pub fn as_content(&self) -> Option<&ContentNode> {
        match self {
            SemanticNode::Content(node) => Some(node),
            SemanticNode::Figure(_) => None,
        }
    }

    /// The figure node, if this is one.
    pub fn as_figure(&self) -> Option<&FigureNode> {
        match self {
            SemanticNode::Figure(node) => Some(node),
            SemanticNode::Content(_) => None,
        }
    }

    /// Check if this is a figure node.
    pub fn is_figure(&self) -> bool {
        matches!(self, SemanticNode::Figure(_))
    }

    /// Encode the subtree as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a subtree from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl PartialEq for SemanticNode {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for SemanticNode {}

impl Hash for SemanticNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl From<ContentNode> for SemanticNode {
    fn from(node: ContentNode) -> Self {
        SemanticNode::Content(node)
    }
}

impl From<FigureNode> for SemanticNode {
    fn from(node: FigureNode) -> Self {
        SemanticNode::Figure(node)
    }
}

/// A generic node of any semantic type, optionally carrying text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentNode {
    /// Identity
    #[serde(default)]
    pub id: NodeId,
    /// Semantic type
    #[serde(rename = "type")]
    pub semantic_type: SemanticType,
    /// Location, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
    /// Ordered children
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SemanticNode>,
    /// Attributes
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
    /// Nesting depth (root is 0)
    #[serde(default)]
    pub depth: u32,
    /// Accumulated error codes
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub error_codes: BTreeSet<NodeErrorCode>,
    /// Text owned directly by this node
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub text_blocks: Vec<TextBlock>,
}

impl ContentNode {
    /// Create an empty node with a fresh identity.
    pub fn new(semantic_type: SemanticType) -> Self {
        Self {
            id: NodeId::new(),
            semantic_type,
            bounding_box: None,
            children: Vec::new(),
            attributes: Attributes::new(),
            depth: 0,
            error_codes: BTreeSet::new(),
            text_blocks: Vec::new(),
        }
    }

    /// Use an explicit identity.
    pub fn with_id(mut self, id: NodeId) -> Self {
        self.id = id;
        self
    }

    /// Set the bounding box.
    pub fn with_bounding_box(mut self, bbox: BoundingBox) -> Self {
        self.bounding_box = Some(bbox);
        self
    }

    /// Append a child.
    pub fn with_child(mut self, child: impl Into<SemanticNode>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Replace the children.
    pub fn with_children(mut self, children: Vec<SemanticNode>) -> Self {
        self.children = children;
        self
    }

    /// Set an attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Set the depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Set pre-existing error codes.
    pub fn with_error_codes(mut self, codes: impl IntoIterator<Item = NodeErrorCode>) -> Self {
        self.error_codes = codes.into_iter().collect();
        self
    }

    /// Append a text block.
    pub fn with_text_block(mut self, block: TextBlock) -> Self {
        self.text_blocks.push(block);
        self
    }

    /// Text of this node's own blocks, then of its children.
    ///
    /// Own blocks are joined by a newline; the result and each non-empty
    /// child text are joined by a newline.
    pub fn text_content(&self) -> String {
        let own = self
            .text_blocks
            .iter()
            .map(TextBlock::text)
            .collect::<Vec<_>>()
            .join("\n");

        let mut parts = Vec::with_capacity(self.children.len() + 1);
        if !own.is_empty() {
            parts.push(own);
        }
        parts.extend(
            self.children
                .iter()
                .map(SemanticNode::text_content)
                .filter(|t| !t.is_empty()),
        );
        parts.join("\n")
    }

    /// Non-empty `Alt` or `ActualText` attribute present.
    pub fn has_alt_text(&self) -> bool {
        has_alt_text(&self.attributes)
    }

    /// Node-level checks for this node's type.
    pub fn validate_accessibility(&self) -> BTreeSet<NodeErrorCode> {
        let mut codes = BTreeSet::new();

        match self.semantic_type {
            SemanticType::Table => {
                if !has_header_cell(&self.children) {
                    codes.insert(NodeErrorCode::TableMissingHeaders);
                }
            },
            SemanticType::ListItem => {
                if !self
                    .children
                    .iter()
                    .any(|c| c.semantic_type() == SemanticType::Label)
                {
                    codes.insert(NodeErrorCode::ListItemMissingLabel);
                }
            },
            SemanticType::Formula => {
                if !self.has_alt_text() {
                    codes.insert(NodeErrorCode::FormulaMissingAltText);
                }
            },
            SemanticType::Figure => {
                let has_content = !self.children.is_empty() || !self.text_blocks.is_empty();
                if has_content && !self.has_alt_text() {
                    codes.insert(NodeErrorCode::FigureMissingAltText);
                }
            },
            t if t.is_heading() => {
                if self.children.is_empty() && self.text_content().trim().is_empty() {
                    codes.insert(NodeErrorCode::EmptyHeading);
                }
            },
            _ => {},
        }

        codes
    }
}

impl PartialEq for ContentNode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ContentNode {}

impl Hash for ContentNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

pub(crate) fn has_alt_text(attributes: &Attributes) -> bool {
    non_empty_str(attributes, keys::ALT).is_some()
        || non_empty_str(attributes, keys::ACTUAL_TEXT).is_some()
}

/// True if any descendant is a `TH`, without descending into nested tables.
pub(crate) fn has_header_cell(children: &[SemanticNode]) -> bool {
    children.iter().any(|child| match child.semantic_type() {
        SemanticType::TableHeader => true,
        SemanticType::Table => false,
        _ => has_header_cell(child.children()),
    })
}
