//! Semantic tree traversal.
//!
//! Implements pre-order traversal of semantic trees. Pre-order visits a node
//! before its children and children in order, which is document order for a
//! well-formed tree.

use super::node::{NodeId, SemanticNode};
use super::types::SemanticType;

/// Depth-first pre-order iterator over a subtree.
///
/// Created by [`SemanticNode::iter`].
pub struct PreOrder<'a> {
    stack: Vec<&'a SemanticNode>,
}

impl<'a> PreOrder<'a> {
    fn new(root: &'a SemanticNode) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a SemanticNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reverse so the first child is popped next
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

impl SemanticNode {
    /// Iterate over this node and all its descendants in pre-order.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdfua_oxide::structure::{ContentNode, SemanticNode, SemanticType};
    ///
    /// let root: SemanticNode = ContentNode::new(SemanticType::Document)
    ///     .with_child(ContentNode::new(SemanticType::H1))
    ///     .with_child(ContentNode::new(SemanticType::Paragraph))
    ///     .into();
    ///
    /// let types: Vec<_> = root.iter().map(|n| n.semantic_type().name()).collect();
    /// assert_eq!(types, vec!["Document", "H1", "P"]);
    /// ```
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder::new(self)
    }

    /// Find a node in the subtree by identity.
    pub fn find_by_id(&self, id: NodeId) -> Option<&SemanticNode> {
        self.iter().find(|n| n.id() == id)
    }

    /// All nodes of the given type, in pre-order.
    pub fn nodes_of_type(&self, semantic_type: SemanticType) -> Vec<&SemanticNode> {
        self.iter()
            .filter(|n| n.semantic_type() == semantic_type)
            .collect()
    }

    /// Number of nodes in the subtree, including this one.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Length of the longest path from this node to a leaf (a leaf is 0).
    pub fn max_depth(&self) -> usize {
        self.children()
            .iter()
            .map(|c| c.max_depth() + 1)
            .max()
            .unwrap_or(0)
    }
}
