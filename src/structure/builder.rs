//! Semantic tree builder.
//!
//! Finalizes a tree handed over by an extraction front end: resolves
//! structure type names through the standard table and a role map, assigns
//! nesting depths from the actual nesting, and can record node-level
//! validation findings on each node.
//!
//! PDF Spec: ISO 32000-2:2020, Section 14.7.3 (role maps)

use super::node::SemanticNode;
use super::types::SemanticType;
use std::collections::HashMap;

/// Builds finished semantic trees.
#[derive(Debug, Clone, Default)]
pub struct SemanticTreeBuilder {
    /// Custom structure type name → standard type
    role_map: HashMap<String, SemanticType>,

    /// Store node-level validation findings in each node's error codes
    record_error_codes: bool,
}

impl SemanticTreeBuilder {
    /// Create a builder with an empty role map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a custom structure type name to a standard type.
    pub fn with_role(mut self, name: impl Into<String>, target: SemanticType) -> Self {
        self.role_map.insert(name.into(), target);
        self
    }

    /// Replace the role map.
    pub fn with_role_map(mut self, role_map: HashMap<String, SemanticType>) -> Self {
        self.role_map = role_map;
        self
    }

    /// Record node-level validation findings while building.
    pub fn with_error_codes(mut self, record: bool) -> Self {
        self.record_error_codes = record;
        self
    }

    /// Resolve a structure type name.
    ///
    /// Standard names win over the role map. Returns `None` for names that
    /// are neither, so callers can skip or flatten such elements.
    pub fn resolve_type(&self, name: &str) -> Option<SemanticType> {
        if let Some(t) = SemanticType::from_structure_type_name(name) {
            return Some(t);
        }

        match self.role_map.get(name) {
            Some(t) => {
                log::debug!("Role-mapped structure type '{}' to {}", name, t);
                Some(*t)
            },
            None => {
                log::warn!("Unknown structure type '{}' with no role mapping", name);
                None
            },
        }
    }

    /// Finish a tree: assign depths (root is 0) and optionally record
    /// validation findings.
    pub fn build(&self, root: impl Into<SemanticNode>) -> SemanticNode {
        let mut root = root.into();
        let mut finding_count = 0usize;
        self.finish_node(&mut root, 0, &mut finding_count);

        log::info!(
            "Built semantic tree: {} nodes, max depth {}, {} nodes with findings",
            root.node_count(),
            root.max_depth(),
            finding_count
        );

        root
    }

    fn finish_node(&self, node: &mut SemanticNode, depth: u32, finding_count: &mut usize) {
        node.set_depth(depth);

        if self.record_error_codes {
            let codes = node.validate_accessibility();
            if !codes.is_empty() {
                log::debug!(
                    "{} node {} has findings: {:?}",
                    node.semantic_type(),
                    node.id(),
                    codes
                );
                *finding_count += 1;
                node.error_codes_mut().extend(codes);
            }
        }

        for child in node.children_mut() {
            self.finish_node(child, depth + 1, finding_count);
        }
    }
}
