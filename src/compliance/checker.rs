//! The rule-evaluation contract shared by all requirement checkers.

use super::types::{PdfUaCheckResult, PdfUaRequirement};
use crate::structure::SemanticNode;

/// Checks a single PDF/UA requirement.
///
/// Checkers hold no mutable state and never modify the nodes they inspect.
pub trait PdfUaChecker: Send + Sync {
    /// The requirement this checker evaluates.
    fn requirement(&self) -> PdfUaRequirement;

    /// Check exactly one node (its type, attributes, children and geometry).
    ///
    /// Returns a passing result with no violations, or a failing result with
    /// at least one.
    fn check(&self, node: &SemanticNode) -> PdfUaCheckResult;

    /// Check every node in order and aggregate.
    ///
    /// Violations keep discovery order. The aggregate passes iff every node
    /// passes, and the context reads `"{failed} of {total} nodes failed"`.
    fn check_all(&self, nodes: &[SemanticNode]) -> PdfUaCheckResult {
        let refs: Vec<&SemanticNode> = nodes.iter().collect();
        self.check_nodes(&refs)
    }

    /// [`check_all`](Self::check_all) over borrowed nodes, such as the
    /// flattened nodes of a tree.
    fn check_nodes(&self, nodes: &[&SemanticNode]) -> PdfUaCheckResult {
        let mut violations = Vec::new();
        let mut failed = 0usize;

        for node in nodes {
            let result = self.check(node);
            if !result.passed {
                failed += 1;
            }
            violations.extend(result.violations);
        }

        let context = format!("{} of {} nodes failed", failed, nodes.len());
        let result = if failed == 0 {
            PdfUaCheckResult::pass(self.requirement())
        } else {
            PdfUaCheckResult::fail(self.requirement(), violations)
        };
        result.with_context(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::PdfUaViolation;
    use crate::structure::{ContentNode, SemanticType};

    /// Fails every paragraph.
    struct NoParagraphs;

    impl PdfUaChecker for NoParagraphs {
        fn requirement(&self) -> PdfUaRequirement {
            PdfUaRequirement::LogicalReadingOrder
        }

        fn check(&self, node: &SemanticNode) -> PdfUaCheckResult {
            if node.semantic_type() == SemanticType::Paragraph {
                PdfUaCheckResult::fail(
                    self.requirement(),
                    vec![PdfUaViolation::error(node, "paragraph")],
                )
            } else {
                PdfUaCheckResult::pass(self.requirement())
            }
        }
    }

    fn nodes(t: SemanticType, n: usize) -> Vec<SemanticNode> {
        (0..n).map(|_| ContentNode::new(t).into()).collect()
    }

    #[test]
    fn test_check_all_empty() {
        let result = NoParagraphs.check_all(&[]);
        assert!(result.passed);
        assert!(result.violations.is_empty());
        assert_eq!(result.context.as_deref(), Some("0 of 0 nodes failed"));
    }

    #[test]
    fn test_check_all_all_pass() {
        let result = NoParagraphs.check_all(&nodes(SemanticType::Span, 4));
        assert!(result.passed);
        assert_eq!(result.context.as_deref(), Some("0 of 4 nodes failed"));
    }

    #[test]
    fn test_check_all_all_fail() {
        let result = NoParagraphs.check_all(&nodes(SemanticType::Paragraph, 3));
        assert!(!result.passed);
        assert_eq!(result.violations.len(), 3);
        assert_eq!(result.context.as_deref(), Some("3 of 3 nodes failed"));
    }

    #[test]
    fn test_check_all_keeps_discovery_order() {
        let mut input = nodes(SemanticType::Paragraph, 1);
        input.extend(nodes(SemanticType::Span, 1));
        input.extend(nodes(SemanticType::Paragraph, 1));

        let result = NoParagraphs.check_all(&input);
        assert!(!result.passed);
        assert_eq!(result.requirement, PdfUaRequirement::LogicalReadingOrder);
        assert_eq!(result.context.as_deref(), Some("2 of 3 nodes failed"));
        let ids: Vec<_> = result.violations.iter().map(|v| v.node_id).collect();
        assert_eq!(ids, vec![Some(input[0].id()), Some(input[2].id())]);
    }
}
