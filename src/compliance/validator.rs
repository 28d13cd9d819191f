//! Whole-tree PDF/UA validation.
//!
//! The validator flattens a semantic tree in pre-order and runs every
//! enabled requirement checker over all of its nodes.

use super::checker::PdfUaChecker;
use super::checks::checker_for;
use super::types::{PdfUaCheckResult, PdfUaRequirement, PdfUaViolation, Severity};
use crate::config::CheckerConfig;
use crate::elements::Color;
use crate::structure::{SemanticNode, SemanticType};

/// PDF/UA validation statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UaValidationStats {
    /// Number of structure nodes checked.
    pub nodes_checked: usize,
    /// Number of figures checked.
    pub figures_checked: usize,
    /// Number of figures with alt text.
    pub figures_with_alt: usize,
    /// Number of tables checked.
    pub tables_checked: usize,
    /// Number of lists checked.
    pub lists_checked: usize,
    /// Number of text runs checked for contrast.
    pub text_runs_checked: usize,
    /// Number of text runs below the contrast threshold against white.
    pub low_contrast_text_runs: usize,
    /// Longest path from the root to a leaf.
    pub max_depth: usize,
}

/// Result of validating a whole tree.
#[derive(Debug, Clone)]
pub struct UaValidationReport {
    /// Whether no error-severity violation was found.
    pub is_compliant: bool,
    /// One result per requirement checked, in requirement order.
    pub results: Vec<PdfUaCheckResult>,
    /// Summary statistics.
    pub stats: UaValidationStats,
}

impl UaValidationReport {
    /// All violations across requirements.
    pub fn violations(&self) -> impl Iterator<Item = &PdfUaViolation> {
        self.results.iter().flat_map(|r| r.violations.iter())
    }

    /// Requirements whose check failed.
    pub fn failed_requirements(&self) -> Vec<PdfUaRequirement> {
        self.results
            .iter()
            .filter(|r| !r.passed)
            .map(|r| r.requirement)
            .collect()
    }

    /// Result for one requirement, if it was checked.
    pub fn result_for(&self, requirement: PdfUaRequirement) -> Option<&PdfUaCheckResult> {
        self.results.iter().find(|r| r.requirement == requirement)
    }

    /// Total error-severity violations.
    pub fn error_count(&self) -> usize {
        self.results.iter().map(PdfUaCheckResult::error_count).sum()
    }

    /// Total warning-severity violations.
    pub fn warning_count(&self) -> usize {
        self.results.iter().map(PdfUaCheckResult::warning_count).sum()
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Check if there are any warnings.
    pub fn has_warnings(&self) -> bool {
        self.warning_count() > 0
    }
}

/// PDF/UA validator.
///
/// Runs a configurable set of requirement checkers over a semantic tree.
///
/// # Examples
///
/// ```
/// use pdfua_oxide::compliance::{PdfUaRequirement, PdfUaValidator};
/// use pdfua_oxide::structure::{ContentNode, SemanticNode, SemanticType};
///
/// let table = ContentNode::new(SemanticType::Table)
///     .with_child(ContentNode::new(SemanticType::TableRow)
///         .with_child(ContentNode::new(SemanticType::TableData)));
/// let root: SemanticNode = ContentNode::new(SemanticType::Document).with_child(table).into();
///
/// let report = PdfUaValidator::new().validate(&root);
/// assert!(!report.is_compliant);
/// assert_eq!(report.failed_requirements(), vec![PdfUaRequirement::TablesMustHaveHeaders]);
/// ```
pub struct PdfUaValidator {
    config: CheckerConfig,
    checkers: Vec<Box<dyn PdfUaChecker>>,
}

impl Default for PdfUaValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfUaValidator {
    /// Create a validator checking every requirement.
    pub fn new() -> Self {
        Self::with_config(CheckerConfig::default())
    }

    /// Create a validator from a configuration.
    pub fn with_config(config: CheckerConfig) -> Self {
        let checkers = config
            .enabled_requirements
            .iter()
            .map(|req| checker_for(*req, &config.role_map))
            .collect();
        Self { config, checkers }
    }

    /// Add a custom checker, run after the built-in ones.
    pub fn with_checker(mut self, checker: Box<dyn PdfUaChecker>) -> Self {
        self.checkers.push(checker);
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Requirements that will be checked, in run order.
    pub fn requirements(&self) -> Vec<PdfUaRequirement> {
        self.checkers.iter().map(|c| c.requirement()).collect()
    }

    /// Validate the tree rooted at `root`.
    pub fn validate(&self, root: &SemanticNode) -> UaValidationReport {
        let nodes: Vec<&SemanticNode> = root.iter().collect();
        let mut results = Vec::with_capacity(self.checkers.len());

        for checker in &self.checkers {
            let result = if self.config.include_warnings {
                checker.check_nodes(&nodes)
            } else {
                check_errors_only(checker.as_ref(), &nodes)
            };

            log::debug!(
                "PDF/UA {} ({}): {} violation(s)",
                checker.requirement().identifier(),
                checker.requirement().name(),
                result.violations.len()
            );

            let failed = !result.passed;
            results.push(result);
            if failed && self.config.stop_on_first_failure {
                log::debug!("Stopping after first failed requirement");
                break;
            }
        }

        let stats = self.collect_stats(root, &nodes);
        let is_compliant = results.iter().all(|r| !r.has_errors());

        log::info!(
            "PDF/UA validation: {} requirement(s) checked over {} node(s), {} failed, compliant: {}",
            results.len(),
            stats.nodes_checked,
            results.iter().filter(|r| !r.passed).count(),
            is_compliant
        );
        if stats.low_contrast_text_runs > 0 {
            log::warn!(
                "{} of {} text runs are below {} contrast against white",
                stats.low_contrast_text_runs,
                stats.text_runs_checked,
                self.config.contrast_level
            );
        }

        UaValidationReport {
            is_compliant,
            results,
            stats,
        }
    }

    fn collect_stats(&self, root: &SemanticNode, nodes: &[&SemanticNode]) -> UaValidationStats {
        let mut stats = UaValidationStats {
            nodes_checked: nodes.len(),
            max_depth: root.max_depth(),
            ..Default::default()
        };
        let background = Color::white();

        for &node in nodes {
            match node {
                SemanticNode::Figure(figure) => {
                    stats.figures_checked += 1;
                    if figure.has_alt_text() {
                        stats.figures_with_alt += 1;
                    }
                },
                SemanticNode::Content(content) => {
                    match content.semantic_type {
                        SemanticType::Table => stats.tables_checked += 1,
                        SemanticType::List => stats.lists_checked += 1,
                        _ => {},
                    }
                    for chunk in content.text_blocks.iter().flat_map(|b| b.all_chunks()) {
                        if chunk.is_empty() {
                            continue;
                        }
                        stats.text_runs_checked += 1;
                        let ratio = chunk.color.contrast_ratio(&background);
                        if !chunk.text_type().meets(ratio, self.config.contrast_level) {
                            stats.low_contrast_text_runs += 1;
                        }
                    }
                },
            }
        }

        stats
    }
}

/// Like [`PdfUaChecker::check_nodes`], keeping only error-severity
/// violations; a node whose check found only warnings counts as passing.
fn check_errors_only(checker: &dyn PdfUaChecker, nodes: &[&SemanticNode]) -> PdfUaCheckResult {
    let mut violations = Vec::new();
    let mut failed = 0usize;

    for &node in nodes {
        let errors: Vec<PdfUaViolation> = checker
            .check(node)
            .violations
            .into_iter()
            .filter(|v| v.severity == Severity::Error)
            .collect();
        if !errors.is_empty() {
            failed += 1;
        }
        violations.extend(errors);
    }

    PdfUaCheckResult::from_violations(checker.requirement(), violations)
        .with_context(format!("{} of {} nodes failed", failed, nodes.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{ImageChunk, TextBlock, TextChunk, TextLine};
    use crate::geometry::{BoundingBox, Rect};
    use crate::structure::{keys, ContentNode, FigureNode};

    fn bbox(page: u32) -> BoundingBox {
        BoundingBox::new(page, Rect::new(0.0, 0.0, 100.0, 20.0))
    }

    fn text_block(chunk: TextChunk) -> TextBlock {
        TextBlock::new(bbox(0), vec![TextLine::new(bbox(0), vec![chunk])])
    }

    fn accessible_document() -> SemanticNode {
        let header_row = ContentNode::new(SemanticType::TableRow).with_child(
            ContentNode::new(SemanticType::TableHeader)
                .with_attribute(keys::SCOPE, "Column")
                .with_attribute(keys::ID, "name"),
        );
        let data_row = ContentNode::new(SemanticType::TableRow)
            .with_child(ContentNode::new(SemanticType::TableData).with_attribute(keys::HEADERS, "name"));

        ContentNode::new(SemanticType::Document)
            .with_child(
                ContentNode::new(SemanticType::H1)
                    .with_bounding_box(bbox(0))
                    .with_text_block(text_block(TextChunk::new(bbox(0), "Annual report"))),
            )
            .with_child(
                FigureNode::new()
                    .with_image(ImageChunk::new(bbox(0), 300, 200))
                    .with_attribute(keys::ALT, "Logo"),
            )
            .with_child(
                ContentNode::new(SemanticType::Table)
                    .with_bounding_box(bbox(1))
                    .with_child(header_row)
                    .with_child(data_row),
            )
            .with_child(
                ContentNode::new(SemanticType::List).with_child(
                    ContentNode::new(SemanticType::ListItem)
                        .with_child(ContentNode::new(SemanticType::Label))
                        .with_child(ContentNode::new(SemanticType::ListBody)),
                ),
            )
            .into()
    }

    #[test]
    fn test_accessible_document_is_compliant() {
        let report = PdfUaValidator::new().validate(&accessible_document());
        assert!(report.is_compliant);
        assert_eq!(report.results.len(), 10);
        assert!(report.failed_requirements().is_empty());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_stats() {
        let report = PdfUaValidator::new().validate(&accessible_document());
        let stats = &report.stats;
        assert_eq!(stats.nodes_checked, 12);
        assert_eq!(stats.figures_checked, 1);
        assert_eq!(stats.figures_with_alt, 1);
        assert_eq!(stats.tables_checked, 1);
        assert_eq!(stats.lists_checked, 1);
        assert_eq!(stats.text_runs_checked, 1);
        assert_eq!(stats.low_contrast_text_runs, 0);
        assert_eq!(stats.max_depth, 3);
    }

    #[test]
    fn test_low_contrast_runs_depend_on_level() {
        let grey = TextChunk::new(bbox(0), "Fine print").with_color(Color::new(0.45, 0.45, 0.45));
        let root: SemanticNode = ContentNode::new(SemanticType::Document)
            .with_child(ContentNode::new(SemanticType::Paragraph).with_text_block(text_block(grey)))
            .into();

        let aa = PdfUaValidator::new().validate(&root);
        assert_eq!(aa.stats.low_contrast_text_runs, 0);

        let config = CheckerConfig::new().with_contrast_level(crate::compliance::ContrastLevel::Aaa);
        let aaa = PdfUaValidator::with_config(config).validate(&root);
        assert_eq!(aaa.stats.low_contrast_text_runs, 1);
    }

    #[test]
    fn test_failures_are_located() {
        let figure = FigureNode::new().with_image(ImageChunk::new(bbox(3), 10, 10));
        let figure_id = figure.id;
        let root: SemanticNode = ContentNode::new(SemanticType::Document).with_child(figure).into();

        let report = PdfUaValidator::new().validate(&root);
        assert!(!report.is_compliant);
        let result = report
            .result_for(PdfUaRequirement::AlternativeDescriptions)
            .unwrap();
        assert!(!result.passed);
        assert_eq!(result.violations[0].node_id, Some(figure_id));
        assert_eq!(result.violations[0].location, Some(bbox(3)));
        assert_eq!(result.context.as_deref(), Some("1 of 2 nodes failed"));
    }

    #[test]
    fn test_warnings_do_not_break_compliance() {
        let root: SemanticNode = ContentNode::new(SemanticType::Document)
            .with_child(ContentNode::new(SemanticType::Paragraph).with_bounding_box(bbox(2)))
            .with_child(ContentNode::new(SemanticType::Paragraph).with_bounding_box(bbox(1)))
            .into();

        let report = PdfUaValidator::new().validate(&root);
        assert!(report.is_compliant);
        assert_eq!(report.warning_count(), 1);
        assert_eq!(
            report.failed_requirements(),
            vec![PdfUaRequirement::LogicalReadingOrder]
        );

        let quiet = PdfUaValidator::with_config(CheckerConfig::new().with_warnings(false)).validate(&root);
        assert!(quiet.is_compliant);
        assert!(quiet.failed_requirements().is_empty());
        assert_eq!(quiet.warning_count(), 0);
    }

    #[test]
    fn test_context_counts_only_reported_failures() {
        let root: SemanticNode = ContentNode::new(SemanticType::Document)
            .with_child(ContentNode::new(SemanticType::Paragraph).with_bounding_box(bbox(2)))
            .with_child(ContentNode::new(SemanticType::Paragraph).with_bounding_box(bbox(0)))
            .into();
        let config = CheckerConfig::new().with_requirements([PdfUaRequirement::LogicalReadingOrder]);

        let loud = PdfUaValidator::with_config(config.clone()).validate(&root);
        let result = loud.result_for(PdfUaRequirement::LogicalReadingOrder).unwrap();
        assert!(!result.passed);
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.context.as_deref(), Some("1 of 3 nodes failed"));

        let quiet = PdfUaValidator::with_config(config.with_warnings(false)).validate(&root);
        let result = quiet.result_for(PdfUaRequirement::LogicalReadingOrder).unwrap();
        assert!(result.passed);
        assert!(result.violations.is_empty());
        assert_eq!(result.context.as_deref(), Some("0 of 3 nodes failed"));
    }

    #[test]
    fn test_stop_on_first_failure() {
        let root: SemanticNode = ContentNode::new(SemanticType::Document).into();
        let config = CheckerConfig::new().with_stop_on_first_failure(true);
        let report = PdfUaValidator::with_config(config).validate(&root);
        assert_eq!(report.results.len(), 1);
        assert_eq!(report.results[0].requirement, PdfUaRequirement::DocumentMustBeTagged);
    }

    #[test]
    fn test_enabled_requirements_only() {
        let config = CheckerConfig::new().with_requirements([
            PdfUaRequirement::ListItemsMustHaveLabels,
            PdfUaRequirement::TablesMustHaveHeaders,
        ]);
        let validator = PdfUaValidator::with_config(config);
        assert_eq!(
            validator.requirements(),
            vec![
                PdfUaRequirement::TablesMustHaveHeaders,
                PdfUaRequirement::ListItemsMustHaveLabels
            ]
        );
    }

    #[test]
    fn test_role_map_reaches_checker() {
        let root: SemanticNode = ContentNode::new(SemanticType::Document)
            .with_child(
                ContentNode::new(SemanticType::Section).with_attribute(keys::STRUCTURE_TYPE, "Chapter"),
            )
            .into();

        let unmapped = PdfUaValidator::new().validate(&root);
        assert!(!unmapped.is_compliant);

        let config = CheckerConfig::new().with_role("Chapter", SemanticType::Section);
        let mapped = PdfUaValidator::with_config(config).validate(&root);
        assert!(mapped.is_compliant);
    }

    struct AlwaysFails;

    impl PdfUaChecker for AlwaysFails {
        fn requirement(&self) -> PdfUaRequirement {
            PdfUaRequirement::ActualTextRequired
        }

        fn check(&self, node: &SemanticNode) -> PdfUaCheckResult {
            PdfUaCheckResult::fail(self.requirement(), vec![PdfUaViolation::error(node, "always")])
        }
    }

    #[test]
    fn test_custom_checker() {
        let config = CheckerConfig::new().with_requirements(std::iter::empty());
        let validator = PdfUaValidator::with_config(config).with_checker(Box::new(AlwaysFails));
        let report = validator.validate(&accessible_document());
        assert_eq!(report.results.len(), 1);
        assert_eq!(report.error_count(), 12);
    }
}
