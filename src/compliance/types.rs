//! PDF/UA requirement taxonomy, violations and check results.

use crate::error::Result;
use crate::geometry::BoundingBox;
use crate::structure::{NodeId, SemanticNode, SemanticType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Group of related PDF/UA requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PdfUaCategory {
    /// Tagging and logical structure
    Structure,
    /// Table markup
    Tables,
    /// List markup
    Lists,
    /// Alternative and replacement text
    Content,
}

impl fmt::Display for PdfUaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PdfUaCategory::Structure => write!(f, "Structure"),
            PdfUaCategory::Tables => write!(f, "Tables"),
            PdfUaCategory::Lists => write!(f, "Lists"),
            PdfUaCategory::Content => write!(f, "Content"),
        }
    }
}

/// A single checkable PDF/UA requirement (ISO 14289-1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PdfUaRequirement {
    /// Content must be tagged under a document root
    DocumentMustBeTagged,
    /// Custom structure types must map to standard ones
    StructureElementsNeedRoleMapping,
    /// Structure order must follow reading order
    LogicalReadingOrder,
    /// Tables must identify header cells
    TablesMustHaveHeaders,
    /// Table rows must have a consistent column count
    TableStructureMustBeRegular,
    /// Data cells must reference existing header cells
    TableCellHeaderAssociation,
    /// Numbered list items must carry labels
    ListItemsMustHaveLabels,
    /// Lists must nest L, LI, Lbl and LBody properly
    ListStructureMustBeProper,
    /// Figures and formulas need alternative descriptions
    AlternativeDescriptions,
    /// Content rendered as graphics needs replacement text
    ActualTextRequired,
}

impl PdfUaRequirement {
    /// Every requirement, in clause order within each category.
    pub const ALL: [PdfUaRequirement; 10] = [
        PdfUaRequirement::DocumentMustBeTagged,
        PdfUaRequirement::StructureElementsNeedRoleMapping,
        PdfUaRequirement::LogicalReadingOrder,
        PdfUaRequirement::TablesMustHaveHeaders,
        PdfUaRequirement::TableStructureMustBeRegular,
        PdfUaRequirement::TableCellHeaderAssociation,
        PdfUaRequirement::ListItemsMustHaveLabels,
        PdfUaRequirement::ListStructureMustBeProper,
        PdfUaRequirement::AlternativeDescriptions,
        PdfUaRequirement::ActualTextRequired,
    ];

    /// Short clause identifier (e.g. `"7.5"`).
    pub fn identifier(&self) -> &'static str {
        match self {
            PdfUaRequirement::DocumentMustBeTagged => "7.1",
            PdfUaRequirement::StructureElementsNeedRoleMapping => "7.2",
            PdfUaRequirement::LogicalReadingOrder => "7.2.1",
            PdfUaRequirement::TablesMustHaveHeaders => "7.5",
            PdfUaRequirement::TableStructureMustBeRegular => "7.5.1",
            PdfUaRequirement::TableCellHeaderAssociation => "7.5.2",
            PdfUaRequirement::ListItemsMustHaveLabels => "7.6",
            PdfUaRequirement::ListStructureMustBeProper => "7.6.1",
            PdfUaRequirement::AlternativeDescriptions => "7.3",
            PdfUaRequirement::ActualTextRequired => "7.2.2",
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            PdfUaRequirement::DocumentMustBeTagged => "Document must be tagged",
            PdfUaRequirement::StructureElementsNeedRoleMapping => {
                "Structure elements need role mapping"
            },
            PdfUaRequirement::LogicalReadingOrder => "Logical reading order",
            PdfUaRequirement::TablesMustHaveHeaders => "Tables must have headers",
            PdfUaRequirement::TableStructureMustBeRegular => "Table structure must be regular",
            PdfUaRequirement::TableCellHeaderAssociation => "Table cell header association",
            PdfUaRequirement::ListItemsMustHaveLabels => "List items must have labels",
            PdfUaRequirement::ListStructureMustBeProper => "List structure must be proper",
            PdfUaRequirement::AlternativeDescriptions => "Alternative descriptions",
            PdfUaRequirement::ActualTextRequired => "Actual text required",
        }
    }

    /// Category the requirement belongs to.
    pub fn category(&self) -> PdfUaCategory {
        match self {
            PdfUaRequirement::DocumentMustBeTagged
            | PdfUaRequirement::StructureElementsNeedRoleMapping
            | PdfUaRequirement::LogicalReadingOrder => PdfUaCategory::Structure,
            PdfUaRequirement::TablesMustHaveHeaders
            | PdfUaRequirement::TableStructureMustBeRegular
            | PdfUaRequirement::TableCellHeaderAssociation => PdfUaCategory::Tables,
            PdfUaRequirement::ListItemsMustHaveLabels
            | PdfUaRequirement::ListStructureMustBeProper => PdfUaCategory::Lists,
            PdfUaRequirement::AlternativeDescriptions | PdfUaRequirement::ActualTextRequired => {
                PdfUaCategory::Content
            },
        }
    }

    /// WCAG 2.x success criterion the requirement supports.
    pub fn wcag_reference(&self) -> &'static str {
        match self {
            PdfUaRequirement::LogicalReadingOrder => "1.3.2",
            PdfUaRequirement::AlternativeDescriptions | PdfUaRequirement::ActualTextRequired => {
                "1.1.1"
            },
            _ => "1.3.1",
        }
    }
}

impl fmt::Display for PdfUaRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.identifier(), self.name())
    }
}

/// How serious a violation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    /// Breaks conformance
    Error,
    /// Likely problem, needs review
    Warning,
    /// Informational
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// Identity of a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViolationId(Uuid);

impl ViolationId {
    /// Generate a fresh random identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ViolationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ViolationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single located accessibility defect.
///
/// Like nodes, violations compare and hash by identity only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfUaViolation {
    /// Identity
    #[serde(default)]
    pub id: ViolationId,
    /// Offending node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<NodeId>,
    /// Type of the offending node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<SemanticType>,
    /// Human-readable description
    pub description: String,
    /// Severity
    pub severity: Severity,
    /// Where on the page the defect is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<BoundingBox>,
}

impl PdfUaViolation {
    /// Create a violation that is not tied to a node.
    pub fn new(description: impl Into<String>, severity: Severity) -> Self {
        Self {
            id: ViolationId::new(),
            node_id: None,
            node_type: None,
            description: description.into(),
            severity,
            location: None,
        }
    }

    /// Create an error-severity violation located at `node`.
    pub fn error(node: &SemanticNode, description: impl Into<String>) -> Self {
        Self::new(description, Severity::Error).with_node(node)
    }

    /// Create a warning-severity violation located at `node`.
    pub fn warning(node: &SemanticNode, description: impl Into<String>) -> Self {
        Self::new(description, Severity::Warning).with_node(node)
    }

    /// Attach the offending node: its id, type and location.
    pub fn with_node(mut self, node: &SemanticNode) -> Self {
        self.node_id = Some(node.id());
        self.node_type = Some(node.semantic_type());
        self.location = node.bounding_box();
        self
    }

    /// Set the location.
    pub fn with_location(mut self, location: BoundingBox) -> Self {
        self.location = Some(location);
        self
    }

    /// Check if this violation breaks conformance.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl PartialEq for PdfUaViolation {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PdfUaViolation {}

impl Hash for PdfUaViolation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for PdfUaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.description)?;
        if let Some(node_type) = self.node_type {
            write!(f, " ({})", node_type)?;
        }
        if let Some(ref loc) = self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}

/// Outcome of checking one requirement against one or more nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfUaCheckResult {
    /// Requirement checked
    pub requirement: PdfUaRequirement,
    /// True when no violation was found
    pub passed: bool,
    /// Violations in discovery order
    #[serde(default)]
    pub violations: Vec<PdfUaViolation>,
    /// Free-text context (e.g. node counts of a batch check)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl PdfUaCheckResult {
    /// A passing result.
    pub fn pass(requirement: PdfUaRequirement) -> Self {
        Self {
            requirement,
            passed: true,
            violations: Vec::new(),
            context: None,
        }
    }

    /// A failing result.
    pub fn fail(requirement: PdfUaRequirement, violations: Vec<PdfUaViolation>) -> Self {
        Self {
            requirement,
            passed: false,
            violations,
            context: None,
        }
    }

    /// Pass when `violations` is empty, fail otherwise.
    pub fn from_violations(requirement: PdfUaRequirement, violations: Vec<PdfUaViolation>) -> Self {
        if violations.is_empty() {
            Self::pass(requirement)
        } else {
            Self::fail(requirement, violations)
        }
    }

    /// Set the context.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Number of error-severity violations.
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    /// Number of warning-severity violations.
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Check if there are any error-severity violations.
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn count(&self, severity: Severity) -> usize {
        self.violations
            .iter()
            .filter(|v| v.severity == severity)
            .count()
    }
}

impl fmt::Display for PdfUaCheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed {
            write!(f, "[{}] {}: passed", self.requirement.identifier(), self.requirement.name())?;
        } else {
            write!(
                f,
                "[{}] {}: failed with {} violation(s)",
                self.requirement.identifier(),
                self.requirement.name(),
                self.violations.len()
            )?;
        }
        if let Some(ref context) = self.context {
            write!(f, " ({})", context)?;
        }
        Ok(())
    }
}

/// WCAG conformance level for contrast checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ContrastLevel {
    /// Level AA
    #[default]
    #[serde(rename = "AA")]
    Aa,
    /// Level AAA
    #[serde(rename = "AAA")]
    Aaa,
}

impl fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContrastLevel::Aa => write!(f, "AA"),
            ContrastLevel::Aaa => write!(f, "AAA"),
        }
    }
}

/// WCAG text class, which determines the contrast threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextType {
    /// Body text
    Regular,
    /// Large text: at least 18pt, or at least 14pt bold
    Large,
    /// Logotypes and brand names, exempt in practice
    Logo,
}

impl TextType {
    /// Classify text by size and weight (WCAG 2.x "large scale").
    pub fn classify(font_size: f32, bold: bool) -> Self {
        if font_size >= 18.0 || (bold && font_size >= 14.0) {
            TextType::Large
        } else {
            TextType::Regular
        }
    }

    /// Minimum contrast ratio required at `level`.
    pub fn minimum_contrast(&self, level: ContrastLevel) -> f64 {
        match (self, level) {
            (TextType::Regular, ContrastLevel::Aa) => 4.5,
            (TextType::Regular, ContrastLevel::Aaa) => 7.0,
            (TextType::Large, ContrastLevel::Aa) => 3.0,
            (TextType::Large, ContrastLevel::Aaa) => 4.5,
            (TextType::Logo, _) => 1.0,
        }
    }

    /// Minimum contrast ratio for AA.
    pub fn minimum_contrast_aa(&self) -> f64 {
        self.minimum_contrast(ContrastLevel::Aa)
    }

    /// Minimum contrast ratio for AAA.
    pub fn minimum_contrast_aaa(&self) -> f64 {
        self.minimum_contrast(ContrastLevel::Aaa)
    }

    /// Check if `ratio` satisfies the threshold at `level`.
    pub fn meets(&self, ratio: f64, level: ContrastLevel) -> bool {
        ratio >= self.minimum_contrast(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::structure::{ContentNode, FigureNode};

    #[test]
    fn test_requirement_table() {
        use PdfUaRequirement::*;
        let expected = [
            (DocumentMustBeTagged, "7.1", PdfUaCategory::Structure),
            (StructureElementsNeedRoleMapping, "7.2", PdfUaCategory::Structure),
            (LogicalReadingOrder, "7.2.1", PdfUaCategory::Structure),
            (TablesMustHaveHeaders, "7.5", PdfUaCategory::Tables),
            (TableStructureMustBeRegular, "7.5.1", PdfUaCategory::Tables),
            (TableCellHeaderAssociation, "7.5.2", PdfUaCategory::Tables),
            (ListItemsMustHaveLabels, "7.6", PdfUaCategory::Lists),
            (ListStructureMustBeProper, "7.6.1", PdfUaCategory::Lists),
            (AlternativeDescriptions, "7.3", PdfUaCategory::Content),
            (ActualTextRequired, "7.2.2", PdfUaCategory::Content),
        ];
        for (req, id, category) in expected {
            assert_eq!(req.identifier(), id);
            assert_eq!(req.category(), category);
            assert!(!req.name().is_empty());
        }
        assert_eq!(PdfUaRequirement::ALL.len(), expected.len());
    }

    #[test]
    fn test_requirement_display() {
        assert_eq!(
            PdfUaRequirement::TablesMustHaveHeaders.to_string(),
            "7.5 Tables must have headers"
        );
        assert_eq!(PdfUaRequirement::AlternativeDescriptions.wcag_reference(), "1.1.1");
    }

    #[test]
    fn test_violation_from_node() {
        let bbox = BoundingBox::new(2, Rect::new(0.0, 0.0, 10.0, 10.0));
        let node: SemanticNode = ContentNode::new(SemanticType::Table)
            .with_bounding_box(bbox)
            .into();
        let v = PdfUaViolation::error(&node, "Table has no header cells");
        assert_eq!(v.node_id, Some(node.id()));
        assert_eq!(v.node_type, Some(SemanticType::Table));
        assert_eq!(v.location, Some(bbox));
        assert!(v.is_error());

        let text = v.to_string();
        assert!(text.starts_with("[error] Table has no header cells (Table)"));
        assert!(text.contains("page 2"));
    }

    #[test]
    fn test_violation_identity() {
        let a = PdfUaViolation::new("same", Severity::Info);
        let b = PdfUaViolation::new("same", Severity::Info);
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_result_counts() {
        let node: SemanticNode = FigureNode::new().into();
        let result = PdfUaCheckResult::fail(
            PdfUaRequirement::AlternativeDescriptions,
            vec![
                PdfUaViolation::error(&node, "a"),
                PdfUaViolation::warning(&node, "b"),
                PdfUaViolation::error(&node, "c"),
            ],
        );
        assert!(!result.passed);
        assert_eq!(result.error_count(), 2);
        assert_eq!(result.warning_count(), 1);
        assert!(result.has_errors());

        let pass = PdfUaCheckResult::from_violations(PdfUaRequirement::AlternativeDescriptions, vec![]);
        assert!(pass.passed);
        assert_eq!(pass.to_string(), "[7.3] Alternative descriptions: passed");
    }

    #[test]
    fn test_result_json() {
        let result = PdfUaCheckResult::pass(PdfUaRequirement::LogicalReadingOrder)
            .with_context("0 of 0 nodes failed");
        let json = result.to_json().unwrap();
        assert!(json.contains("\"requirement\":\"logicalReadingOrder\""));
        assert!(json.contains("\"passed\":true"));

        let decoded: PdfUaCheckResult = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.requirement, PdfUaRequirement::LogicalReadingOrder);
        assert_eq!(decoded.context.as_deref(), Some("0 of 0 nodes failed"));
    }

    #[test]
    fn test_contrast_thresholds() {
        assert_eq!(TextType::Regular.minimum_contrast_aa(), 4.5);
        assert_eq!(TextType::Regular.minimum_contrast_aaa(), 7.0);
        assert_eq!(TextType::Large.minimum_contrast_aa(), 3.0);
        assert_eq!(TextType::Large.minimum_contrast_aaa(), 4.5);
        assert_eq!(TextType::Logo.minimum_contrast_aa(), 1.0);
        assert_eq!(TextType::Logo.minimum_contrast_aaa(), 1.0);
    }

    #[test]
    fn test_text_type_classify() {
        assert_eq!(TextType::classify(12.0, false), TextType::Regular);
        assert_eq!(TextType::classify(14.0, false), TextType::Regular);
        assert_eq!(TextType::classify(14.0, true), TextType::Large);
        assert_eq!(TextType::classify(13.9, true), TextType::Regular);
        assert_eq!(TextType::classify(18.0, false), TextType::Large);
    }

    #[test]
    fn test_meets() {
        assert!(TextType::Regular.meets(4.5, ContrastLevel::Aa));
        assert!(!TextType::Regular.meets(4.48, ContrastLevel::Aa));
        assert!(TextType::Large.meets(4.48, ContrastLevel::Aa));
        assert!(!TextType::Large.meets(4.48, ContrastLevel::Aaa));
        assert!(TextType::Logo.meets(1.0, ContrastLevel::Aaa));
    }

    #[test]
    fn test_contrast_level_json() {
        assert_eq!(serde_json::to_string(&ContrastLevel::Aaa).unwrap(), "\"AAA\"");
        assert_eq!(ContrastLevel::default(), ContrastLevel::Aa);
    }
}
