//! One checker per PDF/UA requirement.
//!
//! Each checker inspects exactly one node. Rules that concern a container
//! (a table, a list) fire on the container node and look down into its
//! subtree; every other node passes.

use super::checker::PdfUaChecker;
use super::types::{PdfUaCheckResult, PdfUaRequirement, PdfUaViolation};
use crate::structure::{has_header_cell, keys, NodeErrorCode, SemanticNode, SemanticType};
use std::collections::{HashMap, HashSet};

/// Create the checker for `requirement`.
///
/// `role_map` is used by the role-mapping checker only.
pub fn checker_for(
    requirement: PdfUaRequirement,
    role_map: &HashMap<String, SemanticType>,
) -> Box<dyn PdfUaChecker> {
    match requirement {
        PdfUaRequirement::DocumentMustBeTagged => Box::new(DocumentTaggedChecker),
        PdfUaRequirement::StructureElementsNeedRoleMapping => {
            Box::new(RoleMappingChecker::new(role_map.clone()))
        },
        PdfUaRequirement::LogicalReadingOrder => Box::new(ReadingOrderChecker),
        PdfUaRequirement::TablesMustHaveHeaders => Box::new(TableHeadersChecker),
        PdfUaRequirement::TableStructureMustBeRegular => Box::new(TableRegularityChecker),
        PdfUaRequirement::TableCellHeaderAssociation => Box::new(TableHeaderAssociationChecker),
        PdfUaRequirement::ListItemsMustHaveLabels => Box::new(ListLabelsChecker),
        PdfUaRequirement::ListStructureMustBeProper => Box::new(ListStructureChecker),
        PdfUaRequirement::AlternativeDescriptions => Box::new(AlternativeDescriptionsChecker),
        PdfUaRequirement::ActualTextRequired => Box::new(ActualTextChecker),
    }
}

/// 7.1: the document root must contain tagged content.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentTaggedChecker;

impl PdfUaChecker for DocumentTaggedChecker {
    fn requirement(&self) -> PdfUaRequirement {
        PdfUaRequirement::DocumentMustBeTagged
    }

    fn check(&self, node: &SemanticNode) -> PdfUaCheckResult {
        let mut violations = Vec::new();
        if node.semantic_type() == SemanticType::Document && node.children().is_empty() {
            violations.push(PdfUaViolation::error(
                node,
                "Document has no tagged content in its structure tree",
            ));
        }
        PdfUaCheckResult::from_violations(self.requirement(), violations)
    }
}

/// 7.2: custom structure types must be role-mapped to standard ones.
///
/// The original type name is read from the `StructureType` attribute.
#[derive(Debug, Clone, Default)]
pub struct RoleMappingChecker {
    role_map: HashMap<String, SemanticType>,
}

impl RoleMappingChecker {
    /// Create a checker that accepts the custom names in `role_map`.
    pub fn new(role_map: HashMap<String, SemanticType>) -> Self {
        Self { role_map }
    }
}

impl PdfUaChecker for RoleMappingChecker {
    fn requirement(&self) -> PdfUaRequirement {
        PdfUaRequirement::StructureElementsNeedRoleMapping
    }

    fn check(&self, node: &SemanticNode) -> PdfUaCheckResult {
        let mut violations = Vec::new();
        let name = node
            .attribute(keys::STRUCTURE_TYPE)
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty());

        if let Some(name) = name {
            let standard = SemanticType::from_structure_type_name(name).is_some();
            if !standard && !self.role_map.contains_key(name) {
                violations.push(PdfUaViolation::error(
                    node,
                    format!("Structure type '{}' is not standard and has no role mapping", name),
                ));
            }
        }

        PdfUaCheckResult::from_violations(self.requirement(), violations)
    }
}

/// 7.2.1: children should not run backwards through the pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadingOrderChecker;

impl PdfUaChecker for ReadingOrderChecker {
    fn requirement(&self) -> PdfUaRequirement {
        PdfUaRequirement::LogicalReadingOrder
    }

    fn check(&self, node: &SemanticNode) -> PdfUaCheckResult {
        let mut violations = Vec::new();
        let mut previous_page: Option<u32> = None;

        for child in node.children() {
            let Some(bbox) = child.bounding_box() else {
                continue;
            };
            if let Some(prev) = previous_page {
                if bbox.page_index < prev {
                    violations.push(PdfUaViolation::warning(
                        child,
                        format!(
                            "{} on page {} follows content on page {} in structure order",
                            child.semantic_type(),
                            bbox.page_index,
                            prev
                        ),
                    ));
                }
            }
            previous_page = Some(bbox.page_index);
        }

        PdfUaCheckResult::from_violations(self.requirement(), violations)
    }
}

/// 7.5: tables must contain header cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableHeadersChecker;

impl PdfUaChecker for TableHeadersChecker {
    fn requirement(&self) -> PdfUaRequirement {
        PdfUaRequirement::TablesMustHaveHeaders
    }

    fn check(&self, node: &SemanticNode) -> PdfUaCheckResult {
        let mut violations = Vec::new();
        if node.semantic_type() == SemanticType::Table && !has_header_cell(node.children()) {
            violations.push(PdfUaViolation::error(
                node,
                NodeErrorCode::TableMissingHeaders.description(),
            ));
        }
        PdfUaCheckResult::from_violations(self.requirement(), violations)
    }
}

/// 7.5.1: every row of a table must span the same number of columns.
///
/// Cells count by their `ColSpan` (default 1). Cells with a `RowSpan` above
/// 1 also occupy their columns in the rows below.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableRegularityChecker;

impl PdfUaChecker for TableRegularityChecker {
    fn requirement(&self) -> PdfUaRequirement {
        PdfUaRequirement::TableStructureMustBeRegular
    }

    fn check(&self, node: &SemanticNode) -> PdfUaCheckResult {
        let mut violations = Vec::new();
        if node.semantic_type() != SemanticType::Table {
            return PdfUaCheckResult::pass(self.requirement());
        }

        // (rows still covered, columns) of cells spanning down
        let mut carried: Vec<(u64, u64)> = Vec::new();
        let mut expected: Option<u64> = None;

        for (index, row) in table_rows(node).into_iter().enumerate() {
            let mut width = carried
                .iter()
                .fold(0u64, |acc, (_, cols)| acc.saturating_add(*cols));
            carried = carried
                .into_iter()
                .filter(|(rows_left, _)| *rows_left > 1)
                .map(|(rows_left, cols)| (rows_left - 1, cols))
                .collect();

            for cell in row.children().iter().filter(|c| is_cell(c)) {
                let cols = span(cell, keys::COL_SPAN);
                let rows = span(cell, keys::ROW_SPAN);
                width = width.saturating_add(cols);
                if rows > 1 {
                    carried.push((rows - 1, cols));
                }
            }

            match expected {
                None => expected = Some(width),
                Some(columns) if columns != width => {
                    violations.push(PdfUaViolation::error(
                        row,
                        format!(
                            "Table row {} spans {} columns, expected {}",
                            index + 1,
                            width,
                            columns
                        ),
                    ));
                },
                Some(_) => {},
            }
        }

        PdfUaCheckResult::from_violations(self.requirement(), violations)
    }
}

/// 7.5.2: header cells declare a scope and data cells reference existing
/// header cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableHeaderAssociationChecker;

impl PdfUaChecker for TableHeaderAssociationChecker {
    fn requirement(&self) -> PdfUaRequirement {
        PdfUaRequirement::TableCellHeaderAssociation
    }

    fn check(&self, node: &SemanticNode) -> PdfUaCheckResult {
        let mut violations = Vec::new();
        if node.semantic_type() != SemanticType::Table {
            return PdfUaCheckResult::pass(self.requirement());
        }

        let mut cells = Vec::new();
        collect_cells(node.children(), &mut cells);

        let header_ids: HashSet<&str> = cells
            .iter()
            .filter(|c| c.semantic_type() == SemanticType::TableHeader)
            .filter_map(|c| c.attribute(keys::ID).and_then(|v| v.as_str()))
            .collect();

        for cell in &cells {
            match cell.semantic_type() {
                SemanticType::TableHeader => {
                    match cell.attribute(keys::SCOPE).and_then(|v| v.as_str()) {
                        None | Some("") => violations.push(PdfUaViolation::warning(
                            cell,
                            "Header cell has no Scope attribute",
                        )),
                        Some("Row" | "Column" | "Both") => {},
                        Some(other) => violations.push(PdfUaViolation::warning(
                            cell,
                            format!("Header cell has invalid Scope '{}'", other),
                        )),
                    }
                },
                SemanticType::TableData => {
                    let headers = cell.attribute(keys::HEADERS).and_then(|v| v.as_str());
                    for id in headers.unwrap_or_default().split_whitespace() {
                        if !header_ids.contains(id) {
                            violations.push(PdfUaViolation::error(
                                cell,
                                format!("Data cell references unknown header cell '{}'", id),
                            ));
                        }
                    }
                },
                _ => {},
            }
        }

        PdfUaCheckResult::from_violations(self.requirement(), violations)
    }
}

/// 7.6: items of numbered lists must carry labels.
///
/// A list whose `ListNumbering` is `None` is exempt.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListLabelsChecker;

impl PdfUaChecker for ListLabelsChecker {
    fn requirement(&self) -> PdfUaRequirement {
        PdfUaRequirement::ListItemsMustHaveLabels
    }

    fn check(&self, node: &SemanticNode) -> PdfUaCheckResult {
        let mut violations = Vec::new();
        let unnumbered = node
            .attribute(keys::LIST_NUMBERING)
            .and_then(|v| v.as_str())
            == Some("None");

        if node.semantic_type() == SemanticType::List && !unnumbered {
            for item in node
                .children()
                .iter()
                .filter(|c| c.semantic_type() == SemanticType::ListItem)
            {
                let labeled = item
                    .children()
                    .iter()
                    .any(|c| c.semantic_type() == SemanticType::Label);
                if !labeled {
                    violations.push(PdfUaViolation::error(
                        item,
                        NodeErrorCode::ListItemMissingLabel.description(),
                    ));
                }
            }
        }

        PdfUaCheckResult::from_violations(self.requirement(), violations)
    }
}

/// 7.6.1: `L` holds `LI`, `Caption` or nested `L`; `LI` holds `Lbl` or `LBody`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListStructureChecker;

impl PdfUaChecker for ListStructureChecker {
    fn requirement(&self) -> PdfUaRequirement {
        PdfUaRequirement::ListStructureMustBeProper
    }

    fn check(&self, node: &SemanticNode) -> PdfUaCheckResult {
        let allowed: &[SemanticType] = match node.semantic_type() {
            SemanticType::List => &[SemanticType::ListItem, SemanticType::Caption, SemanticType::List],
            SemanticType::ListItem => &[SemanticType::Label, SemanticType::ListBody],
            _ => return PdfUaCheckResult::pass(self.requirement()),
        };

        let violations = node
            .children()
            .iter()
            .filter(|c| !allowed.contains(&c.semantic_type()))
            .map(|c| {
                PdfUaViolation::error(
                    c,
                    format!(
                        "{} is not allowed inside {}",
                        c.semantic_type(),
                        node.semantic_type()
                    ),
                )
            })
            .collect();

        PdfUaCheckResult::from_violations(self.requirement(), violations)
    }
}

/// 7.3: figures and formulas need alternative descriptions.
///
/// Decorative figures (no visual content, no alt text, no children) pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlternativeDescriptionsChecker;

impl PdfUaChecker for AlternativeDescriptionsChecker {
    fn requirement(&self) -> PdfUaRequirement {
        PdfUaRequirement::AlternativeDescriptions
    }

    fn check(&self, node: &SemanticNode) -> PdfUaCheckResult {
        let violations = node
            .validate_accessibility()
            .into_iter()
            .filter(|code| {
                matches!(
                    code,
                    NodeErrorCode::FigureMissingAltText | NodeErrorCode::FormulaMissingAltText
                )
            })
            .map(|code| PdfUaViolation::error(node, code.description()))
            .collect();

        PdfUaCheckResult::from_violations(self.requirement(), violations)
    }
}

/// 7.2.2: inline content drawn as figures needs replacement text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActualTextChecker;

impl PdfUaChecker for ActualTextChecker {
    fn requirement(&self) -> PdfUaRequirement {
        PdfUaRequirement::ActualTextRequired
    }

    fn check(&self, node: &SemanticNode) -> PdfUaCheckResult {
        let mut violations = Vec::new();
        let actual_text = node.attribute(keys::ACTUAL_TEXT).and_then(|v| v.as_str());

        if actual_text == Some("") {
            violations.push(PdfUaViolation::warning(node, "ActualText attribute is empty"));
        }

        let has_actual_text = actual_text.is_some_and(|t| !t.is_empty());
        let drawn = node.children().iter().any(SemanticNode::is_figure);
        if node.semantic_type().is_inline()
            && drawn
            && !has_actual_text
            && node.text_content().trim().is_empty()
        {
            violations.push(PdfUaViolation::error(
                node,
                format!(
                    "{} is rendered as graphics but has no ActualText",
                    node.semantic_type()
                ),
            ));
        }

        PdfUaCheckResult::from_violations(self.requirement(), violations)
    }
}

fn is_cell(node: &SemanticNode) -> bool {
    matches!(
        node.semantic_type(),
        SemanticType::TableHeader | SemanticType::TableData
    )
}

/// `ColSpan`/`RowSpan` value, 1 when absent or below 1.
fn span(cell: &SemanticNode, key: &str) -> u64 {
    cell.attribute(key)
        .and_then(|v| v.as_i64())
        .filter(|n| *n >= 1)
        .map_or(1, i64::unsigned_abs)
}

/// Rows directly under the table or under its row groups.
fn table_rows(table: &SemanticNode) -> Vec<&SemanticNode> {
    let mut rows = Vec::new();
    for child in table.children() {
        match child.semantic_type() {
            SemanticType::TableRow => rows.push(child),
            SemanticType::TableHead | SemanticType::TableBody | SemanticType::TableFoot => rows
                .extend(
                    child
                        .children()
                        .iter()
                        .filter(|c| c.semantic_type() == SemanticType::TableRow),
                ),
            _ => {},
        }
    }
    rows
}

/// Header and data cells of a table, without those of nested tables.
fn collect_cells<'a>(children: &'a [SemanticNode], cells: &mut Vec<&'a SemanticNode>) {
    for child in children {
        match child.semantic_type() {
            SemanticType::Table => {},
            SemanticType::TableHeader | SemanticType::TableData => {
                cells.push(child);
                collect_cells(child.children(), cells);
            },
            _ => collect_cells(child.children(), cells),
        }
    }
}
