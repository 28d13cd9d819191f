//! PDF/UA accessibility checking.
//!
//! This module evaluates semantic trees against PDF/UA (ISO 14289-1)
//! requirements and the WCAG contrast thresholds they build on.
//!
//! ## Requirements
//!
//! | Clause | Requirement | Category |
//! |---|---|---|
//! | 7.1 | Document must be tagged | Structure |
//! | 7.2 | Structure elements need role mapping | Structure |
//! | 7.2.1 | Logical reading order | Structure |
//! | 7.2.2 | Actual text required | Content |
//! | 7.3 | Alternative descriptions | Content |
//! | 7.5 | Tables must have headers | Tables |
//! | 7.5.1 | Table structure must be regular | Tables |
//! | 7.5.2 | Table cell header association | Tables |
//! | 7.6 | List items must have labels | Lists |
//! | 7.6.1 | List structure must be proper | Lists |
//!
//! Each requirement has a [`PdfUaChecker`] in [`checks`]. A failing check is
//! a normal result carrying [`PdfUaViolation`] values, never an error.
//!
//! ## Example
//!
//! ```
//! use pdfua_oxide::compliance::{AlternativeDescriptionsChecker, PdfUaChecker};
//! use pdfua_oxide::elements::ImageChunk;
//! use pdfua_oxide::geometry::{BoundingBox, Rect};
//! use pdfua_oxide::structure::{FigureNode, SemanticNode};
//!
//! let bbox = BoundingBox::new(0, Rect::new(0.0, 0.0, 100.0, 100.0));
//! let figures: Vec<SemanticNode> = vec![
//!     FigureNode::new().with_image(ImageChunk::new(bbox, 64, 64)).into(),
//!     FigureNode::new().with_attribute("Alt", "Signature").into(),
//! ];
//!
//! let result = AlternativeDescriptionsChecker.check_all(&figures);
//! assert!(!result.passed);
//! assert_eq!(result.context.as_deref(), Some("1 of 2 nodes failed"));
//! ```
//!
//! ## Standards Reference
//!
//! - ISO 14289-1:2014 (PDF/UA-1)
//! - WCAG 2.1 Success Criteria 1.1.1, 1.3.1, 1.3.2, 1.4.3 and 1.4.6

mod checker;
pub mod checks;
mod types;
mod validator;

pub use checker::PdfUaChecker;
pub use checks::{
    checker_for, ActualTextChecker, AlternativeDescriptionsChecker, DocumentTaggedChecker,
    ListLabelsChecker, ListStructureChecker, ReadingOrderChecker, RoleMappingChecker,
    TableHeaderAssociationChecker, TableHeadersChecker, TableRegularityChecker,
};
pub use types::{
    ContrastLevel, PdfUaCategory, PdfUaCheckResult, PdfUaRequirement, PdfUaViolation, Severity,
    TextType, ViolationId,
};
pub use validator::{PdfUaValidator, UaValidationReport, UaValidationStats};
