//! # PDF/UA Oxide
//!
//! Semantic model of tagged PDF documents and PDF/UA accessibility checking.
//!
//! ## Core Features
//!
//! - **Geometry**: page-aware bounding boxes and multi-page regions with
//!   union, containment and intersection queries
//! - **Content**: styled text aggregated into lines, blocks and columns;
//!   figures made of raster images and line art
//! - **Structure**: a closed taxonomy of structure types (ISO 32000-2 §14.8.4)
//!   and an owned tree of semantic nodes with typed attributes
//! - **Compliance**: one checker per PDF/UA requirement (ISO 14289-1), batch
//!   checking, whole-tree validation and WCAG contrast thresholds
//! - **Serialization**: every model type round-trips through JSON
//!
//! ## Architecture
//!
//! Data flows one way. A tree builder produces a [`structure::SemanticNode`]
//! tree with resolved geometry; checkers read it and return
//! [`compliance::PdfUaCheckResult`] values. Accessibility findings are
//! results, never errors: [`Error`] covers malformed input only.
//!
//! ## Quick Start
//!
//! ```
//! use pdfua_oxide::compliance::PdfUaValidator;
//! use pdfua_oxide::elements::ImageChunk;
//! use pdfua_oxide::geometry::{BoundingBox, Rect};
//! use pdfua_oxide::structure::{ContentNode, FigureNode, SemanticTreeBuilder, SemanticType};
//!
//! let bbox = BoundingBox::new(0, Rect::new(72.0, 500.0, 300.0, 200.0));
//! let tree = ContentNode::new(SemanticType::Document)
//!     .with_child(FigureNode::new().with_image(ImageChunk::new(bbox, 1200, 800)));
//! let root = SemanticTreeBuilder::new().build(tree);
//!
//! let report = PdfUaValidator::new().validate(&root);
//! assert!(!report.is_compliant);
//! for violation in report.violations() {
//!     println!("{}", violation);
//! }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Geometric regions
pub mod geometry;

// Content chunks (text, images, line art)
pub mod elements;

// Semantic structure tree
pub mod structure;

// PDF/UA checking
pub mod compliance;

// Configuration
pub mod config;

// Re-exports
pub use compliance::{
    PdfUaCategory, PdfUaCheckResult, PdfUaChecker, PdfUaRequirement, PdfUaValidator,
    PdfUaViolation, Severity, TextType,
};
pub use config::CheckerConfig;
pub use error::{Error, Result};
pub use geometry::{BoundingBox, MultiBoundingBox, Rect};
pub use structure::{ContentNode, FigureNode, SemanticNode, SemanticType};
