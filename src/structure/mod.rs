//! Semantic structure of tagged documents.
//!
//! This module models the logical structure tree of a tagged PDF
//! (ISO 32000-2:2020 Section 14.7) after extraction: a tree of
//! [`SemanticNode`] values, each typed by a [`SemanticType`].
//!
//! ## Overview
//!
//! - **SemanticType**: closed taxonomy of structure roles with their
//!   standard names (`P`, `H1`, `Table`, `Figure`, ...)
//! - **SemanticNode**: a node, either a generic [`ContentNode`] or a
//!   [`FigureNode`] carrying images and line art
//! - **Attributes**: typed attribute values (`Alt`, `ActualText`, `Scope`, ...)
//! - **SemanticTreeBuilder**: resolves role-mapped names and assigns depths
//!
//! ## Reading Order
//!
//! Children are kept in document order, so pre-order traversal
//! ([`SemanticNode::iter`]) yields the logical reading order.
//!
//! ## Example
//!
//! ```
//! use pdfua_oxide::structure::{ContentNode, FigureNode, SemanticTreeBuilder, SemanticType};
//!
//! let tree = ContentNode::new(SemanticType::Document)
//!     .with_child(ContentNode::new(SemanticType::H1))
//!     .with_child(FigureNode::new().with_attribute("Alt", "Site map"));
//!
//! let root = SemanticTreeBuilder::new().build(tree);
//! assert_eq!(root.node_count(), 3);
//! assert_eq!(root.children()[1].depth(), 1);
//! ```

mod attributes;
mod builder;
mod figure;
mod node;
pub mod traversal;
mod types;

pub use attributes::{keys, AttributeValue, Attributes};
pub use builder::SemanticTreeBuilder;
pub use figure::FigureNode;
pub use node::{ContentNode, NodeErrorCode, NodeId, SemanticNode};
pub use traversal::PreOrder;
pub use types::SemanticType;

pub(crate) use node::has_header_cell;
