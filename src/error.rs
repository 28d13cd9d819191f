//! Error types for the semantic model and accessibility checking.
//!
//! Accessibility findings are never errors: they are reported as
//! [`PdfUaViolation`](crate::compliance::PdfUaViolation) values. The errors in
//! this module cover malformed input to constructors and decoders only.

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while constructing or decoding model values.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A page index below zero was supplied to a signed constructor.
    #[error("Invalid page index: {0} (page indices must be non-negative)")]
    NegativePageIndex(i64),

    /// A structure type name that is not part of the taxonomy.
    #[error("Unknown structure type: '{0}'")]
    UnknownStructureType(String),

    /// A node variant was decoded with a type it cannot carry.
    #[error("Invalid node type: expected {expected}, found {found}")]
    InvalidNodeType {
        /// Type the variant requires
        expected: String,
        /// Type found in the input
        found: String,
    },

    /// Checker configuration is inconsistent.
    #[error("Invalid checker configuration: {0}")]
    InvalidConfig(String),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
