//! Typed attribute values attached to structure nodes.
//!
//! Attributes form a string-keyed map whose values are a closed union of
//! permitted kinds. Key order is irrelevant.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// String-keyed attribute map of a node.
pub type Attributes = HashMap<String, AttributeValue>;

/// Well-known attribute keys.
pub mod keys {
    /// Alternate description (ISO 32000-2 Section 14.9.3)
    pub const ALT: &str = "Alt";
    /// Replacement text (Section 14.9.4)
    pub const ACTUAL_TEXT: &str = "ActualText";
    /// Abbreviation expansion (Section 14.9.5)
    pub const EXPANSION: &str = "E";
    /// Natural language of the content
    pub const LANG: &str = "Lang";
    /// Original structure type name before role mapping
    pub const STRUCTURE_TYPE: &str = "StructureType";
    /// Element identifier, referenced by table `Headers`
    pub const ID: &str = "ID";
    /// Header cell scope (`Row`, `Column`, `Both`)
    pub const SCOPE: &str = "Scope";
    /// Space-separated IDs of the header cells of a data cell
    pub const HEADERS: &str = "Headers";
    /// Number of columns a table cell spans
    pub const COL_SPAN: &str = "ColSpan";
    /// Number of rows a table cell spans
    pub const ROW_SPAN: &str = "RowSpan";
    /// Numbering style of a list (`None`, `Disc`, `Decimal`, ...)
    pub const LIST_NUMBERING: &str = "ListNumbering";
}

/// A single attribute value.
///
/// JSON encodes each kind as its natural scalar. Integers decode as
/// [`AttributeValue::Integer`] and numbers with a fractional part as
/// [`AttributeValue::Number`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Boolean flag
    Boolean(bool),
    /// Integer value
    Integer(i64),
    /// Real number
    Number(f64),
    /// Text value
    String(String),
}

impl AttributeValue {
    /// The string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The integer payload, if this is an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric payload; integers are widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The boolean payload, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Name of the value kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Number(_) => "number",
            Self::String(_) => "string",
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Number(n) => write!(f, "{}", n),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// Look up a string attribute, treating empty strings as absent.
pub(crate) fn non_empty_str<'a>(attributes: &'a Attributes, key: &str) -> Option<&'a str> {
    attributes
        .get(key)
        .and_then(AttributeValue::as_str)
        .filter(|s| !s.is_empty())
}
