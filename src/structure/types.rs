//! The semantic type taxonomy for structure elements.
//!
//! Every tag has a fixed external name, the structure type name used in
//! tagged PDF (ISO 32000-2:2020 Section 14.8.4) and in the JSON encoding.

use crate::error::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The logical role of a structure node.
///
/// The set is closed. Names of unknown structure types do not map to a tag;
/// see [`SemanticType::from_structure_type_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticType {
    // Grouping elements
    /// Document root
    Document,
    /// Document fragment (PDF 2.0)
    DocumentFragment,
    /// Part (major division)
    Part,
    /// Article
    Article,
    /// Section
    Section,
    /// Generic division
    Div,
    /// Block quotation
    BlockQuote,
    /// Aside (PDF 2.0)
    Aside,
    /// Non-structural grouping
    NonStructural,
    /// Producer-private content
    Private,

    // Navigation
    /// Table of contents
    TableOfContents,
    /// Table of contents item
    TableOfContentsItem,
    /// Index
    Index,

    // Headings
    /// Document or section title (PDF 2.0)
    Title,
    /// Generic heading
    Heading,
    /// Heading level 1
    H1,
    /// Heading level 2
    H2,
    /// Heading level 3
    H3,
    /// Heading level 4
    H4,
    /// Heading level 5
    H5,
    /// Heading level 6
    H6,

    // Block-level content
    /// Paragraph
    Paragraph,
    /// Caption
    Caption,
    /// Note
    Note,
    /// Footnote or endnote (PDF 2.0)
    Footnote,
    /// Bibliographic entry
    BibEntry,
    /// Computer code
    Code,
    /// Mathematical formula
    Formula,
    /// Figure
    Figure,
    /// Form widget
    Form,

    // Lists
    /// List
    List,
    /// List item
    ListItem,
    /// List item label (bullet or number)
    Label,
    /// List item body
    ListBody,

    // Tables
    /// Table
    Table,
    /// Table row
    TableRow,
    /// Table header cell
    TableHeader,
    /// Table data cell
    TableData,
    /// Table header row group
    TableHead,
    /// Table body row group
    TableBody,
    /// Table footer row group
    TableFoot,

    // Inline content
    /// Generic inline span
    Span,
    /// Inline quotation
    Quote,
    /// Reference to content elsewhere
    Reference,
    /// Hyperlink
    Link,
    /// Annotation
    Annotation,
    /// Emphasis (PDF 2.0)
    Emphasis,
    /// Strong importance (PDF 2.0)
    Strong,
    /// Sub-part of a line, such as one line of a multi-line entry (PDF 2.0)
    Sub,

    // Ruby and warichu annotations
    /// Ruby wrapper
    Ruby,
    /// Ruby base text
    RubyBase,
    /// Ruby annotation text
    RubyText,
    /// Ruby punctuation
    RubyPunctuation,
    /// Warichu wrapper
    Warichu,
    /// Warichu text
    WarichuText,
    /// Warichu punctuation
    WarichuPunctuation,

    // Presentational
    /// Artifact (not part of the logical content)
    Artifact,
    /// Running page header
    Header,
    /// Running page footer
    Footer,
}

impl SemanticType {
    /// Every tag, in declaration order.
    pub const ALL: [SemanticType; 59] = [
        Self::Document,
        Self::DocumentFragment,
        Self::Part,
        Self::Article,
        Self::Section,
        Self::Div,
        Self::BlockQuote,
        Self::Aside,
        Self::NonStructural,
        Self::Private,
        Self::TableOfContents,
        Self::TableOfContentsItem,
        Self::Index,
        Self::Title,
        Self::Heading,
        Self::H1,
        Self::H2,
        Self::H3,
        Self::H4,
        Self::H5,
        Self::H6,
        Self::Paragraph,
        Self::Caption,
        Self::Note,
        Self::Footnote,
        Self::BibEntry,
        Self::Code,
        Self::Formula,
        Self::Figure,
        Self::Form,
        Self::List,
        Self::ListItem,
        Self::Label,
        Self::ListBody,
        Self::Table,
        Self::TableRow,
        Self::TableHeader,
        Self::TableData,
        Self::TableHead,
        Self::TableBody,
        Self::TableFoot,
        Self::Span,
        Self::Quote,
        Self::Reference,
        Self::Link,
        Self::Annotation,
        Self::Emphasis,
        Self::Strong,
        Self::Sub,
        Self::Ruby,
        Self::RubyBase,
        Self::RubyText,
        Self::RubyPunctuation,
        Self::Warichu,
        Self::WarichuText,
        Self::WarichuPunctuation,
        Self::Artifact,
        Self::Header,
        Self::Footer,
    ];

    /// The external structure type name (e.g. `Paragraph` → `"P"`).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Document => "Document",
            Self::DocumentFragment => "DocumentFragment",
            Self::Part => "Part",
            Self::Article => "Art",
            Self::Section => "Sect",
            Self::Div => "Div",
            Self::BlockQuote => "BlockQuote",
            Self::Aside => "Aside",
            Self::NonStructural => "NonStruct",
            Self::Private => "Private",
            Self::TableOfContents => "TOC",
            Self::TableOfContentsItem => "TOCI",
            Self::Index => "Index",
            Self::Title => "Title",
            Self::Heading => "H",
            Self::H1 => "H1",
            Self::H2 => "H2",
            Self::H3 => "H3",
            Self::H4 => "H4",
            Self::H5 => "H5",
            Self::H6 => "H6",
            Self::Paragraph => "P",
            Self::Caption => "Caption",
            Self::Note => "Note",
            Self::Footnote => "FENote",
            Self::BibEntry => "BibEntry",
            Self::Code => "Code",
            Self::Formula => "Formula",
            Self::Figure => "Figure",
            Self::Form => "Form",
            Self::List => "L",
            Self::ListItem => "LI",
            Self::Label => "Lbl",
            Self::ListBody => "LBody",
            Self::Table => "Table",
            Self::TableRow => "TR",
            Self::TableHeader => "TH",
            Self::TableData => "TD",
            Self::TableHead => "THead",
            Self::TableBody => "TBody",
            Self::TableFoot => "TFoot",
            Self::Span => "Span",
            Self::Quote => "Quote",
            Self::Reference => "Reference",
            Self::Link => "Link",
            Self::Annotation => "Annot",
            Self::Emphasis => "Em",
            Self::Strong => "Strong",
            Self::Sub => "Sub",
            Self::Ruby => "Ruby",
            Self::RubyBase => "RB",
            Self::RubyText => "RT",
            Self::RubyPunctuation => "RP",
            Self::Warichu => "Warichu",
            Self::WarichuText => "WT",
            Self::WarichuPunctuation => "WP",
            Self::Artifact => "Artifact",
            Self::Header => "Header",
            Self::Footer => "Footer",
        }
    }

    /// Look up a tag by structure type name, ignoring ASCII case.
    ///
    /// Only exact names match; unknown or empty names return `None` so that
    /// tree builders can skip or role-map custom types.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdfua_oxide::structure::SemanticType;
    ///
    /// assert_eq!(SemanticType::from_structure_type_name("p"), Some(SemanticType::Paragraph));
    /// assert_eq!(SemanticType::from_structure_type_name("TOCI"), Some(SemanticType::TableOfContentsItem));
    /// assert_eq!(SemanticType::from_structure_type_name("Para"), None);
    /// ```
    pub fn from_structure_type_name(name: &str) -> Option<Self> {
        if name.is_empty() {
            return None;
        }
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }

    /// Check if this is a heading type (H, H1-H6).
    pub fn is_heading(&self) -> bool {
        matches!(
            self,
            Self::Heading | Self::H1 | Self::H2 | Self::H3 | Self::H4 | Self::H5 | Self::H6
        )
    }

    /// Numeric level of H1-H6; `None` for every other tag, including `H`.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            Self::H1 => Some(1),
            Self::H2 => Some(2),
            Self::H3 => Some(3),
            Self::H4 => Some(4),
            Self::H5 => Some(5),
            Self::H6 => Some(6),
            _ => None,
        }
    }

    /// Check if this is a list element (L, LI, Lbl, LBody).
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List | Self::ListItem | Self::Label | Self::ListBody)
    }

    /// Check if this is a table element.
    pub fn is_table(&self) -> bool {
        matches!(
            self,
            Self::Table
                | Self::TableRow
                | Self::TableHeader
                | Self::TableData
                | Self::TableHead
                | Self::TableBody
                | Self::TableFoot
        )
    }

    /// Check if this is an inline-level element.
    pub fn is_inline(&self) -> bool {
        matches!(
            self,
            Self::Span
                | Self::Quote
                | Self::Reference
                | Self::Link
                | Self::Annotation
                | Self::Emphasis
                | Self::Strong
                | Self::Sub
                | Self::Code
        ) || self.is_ruby()
            || self.is_warichu()
    }

    /// Check if this carries no logical content of its own.
    pub fn is_presentational(&self) -> bool {
        matches!(
            self,
            Self::Artifact | Self::NonStructural | Self::Private | Self::Header | Self::Footer
        )
    }

    /// Check if this is a block-level element.
    ///
    /// Every tag that is neither inline nor presentational is block-level.
    pub fn is_block_level(&self) -> bool {
        !self.is_inline() && !self.is_presentational()
    }

    /// Check if content of this type must carry alternative text.
    pub fn requires_alternative_text(&self) -> bool {
        matches!(self, Self::Figure | Self::Formula)
    }

    /// Check if this is a container of other structure.
    pub fn is_grouping(&self) -> bool {
        matches!(
            self,
            Self::Document | Self::Div | Self::Section | Self::List | Self::Table | Self::TableRow
        )
    }

    /// Check if this is part of a ruby annotation.
    pub fn is_ruby(&self) -> bool {
        matches!(
            self,
            Self::Ruby | Self::RubyBase | Self::RubyText | Self::RubyPunctuation
        )
    }

    /// Check if this is part of a warichu annotation.
    pub fn is_warichu(&self) -> bool {
        matches!(
            self,
            Self::Warichu | Self::WarichuText | Self::WarichuPunctuation
        )
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SemanticType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_structure_type_name(s).ok_or_else(|| Error::UnknownStructureType(s.to_string()))
    }
}

// Ordered by external name so sorted output is stable and readable.
impl Ord for SemanticType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name().cmp(other.name())
    }
}

impl PartialOrd for SemanticType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for SemanticType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for SemanticType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
