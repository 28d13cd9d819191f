//! Text content aggregation: chunks, lines, blocks and columns.
//!
//! Each level owns its children by value and derives its text from them.
//! The joining rules are fixed:
//!
//! - a [`TextLine`] concatenates chunk values with no separator,
//! - a [`TextBlock`] joins lines with a single newline,
//! - a [`TextColumn`] joins blocks with a blank line (`"\n\n"`).
//!
//! Emptiness is always judged on the derived text, so a line made of chunks
//! with empty values is empty.

use super::style::{Color, FontWeight};
use crate::compliance::TextType;
use crate::geometry::BoundingBox;
use serde::{Deserialize, Serialize};

/// A single styled run of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextChunk {
    /// Location of the run
    pub bounding_box: BoundingBox,
    /// The text of the run
    pub value: String,
    /// Font name (e.g. "Helvetica-Bold")
    pub font_name: String,
    /// Font size in points
    pub font_size: f32,
    /// Font weight
    pub font_weight: FontWeight,
    /// Italic angle in degrees (0 for upright text)
    pub italic_angle: f32,
    /// Fill color of the glyphs
    pub color: Color,
}

impl TextChunk {
    /// Create a chunk with default styling (12pt Helvetica, normal weight, black).
    ///
    /// # Examples
    ///
    /// ```
    /// use pdfua_oxide::elements::TextChunk;
    /// use pdfua_oxide::geometry::{BoundingBox, Rect};
    ///
    /// let chunk = TextChunk::new(BoundingBox::new(0, Rect::new(72.0, 700.0, 40.0, 12.0)), "Hello");
    /// assert_eq!(chunk.value, "Hello");
    /// assert!(!chunk.is_bold());
    /// ```
    pub fn new(bounding_box: BoundingBox, value: impl Into<String>) -> Self {
        Self {
            bounding_box,
            value: value.into(),
            font_name: "Helvetica".to_string(),
            font_size: 12.0,
            font_weight: FontWeight::Normal,
            italic_angle: 0.0,
            color: Color::black(),
        }
    }

    /// Set the font name and size.
    pub fn with_font(mut self, name: impl Into<String>, size: f32) -> Self {
        self.font_name = name.into();
        self.font_size = size;
        self
    }

    /// Set the font weight.
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }

    /// Set the italic angle.
    pub fn with_italic_angle(mut self, angle: f32) -> Self {
        self.italic_angle = angle;
        self
    }

    /// Set the text color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Check if this run is bold.
    pub fn is_bold(&self) -> bool {
        self.font_weight.is_bold()
    }

    /// Check if this run is slanted.
    pub fn is_italic(&self) -> bool {
        self.italic_angle.abs() > 0.01
    }

    /// True when the run has no text.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// WCAG text class of this run, used to pick a contrast threshold.
    pub fn text_type(&self) -> TextType {
        TextType::classify(self.font_size, self.is_bold())
    }
}

/// A line of text made of chunks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextLine {
    /// Location of the line
    pub bounding_box: BoundingBox,
    /// Chunks in reading order
    pub chunks: Vec<TextChunk>,
    /// Line starts a paragraph
    #[serde(default)]
    pub is_line_start: bool,
    /// Line ends a paragraph
    #[serde(default)]
    pub is_line_end: bool,
}

impl TextLine {
    /// Create a line from its chunks.
    pub fn new(bounding_box: BoundingBox, chunks: Vec<TextChunk>) -> Self {
        Self {
            bounding_box,
            chunks,
            is_line_start: false,
            is_line_end: false,
        }
    }

    /// Mark the paragraph boundary hints.
    pub fn with_boundaries(mut self, is_line_start: bool, is_line_end: bool) -> Self {
        self.is_line_start = is_line_start;
        self.is_line_end = is_line_end;
        self
    }

    /// Chunk values concatenated in order.
    pub fn text(&self) -> String {
        self.chunks.iter().map(|c| c.value.as_str()).collect()
    }

    /// Number of chunks.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// True when the line's text is empty.
    pub fn is_empty(&self) -> bool {
        self.chunks.iter().all(TextChunk::is_empty)
    }
}

/// A block of consecutive lines within a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    /// Location of the block
    pub bounding_box: BoundingBox,
    /// Lines in reading order
    pub lines: Vec<TextLine>,
}

impl TextBlock {
    /// Create a block from its lines.
    pub fn new(bounding_box: BoundingBox, lines: Vec<TextLine>) -> Self {
        Self {
            bounding_box,
            lines,
        }
    }

    /// Line texts joined by a newline.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(TextLine::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of chunks across all lines.
    pub fn chunk_count(&self) -> usize {
        self.lines.iter().map(TextLine::chunk_count).sum()
    }

    /// Every chunk of the block in document order.
    pub fn all_chunks(&self) -> Vec<&TextChunk> {
        self.lines.iter().flat_map(|l| l.chunks.iter()).collect()
    }

    /// True when the block's text is empty.
    ///
    /// A block with two empty lines is not empty: its text is `"\n"`.
    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }
}

/// A column of text blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextColumn {
    /// Location of the column
    pub bounding_box: BoundingBox,
    /// Blocks in reading order
    pub blocks: Vec<TextBlock>,
}

impl TextColumn {
    /// Create a column from its blocks.
    pub fn new(bounding_box: BoundingBox, blocks: Vec<TextBlock>) -> Self {
        Self {
            bounding_box,
            blocks,
        }
    }

    /// Block texts separated by a blank line.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdfua_oxide::elements::{TextBlock, TextChunk, TextColumn, TextLine};
    /// use pdfua_oxide::geometry::{BoundingBox, Rect};
    ///
    /// let bbox = BoundingBox::new(0, Rect::new(0.0, 0.0, 100.0, 10.0));
    /// let line = |s: &str| TextLine::new(bbox, vec![TextChunk::new(bbox, s)]);
    /// let column = TextColumn::new(
    ///     bbox,
    ///     vec![
    ///         TextBlock::new(bbox, vec![line("Line 1"), line("Line 2")]),
    ///         TextBlock::new(bbox, vec![line("Line 3")]),
    ///     ],
    /// );
    /// assert_eq!(column.text(), "Line 1\nLine 2\n\nLine 3");
    /// ```
    pub fn text(&self) -> String {
        self.blocks
            .iter()
            .map(TextBlock::text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Number of blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Number of lines across all blocks.
    pub fn total_line_count(&self) -> usize {
        self.blocks.iter().map(TextBlock::line_count).sum()
    }

    /// Number of chunks across all blocks.
    pub fn total_chunk_count(&self) -> usize {
        self.blocks.iter().map(TextBlock::chunk_count).sum()
    }

    /// Every line of the column in document order.
    pub fn all_lines(&self) -> Vec<&TextLine> {
        self.blocks.iter().flat_map(|b| b.lines.iter()).collect()
    }

    /// Every chunk of the column in document order.
    pub fn all_chunks(&self) -> Vec<&TextChunk> {
        self.blocks.iter().flat_map(TextBlock::all_chunks).collect()
    }

    /// True when the column's text is empty.
    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    fn bbox() -> BoundingBox {
        BoundingBox::new(0, Rect::new(0.0, 0.0, 100.0, 12.0))
    }

    fn line(values: &[&str]) -> TextLine {
        TextLine::new(
            bbox(),
            values.iter().map(|v| TextChunk::new(bbox(), *v)).collect(),
        )
    }

    fn block(lines: &[&[&str]]) -> TextBlock {
        TextBlock::new(bbox(), lines.iter().map(|l| line(l)).collect())
    }

    #[test]
    fn test_line_concatenates_without_separator() {
        let l = line(&["Hel", "lo", " world"]);
        assert_eq!(l.text(), "Hello world");
        assert_eq!(l.chunk_count(), 3);
        assert!(!l.is_line_start);
        assert!(!l.is_line_end);
    }

    #[test]
    fn test_block_joins_with_newline() {
        let b = block(&[&["Line 1"], &["Line 2"]]);
        assert_eq!(b.text(), "Line 1\nLine 2");
        assert_eq!(b.line_count(), 2);
        assert_eq!(b.chunk_count(), 2);
    }

    #[test]
    fn test_column_joins_with_blank_line() {
        let column = TextColumn::new(
            bbox(),
            vec![block(&[&["Line 1"], &["Line 2"]]), block(&[&["Line 3"]])],
        );
        assert_eq!(column.text(), "Line 1\nLine 2\n\nLine 3");
        assert_eq!(column.block_count(), 2);
        assert_eq!(column.total_line_count(), 3);
        assert_eq!(column.total_chunk_count(), 3);
    }

    #[test]
    fn test_flattening_preserves_document_order() {
        let column = TextColumn::new(
            bbox(),
            vec![block(&[&["a", "b"], &["c"]]), block(&[&["d"]])],
        );
        let values: Vec<&str> = column.all_chunks().into_iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["a", "b", "c", "d"]);
        let lines: Vec<String> = column.all_lines().iter().map(|l| l.text()).collect();
        assert_eq!(lines, vec!["ab", "c", "d"]);
    }

    #[test]
    fn test_empty_levels() {
        assert_eq!(TextLine::new(bbox(), vec![]).text(), "");
        assert_eq!(TextBlock::new(bbox(), vec![]).text(), "");
        assert_eq!(TextColumn::new(bbox(), vec![]).text(), "");
        assert!(TextColumn::new(bbox(), vec![]).is_empty());
    }

    #[test]
    fn test_empty_valued_chunks_count_as_empty() {
        let l = line(&["", ""]);
        assert_eq!(l.chunk_count(), 2);
        assert!(l.is_empty());

        let b = block(&[&["", ""]]);
        assert!(b.is_empty());

        let column = TextColumn::new(bbox(), vec![block(&[&[""]])]);
        assert!(column.is_empty());
        assert_eq!(column.total_chunk_count(), 1);
    }

    #[test]
    fn test_chunk_styling() {
        let chunk = TextChunk::new(bbox(), "Title")
            .with_font("Times-Bold", 18.0)
            .with_weight(FontWeight::Bold)
            .with_italic_angle(-12.0)
            .with_color(Color::new(0.2, 0.2, 0.2));
        assert!(chunk.is_bold());
        assert!(chunk.is_italic());
        assert_eq!(chunk.font_name, "Times-Bold");
        assert_eq!(chunk.text_type(), TextType::Large);
        assert_eq!(TextChunk::new(bbox(), "x").text_type(), TextType::Regular);
    }

    #[test]
    fn test_line_json_defaults_flags() {
        let json = r#"{"boundingBox": {"pageIndex": 0, "rect": {"x": 0, "y": 0, "width": 1, "height": 1}}, "chunks": []}"#;
        let l: TextLine = serde_json::from_str(json).unwrap();
        assert!(!l.is_line_start);
        assert!(!l.is_line_end);
    }

    #[test]
    fn test_column_json_round_trip() {
        let column = TextColumn::new(bbox(), vec![block(&[&["x", "y"]])]);
        let json = serde_json::to_string(&column).unwrap();
        assert!(json.contains("\"fontName\""));
        assert!(json.contains("\"isLineStart\""));
        let back: TextColumn = serde_json::from_str(&json).unwrap();
        assert_eq!(back, column);
    }
}
