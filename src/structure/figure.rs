//! Figure nodes and their visual content.

use super::attributes::{keys, non_empty_str, AttributeValue, Attributes};
use super::node::{has_alt_text, NodeErrorCode, NodeId, SemanticNode};
use super::types::SemanticType;
use crate::elements::{ImageChunk, LineArtChunk};
use crate::error::Error;
use crate::geometry::{BoundingBox, MultiBoundingBox};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A figure: images and line art, with optional caption and alt text.
///
/// The semantic type of a figure is always [`SemanticType::Figure`]. A figure
/// with no visual content, no alternative text and no children is treated as
/// decorative and needs no description.
///
/// # Examples
///
/// ```
/// use pdfua_oxide::elements::ImageChunk;
/// use pdfua_oxide::geometry::{BoundingBox, Rect};
/// use pdfua_oxide::structure::{FigureNode, NodeErrorCode};
///
/// let empty = FigureNode::new();
/// assert!(empty.appears_decorative());
///
/// let bbox = BoundingBox::new(0, Rect::new(72.0, 400.0, 200.0, 150.0));
/// let chart = FigureNode::new().with_image(ImageChunk::new(bbox, 800, 600));
/// assert!(!chart.appears_decorative());
/// assert!(chart.validate_accessibility().contains(&NodeErrorCode::FigureMissingAltText));
///
/// let described = chart.with_attribute("Alt", "Quarterly revenue chart");
/// assert!(described.validate_accessibility().is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "FigureNodeRepr", into = "FigureNodeRepr")]
pub struct FigureNode {
    /// Identity
    pub id: NodeId,
    /// Explicit location, if known
    pub bounding_box: Option<BoundingBox>,
    /// Ordered children (typically a caption)
    pub children: Vec<SemanticNode>,
    /// Attributes
    pub attributes: Attributes,
    /// Nesting depth (root is 0)
    pub depth: u32,
    /// Accumulated error codes
    pub error_codes: BTreeSet<NodeErrorCode>,
    /// Raster images
    pub images: Vec<ImageChunk>,
    /// Vector drawings
    pub line_art: Vec<LineArtChunk>,
}

impl FigureNode {
    /// Create an empty figure with a fresh identity.
    pub fn new() -> Self {
        Self {
            id: NodeId::new(),
            bounding_box: None,
            children: Vec::new(),
            attributes: Attributes::new(),
            depth: 0,
            error_codes: BTreeSet::new(),
            images: Vec::new(),
            line_art: Vec::new(),
        }
    }

    /// Use an explicit identity.
    pub fn with_id(mut self, id: NodeId) -> Self {
        self.id = id;
        self
    }

    /// Set the explicit bounding box.
    pub fn with_bounding_box(mut self, bbox: BoundingBox) -> Self {
        self.bounding_box = Some(bbox);
        self
    }

    /// Append a child.
    pub fn with_child(mut self, child: impl Into<SemanticNode>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Set an attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Set the depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Set pre-existing error codes.
    pub fn with_error_codes(mut self, codes: impl IntoIterator<Item = NodeErrorCode>) -> Self {
        self.error_codes = codes.into_iter().collect();
        self
    }

    /// Append an image.
    pub fn with_image(mut self, image: ImageChunk) -> Self {
        self.images.push(image);
        self
    }

    /// Append a line-art drawing.
    pub fn with_line_art(mut self, art: LineArtChunk) -> Self {
        self.line_art.push(art);
        self
    }

    /// At least one image or line-art chunk.
    pub fn has_visual_content(&self) -> bool {
        !self.images.is_empty() || !self.line_art.is_empty()
    }

    /// Number of images.
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Number of line-art chunks.
    pub fn line_art_count(&self) -> usize {
        self.line_art.len()
    }

    /// Images plus line-art chunks.
    pub fn visual_element_count(&self) -> usize {
        self.image_count() + self.line_art_count()
    }

    /// Non-empty `Alt` or `ActualText` attribute present.
    pub fn has_alt_text(&self) -> bool {
        has_alt_text(&self.attributes)
    }

    /// No visual content, no alt text and no children.
    pub fn appears_decorative(&self) -> bool {
        !self.has_visual_content() && !self.has_alt_text() && self.children.is_empty()
    }

    /// First `Caption` child.
    pub fn caption(&self) -> Option<&SemanticNode> {
        self.children
            .iter()
            .find(|c| c.semantic_type() == SemanticType::Caption)
    }

    /// Check if the figure has a caption child.
    pub fn has_caption(&self) -> bool {
        self.caption().is_some()
    }

    /// Text content of the caption.
    pub fn caption_text(&self) -> Option<String> {
        self.caption().map(SemanticNode::text_content)
    }

    /// Explicit box, else the union of the chunk boxes.
    ///
    /// When chunks sit on several pages only those on the lowest page index
    /// are united.
    pub fn computed_bounding_box(&self) -> Option<BoundingBox> {
        if self.bounding_box.is_some() {
            return self.bounding_box;
        }

        let boxes: MultiBoundingBox = self
            .images
            .iter()
            .map(|i| i.bounding_box)
            .chain(self.line_art.iter().map(|a| a.bounding_box))
            .collect();
        let first_page = boxes.page_indices().first().copied()?;
        boxes.union_box_for_page(first_page)
    }

    /// Sum of pixel counts over all images.
    pub fn total_pixel_count(&self) -> u64 {
        self.images.iter().map(ImageChunk::pixel_count).sum()
    }

    /// Any image carries non-empty alt text.
    pub fn any_image_has_alt_text(&self) -> bool {
        self.images.iter().any(ImageChunk::has_alt_text)
    }

    /// Any line-art chunk carries non-empty alt text.
    pub fn any_line_art_has_alt_text(&self) -> bool {
        self.line_art.iter().any(LineArtChunk::has_alt_text)
    }

    /// Best available description of the figure.
    ///
    /// Tried in order: the figure's `Alt` then `ActualText` attribute, the
    /// caption text, the first image alt text, the first line-art alt text.
    pub fn best_description(&self) -> Option<String> {
        if let Some(alt) = non_empty_str(&self.attributes, keys::ALT)
            .or_else(|| non_empty_str(&self.attributes, keys::ACTUAL_TEXT))
        {
            return Some(alt.to_string());
        }

        if let Some(caption) = self.caption_text().filter(|t| !t.is_empty()) {
            return Some(caption);
        }

        let chunk_alt = self
            .images
            .iter()
            .filter_map(|i| i.alt_text.as_deref())
            .chain(self.line_art.iter().filter_map(|a| a.alt_text.as_deref()))
            .find(|t| !t.is_empty());
        chunk_alt.map(str::to_string)
    }

    /// Text of the figure's children (captions, nested content).
    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .map(SemanticNode::text_content)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Emits `FigureMissingAltText` iff the figure is neither decorative nor
    /// described.
    pub fn validate_accessibility(&self) -> BTreeSet<NodeErrorCode> {
        let mut codes = BTreeSet::new();
        if !self.appears_decorative() && !self.has_alt_text() {
            codes.insert(NodeErrorCode::FigureMissingAltText);
        }
        codes
    }
}

impl Default for FigureNode {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for FigureNode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for FigureNode {}

impl Hash for FigureNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for FigureNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        match self.image_count() {
            0 => {},
            1 => parts.push("1 image".to_string()),
            n => parts.push(format!("{} images", n)),
        }
        if self.line_art_count() > 0 {
            parts.push(format!("{} line art", self.line_art_count()));
        }
        if self.has_alt_text() {
            parts.push("[has alt]".to_string());
        }

        if parts.is_empty() {
            write!(f, "Figure: empty")
        } else {
            write!(f, "Figure: {}", parts.join(", "))
        }
    }
}

/// Wire shape of a figure; carries the `type` field every node has.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FigureNodeRepr {
    #[serde(default)]
    id: NodeId,
    #[serde(rename = "type", default = "figure_type")]
    semantic_type: SemanticType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bounding_box: Option<BoundingBox>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<SemanticNode>,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    attributes: Attributes,
    #[serde(default)]
    depth: u32,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    error_codes: BTreeSet<NodeErrorCode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    images: Vec<ImageChunk>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    line_art: Vec<LineArtChunk>,
}

fn figure_type() -> SemanticType {
    SemanticType::Figure
}

impl TryFrom<FigureNodeRepr> for FigureNode {
    type Error = Error;

    fn try_from(repr: FigureNodeRepr) -> Result<Self, Self::Error> {
        if repr.semantic_type != SemanticType::Figure {
            return Err(Error::InvalidNodeType {
                expected: SemanticType::Figure.name().to_string(),
                found: repr.semantic_type.name().to_string(),
            });
        }

        Ok(Self {
            id: repr.id,
            bounding_box: repr.bounding_box,
            children: repr.children,
            attributes: repr.attributes,
            depth: repr.depth,
            error_codes: repr.error_codes,
            images: repr.images,
            line_art: repr.line_art,
        })
    }
}

impl From<FigureNode> for FigureNodeRepr {
    fn from(node: FigureNode) -> Self {
        Self {
            id: node.id,
            semantic_type: SemanticType::Figure,
            bounding_box: node.bounding_box,
            children: node.children,
            attributes: node.attributes,
            depth: node.depth,
            error_codes: node.error_codes,
            images: node.images,
            line_art: node.line_art,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{LineSegment, TextBlock, TextChunk, TextLine};
    use crate::geometry::Rect;
    use crate::structure::ContentNode;

    fn bbox(page: u32, x: f32, y: f32, w: f32, h: f32) -> BoundingBox {
        BoundingBox::new(page, Rect::new(x, y, w, h))
    }

    fn caption(text: &str) -> ContentNode {
        let b = bbox(0, 0.0, 0.0, 100.0, 12.0);
        ContentNode::new(SemanticType::Caption).with_text_block(TextBlock::new(
            b,
            vec![TextLine::new(b, vec![TextChunk::new(b, text)])],
        ))
    }

    #[test]
    fn test_counts() {
        let fig = FigureNode::new()
            .with_image(ImageChunk::new(bbox(0, 0.0, 0.0, 10.0, 10.0), 100, 50))
            .with_image(ImageChunk::new(bbox(0, 20.0, 0.0, 10.0, 10.0), 10, 10))
            .with_line_art(LineArtChunk::new(bbox(0, 0.0, 20.0, 10.0, 10.0), vec![]));
        assert!(fig.has_visual_content());
        assert_eq!(fig.image_count(), 2);
        assert_eq!(fig.line_art_count(), 1);
        assert_eq!(fig.visual_element_count(), 3);
        assert_eq!(fig.total_pixel_count(), 5_100);
    }

    #[test]
    fn test_decorative_rule() {
        assert!(FigureNode::new().appears_decorative());
        assert!(FigureNode::new().validate_accessibility().is_empty());

        // Alt text alone makes the figure non-decorative but described.
        let alt_only = FigureNode::new().with_attribute(keys::ALT, "Logo");
        assert!(!alt_only.appears_decorative());
        assert!(alt_only.validate_accessibility().is_empty());

        // A child alone makes the figure non-decorative and undescribed.
        let with_caption = FigureNode::new().with_child(caption("Figure 1"));
        assert!(!with_caption.appears_decorative());
        assert!(with_caption
            .validate_accessibility()
            .contains(&NodeErrorCode::FigureMissingAltText));
    }

    #[test]
    fn test_actual_text_counts_as_alt() {
        let fig = FigureNode::new()
            .with_image(ImageChunk::new(bbox(0, 0.0, 0.0, 1.0, 1.0), 1, 1))
            .with_attribute(keys::ACTUAL_TEXT, "PDF");
        assert!(fig.has_alt_text());
        assert!(fig.validate_accessibility().is_empty());

        let blank = FigureNode::new()
            .with_image(ImageChunk::new(bbox(0, 0.0, 0.0, 1.0, 1.0), 1, 1))
            .with_attribute(keys::ALT, "");
        assert!(!blank.has_alt_text());
    }

    #[test]
    fn test_caption() {
        let fig = FigureNode::new()
            .with_child(ContentNode::new(SemanticType::Span))
            .with_child(caption("Figure 2: Layout"))
            .with_child(caption("ignored"));
        assert!(fig.has_caption());
        assert_eq!(fig.caption_text().as_deref(), Some("Figure 2: Layout"));
        assert_eq!(FigureNode::new().caption_text(), None);
    }

    #[test]
    fn test_computed_bounding_box() {
        let explicit = bbox(3, 0.0, 0.0, 5.0, 5.0);
        let fig = FigureNode::new()
            .with_bounding_box(explicit)
            .with_image(ImageChunk::new(bbox(0, 0.0, 0.0, 1.0, 1.0), 1, 1));
        assert_eq!(fig.computed_bounding_box(), Some(explicit));

        let fig = FigureNode::new()
            .with_image(ImageChunk::new(bbox(1, 10.0, 10.0, 20.0, 20.0), 1, 1))
            .with_line_art(LineArtChunk::new(bbox(1, 0.0, 25.0, 15.0, 15.0), vec![]))
            .with_image(ImageChunk::new(bbox(4, 0.0, 0.0, 500.0, 500.0), 1, 1));
        assert_eq!(
            fig.computed_bounding_box(),
            Some(bbox(1, 0.0, 10.0, 30.0, 30.0))
        );

        assert_eq!(FigureNode::new().computed_bounding_box(), None);
    }

    #[test]
    fn test_chunk_alt_flags() {
        let art = LineArtChunk::from_segments(0, vec![LineSegment::new(0.0, 0.0, 10.0, 0.0)])
            .unwrap()
            .with_alt_text("Axis");
        let fig = FigureNode::new()
            .with_image(ImageChunk::new(bbox(0, 0.0, 0.0, 1.0, 1.0), 1, 1))
            .with_line_art(art);
        assert!(!fig.any_image_has_alt_text());
        assert!(fig.any_line_art_has_alt_text());
    }

    #[test]
    fn test_display() {
        assert_eq!(FigureNode::new().to_string(), "Figure: empty");

        let img = || ImageChunk::new(bbox(0, 0.0, 0.0, 1.0, 1.0), 1, 1);
        let two = FigureNode::new()
            .with_image(img())
            .with_image(img())
            .with_attribute(keys::ALT, "Photos");
        assert_eq!(two.to_string(), "Figure: 2 images, [has alt]");

        let one = FigureNode::new()
            .with_image(img())
            .with_line_art(LineArtChunk::new(bbox(0, 0.0, 0.0, 1.0, 1.0), vec![]));
        assert_eq!(one.to_string(), "Figure: 1 image, 1 line art");
    }

    #[test]
    fn test_decode_rejects_non_figure_type() {
        let json = r#"{"type": "P", "depth": 1}"#;
        let err = serde_json::from_str::<FigureNode>(json).unwrap_err();
        assert!(err.to_string().contains("Invalid node type"));

        let ok: FigureNode = serde_json::from_str(r#"{"type": "figure"}"#).unwrap();
        assert!(ok.appears_decorative());
    }

    #[test]
    fn test_json_carries_type_name() {
        let json = serde_json::to_string(&FigureNode::new().with_depth(1)).unwrap();
        assert!(json.contains("\"type\":\"Figure\""));
        assert!(json.contains("\"depth\":1"));
    }
}
