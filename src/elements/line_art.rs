//! Vector line-art content of figures.

use crate::geometry::{BoundingBox, Point, Rect};
use serde::{Deserialize, Serialize};

/// A straight stroke between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    /// Start point
    pub start: Point,
    /// End point
    pub end: Point,
}

impl LineSegment {
    /// Create a segment from (x1, y1) to (x2, y2).
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            start: Point::new(x1, y1),
            end: Point::new(x2, y2),
        }
    }

    /// Length of the segment.
    pub fn length(&self) -> f32 {
        self.start.distance_to(&self.end)
    }

    /// True when both ends share a y coordinate (within 0.01pt).
    pub fn is_horizontal(&self) -> bool {
        (self.start.y - self.end.y).abs() < 0.01
    }

    /// True when both ends share an x coordinate (within 0.01pt).
    pub fn is_vertical(&self) -> bool {
        (self.start.x - self.end.x).abs() < 0.01
    }
}

/// Vector graphics made of line segments, such as a chart or diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineArtChunk {
    /// Where the line art is drawn
    pub bounding_box: BoundingBox,
    /// Stroked segments
    #[serde(default)]
    pub segments: Vec<LineSegment>,
    /// Stroke width in points
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f32,
    /// Alternative text attached to the drawing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    /// Replacement text, if the drawing renders text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_text: Option<String>,
}

fn default_stroke_width() -> f32 {
    1.0
}

impl LineArtChunk {
    /// Create a line-art chunk with an explicit bounding box.
    pub fn new(bounding_box: BoundingBox, segments: Vec<LineSegment>) -> Self {
        Self {
            bounding_box,
            segments,
            stroke_width: default_stroke_width(),
            alt_text: None,
            actual_text: None,
        }
    }

    /// Create a line-art chunk whose box is the extent of its segments.
    ///
    /// Returns `None` when there are no segments.
    pub fn from_segments(page_index: u32, segments: Vec<LineSegment>) -> Option<Self> {
        let rect = Self::compute_extent(&segments)?;
        Some(Self::new(BoundingBox::new(page_index, rect), segments))
    }

    /// Set stroke width.
    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    /// Set alternative text for accessibility.
    pub fn with_alt_text(mut self, text: impl Into<String>) -> Self {
        self.alt_text = Some(text.into());
        self
    }

    /// Set the actual-text override.
    pub fn with_actual_text(mut self, text: impl Into<String>) -> Self {
        self.actual_text = Some(text.into());
        self
    }

    /// True when the drawing carries non-empty alt text.
    pub fn has_alt_text(&self) -> bool {
        self.alt_text.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Number of segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Sum of segment lengths.
    pub fn total_length(&self) -> f32 {
        self.segments.iter().map(LineSegment::length).sum()
    }

    fn compute_extent(segments: &[LineSegment]) -> Option<Rect> {
        if segments.is_empty() {
            return None;
        }

        let mut min_x = f32::MAX;
        let mut min_y = f32::MAX;
        let mut max_x = f32::MIN;
        let mut max_y = f32::MIN;

        for seg in segments {
            for p in [seg.start, seg.end] {
                min_x = min_x.min(p.x);
                min_y = min_y.min(p.y);
                max_x = max_x.max(p.x);
                max_y = max_y.max(p.y);
            }
        }

        Some(Rect::from_points(min_x, min_y, max_x, max_y))
    }
}
