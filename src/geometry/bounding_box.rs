//! A rectangle tied to a page.

use super::{Point, Rect};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An axis-aligned rectangle on a specific page.
///
/// Equality is structural: two boxes are equal when they share a page and
/// their rectangles are identical.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    /// Zero-based page index
    pub page_index: u32,
    /// Rectangle in page space
    pub rect: Rect,
}

impl BoundingBox {
    /// Create a bounding box on the given page.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdfua_oxide::geometry::{BoundingBox, Rect};
    ///
    /// let bbox = BoundingBox::new(2, Rect::new(72.0, 600.0, 200.0, 40.0));
    /// assert_eq!(bbox.page_index, 2);
    /// assert_eq!(bbox.right_x(), 272.0);
    /// assert_eq!(bbox.top_y(), 640.0);
    /// ```
    pub fn new(page_index: u32, rect: Rect) -> Self {
        Self { page_index, rect }
    }

    /// Create a bounding box from a signed page index.
    ///
    /// Tree builders working with signed indices use this to reject
    /// negative pages instead of wrapping them.
    pub fn from_signed(page_index: i64, rect: Rect) -> Result<Self> {
        let page_index =
            u32::try_from(page_index).map_err(|_| Error::NegativePageIndex(page_index))?;
        Ok(Self::new(page_index, rect))
    }

    /// Left edge of the box.
    pub fn left_x(&self) -> f32 {
        self.rect.min_x()
    }

    /// Bottom edge of the box.
    pub fn bottom_y(&self) -> f32 {
        self.rect.min_y()
    }

    /// Right edge of the box.
    pub fn right_x(&self) -> f32 {
        self.rect.max_x()
    }

    /// Top edge of the box.
    pub fn top_y(&self) -> f32 {
        self.rect.max_y()
    }

    /// Width of the box.
    pub fn width(&self) -> f32 {
        self.rect.width
    }

    /// Height of the box.
    pub fn height(&self) -> f32 {
        self.rect.height
    }

    /// Area of the box.
    pub fn area(&self) -> f32 {
        self.rect.area()
    }

    /// Check if two boxes overlap. Boxes on different pages never do.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.page_index == other.page_index && self.rect.intersects(&other.rect)
    }

    /// Check if this box encloses another. Boxes on different pages never do.
    pub fn contains(&self, other: &BoundingBox) -> bool {
        self.page_index == other.page_index && self.rect.contains(&other.rect)
    }

    /// Check if a point on the given page lies in this box.
    pub fn contains_point(&self, point: &Point, page_index: u32) -> bool {
        self.page_index == page_index && self.rect.contains_point(point)
    }

    /// Smallest box covering both boxes, if they are on the same page.
    pub fn union(&self, other: &BoundingBox) -> Option<BoundingBox> {
        if self.page_index != other.page_index {
            return None;
        }
        Some(BoundingBox::new(self.page_index, self.rect.union(&other.rect)))
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "page {} [{:.1}, {:.1}, {:.1}, {:.1}]",
            self.page_index,
            self.left_x(),
            self.bottom_y(),
            self.right_x(),
            self.top_y()
        )
    }
}
