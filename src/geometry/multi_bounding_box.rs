//! Page-sorted collections of bounding boxes.

use super::{BoundingBox, Point};
use serde::{Deserialize, Serialize};

/// An ordered collection of bounding boxes spanning one or more pages.
///
/// The boxes are kept sorted by page index with a stable sort, so boxes on
/// the same page keep their input order. The type is persistent: every
/// operation that would change the collection returns a new one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawMultiBoundingBox")]
pub struct MultiBoundingBox {
    boxes: Vec<BoundingBox>,
}

/// Decoding shape; re-sorted on conversion.
#[derive(Deserialize)]
struct RawMultiBoundingBox {
    #[serde(default)]
    boxes: Vec<BoundingBox>,
}

impl From<RawMultiBoundingBox> for MultiBoundingBox {
    fn from(raw: RawMultiBoundingBox) -> Self {
        Self::new(raw.boxes)
    }
}

impl MultiBoundingBox {
    /// Create a collection from boxes in any order.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdfua_oxide::geometry::{BoundingBox, MultiBoundingBox, Rect};
    ///
    /// let multi = MultiBoundingBox::new(vec![
    ///     BoundingBox::new(2, Rect::new(0.0, 0.0, 10.0, 10.0)),
    ///     BoundingBox::new(0, Rect::new(0.0, 0.0, 20.0, 20.0)),
    /// ]);
    /// assert_eq!(multi.page_indices(), vec![0, 2]);
    /// assert!(multi.is_multi_page());
    /// ```
    pub fn new(boxes: impl IntoIterator<Item = BoundingBox>) -> Self {
        let mut boxes: Vec<BoundingBox> = boxes.into_iter().collect();
        boxes.sort_by_key(|b| b.page_index);
        Self { boxes }
    }

    /// All boxes, sorted by page.
    pub fn boxes(&self) -> &[BoundingBox] {
        &self.boxes
    }

    /// Number of boxes.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// True when the collection holds no boxes.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Return a new collection with one more box.
    pub fn adding(&self, bbox: BoundingBox) -> Self {
        self.adding_all(std::iter::once(bbox))
    }

    /// Return a new collection with every box from `boxes` added.
    pub fn adding_all(&self, boxes: impl IntoIterator<Item = BoundingBox>) -> Self {
        Self::new(self.boxes.iter().copied().chain(boxes))
    }

    /// Return a new collection containing the boxes of both collections.
    pub fn merged(&self, other: &MultiBoundingBox) -> Self {
        self.adding_all(other.boxes.iter().copied())
    }

    /// Boxes on the given page, in collection order.
    pub fn boxes_on_page(&self, page_index: u32) -> Vec<BoundingBox> {
        self.boxes
            .iter()
            .filter(|b| b.page_index == page_index)
            .copied()
            .collect()
    }

    /// Smallest box covering every box on the given page.
    ///
    /// Returns `None` if no box lies on that page. A single box is returned
    /// unchanged.
    pub fn union_box_for_page(&self, page_index: u32) -> Option<BoundingBox> {
        let mut on_page = self.boxes.iter().filter(|b| b.page_index == page_index);
        let first = *on_page.next()?;
        Some(on_page.fold(first, |acc, b| {
            BoundingBox::new(page_index, acc.rect.union(&b.rect))
        }))
    }

    /// Distinct page indices, ascending.
    pub fn page_indices(&self) -> Vec<u32> {
        let mut pages: Vec<u32> = self.boxes.iter().map(|b| b.page_index).collect();
        pages.dedup();
        pages
    }

    /// Number of distinct pages.
    pub fn page_count(&self) -> usize {
        self.page_indices().len()
    }

    /// True when the boxes lie on more than one page.
    pub fn is_multi_page(&self) -> bool {
        self.page_count() > 1
    }

    /// Sum of the areas of all boxes.
    ///
    /// Overlapping boxes are counted twice; this is not the area of the union.
    pub fn total_area(&self) -> f32 {
        self.boxes.iter().map(BoundingBox::area).sum()
    }

    /// True if any box on the same page intersects `bbox`.
    pub fn intersects(&self, bbox: &BoundingBox) -> bool {
        self.boxes.iter().any(|b| b.intersects(bbox))
    }

    /// True if any box on the same page fully contains `bbox`.
    pub fn contains(&self, bbox: &BoundingBox) -> bool {
        self.boxes.iter().any(|b| b.contains(bbox))
    }

    /// True if any box on `page_index` contains the point.
    pub fn contains_point(&self, point: &Point, page_index: u32) -> bool {
        self.boxes.iter().any(|b| b.contains_point(point, page_index))
    }
}

impl From<BoundingBox> for MultiBoundingBox {
    fn from(bbox: BoundingBox) -> Self {
        Self { boxes: vec![bbox] }
    }
}

impl FromIterator<BoundingBox> for MultiBoundingBox {
    fn from_iter<I: IntoIterator<Item = BoundingBox>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    fn bbox(page: u32, x: f32, y: f32, w: f32, h: f32) -> BoundingBox {
        BoundingBox::new(page, Rect::new(x, y, w, h))
    }

    #[test]
    fn test_sorted_and_stable() {
        let a = bbox(1, 0.0, 0.0, 1.0, 1.0);
        let b = bbox(0, 0.0, 0.0, 2.0, 2.0);
        let c = bbox(1, 5.0, 5.0, 3.0, 3.0);
        let multi = MultiBoundingBox::new(vec![a, b, c]);
        assert_eq!(multi.boxes(), &[b, a, c]);
    }

    #[test]
    fn test_adding_does_not_mutate() {
        let original = MultiBoundingBox::from(bbox(2, 0.0, 0.0, 1.0, 1.0));
        let extended = original.adding(bbox(0, 0.0, 0.0, 1.0, 1.0));
        assert_eq!(original.len(), 1);
        assert_eq!(extended.len(), 2);
        assert_eq!(extended.boxes()[0].page_index, 0);
    }

    #[test]
    fn test_merged() {
        let left = MultiBoundingBox::new(vec![bbox(3, 0.0, 0.0, 1.0, 1.0)]);
        let right = MultiBoundingBox::new(vec![
            bbox(1, 0.0, 0.0, 1.0, 1.0),
            bbox(3, 9.0, 9.0, 1.0, 1.0),
        ]);
        let merged = left.merged(&right);
        let pages: Vec<u32> = merged.boxes().iter().map(|b| b.page_index).collect();
        assert_eq!(pages, vec![1, 3, 3]);
        assert_eq!(merged.boxes()[1], left.boxes()[0]);
    }

    #[test]
    fn test_boxes_on_page() {
        let multi = MultiBoundingBox::new(vec![
            bbox(0, 0.0, 0.0, 1.0, 1.0),
            bbox(1, 0.0, 0.0, 1.0, 1.0),
        ]);
        assert_eq!(multi.boxes_on_page(1).len(), 1);
        assert!(multi.boxes_on_page(7).is_empty());
    }

    #[test]
    fn test_union_box_for_page() {
        let single = bbox(0, 1.5, 2.5, 3.25, 4.75);
        let multi = MultiBoundingBox::new(vec![
            single,
            bbox(1, 10.0, 10.0, 10.0, 10.0),
            bbox(1, 0.0, 30.0, 5.0, 5.0),
        ]);

        assert_eq!(multi.union_box_for_page(0), Some(single));
        assert_eq!(multi.union_box_for_page(1), Some(bbox(1, 0.0, 10.0, 20.0, 25.0)));
        assert_eq!(multi.union_box_for_page(2), None);
    }

    #[test]
    fn test_page_queries() {
        let multi = MultiBoundingBox::new(vec![
            bbox(4, 0.0, 0.0, 1.0, 1.0),
            bbox(4, 0.0, 0.0, 1.0, 1.0),
            bbox(2, 0.0, 0.0, 1.0, 1.0),
        ]);
        assert_eq!(multi.page_indices(), vec![2, 4]);
        assert_eq!(multi.page_count(), 2);
        assert!(multi.is_multi_page());
        assert!(!MultiBoundingBox::default().is_multi_page());
    }

    #[test]
    fn test_total_area_double_counts_overlap() {
        let multi = MultiBoundingBox::new(vec![
            bbox(0, 0.0, 0.0, 10.0, 10.0),
            bbox(0, 5.0, 5.0, 10.0, 10.0),
        ]);
        assert_eq!(multi.total_area(), 200.0);
        assert_eq!(MultiBoundingBox::default().total_area(), 0.0);
    }

    #[test]
    fn test_intersects_and_contains_respect_pages() {
        let multi = MultiBoundingBox::new(vec![bbox(0, 0.0, 0.0, 100.0, 100.0)]);
        let inside_same_page = bbox(0, 10.0, 10.0, 5.0, 5.0);
        let inside_other_page = bbox(1, 10.0, 10.0, 5.0, 5.0);

        assert!(multi.intersects(&inside_same_page));
        assert!(multi.contains(&inside_same_page));
        assert!(!multi.intersects(&inside_other_page));
        assert!(!multi.contains(&inside_other_page));
        assert!(multi.contains_point(&Point::new(50.0, 50.0), 0));
        assert!(!multi.contains_point(&Point::new(50.0, 50.0), 1));
    }

    #[test]
    fn test_decoding_resorts() {
        let json = r#"{"boxes": [
            {"pageIndex": 5, "rect": {"x": 0, "y": 0, "width": 1, "height": 1}},
            {"pageIndex": 1, "rect": {"x": 0, "y": 0, "width": 1, "height": 1}}
        ]}"#;
        let multi: MultiBoundingBox = serde_json::from_str(json).unwrap();
        assert_eq!(multi.page_indices(), vec![1, 5]);

        let encoded = serde_json::to_string(&multi).unwrap();
        let back: MultiBoundingBox = serde_json::from_str(&encoded).unwrap();
        assert_eq!(back, multi);
    }
}
