//! Content carried by structure nodes.
//!
//! Text is aggregated in four immutable levels (chunk, line, block, column),
//! and figures own image and line-art chunks. Every element carries its own
//! [`BoundingBox`](crate::geometry::BoundingBox).
//!
//! ## Example
//!
//! ```
//! use pdfua_oxide::elements::{TextBlock, TextChunk, TextLine};
//! use pdfua_oxide::geometry::{BoundingBox, Rect};
//!
//! let bbox = BoundingBox::new(0, Rect::new(72.0, 700.0, 200.0, 14.0));
//! let line = TextLine::new(
//!     bbox,
//!     vec![TextChunk::new(bbox, "Hello, "), TextChunk::new(bbox, "World!")],
//! );
//! let block = TextBlock::new(bbox, vec![line]);
//! assert_eq!(block.text(), "Hello, World!");
//! ```

mod image;
mod line_art;
mod style;
mod text;

pub use image::ImageChunk;
pub use line_art::{LineArtChunk, LineSegment};
pub use style::{Color, FontWeight};
pub use text::{TextBlock, TextChunk, TextColumn, TextLine};
