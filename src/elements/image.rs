//! Raster image content of figures.

use crate::geometry::BoundingBox;
use serde::{Deserialize, Serialize};

/// A raster image placed on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageChunk {
    /// Where the image is placed
    pub bounding_box: BoundingBox,
    /// Image width in pixels
    pub pixel_width: u32,
    /// Image height in pixels
    pub pixel_height: u32,
    /// Bits per component (typically 8)
    #[serde(default = "default_bits_per_component")]
    pub bits_per_component: u8,
    /// Alternative text attached to the image itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    /// Replacement text for the image, if it renders text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_text: Option<String>,
}

fn default_bits_per_component() -> u8 {
    8
}

impl ImageChunk {
    /// Create an image chunk.
    pub fn new(bounding_box: BoundingBox, pixel_width: u32, pixel_height: u32) -> Self {
        Self {
            bounding_box,
            pixel_width,
            pixel_height,
            bits_per_component: default_bits_per_component(),
            alt_text: None,
            actual_text: None,
        }
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

    /// True when the image carries non-empty alt text.
    pub fn has_alt_text(&self) -> bool {
        self.alt_text.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Total pixels in the image.
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.pixel_width) * u64::from(self.pixel_height)
    }

    /// Get the aspect ratio (width / height).
    pub fn aspect_ratio(&self) -> f32 {
        if self.pixel_height == 0 {
            1.0
        } else {
            self.pixel_width as f32 / self.pixel_height as f32
        }
    }

    /// Horizontal resolution in dots per inch (72 points = 1 inch).
    pub fn horizontal_dpi(&self) -> Option<f32> {
        let width_inches = self.bounding_box.width() / 72.0;
        (width_inches > 0.0 && self.pixel_width > 0)
            .then(|| self.pixel_width as f32 / width_inches)
    }

    /// Vertical resolution in dots per inch.
    pub fn vertical_dpi(&self) -> Option<f32> {
        let height_inches = self.bounding_box.height() / 72.0;
        (height_inches > 0.0 && self.pixel_height > 0)
            .then(|| self.pixel_height as f32 / height_inches)
    }

    /// Get the resolution as (horizontal_dpi, vertical_dpi).
    pub fn resolution(&self) -> Option<(f32, f32)> {
        Some((self.horizontal_dpi()?, self.vertical_dpi()?))
    }

    /// Check if this image is low resolution (< 150 DPI in either dimension).
    pub fn is_low_resolution(&self) -> bool {
        match self.resolution() {
            Some((h, v)) => h < 150.0 || v < 150.0,
            None => false,
        }
    }
}
