//! # Geometry Types
//!
//! Shared value types for the detection pipeline: the pixel-space bounding
//! box that travels through every refinement step, and the provenance tag
//! recording whether a box came from actual detection or from the
//! dimension-only fallback estimate.

use std::fmt;

/// Axis-aligned rectangle in integer pixel coordinates.
///
/// Boxes are immutable values: refinement functions consume one box and
/// produce a new one, never mutate in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Left edge x position
    pub x: u32,
    /// Top edge y position
    pub y: u32,
    /// Box width in pixels
    pub width: u32,
    /// Box height in pixels
    pub height: u32,
}

impl BoundingBox {
    /// Creates a new bounding box.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// X coordinate one past the right edge.
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Y coordinate one past the bottom edge.
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Pixel area; u64 to stay safe for full-page boxes.
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// True if the box lies entirely within an image of the given dimensions.
    pub fn fits_within(&self, image_width: u32, image_height: u32) -> bool {
        self.right() <= image_width && self.bottom() <= image_height
    }

    /// Returns a copy trimmed to fit within the given image dimensions.
    ///
    /// Refinement steps can push a box past the page edge (e.g. the fallback
    /// estimate on an unusually narrow scan); the pipeline re-clamps after
    /// every step so the bounds invariant always holds.
    pub fn clamped_to(&self, image_width: u32, image_height: u32) -> Self {
        let x = self.x.min(image_width.saturating_sub(1));
        let y = self.y.min(image_height.saturating_sub(1));
        Self {
            x,
            y,
            width: self.width.min(image_width - x),
            height: self.height.min(image_height - y),
        }
    }
}

/// How a column box was obtained. Preserved through all refinement steps;
/// downstream logging and quality auditing depend on this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Derived from ink density and contour extraction
    Detected,
    /// Derived purely from the image dimensions
    Fallback,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::Detected => write!(f, "detected"),
            Provenance::Fallback => write!(f, "fallback"),
        }
    }
}

/// A column box tagged with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectedColumn {
    /// The column region
    pub bbox: BoundingBox,
    /// Where the region came from
    pub provenance: Provenance,
}
