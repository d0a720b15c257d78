//! # Vertical-Range Normalizer
//!
//! Forces the vertical extent of an accepted column box to start near the
//! page top and cover most of the page height. Detection tends to report a
//! tight box around the densest text, but the verse enumeration printed at
//! the top of the column must never be cropped away, so the detected y range
//! is deliberately ignored.

use crate::config::VerticalCoverageConfig;
use crate::geometry::BoundingBox;

/// Normalizes the vertical extent of a column box.
///
/// The box is re-anchored within the top 2% of the page (capped at 50px) and
/// extended to 93% of the page height; if that still covers less than 85% of
/// the page, the bottom edge is pushed down until it does (subject to the
/// hard bound `image_height - 1`). The x position and width are untouched.
///
/// Idempotent: running this on its own output is a no-op, since the
/// normalized box already satisfies the coverage invariant.
///
/// # Arguments
///
/// * `bbox` - The accepted column box, detected or fallback
/// * `image_height` - Page image height in pixels
/// * `config` - Vertical coverage policy
pub fn normalize_vertical(
    bbox: &BoundingBox,
    image_height: u32,
    config: &VerticalCoverageConfig,
) -> BoundingBox {
    let margin = (config.top_margin_fraction * image_height as f32).round() as u32;
    let y0 = config.top_margin_px.min(margin);

    let bottom = (config.bottom_fraction * image_height as f32).round() as u32;
    let mut y1 = bottom.min(image_height.saturating_sub(1));

    // Ensure at least the minimum coverage of the page height
    let min_height = (config.min_coverage_fraction * image_height as f32).round() as u32;
    if y1.saturating_sub(y0) < min_height {
        y1 = (y0 + min_height).min(image_height.saturating_sub(1));
    }

    BoundingBox::new(bbox.x, y0, bbox.width, y1.saturating_sub(y0))
}
