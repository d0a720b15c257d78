//! # Fallback Position Estimator
//!
//! Computes a column estimate from image dimensions alone, used when
//! detection cannot produce a confident candidate. Empirically the target
//! column sits at roughly 28% of the page width; forcing `y = 0` and full
//! height guarantees the page-top verse enumeration is never cropped away
//! even when geometry detection is unusable.

use crate::config::FallbackConfig;
use crate::geometry::BoundingBox;

/// Estimates the column position from page dimensions alone.
///
/// Never fails: the returned box always starts at the page top and spans the
/// full height, with a width clamped to the configured range.
///
/// # Arguments
///
/// * `width` - Page image width in pixels
/// * `height` - Page image height in pixels
/// * `config` - Fallback estimator settings
pub fn estimate_fallback(width: u32, height: u32, config: &FallbackConfig) -> BoundingBox {
    let x = (config.x_fraction * width as f32).round() as u32;
    let estimated = (config.width_fraction * width as f32).round() as u32;
    let w = estimated.clamp(config.min_width, config.max_width);

    // y = 0 and full height preserve the enumeration at the page top
    BoundingBox::new(x, 0, w, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_fallback_narrow_page() {
        // 0.4 * 1000 = 400, clamped up to the 700px minimum
        let bbox = estimate_fallback(1000, 3000, &FallbackConfig::default());
        assert_eq!(bbox, BoundingBox::new(280, 0, 700, 3000));
    }

    #[test]
    fn test_estimate_fallback_wide_page_caps_width() {
        // 0.4 * 3000 = 1200, clamped down to the 1100px maximum
        let bbox = estimate_fallback(3000, 4000, &FallbackConfig::default());
        assert_eq!(bbox.x, 840);
        assert_eq!(bbox.y, 0);
        assert_eq!(bbox.width, 1100);
        assert_eq!(bbox.height, 4000);
    }

    #[test]
    fn test_estimate_fallback_mid_range_width_unclamped() {
        // 0.4 * 2000 = 800, inside [700, 1100]
        let bbox = estimate_fallback(2000, 3500, &FallbackConfig::default());
        assert_eq!(bbox.width, 800);
        assert_eq!(bbox.x, 560);
    }

    #[test]
    fn test_estimate_fallback_always_starts_at_top() {
        for width in [500, 1000, 2400, 3200] {
            let bbox = estimate_fallback(width, 3000, &FallbackConfig::default());
            assert_eq!(bbox.y, 0);
            assert_eq!(bbox.height, 3000);
        }
    }
}
