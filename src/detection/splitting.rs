//! # Wide-Region Splitter
//!
//! When a single detected dense region spans both physical columns of the
//! page, this module derives the sub-rectangle corresponding to the second
//! (target) column. The split point is chosen so the carved column satisfies
//! the 800-1100px width constraint, preferring a position-based split when
//! the region looks like "everything from the left edge".

use crate::config::SplitConfig;

/// Carves the second column out of an over-wide region.
///
/// Returns the `(x, width)` of the target column. Regions starting near the
/// left page edge are assumed to have absorbed the first column and are split
/// at a page-relative position; regions starting further right are split
/// proportionally to their own width.
///
/// # Arguments
///
/// * `x0` - Left edge of the wide region
/// * `x1` - Right edge of the wide region
/// * `image_width` - Page image width in pixels
/// * `config` - Split policy
pub fn split_second_column(x0: u32, x1: u32, image_width: u32, config: &SplitConfig) -> (u32, u32) {
    let original_width = x1.saturating_sub(x0);

    let mut split_x = if x0 < config.near_left_limit {
        // Region absorbed the first column; split at a page-relative position
        let page_split = (config.page_fraction * image_width as f32).round() as u32;
        config.min_second_x.max(page_split)
    } else {
        let proportional = x0 + (config.region_fraction * original_width as f32).round() as u32;
        (x0 + config.min_second_x).max(proportional)
    };

    let mut second_width = x1.saturating_sub(split_x);
    if second_width < config.min_width {
        // Pull the split point left until the column is wide enough, but
        // never left of the region itself or of the minimum second-column x
        split_x = x1.saturating_sub(config.max_width).max(x0);
        split_x = split_x.max(config.min_second_x);
        second_width = x1.saturating_sub(split_x);
    }

    (split_x, second_width.min(config.max_width))
}
