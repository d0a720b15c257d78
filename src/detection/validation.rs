//! # Column Validation and Edge-Cut Repair
//!
//! Rejects candidate regions inconsistent with the known column geometry
//! (too wide, too narrow, or starting where the *first* column lives) and
//! conservatively widens a candidate when pixel-density evidence shows text
//! being cut off at its right edge.
//!
//! The repair is deliberately split into raw density sampling over the
//! binary mask and pure decision functions over precomputed densities, so
//! the tuned thresholds can be tested without raster fixtures.

use image::GrayImage;
use tracing::{debug, info};

use crate::config::{EdgeRepairConfig, GeometryProfile};

/// Absolute floor of the width tolerance band in pixels.
const WIDTH_FLOOR: u32 = 600;
/// Tolerance added around the nominal column width range.
const WIDTH_TOLERANCE: u32 = 200;
/// The column can never exceed this fraction of the page width.
const MAX_PAGE_FRACTION: f32 = 0.6;
/// Pixel floor of the first-column rejection threshold.
const FIRST_COLUMN_MIN_PX: u32 = 50;
/// Page-relative first-column rejection threshold.
const FIRST_COLUMN_FRACTION: f32 = 0.05;

/// Smallest acceptable candidate width for the given page.
pub fn min_allowed_width(profile: &GeometryProfile) -> u32 {
    WIDTH_FLOOR.max(profile.column_width_min.saturating_sub(WIDTH_TOLERANCE))
}

/// Largest acceptable candidate width for the given page.
pub fn max_allowed_width(profile: &GeometryProfile, image_width: u32) -> u32 {
    let page_cap = (MAX_PAGE_FRACTION * image_width as f32).round() as u32;
    (profile.column_width_max + WIDTH_TOLERANCE).min(page_cap)
}

/// True if the candidate width falls within the tolerance band around the
/// nominal column width range, capped at 60% of the page width.
pub fn is_width_valid(width: u32, image_width: u32, profile: &GeometryProfile) -> bool {
    (min_allowed_width(profile)..=max_allowed_width(profile, image_width)).contains(&width)
}

/// True if the candidate starts close enough to the left page edge to be
/// judged the *first* column rather than the target second column. Such
/// candidates must be discarded by the caller (split or fallback instead).
pub fn is_first_column_start(x: u32, image_width: u32) -> bool {
    let threshold = FIRST_COLUMN_MIN_PX.max((FIRST_COLUMN_FRACTION * image_width as f32).round() as u32);
    x < threshold
}

/// Fraction of ink pixels in the full-height vertical strip `[x0, x1)`.
///
/// Returns 0.0 for an empty strip. The mask convention is 255 = ink.
pub fn strip_ink_density(mask: &GrayImage, x0: u32, x1: u32) -> f32 {
    let x1 = x1.min(mask.width());
    if x0 >= x1 || mask.height() == 0 {
        return 0.0;
    }
    let mut ink = 0u64;
    for x in x0..x1 {
        for y in 0..mask.height() {
            if mask.get_pixel(x, y)[0] > 0 {
                ink += 1;
            }
        }
    }
    let area = (x1 - x0) as u64 * mask.height() as u64;
    ink as f32 / area as f32
}

/// Pure gate deciding whether edge expansion is worth investigating.
///
/// Fires only for columns already narrower than typical, with high ink
/// density at the current right edge and significant density just beyond it.
fn edge_cut_suspected(
    width: u32,
    right_density: f32,
    beyond_density: f32,
    config: &EdgeRepairConfig,
) -> bool {
    width < config.narrow_column_limit
        && right_density > config.edge_density_floor
        && beyond_density > config.beyond_density_floor
}

/// Walks precomputed strip densities outward from `start` and returns the
/// right edge of the furthest strip still dense enough to be text. Stops at
/// the first strip whose density drops to or below the continuation floor.
fn furthest_dense_edge(
    densities: &[f32],
    start: u32,
    step: u32,
    strip_width: u32,
    floor: f32,
) -> u32 {
    let mut best_end = start;
    for (i, &density) in densities.iter().enumerate() {
        if density > floor {
            best_end = start + i as u32 * step + strip_width;
        } else {
            break;
        }
    }
    best_end
}

/// Conservatively expands a column's width when text is cut at its right edge.
///
/// Returns the updated `(x, width)` tuple; the position never changes and the
/// width only grows when density evidence is strong, by at least the minimum
/// meaningful gain, and never beyond the global maximum column width.
///
/// # Arguments
///
/// * `mask` - Binary page mask (255 = ink)
/// * `x` - Current column x position
/// * `width` - Current column width
/// * `config` - Tuned repair thresholds
pub fn repair_edge_cut(
    mask: &GrayImage,
    x: u32,
    width: u32,
    config: &EdgeRepairConfig,
) -> (u32, u32) {
    let page_width = mask.width();

    // Wider columns are unlikely to be cut
    if width >= config.narrow_column_limit {
        return (x, width);
    }

    let edge = x + width;
    let right_start = edge.saturating_sub(config.edge_strip_width).max(x);
    let right_end = edge.min(page_width);
    if right_end <= right_start {
        return (x, width);
    }
    let right_density = strip_ink_density(mask, right_start, right_end);

    let beyond_start = edge.min(page_width.saturating_sub(1));
    let beyond_end = (edge + config.beyond_strip_width).min(page_width);
    let beyond_density = if beyond_end > beyond_start {
        strip_ink_density(mask, beyond_start, beyond_end)
    } else {
        0.0
    };

    if !edge_cut_suspected(width, right_density, beyond_density, config) {
        debug!(
            right_density,
            beyond_density, "No evidence of cut text at right edge"
        );
        return (x, width);
    }

    // Sample strip densities outward to find where the text actually ends
    let scan_limit = (edge + config.max_expand).min(page_width);
    let mut densities = Vec::new();
    let mut strip_x = beyond_start;
    while strip_x < scan_limit {
        densities.push(strip_ink_density(
            mask,
            strip_x,
            (strip_x + config.scan_strip_width).min(page_width),
        ));
        strip_x += config.step_width;
    }

    let best_end = furthest_dense_edge(
        &densities,
        beyond_start,
        config.step_width,
        config.scan_strip_width,
        config.continuation_density,
    )
    .min(page_width);

    // Only expand on a meaningful contiguous continuation
    if best_end <= beyond_start + config.min_gain {
        return (x, width);
    }
    let new_width = (best_end - x).min(config.max_column_width);
    if new_width > width + config.min_gain {
        info!(
            old_width = width,
            new_width, "Expanding column width, text cut detected at right edge"
        );
        (x, new_width)
    } else {
        (x, width)
    }
}
