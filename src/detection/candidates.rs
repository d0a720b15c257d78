//! # Candidate Region Search
//!
//! Binarizes a page image with a fixed global threshold and extracts dense
//! candidate regions as axis-aligned bounding boxes. Glyphs and lines are
//! first fused into solid blocks by dilation, then block outlines are
//! recovered as contours. The geometric refinement logic consumes only the
//! resulting boxes, so it stays independent of these raster primitives.

use image::{GrayImage, Luma};
use imageproc::contours::{find_contours, BorderType};
use imageproc::distance_transform::Norm;
use imageproc::morphology::dilate;
use tracing::debug;

use crate::config::GeometryProfile;
use crate::geometry::BoundingBox;

/// Minimum ink fraction for a row to count as part of a title block.
const TITLE_ROW_DENSITY: f32 = 0.05;

/// Partitions a grayscale page into ink (255) and background (0) using a
/// fixed global threshold. Samples darker than the threshold are ink.
pub fn binarize(gray: &GrayImage, threshold: u8) -> GrayImage {
    let mut mask = GrayImage::new(gray.width(), gray.height());
    for (x, y, pixel) in gray.enumerate_pixels() {
        let ink = if pixel[0] < threshold { 255u8 } else { 0u8 };
        mask.put_pixel(x, y, Luma([ink]));
    }
    mask
}

/// Finds dense candidate regions in a binary mask.
///
/// The mask is dilated (L1 norm, `merge_radius`) so individual glyphs and
/// text lines merge into solid blocks, then outer contours are extracted and
/// reduced to axis-aligned bounding boxes, sorted largest-first.
///
/// # Arguments
///
/// * `mask` - Binary page mask (255 = ink)
/// * `merge_radius` - Dilation radius used to fuse glyphs into blocks
pub fn find_candidate_regions(mask: &GrayImage, merge_radius: u8) -> Vec<BoundingBox> {
    let merged = dilate(mask, Norm::L1, merge_radius);
    let contours = find_contours::<u32>(&merged);

    let mut boxes: Vec<BoundingBox> = contours
        .iter()
        .filter(|contour| contour.border_type == BorderType::Outer && !contour.points.is_empty())
        .map(|contour| {
            let min_x = contour.points.iter().map(|p| p.x).min().unwrap_or(0);
            let max_x = contour.points.iter().map(|p| p.x).max().unwrap_or(0);
            let min_y = contour.points.iter().map(|p| p.y).min().unwrap_or(0);
            let max_y = contour.points.iter().map(|p| p.y).max().unwrap_or(0);
            BoundingBox::new(min_x, min_y, max_x - min_x + 1, max_y - min_y + 1)
        })
        .filter(|bbox| bbox.width > 1 && bbox.height > 1)
        .collect();

    boxes.sort_by(|a, b| b.area().cmp(&a.area()));

    debug!(
        candidates = boxes.len(),
        "Candidate region search completed"
    );
    boxes
}

/// Scans the top of a column for a title block.
///
/// Looks through the top `title_scan_height` rows of the column's horizontal
/// extent for the first contiguous run of ink-bearing rows whose height falls
/// within the valid title range. Diagnostic only: the vertical normalizer
/// already guarantees the title survives the crop.
pub fn find_title_block(
    mask: &GrayImage,
    column: &BoundingBox,
    profile: &GeometryProfile,
) -> Option<BoundingBox> {
    let x0 = column.x.min(mask.width());
    let x1 = column.right().min(mask.width());
    if x1 <= x0 {
        return None;
    }
    let scan_rows = profile.title_scan_height.min(mask.height());
    let row_width = (x1 - x0) as f32;

    let mut run_start: Option<u32> = None;
    for y in 0..=scan_rows {
        let dense = if y < scan_rows {
            let ink = (x0..x1).filter(|&x| mask.get_pixel(x, y)[0] > 0).count();
            ink as f32 / row_width > TITLE_ROW_DENSITY
        } else {
            false // flush a run ending at the scan window edge
        };

        match (dense, run_start) {
            (true, None) => run_start = Some(y),
            (false, Some(start)) => {
                let run_height = y - start;
                if (profile.title_min_height..=profile.title_max_height).contains(&run_height) {
                    return Some(BoundingBox::new(column.x, start, column.width, run_height));
                }
                run_start = None;
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    /// White page with a solid dark rectangle.
    fn gray_page_with_rect(
        width: u32,
        height: u32,
        rect: (u32, u32, u32, u32),
    ) -> GrayImage {
        let mut gray = GrayImage::from_pixel(width, height, Luma([255]));
        let (rx, ry, rw, rh) = rect;
        for y in ry..(ry + rh).min(height) {
            for x in rx..(rx + rw).min(width) {
                gray.put_pixel(x, y, Luma([10]));
            }
        }
        gray
    }

    #[test]
    fn test_binarize_fixed_threshold() {
        let gray = gray_page_with_rect(50, 50, (10, 10, 20, 20));
        let mask = binarize(&gray, 128);
        assert_eq!(mask.get_pixel(15, 15)[0], 255);
        assert_eq!(mask.get_pixel(0, 0)[0], 0);
    }

    #[test]
    fn test_find_candidate_regions_recovers_block() {
        let gray = gray_page_with_rect(300, 400, (30, 20, 100, 200));
        let mask = binarize(&gray, 128);
        let candidates = find_candidate_regions(&mask, 2);

        assert_eq!(candidates.len(), 1);
        let bbox = candidates[0];
        // Dilation grows the block by the merge radius on each side
        assert!(bbox.x <= 30 && bbox.x >= 26);
        assert!(bbox.y <= 20 && bbox.y >= 16);
        assert!(bbox.width >= 100 && bbox.width <= 108);
        assert!(bbox.height >= 200 && bbox.height <= 208);
    }

    #[test]
    fn test_find_candidate_regions_sorted_largest_first() {
        let mut gray = GrayImage::from_pixel(400, 400, Luma([255]));
        for (rx, ry, rw, rh) in [(20u32, 20u32, 30u32, 30u32), (200, 100, 100, 250)] {
            for y in ry..ry + rh {
                for x in rx..rx + rw {
                    gray.put_pixel(x, y, Luma([0]));
                }
            }
        }
        let mask = binarize(&gray, 128);
        let candidates = find_candidate_regions(&mask, 2);

        assert_eq!(candidates.len(), 2);
        assert!(candidates[0].area() > candidates[1].area());
        assert!(candidates[0].x >= 196);
    }

    #[test]
    fn test_find_candidate_regions_blank_page() {
        let mask = binarize(&GrayImage::from_pixel(200, 200, Luma([255])), 128);
        assert!(find_candidate_regions(&mask, 2).is_empty());
    }

    #[test]
    fn test_find_title_block_within_height_range() {
        let gray = gray_page_with_rect(1000, 3000, (200, 30, 600, 100));
        let mask = binarize(&gray, 128);
        let column = BoundingBox::new(200, 0, 600, 2900);

        let title = find_title_block(&mask, &column, &GeometryProfile::default())
            .expect("title block should be detected");
        assert_eq!(title.y, 30);
        assert_eq!(title.height, 100);
        assert_eq!(title.x, column.x);
    }

    #[test]
    fn test_find_title_block_rejects_out_of_range_runs() {
        let profile = GeometryProfile::default();
        let column = BoundingBox::new(200, 0, 600, 2900);

        // Too short: 10 rows < 25
        let gray = gray_page_with_rect(1000, 3000, (200, 30, 600, 10));
        let mask = binarize(&gray, 128);
        assert!(find_title_block(&mask, &column, &profile).is_none());

        // Too tall: 300 rows > 220
        let gray = gray_page_with_rect(1000, 3000, (200, 30, 600, 300));
        let mask = binarize(&gray, 128);
        assert!(find_title_block(&mask, &column, &profile).is_none());
    }
}
