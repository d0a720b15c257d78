//! # Extraction Integration Tests
//!
//! End-to-end tests of the batch extractor over synthetic page scans:
//! detection of the target column on a two-column page, the fallback path on
//! an empty page, and failure isolation when an unreadable file is present.

#[cfg(test)]
mod tests {
    use hebrew_columns::{ColumnExtractor, ExtractionConfig};
    use image::{Rgb, RgbImage};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    /// White page with solid dark rectangles standing in for text columns.
    fn synthetic_page(width: u32, height: u32, columns: &[(u32, u32, u32, u32)]) -> RgbImage {
        let mut page = RgbImage::from_pixel(width, height, Rgb([245, 240, 230]));
        for &(x, y, w, h) in columns {
            for py in y..(y + h).min(height) {
                for px in x..(x + w).min(width) {
                    page.put_pixel(px, py, Rgb([20, 15, 10]));
                }
            }
        }
        page
    }

    fn output_dimensions(path: &Path) -> (u32, u32) {
        let img = image::open(path).expect("output image should be readable");
        (img.width(), img.height())
    }

    #[test]
    fn test_two_column_page_crops_target_column() {
        let input = TempDir::new().expect("temp input dir");
        let output = TempDir::new().expect("temp output dir");

        // First column at x=40 (too narrow to be the target), target column
        // 900px wide at x=400, both spanning most of the page height
        let page = synthetic_page(
            1600,
            3000,
            &[(40, 100, 250, 2800), (400, 100, 900, 2800)],
        );
        page.save(input.path().join("page_000001.png"))
            .expect("save synthetic page");

        let extractor =
            ColumnExtractor::new(input.path(), output.path(), ExtractionConfig::default());
        let summary = extractor.process_all_images().expect("batch should run");

        assert_eq!(summary.processed, 1);
        assert_eq!(summary.fallbacks, 0);
        assert_eq!(summary.failed, 0);

        let out_path = output.path().join("page_000001.png");
        assert!(out_path.exists());

        // Width: target column plus the dilation margin on both sides.
        // Height: normalized to y0=50 .. y1=round(0.93 * 3000)=2790
        let (w, h) = output_dimensions(&out_path);
        assert!((900..=932).contains(&w), "unexpected width {}", w);
        assert_eq!(h, 2740);
    }

    #[test]
    fn test_blank_page_takes_fallback_path() {
        let input = TempDir::new().expect("temp input dir");
        let output = TempDir::new().expect("temp output dir");

        let page = synthetic_page(1000, 3000, &[]);
        page.save(input.path().join("blank.png"))
            .expect("save blank page");

        let extractor =
            ColumnExtractor::new(input.path(), output.path(), ExtractionConfig::default());
        let summary = extractor.process_all_images().expect("batch should run");

        assert_eq!(summary.processed, 1);
        assert_eq!(summary.fallbacks, 1);

        // Fallback box (280, 0, 700, 3000) after vertical normalization
        let (w, h) = output_dimensions(&output.path().join("blank.png"));
        assert_eq!(w, 700);
        assert_eq!(h, 2740);
    }

    #[test]
    fn test_unreadable_image_does_not_abort_batch() {
        let input = TempDir::new().expect("temp input dir");
        let output = TempDir::new().expect("temp output dir");

        // Lexicographically first so the failure happens before the good page
        fs::write(input.path().join("aa_broken.png"), b"not an image at all")
            .expect("write broken file");
        let page = synthetic_page(1600, 3000, &[(400, 100, 900, 2800)]);
        page.save(input.path().join("page_000002.png"))
            .expect("save synthetic page");

        let extractor =
            ColumnExtractor::new(input.path(), output.path(), ExtractionConfig::default());
        let summary = extractor.process_all_images().expect("batch should run");

        assert_eq!(summary.processed, 1);
        assert_eq!(summary.failed, 1);
        assert!(output.path().join("page_000002.png").exists());
        assert!(!output.path().join("aa_broken.png").exists());
    }

    #[test]
    fn test_non_image_files_are_ignored() {
        let input = TempDir::new().expect("temp input dir");
        let output = TempDir::new().expect("temp output dir");

        fs::write(input.path().join("notes.txt"), b"not a scan").expect("write text file");

        let extractor =
            ColumnExtractor::new(input.path(), output.path(), ExtractionConfig::default());
        let summary = extractor.process_all_images().expect("batch should run");

        assert_eq!(summary.processed, 0);
        assert_eq!(summary.failed, 0);
    }

    #[test]
    fn test_final_box_stays_within_image_bounds() {
        let input = TempDir::new().expect("temp input dir");
        let output = TempDir::new().expect("temp output dir");

        // Narrow page: the fallback estimate overshoots the right edge and
        // must be clamped before cropping
        let page = synthetic_page(800, 2500, &[]);
        page.save(input.path().join("narrow.png"))
            .expect("save narrow page");

        let extractor =
            ColumnExtractor::new(input.path(), output.path(), ExtractionConfig::default());
        let summary = extractor.process_all_images().expect("batch should run");

        assert_eq!(summary.processed, 1);
        let (w, h) = output_dimensions(&output.path().join("narrow.png"));
        // Fallback x = round(0.28 * 800) = 224, width clamped from 700 to 576
        assert_eq!(w, 576);
        assert!(h < 2500);
    }
}
