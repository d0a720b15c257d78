//! # Column Extractor
//!
//! Per-image detection pipeline and directory batch orchestrator. Each page
//! runs through a strictly linear sequence: load, binarize, candidate search,
//! validation (with split or fallback when the candidate is rejected or
//! absent), vertical normalization, edge-cut repair, crop, write. Images are
//! processed independently; a failure on one image is logged and the batch
//! continues.

use std::fs;
use std::path::{Path, PathBuf};

use image::GenericImageView;
use tracing::{debug, error, info, warn};

use crate::config::ExtractionConfig;
use crate::detection::{
    binarize, estimate_fallback, find_candidate_regions, find_title_block, is_first_column_start,
    is_width_valid, max_allowed_width, normalize_vertical, repair_edge_cut, split_second_column,
};
use crate::errors::{ExtractError, ExtractResult};
use crate::geometry::{BoundingBox, DetectedColumn, Provenance};

/// File extensions accepted as page scans.
const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "tif", "tiff", "bmp"];

/// Outcome counters for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Images cropped and written successfully
    pub processed: usize,
    /// Successful images that used the fallback estimate
    pub fallbacks: usize,
    /// Images skipped because of a load or write failure
    pub failed: usize,
}

/// Extracts the central text column from every page scan in a directory.
pub struct ColumnExtractor {
    input_dir: PathBuf,
    output_dir: PathBuf,
    config: ExtractionConfig,
}

impl ColumnExtractor {
    /// Creates an extractor over the given input and output directories.
    pub fn new(
        input_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        config: ExtractionConfig,
    ) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            config,
        }
    }

    /// Processes every supported image in the input directory.
    ///
    /// The output directory is created if absent and inputs are visited in
    /// lexicographic filename order so runs are reproducible. Per-image
    /// failures are logged and counted but never abort the batch.
    pub fn process_all_images(&self) -> ExtractResult<BatchSummary> {
        fs::create_dir_all(&self.output_dir)?;

        let mut paths: Vec<PathBuf> = fs::read_dir(&self.input_dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| is_supported_image(path))
            .collect();
        paths.sort();

        if paths.is_empty() {
            warn!(input_dir = %self.input_dir.display(), "No supported images found");
        }

        let mut summary = BatchSummary::default();
        for path in &paths {
            match self.process_image(path) {
                Ok(provenance) => {
                    summary.processed += 1;
                    if provenance == Provenance::Fallback {
                        summary.fallbacks += 1;
                    }
                }
                Err(err) => {
                    error!(image = %path.display(), error = %err, "Image skipped");
                    summary.failed += 1;
                }
            }
        }

        info!(
            processed = summary.processed,
            fallbacks = summary.fallbacks,
            failed = summary.failed,
            "Batch completed"
        );
        Ok(summary)
    }

    /// Runs the full detection pipeline on a single page image and writes
    /// the cropped column to the output directory under the same filename.
    ///
    /// Returns the provenance of the box the crop was derived from.
    pub fn process_image(&self, path: &Path) -> ExtractResult<Provenance> {
        let img = image::open(path).map_err(|e| ExtractError::ImageLoad {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let (image_width, image_height) = img.dimensions();

        let gray = img.to_luma8();
        let mask = binarize(&gray, self.config.geometry.binarize_threshold);
        let candidates = find_candidate_regions(&mask, self.config.geometry.merge_radius);

        let column = match self.select_column(&candidates, image_width) {
            Some(bbox) => DetectedColumn {
                bbox,
                provenance: Provenance::Detected,
            },
            None => {
                info!(
                    image = %path.display(),
                    "No valid candidate, using fallback estimate"
                );
                DetectedColumn {
                    bbox: estimate_fallback(image_width, image_height, &self.config.fallback),
                    provenance: Provenance::Fallback,
                }
            }
        };
        let bbox = column.bbox.clamped_to(image_width, image_height);
        debug_assert!(bbox.fits_within(image_width, image_height));

        if let Some(title) = find_title_block(&mask, &bbox, &self.config.geometry) {
            debug!(
                y = title.y,
                height = title.height,
                "Title block found above column body"
            );
        }

        let bbox = normalize_vertical(&bbox, image_height, &self.config.vertical)
            .clamped_to(image_width, image_height);
        debug_assert!(bbox.fits_within(image_width, image_height));

        let (x, width) = repair_edge_cut(&mask, bbox.x, bbox.width, &self.config.edge_repair);
        let bbox = BoundingBox::new(x, bbox.y, width, bbox.height)
            .clamped_to(image_width, image_height);
        debug_assert!(bbox.fits_within(image_width, image_height));

        let cropped = img.crop_imm(bbox.x, bbox.y, bbox.width, bbox.height);
        let file_name = path
            .file_name()
            .ok_or_else(|| ExtractError::Io(format!("No filename in {}", path.display())))?;
        let out_path = self.output_dir.join(file_name);
        cropped.save(&out_path).map_err(|e| ExtractError::ImageWrite {
            path: out_path.display().to_string(),
            message: e.to_string(),
        })?;

        info!(
            image = %path.display(),
            provenance = %column.provenance,
            x = bbox.x,
            y = bbox.y,
            width = bbox.width,
            height = bbox.height,
            "Column written"
        );
        Ok(column.provenance)
    }

    /// Picks the best surviving candidate, largest-first.
    ///
    /// Candidates shorter than the minimum column height are skipped. Valid-
    /// width candidates starting where the first column lives are discarded;
    /// over-wide candidates go through the second-column splitter and are
    /// re-validated. Among survivors, one whose left edge falls in the
    /// expected x range is preferred over a merely larger one.
    fn select_column(&self, candidates: &[BoundingBox], image_width: u32) -> Option<BoundingBox> {
        let geometry = &self.config.geometry;
        let mut accepted: Vec<BoundingBox> = Vec::new();

        for candidate in candidates {
            if candidate.height < geometry.min_column_height {
                debug!(?candidate, "Candidate too short, skipped");
                continue;
            }
            if is_width_valid(candidate.width, image_width, geometry) {
                if is_first_column_start(candidate.x, image_width) {
                    debug!(?candidate, "Candidate rejected as first column");
                    continue;
                }
                accepted.push(*candidate);
            } else if candidate.width > max_allowed_width(geometry, image_width) {
                let (x, width) = split_second_column(
                    candidate.x,
                    candidate.right(),
                    image_width,
                    &self.config.split,
                );
                if is_width_valid(width, image_width, geometry)
                    && !is_first_column_start(x, image_width)
                {
                    info!(
                        original_width = candidate.width,
                        split_x = x,
                        split_width = width,
                        "Wide region split into second column"
                    );
                    accepted.push(BoundingBox::new(x, candidate.y, width, candidate.height));
                }
            }
            // Too-narrow candidates are ignored; the fallback handles them
        }

        accepted
            .iter()
            .find(|bbox| (geometry.column_x_min..=geometry.column_x_max).contains(&bbox.x))
            .or_else(|| accepted.first())
            .copied()
    }
}

/// True if the path has a supported raster image extension.
fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
