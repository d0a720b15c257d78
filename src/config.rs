//! # Extraction Configuration
//!
//! This module consolidates every tuned constant of the column detection
//! pipeline into a single, structured configuration object. The numeric
//! values are calibrated against a specific scan corpus and are treated as
//! fixed contract values; keeping them in one injectable value (instead of
//! scattered literals) keeps the process-wide policy auditable and lets the
//! test suite substitute alternate profiles for synthetic fixtures.

use crate::errors::{ExtractError, ExtractResult};
use serde::{Deserialize, Serialize};

/// Expected geometry of the central Hebrew text column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeometryProfile {
    /// Minimum expected column width in pixels
    pub column_width_min: u32,
    /// Maximum expected column width in pixels
    pub column_width_max: u32,
    /// Detected regions shorter than this are suspect and skipped
    pub min_column_height: u32,
    /// Minimum expected left-edge x position of the column
    pub column_x_min: u32,
    /// Maximum expected left-edge x position of the column
    pub column_x_max: u32,
    /// Vertical window (from the page top) searched for a title block
    pub title_scan_height: u32,
    /// Minimum valid height for a detected title block
    pub title_min_height: u32,
    /// Maximum valid height for a detected title block
    pub title_max_height: u32,
    /// Global intensity threshold: samples darker than this are ink
    pub binarize_threshold: u8,
    /// L1 dilation radius used to fuse glyphs into dense blocks
    pub merge_radius: u8,
}

impl Default for GeometryProfile {
    fn default() -> Self {
        Self {
            column_width_min: 800,
            column_width_max: 1200,
            min_column_height: 2000,
            column_x_min: 100,
            column_x_max: 300,
            title_scan_height: 400,
            title_min_height: 25,
            title_max_height: 220,
            binarize_threshold: 128,
            merge_radius: 8,
        }
    }
}

impl GeometryProfile {
    /// Validate geometry profile consistency
    pub fn validate(&self) -> ExtractResult<()> {
        if self.column_width_min == 0 || self.column_width_min >= self.column_width_max {
            return Err(ExtractError::Config(format!(
                "Column width range [{}, {}] is invalid",
                self.column_width_min, self.column_width_max
            )));
        }
        if self.column_x_min >= self.column_x_max {
            return Err(ExtractError::Config(format!(
                "Column x range [{}, {}] is invalid",
                self.column_x_min, self.column_x_max
            )));
        }
        if self.min_column_height == 0 {
            return Err(ExtractError::Config(
                "Minimum column height cannot be 0".to_string(),
            ));
        }
        if self.title_min_height >= self.title_max_height {
            return Err(ExtractError::Config(format!(
                "Title height range [{}, {}] is invalid",
                self.title_min_height, self.title_max_height
            )));
        }
        if self.title_scan_height < self.title_max_height {
            return Err(ExtractError::Config(
                "Title scan window is smaller than the maximum title height".to_string(),
            ));
        }
        Ok(())
    }
}

/// Position-only column estimate used when no detected candidate survives
/// validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackConfig {
    /// Left edge of the column as a fraction of page width (empirically ~28%)
    pub x_fraction: f32,
    /// Column width as a fraction of page width
    pub width_fraction: f32,
    /// Lower clamp for the estimated width in pixels
    pub min_width: u32,
    /// Upper clamp for the estimated width in pixels
    pub max_width: u32,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            x_fraction: 0.28,
            width_fraction: 0.4,
            min_width: 700,
            max_width: 1100,
        }
    }
}

impl FallbackConfig {
    /// Validate fallback estimator settings
    pub fn validate(&self) -> ExtractResult<()> {
        if !(0.0..=1.0).contains(&self.x_fraction) || !(0.0..=1.0).contains(&self.width_fraction) {
            return Err(ExtractError::Config(
                "Fallback fractions must be between 0.0 and 1.0".to_string(),
            ));
        }
        if self.min_width == 0 || self.min_width > self.max_width {
            return Err(ExtractError::Config(format!(
                "Fallback width clamp [{}, {}] is invalid",
                self.min_width, self.max_width
            )));
        }
        Ok(())
    }
}

/// Vertical coverage policy for accepted boxes. The page-top enumeration must
/// never be cropped away, so every accepted box is re-anchored near the top
/// and forced to span most of the page height.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerticalCoverageConfig {
    /// Hard cap on the top margin in pixels
    pub top_margin_px: u32,
    /// Top margin as a fraction of page height (the smaller of the two wins)
    pub top_margin_fraction: f32,
    /// Bottom edge of the normalized box as a fraction of page height
    pub bottom_fraction: f32,
    /// Minimum vertical coverage as a fraction of page height
    pub min_coverage_fraction: f32,
}

impl Default for VerticalCoverageConfig {
    fn default() -> Self {
        Self {
            top_margin_px: 50,
            top_margin_fraction: 0.02,
            bottom_fraction: 0.93,
            min_coverage_fraction: 0.85,
        }
    }
}

impl VerticalCoverageConfig {
    /// Validate vertical coverage settings
    pub fn validate(&self) -> ExtractResult<()> {
        for (name, value) in [
            ("top_margin_fraction", self.top_margin_fraction),
            ("bottom_fraction", self.bottom_fraction),
            ("min_coverage_fraction", self.min_coverage_fraction),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ExtractError::Config(format!(
                    "{} must be between 0.0 and 1.0, got {}",
                    name, value
                )));
            }
        }
        if self.min_coverage_fraction >= self.bottom_fraction {
            return Err(ExtractError::Config(
                "Minimum coverage must be below the bottom fraction".to_string(),
            ));
        }
        Ok(())
    }
}

/// Split policy for a detected region wide enough to span both physical
/// columns of the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Regions starting left of this are assumed to absorb the first column
    pub near_left_limit: u32,
    /// The second column never starts left of this x position
    pub min_second_x: u32,
    /// Split position as a fraction of page width for near-left regions
    pub page_fraction: f32,
    /// Split position as a fraction of region width otherwise
    pub region_fraction: f32,
    /// Minimum acceptable width of the carved second column
    pub min_width: u32,
    /// Maximum acceptable width of the carved second column
    pub max_width: u32,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            near_left_limit: 100,
            min_second_x: 400,
            page_fraction: 0.25,
            region_fraction: 0.3,
            min_width: 800,
            max_width: 1100,
        }
    }
}

impl SplitConfig {
    /// Validate split settings
    pub fn validate(&self) -> ExtractResult<()> {
        if self.min_width == 0 || self.min_width > self.max_width {
            return Err(ExtractError::Config(format!(
                "Split width range [{}, {}] is invalid",
                self.min_width, self.max_width
            )));
        }
        if !(0.0..=1.0).contains(&self.page_fraction) || !(0.0..=1.0).contains(&self.region_fraction)
        {
            return Err(ExtractError::Config(
                "Split fractions must be between 0.0 and 1.0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Thresholds for the conservative right-edge repair. Expansion only fires
/// for narrow columns with strong pixel-density evidence that text continues
/// past the current boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRepairConfig {
    /// Columns at or above this width are never expanded
    pub narrow_column_limit: u32,
    /// Width of the strip inspected at the current right edge
    pub edge_strip_width: u32,
    /// Minimum ink density at the right edge to suspect cut text
    pub edge_density_floor: f32,
    /// Width of the strip inspected just beyond the right edge
    pub beyond_strip_width: u32,
    /// Minimum ink density beyond the edge to confirm cut text
    pub beyond_density_floor: f32,
    /// Step size of the outward density walk
    pub step_width: u32,
    /// Strip width sampled at each step of the walk
    pub scan_strip_width: u32,
    /// Density above which a walked strip still counts as text
    pub continuation_density: f32,
    /// Maximum distance the walk may extend past the current edge
    pub max_expand: u32,
    /// Hard cap on the repaired column width
    pub max_column_width: u32,
    /// Minimum width gain for an expansion to be applied
    pub min_gain: u32,
}

impl Default for EdgeRepairConfig {
    fn default() -> Self {
        Self {
            narrow_column_limit: 850,
            edge_strip_width: 40,
            edge_density_floor: 0.18,
            beyond_strip_width: 60,
            beyond_density_floor: 0.12,
            step_width: 20,
            scan_strip_width: 40,
            continuation_density: 0.08,
            max_expand: 200,
            max_column_width: 1100,
            min_gain: 40,
        }
    }
}

impl EdgeRepairConfig {
    /// Validate edge repair settings
    pub fn validate(&self) -> ExtractResult<()> {
        for (name, value) in [
            ("edge_density_floor", self.edge_density_floor),
            ("beyond_density_floor", self.beyond_density_floor),
            ("continuation_density", self.continuation_density),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ExtractError::Config(format!(
                    "{} must be between 0.0 and 1.0, got {}",
                    name, value
                )));
            }
        }
        if self.step_width == 0 {
            return Err(ExtractError::Config("Step width cannot be 0".to_string()));
        }
        if self.scan_strip_width == 0 || self.edge_strip_width == 0 {
            return Err(ExtractError::Config(
                "Strip widths cannot be 0".to_string(),
            ));
        }
        if self.max_expand < self.min_gain {
            return Err(ExtractError::Config(
                "Maximum expansion cannot be below the minimum gain".to_string(),
            ));
        }
        Ok(())
    }
}

/// Unified extraction configuration injected into the pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Expected column geometry
    pub geometry: GeometryProfile,
    /// Fallback estimator settings
    pub fallback: FallbackConfig,
    /// Vertical coverage policy
    pub vertical: VerticalCoverageConfig,
    /// Wide-region split policy
    pub split: SplitConfig,
    /// Right-edge repair thresholds
    pub edge_repair: EdgeRepairConfig,
}

impl ExtractionConfig {
    /// Validate all configuration sections
    pub fn validate(&self) -> ExtractResult<()> {
        self.geometry.validate()?;
        self.fallback.validate()?;
        self.vertical.validate()?;
        self.split.validate()?;
        self.edge_repair.validate()?;
        Ok(())
    }
}
