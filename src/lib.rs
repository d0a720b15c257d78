//! # Hebrew Columns
//!
//! Locates and crops the central Hebrew text column from scanned manuscript
//! page images, preserving the verse enumeration at the page top, as a
//! pre-processing stage for downstream OCR. Detection is a deterministic,
//! inspectable rule pipeline: binarization, dense-region search, geometric
//! validation with conservative repair, and a dimension-only fallback when
//! detection fails.

pub mod config;
pub mod detection;
pub mod errors;
pub mod extractor;
pub mod geometry;

// Re-export types for easier access
pub use config::ExtractionConfig;
pub use errors::{ExtractError, ExtractResult};
pub use extractor::{BatchSummary, ColumnExtractor};
pub use geometry::{BoundingBox, DetectedColumn, Provenance};
