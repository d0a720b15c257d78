//! # Column Detection Module
//!
//! Geometric heuristics that decide, per page image, "this rectangle is the
//! text column". The module is organized into focused sub-modules:
//! - `candidates`: binarization, dense-region search and title-block scan
//! - `fallback`: dimension-only position estimate when detection fails
//! - `vertical`: vertical-range normalization preserving page-top content
//! - `splitting`: second-column extraction from over-wide regions
//! - `validation`: width/position validation and right-edge cut repair

pub mod candidates;
pub mod fallback;
pub mod splitting;
pub mod validation;
pub mod vertical;

// Re-export main functions from sub-modules
pub use candidates::{binarize, find_candidate_regions, find_title_block};
pub use fallback::estimate_fallback;
pub use splitting::split_second_column;
pub use validation::{
    is_first_column_start, is_width_valid, max_allowed_width, min_allowed_width, repair_edge_cut,
    strip_ink_density,
};
pub use vertical::normalize_vertical;
