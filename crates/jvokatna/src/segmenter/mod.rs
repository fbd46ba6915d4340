//! segmenter module
pub mod lujvo_segmenter;

/// Re-export
pub use lujvo_segmenter::{GISMU_LEN, MIN_LUJVO_LEN, segment};
