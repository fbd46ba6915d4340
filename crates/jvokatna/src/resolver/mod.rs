//! resolver module
pub mod gismu_resolver;

/// Re-export
pub use gismu_resolver::resolve;
