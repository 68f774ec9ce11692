//! Image and reference discovery
//!
//! This module lists the image directory, pulls candidate image
//! references out of pages and stylesheets, and normalizes them.

pub mod extractor;
pub mod inventory;
pub mod normalizer;

// Re-export commonly used items
pub use extractor::{Extraction, Extractor, ReferenceExtractor, ReferencePatterns};
pub use inventory::collect_inventory;
pub use normalizer::{normalize, normalize_all};
