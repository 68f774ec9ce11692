//! imgsweep: find images in a static site that nothing references.
//!
//! The scan is a single sequential pass: list the image directory, pull
//! image references out of pages and stylesheets with regular
//! expressions, normalize them, and report the difference. Nothing on disk
//! is ever modified.

pub mod config;
pub mod core;
pub mod discovery;
pub mod reconcile;
pub mod reporting;
pub mod ui;

// Re-export commonly used items for convenience
pub use crate::core::{ImgSweepError, Result, SourceFile, SourceKind};
pub use reconcile::{SweepOutcome, UsageReport, sweep};
