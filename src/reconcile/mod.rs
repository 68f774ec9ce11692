//! Reconciliation of images against references
//!
//! This module computes which images are never referenced and
//! drives the full scan from inventory to report.

pub mod reconciler;
pub mod sweep;

// Re-export commonly used items
pub use reconciler::{UsageReport, reconcile};
pub use sweep::{SweepOutcome, sweep};
