use serde::Serialize;
use std::path::Path;

use crate::config::Config;
use crate::core::error::Result;
use crate::core::types::SourceScan;
use crate::discovery::{
    Extractor, ReferenceExtractor, ReferencePatterns, collect_inventory, normalize_all,
};
use crate::reconcile::reconciler::{UsageReport, reconcile};
use crate::reporting::logging;

/// Everything a report needs from one run.
#[derive(Debug, Clone, Serialize)]
pub struct SweepOutcome {
    /// Image directory as configured, used as the prefix of unused paths
    pub images_dir: String,
    pub report: UsageReport,
    pub scans: Vec<SourceScan>,
}

impl SweepOutcome {
    pub fn scanned(&self) -> impl Iterator<Item = &SourceScan> {
        self.scans.iter().filter(|scan| !scan.is_skipped())
    }

    pub fn skipped(&self) -> impl Iterator<Item = &SourceScan> {
        self.scans.iter().filter(|scan| scan.is_skipped())
    }
}

/// Run the whole pipeline against the site at `root`.
///
/// The inventory is collected first, so a missing image directory fails
/// before any source is read. Nothing on disk is modified.
pub fn sweep(root: &Path, config: &Config) -> Result<SweepOutcome> {
    let images_dir = config.images_dir();
    let inventory = collect_inventory(&root.join(images_dir))?;
    logging::log_inventory(images_dir, inventory.len());

    let patterns = ReferencePatterns::for_prefix(config.reference_prefix())?;
    let sources = config.sources();
    let extraction = Extractor::new(root, patterns).extract_references(&sources)?;
    for scan in &extraction.scans {
        logging::log_source_scan(scan);
    }

    let used = normalize_all(&extraction.raw_references);
    logging::log_normalization(extraction.raw_references.len(), used.len());

    let report = reconcile(inventory, used);
    logging::log_reconcile_summary(&report);

    Ok(SweepOutcome {
        images_dir: images_dir.to_string(),
        report,
        scans: extraction.scans,
    })
}
