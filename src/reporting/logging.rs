use crate::config::Config;
use crate::core::types::{SkipReason, SourceScan};
use crate::reconcile::reconciler::UsageReport;
use log::{Level, LevelFilter, debug, info, log, warn};
use std::path::Path;

/// Level forced by the command line, if any. Without one, `RUST_LOG`
/// decides and warnings are shown.
pub fn level_override(verbose: bool, quiet: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if verbose {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn).parse_default_env();
    if let Some(level) = level_override(verbose, quiet) {
        builder.filter_level(level);
    }

    builder
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {:?}", log::max_level());
}

/// Log configuration information
pub fn log_config_info(config: &Config, root: &Path) {
    let sources = config.sources();
    info!(
        "Configuration: root={}, images_dir={}, reference_prefix={}, format={}",
        root.display(),
        config.images_dir(),
        config.reference_prefix(),
        config.output_format()
    );
    info!("Scanning {} source file(s)", sources.len());
    for (i, source) in sources.iter().enumerate() {
        debug!("  {}. {} ({})", i + 1, source.path().display(), source.kind());
    }
}

/// Log image inventory size
pub fn log_inventory(images_dir: &str, count: usize) {
    info!("Found {count} file(s) in '{images_dir}'");
}

/// Level and message for one scanned source file
pub fn scan_record(scan: &SourceScan) -> (Level, String) {
    match scan.skipped {
        None => (
            Level::Debug,
            format!(
                "Scanned {} ({}): {} raw reference(s)",
                scan.path, scan.kind, scan.captures
            ),
        ),
        Some(SkipReason::Missing) => (
            Level::Debug,
            format!("Skipped {} ({}): not found", scan.path, scan.kind),
        ),
        Some(reason) => (
            Level::Warn,
            format!("Skipped {} ({}): {reason}", scan.path, scan.kind),
        ),
    }
}

/// Log the outcome of scanning one source file
pub fn log_source_scan(scan: &SourceScan) {
    let (level, message) = scan_record(scan);
    log!(level, "{message}");
}

/// Log how many raw captures collapsed into the used set
pub fn log_normalization(raw_count: usize, used_count: usize) {
    info!("Normalized {raw_count} raw reference(s) into {used_count} unique reference(s)");
}

/// Log reconciliation summary
pub fn log_reconcile_summary(report: &UsageReport) {
    if report.all_used() {
        info!("✅ All {} image(s) are referenced", report.total_count());
    } else {
        info!(
            "{}/{} image(s) are not referenced",
            report.unused_count(),
            report.total_count()
        );
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}
