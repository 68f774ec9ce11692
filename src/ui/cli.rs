// Command-line interface definitions and parsing for imgsweep

use crate::config::CliConfig;
use crate::core::constants::output_formats;
use clap::Parser;
use std::path::PathBuf;

/// Report images in a static site that no page or stylesheet references.
///
/// With no options, scans the fixed page list and `css/custom.css` in the
/// current directory against `images/`. Nothing is ever deleted.
///
/// If the site root holds a `.imgsweep.toml`, its settings are applied
/// before the options given here. Pass --no-config to ignore it.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    // Site Layout
    /// Site root that all other paths are relative to (default: current directory)
    #[arg(long, value_name = "DIR", help_heading = "Site Layout")]
    pub root: Option<PathBuf>,

    /// Directory holding the images (default: images)
    #[arg(long, value_name = "DIR", help_heading = "Site Layout")]
    pub images_dir: Option<String>,

    /// Path segment references start with (default: last component of the image directory)
    #[arg(long, value_name = "PREFIX", help_heading = "Site Layout")]
    pub reference_prefix: Option<String>,

    /// Page to scan; repeat to scan several (replaces the default page list)
    #[arg(long = "html", value_name = "FILE", help_heading = "Site Layout")]
    pub html: Vec<String>,

    /// Stylesheet to scan; repeat to scan several (replaces css/custom.css)
    #[arg(long = "stylesheet", value_name = "FILE", help_heading = "Site Layout")]
    pub stylesheet: Vec<String>,

    // Output & Verbosity
    /// Output format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    /// Suppress log output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    // Configuration
    /// Use specific config file instead of .imgsweep.toml in the site root
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files, including .imgsweep.toml in the site root
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

// Repeatable flags replace a list only when given at least once
fn non_empty(files: &[String]) -> Option<Vec<String>> {
    if files.is_empty() {
        None
    } else {
        Some(files.to_vec())
    }
}

/// Convert parsed CLI arguments into a CliConfig
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        root: cli.root.clone(),
        images_dir: cli.images_dir.clone(),
        reference_prefix: cli.reference_prefix.clone(),
        html_files: non_empty(&cli.html),
        stylesheets: non_empty(&cli.stylesheet),
        output_format: cli.format.clone(),
        quiet: cli.quiet,
        verbose: cli.verbose,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
