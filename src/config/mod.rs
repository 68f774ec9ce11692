//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::{defaults, output_formats};
use crate::core::error::{ImgSweepError, Result};
use crate::core::types::SourceFile;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the images, relative to the site root
    pub images_dir: Option<String>,

    /// Path segment that marks a reference into the image directory
    /// (default: last component of `images_dir`)
    pub reference_prefix: Option<String>,

    /// Pages to scan, relative to the site root
    pub html_files: Option<Vec<String>>,

    /// Stylesheets to scan, relative to the site root
    pub stylesheets: Option<Vec<String>>,

    /// Output format (text, json, minimal)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            images_dir: Some(defaults::IMAGES_DIR.to_string()),
            reference_prefix: None,
            html_files: Some(to_strings(&defaults::HTML_FILES)),
            stylesheets: Some(to_strings(&defaults::STYLESHEETS)),
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ImgSweepError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            ImgSweepError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load `.imgsweep.toml` from the site root if there is one, else defaults.
    ///
    /// A config file that exists but does not parse is an error.
    pub fn load_from_root<P: AsRef<Path>>(root: P) -> Result<Self> {
        let path = root.as_ref().join(defaults::CONFIG_FILE);
        if path.is_file() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref images_dir) = cli_config.images_dir {
            self.images_dir = Some(images_dir.clone());
        }
        if let Some(ref prefix) = cli_config.reference_prefix {
            self.reference_prefix = Some(prefix.clone());
        }
        if let Some(ref html_files) = cli_config.html_files {
            self.html_files = Some(html_files.clone());
        }
        if let Some(ref stylesheets) = cli_config.stylesheets {
            self.stylesheets = Some(stylesheets.clone());
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    pub fn images_dir(&self) -> &str {
        self.images_dir.as_deref().unwrap_or(defaults::IMAGES_DIR)
    }

    /// Prefix that references into the image directory start with.
    ///
    /// Pages of a site served with `images_dir = "static/img"` refer to
    /// `img/logo.png`, so the last component is used unless one is configured.
    pub fn reference_prefix(&self) -> &str {
        if let Some(ref prefix) = self.reference_prefix {
            return prefix.trim_matches('/');
        }
        let images_dir = self.images_dir();
        Path::new(images_dir)
            .file_name()
            .and_then(OsStr::to_str)
            .unwrap_or(images_dir)
    }

    pub fn output_format(&self) -> &str {
        self.output_format
            .as_deref()
            .unwrap_or(output_formats::DEFAULT)
    }

    /// Source files in scan order: pages first, then stylesheets
    pub fn sources(&self) -> Vec<SourceFile> {
        let html_files = match self.html_files {
            Some(ref files) => files.clone(),
            None => to_strings(&defaults::HTML_FILES),
        };
        let stylesheets = match self.stylesheets {
            Some(ref files) => files.clone(),
            None => to_strings(&defaults::STYLESHEETS),
        };

        html_files
            .into_iter()
            .map(SourceFile::html)
            .chain(stylesheets.into_iter().map(SourceFile::stylesheet))
            .collect()
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(ref dir) = self.images_dir
            && dir.trim().is_empty()
        {
            return Err(ImgSweepError::Config(
                "images_dir cannot be empty. Expected a directory path.".to_string(),
            ));
        }

        if let Some(ref prefix) = self.reference_prefix
            && prefix.trim().trim_matches('/').is_empty()
        {
            return Err(ImgSweepError::Config(
                "reference_prefix cannot be empty. Expected a path segment such as 'images'."
                    .to_string(),
            ));
        }

        let file_lists = [("html_files", &self.html_files), ("stylesheets", &self.stylesheets)];
        for (key, files) in file_lists {
            if let Some(files) = files
                && files.iter().any(|f| f.trim().is_empty())
            {
                return Err(ImgSweepError::Config(format!(
                    "{key} contains an empty file name."
                )));
            }
        }

        if let Some(ref format) = self.output_format
            && !output_formats::ALL.contains(&format.as_str())
        {
            return Err(ImgSweepError::Config(format!(
                "Invalid output format '{format}'. Expected one of: {}.",
                output_formats::ALL.join(", ")
            )));
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    pub root: Option<PathBuf>,              // --root
    pub images_dir: Option<String>,         // --images-dir
    pub reference_prefix: Option<String>,   // --reference-prefix
    pub html_files: Option<Vec<String>>,    // --html
    pub stylesheets: Option<Vec<String>>,   // --stylesheet
    pub output_format: Option<String>,      // --format
    pub quiet: bool,                        // --quiet
    pub verbose: bool,                      // --verbose
    pub config_file: Option<String>,        // --config
    pub no_config: bool,                    // --no-config
}

impl CliConfig {
    pub fn root(&self) -> &Path {
        self.root.as_deref().unwrap_or_else(|| Path::new("."))
    }
}
