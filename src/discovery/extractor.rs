use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::constants::patterns;
use crate::core::error::{ImgSweepError, Result};
use crate::core::types::{SkipReason, SourceFile, SourceKind, SourceScan};

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// Compiled pattern sets, keyed by reference prefix
static PATTERN_CACHE: Lazy<Mutex<HashMap<String, Arc<ReferencePatterns>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// The page and stylesheet patterns for one reference prefix.
///
/// A prefix of `img` matches `img/logo.png`, `"img/logo.png"`,
/// `'img/logo.png'` in pages and `url(../img/logo.png)` in stylesheets.
#[derive(Debug)]
pub struct ReferencePatterns {
    prefix: String,
    html: Vec<Regex>,
    css: Vec<Regex>,
}

impl ReferencePatterns {
    /// Compile the pattern set for `prefix`. The prefix is matched literally.
    pub fn new(prefix: &str) -> Result<Self> {
        let escaped = regex::escape(prefix);
        Ok(Self {
            prefix: prefix.to_string(),
            html: compile_patterns(&patterns::HTML, &escaped)?,
            css: compile_patterns(&patterns::CSS, &escaped)?,
        })
    }

    /// Shared pattern set for `prefix`, compiled on first use.
    pub fn for_prefix(prefix: &str) -> Result<Arc<Self>> {
        let mut cache = PATTERN_CACHE
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(compiled) = cache.get(prefix) {
            return Ok(Arc::clone(compiled));
        }

        let compiled = Arc::new(Self::new(prefix)?);
        cache.insert(prefix.to_string(), Arc::clone(&compiled));
        Ok(compiled)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn for_kind(&self, kind: SourceKind) -> &[Regex] {
        match kind {
            SourceKind::Html => &self.html,
            SourceKind::Stylesheet => &self.css,
        }
    }

    /// Apply every pattern for `kind` to the whole text and return the
    /// captures, pattern by pattern, in match order. Duplicates are kept.
    pub fn extract(&self, kind: SourceKind, text: &str) -> Vec<String> {
        self.for_kind(kind)
            .iter()
            .flat_map(|re| re.captures_iter(text))
            .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}

fn compile_patterns(templates: &[&str], escaped_prefix: &str) -> Result<Vec<Regex>> {
    templates
        .iter()
        .map(|template| {
            let pattern = template.replace(patterns::PREFIX_PLACEHOLDER, escaped_prefix);
            Regex::new(&pattern).map_err(ImgSweepError::from)
        })
        .collect()
}

/// Raw references gathered from a set of source files.
#[derive(Debug, Default, Clone)]
pub struct Extraction {
    /// Every capture from every pattern, before normalization
    pub raw_references: Vec<String>,
    /// One entry per source file, in scan order
    pub scans: Vec<SourceScan>,
}

impl Extraction {
    pub fn scanned(&self) -> impl Iterator<Item = &SourceScan> {
        self.scans.iter().filter(|scan| !scan.is_skipped())
    }

    pub fn skipped(&self) -> impl Iterator<Item = &SourceScan> {
        self.scans.iter().filter(|scan| scan.is_skipped())
    }
}

pub trait ReferenceExtractor {
    fn extract_references(&self, sources: &[SourceFile]) -> Result<Extraction>;
}

/// Reads source files relative to a site root and applies the reference patterns.
#[derive(Debug, Clone)]
pub struct Extractor {
    root: PathBuf,
    patterns: Arc<ReferencePatterns>,
}

impl ReferenceExtractor for Extractor {
    fn extract_references(&self, sources: &[SourceFile]) -> Result<Extraction> {
        let mut extraction = Extraction::default();

        // One file at a time, each released before the next is opened
        for source in sources {
            let display_path = source.path().display().to_string();
            let scan = match self.read_source(source.path())? {
                Ok(text) => {
                    let captures = self.patterns.extract(source.kind(), &text);
                    let scan = SourceScan {
                        path: display_path,
                        kind: source.kind(),
                        captures: captures.len(),
                        skipped: None,
                    };
                    extraction.raw_references.extend(captures);
                    scan
                }
                Err(reason) => SourceScan {
                    path: display_path,
                    kind: source.kind(),
                    captures: 0,
                    skipped: Some(reason),
                },
            };
            extraction.scans.push(scan);
        }

        Ok(extraction)
    }
}

impl Extractor {
    pub fn new<P: Into<PathBuf>>(root: P, patterns: Arc<ReferencePatterns>) -> Self {
        Self {
            root: root.into(),
            patterns,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn patterns(&self) -> &ReferencePatterns {
        &self.patterns
    }

    /// Read a source file as UTF-8.
    ///
    /// The outer error is fatal. The inner one says why the file is skipped.
    fn read_source(&self, relative: &Path) -> Result<std::result::Result<String, SkipReason>> {
        let path = self.root.join(relative);
        if !path.exists() {
            return Ok(Err(SkipReason::Missing));
        }

        let bytes = fs::read(&path).map_err(|source| ImgSweepError::SourceRead {
            path: path.clone(),
            source,
        })?;

        Ok(String::from_utf8(bytes).map_err(|_| SkipReason::NotUtf8))
    }
}
