use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Kind of source file, selecting which reference patterns apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Html,
    Stylesheet,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html => write!(f, "html"),
            Self::Stylesheet => write!(f, "stylesheet"),
        }
    }
}

/// A page or stylesheet that may reference images.
///
/// The file does not have to exist; absent sources contribute no references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    kind: SourceKind,
}

impl SourceFile {
    pub fn html<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            kind: SourceKind::Html,
        }
    }

    pub fn stylesheet<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            kind: SourceKind::Stylesheet,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> SourceKind {
        self.kind
    }
}

/// Why a source file contributed no references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Not present on disk
    Missing,
    /// Present but not valid UTF-8
    NotUtf8,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "missing"),
            Self::NotUtf8 => write!(f, "not valid UTF-8"),
        }
    }
}

/// Outcome of scanning one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceScan {
    pub path: String,
    pub kind: SourceKind,
    /// Raw captures found in the file, before normalization
    pub captures: usize,
    /// Set when the file was skipped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<SkipReason>,
}

impl SourceScan {
    pub fn is_skipped(&self) -> bool {
        self.skipped.is_some()
    }
}
