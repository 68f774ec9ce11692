use std::fmt;
use std::path::PathBuf;

/// Error types for imgsweep operations
#[derive(Debug)]
pub enum ImgSweepError {
    /// The image directory could not be listed
    Inventory {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An existing source file could not be read
    SourceRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration error
    Config(String),

    /// A reference pattern failed to compile
    Regex(regex::Error),

    /// JSON serialization error
    Json(serde_json::Error),
}

impl fmt::Display for ImgSweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImgSweepError::Inventory { path, source } => write!(
                f,
                "Could not list image directory '{}': {source}",
                path.display()
            ),
            ImgSweepError::SourceRead { path, source } => {
                write!(f, "Could not read source file '{}': {source}", path.display())
            }
            ImgSweepError::Config(msg) => write!(f, "Configuration error: {msg}"),
            ImgSweepError::Regex(err) => write!(f, "Regex error: {err}"),
            ImgSweepError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl std::error::Error for ImgSweepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImgSweepError::Inventory { source, .. } => Some(source),
            ImgSweepError::SourceRead { source, .. } => Some(source),
            ImgSweepError::Regex(err) => Some(err),
            ImgSweepError::Json(err) => Some(err),
            ImgSweepError::Config(_) => None,
        }
    }
}

impl From<regex::Error> for ImgSweepError {
    fn from(err: regex::Error) -> Self {
        ImgSweepError::Regex(err)
    }
}

impl From<serde_json::Error> for ImgSweepError {
    fn from(err: serde_json::Error) -> Self {
        ImgSweepError::Json(err)
    }
}

/// Type alias for Results using ImgSweepError
pub type Result<T> = std::result::Result<T, ImgSweepError>;
