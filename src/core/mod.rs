//! Core types and foundational components
//!
//! This module contains the fundamental data types, error handling,
//! and constants used throughout the application.

pub mod constants;
pub mod error;
pub mod types;

pub use error::{ImgSweepError, Result};
pub use types::{SkipReason, SourceFile, SourceKind, SourceScan};
