//! Diagnostics
//!
//! This module handles structured logging for the application.
//! Log output goes to stderr so stdout carries only the report.

pub mod logging;
