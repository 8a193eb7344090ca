//! Error types for codestatlib

use thiserror::Error;

/// Errors that can occur while configuring a scan or producing a report.
///
/// Scanning itself never fails on individual files; unreadable files are
/// counted as empty. These errors come from configuration and output.
#[derive(Error, Debug)]
pub enum CodestatError {
    /// An extension in the allow-list is empty or looks like a path
    #[error("invalid file extension '{0}'")]
    InvalidExtension(String),

    /// An excluded directory name is empty or contains a path separator
    #[error("invalid directory name '{0}': expected a single path component")]
    InvalidDirName(String),

    /// A package name is empty or contains a path separator
    #[error("invalid package name '{0}': expected a single path component")]
    InvalidPackageName(String),

    /// Failed to serialize a report
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}
