//! Source discovery: find and count the files to report on.
//!
//! This module handles the first stage of the pipeline. It provides:
//!
//! - **Scan configuration**: extension allow-list and excluded directories
//! - **Scanning**: a pruned directory walk producing `FileRecord`s
//!
//! ## Example
//!
//! ```rust,ignore
//! use codestatlib::source::{scan, ScanConfig};
//!
//! let config = ScanConfig::default().exclude_dir("generated")?;
//! let records = scan(".", &config);
//! ```

pub mod filter;

pub use filter::{scan, ScanConfig, DEFAULT_EXCLUDED_DIRS, DEFAULT_EXTENSIONS};
