//! # codestatlib
//!
//! Line-count statistics for a source tree: the longest and shortest code
//! files, per-package totals, and warnings for files that are suspiciously
//! long or short.
//!
//! ## Overview
//!
//! The library is a four-stage pipeline:
//!
//! - **source**: walk the tree with a `ScanConfig` (extension allow-list,
//!   excluded directory names) and produce `FileRecord`s
//! - **data**: line counting and package classification
//! - **query**: `build_report` sorts, slices, flags and aggregates
//! - **output**: `render` produces the text report, `to_json` the JSON one
//!
//! Every configuration set is an explicit value, so the whole pipeline can
//! be driven with arbitrary inputs. Scanning never fails on individual
//! files: an unreadable file is counted as 0 lines.
//!
//! ## Example
//!
//! ```rust
//! use codestatlib::{build_report, render, scan, ReportOptions, ScanConfig};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::create_dir(dir.path().join("src")).unwrap();
//! fs::write(dir.path().join("src/index.ts"), "export * from './app';\n").unwrap();
//! fs::write(dir.path().join("src/app.ts"), "const a = 1;\n".repeat(20)).unwrap();
//!
//! let records = scan(dir.path(), &ScanConfig::default());
//! let report = build_report(&records, &ReportOptions::new().short_threshold(5));
//!
//! assert_eq!(report.total_files, 2);
//! assert_eq!(report.total_lines, 21);
//! // index.ts is a barrel file, exempt from short warnings
//! assert!(report.short_warnings.is_empty());
//!
//! let text = render(&report);
//! assert!(text.contains("src/app.ts"));
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod query;
pub mod source;

pub use data::{
    classify_package, count_file, count_lines, FileRecord, PackageSet, PackageStats,
    DEFAULT_PACKAGES, ROOT_PACKAGE,
};
pub use error::CodestatError;
pub use output::{render, to_json};
pub use query::{build_report, Report, ReportOptions, ReportRow, ShortExemptions};
pub use source::{scan, ScanConfig, DEFAULT_EXCLUDED_DIRS, DEFAULT_EXTENSIONS};

/// Result type for codestatlib operations
pub type Result<T> = std::result::Result<T, CodestatError>;
