//! Data collection: count lines and describe what was found.
//!
//! This module handles the second stage of the pipeline. It provides:
//!
//! - **Counting**: byte-level line counting (`count_lines`, `count_file`)
//! - **Records**: `FileRecord` and the per-package `PackageStats`
//! - **Packages**: `PackageSet` and `classify_package`

pub mod counter;
pub mod stats;

pub use counter::{count_file, count_file_or_zero, count_lines};
pub use stats::{
    aggregate_packages, average, classify_package, FileRecord, PackageSet, PackageStats,
    DEFAULT_PACKAGES, ROOT_PACKAGE,
};
