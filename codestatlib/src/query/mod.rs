//! Query processing: sort, slice, flag and aggregate scan results.
//!
//! This module handles the third stage of the pipeline. It provides:
//!
//! - **Options**: `ReportOptions` and the `ShortExemptions` predicate
//! - **Report**: the derived view that output formats consume
//!
//! ## Example
//!
//! ```rust,ignore
//! use codestatlib::query::{build_report, ReportOptions};
//!
//! let report = build_report(&records, &ReportOptions::new().top(10));
//! ```

pub mod options;
pub mod report;

pub use options::{ReportOptions, ShortExemptions, DEFAULT_EXEMPT_NAMES, DEFAULT_EXEMPT_SUFFIXES};
pub use report::{build_report, Report, ReportRow};
