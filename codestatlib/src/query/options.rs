//! Input options for building a report.
//!
//! This module contains the configuration types that control how scan
//! results are sliced, flagged, and grouped.

use serde::{Deserialize, Serialize};

use crate::data::stats::PackageSet;

/// File names never flagged as too short by default.
pub const DEFAULT_EXEMPT_NAMES: &[&str] = &["index.js", "index.ts", "postinstall.js"];

/// File name suffixes never flagged as too short by default.
pub const DEFAULT_EXEMPT_SUFFIXES: &[&str] = &["-cli.ts"];

/// Files that are expected to be short, such as barrel exports, stubs and
/// thin CLI entry points.
///
/// A file is exempt when its name equals one of `names` or ends with one of
/// `suffixes`. Both comparisons are case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortExemptions {
    /// Exact file names
    pub names: Vec<String>,
    /// File name endings
    pub suffixes: Vec<String>,
}

impl Default for ShortExemptions {
    fn default() -> Self {
        Self {
            names: DEFAULT_EXEMPT_NAMES.iter().map(|s| s.to_string()).collect(),
            suffixes: DEFAULT_EXEMPT_SUFFIXES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ShortExemptions {
    /// No exemptions: every short file can be flagged.
    pub fn none() -> Self {
        Self {
            names: Vec::new(),
            suffixes: Vec::new(),
        }
    }

    /// Add an exact file name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Add a file name suffix.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffixes.push(suffix.into());
        self
    }

    /// Check whether a file name is expected to be short.
    ///
    /// ```rust
    /// use codestatlib::ShortExemptions;
    ///
    /// let exempt = ShortExemptions::default();
    /// assert!(exempt.is_exempt("index.ts"));
    /// assert!(exempt.is_exempt("deploy-cli.ts"));
    /// assert!(!exempt.is_exempt("weird.ts"));
    /// ```
    pub fn is_exempt(&self, filename: &str) -> bool {
        self.names.iter().any(|n| n == filename)
            || self.suffixes.iter().any(|s| filename.ends_with(s.as_str()))
    }
}

/// Options for [`build_report`](crate::build_report).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Number of longest files to show
    pub top_n: usize,
    /// Number of shortest files to show
    pub bottom_n: usize,
    /// Files in the top slice with at least this many lines are flagged
    pub long_threshold: u64,
    /// Files in the bottom slice with at most this many lines are flagged
    pub short_threshold: u64,
    /// Files never flagged as short
    pub exemptions: ShortExemptions,
    /// Known packages for the per-package breakdown
    pub packages: PackageSet,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top_n: 20,
            bottom_n: 10,
            long_threshold: 1000,
            short_threshold: 10,
            exemptions: ShortExemptions::default(),
            packages: PackageSet::default(),
        }
    }
}

impl ReportOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many of the longest files to show.
    pub fn top(mut self, n: usize) -> Self {
        self.top_n = n;
        self
    }

    /// Set how many of the shortest files to show.
    pub fn bottom(mut self, n: usize) -> Self {
        self.bottom_n = n;
        self
    }

    /// Set the long-file warning threshold.
    pub fn long_threshold(mut self, lines: u64) -> Self {
        self.long_threshold = lines;
        self
    }

    /// Set the short-file warning threshold.
    pub fn short_threshold(mut self, lines: u64) -> Self {
        self.short_threshold = lines;
        self
    }

    /// Set the short-file exemptions.
    pub fn exemptions(mut self, exemptions: ShortExemptions) -> Self {
        self.exemptions = exemptions;
        self
    }

    /// Set the known packages.
    pub fn packages(mut self, packages: PackageSet) -> Self {
        self.packages = packages;
        self
    }
}
