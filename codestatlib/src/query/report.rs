//! Report: scan results sliced, flagged and aggregated for display.
//!
//! The data pipeline is:
//! 1. Records (`Vec<FileRecord>` from a scan)
//! 2. Report (sorted slices, warnings, per-package totals)
//! 3. Text or JSON output

use serde::Serialize;
use std::path::PathBuf;

use crate::data::stats::{aggregate_packages, average, FileRecord, PackageStats};

use super::options::ReportOptions;

/// A file shown in the longest or shortest table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    /// Path relative to the scan root
    pub path: PathBuf,
    /// Line count
    pub lines: u64,
    /// The file is also in the matching warning list
    pub flagged: bool,
}

/// Everything the reporter prints, computed once per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Longest files, non-increasing by lines
    pub longest: Vec<ReportRow>,
    /// Shortest files, non-decreasing by lines
    pub shortest: Vec<ReportRow>,
    /// Longest files at or above the long threshold
    pub long_warnings: Vec<FileRecord>,
    /// Shortest files at or below the short threshold that are not exempt
    pub short_warnings: Vec<FileRecord>,
    /// Per-package totals over every scanned file, by descending lines
    pub packages: Vec<PackageStats>,
    /// Number of scanned files
    pub total_files: usize,
    /// Lines across all scanned files
    pub total_lines: u64,
    /// `total_lines / total_files`, 0 when nothing was scanned
    pub average_lines: u64,
    /// Threshold used for long warnings
    pub long_threshold: u64,
    /// Threshold used for short warnings
    pub short_threshold: u64,
}

/// Build a report from scanned records.
///
/// Sorting is stable, so files with equal line counts keep scan order in
/// both slices. Warnings are only raised for files that made it into the
/// displayed slices; totals and package stats cover every record.
///
/// # Example
///
/// ```rust
/// use codestatlib::{build_report, FileRecord, ReportOptions};
///
/// let records = vec![
///     FileRecord::new("a.py", 5),
///     FileRecord::new("b.ts", 1500),
/// ];
/// let report = build_report(&records, &ReportOptions::new().top(2));
///
/// assert_eq!(report.longest[0].path, std::path::Path::new("b.ts"));
/// assert_eq!(report.long_warnings.len(), 1);
/// assert_eq!(report.average_lines, 752);
/// ```
pub fn build_report(records: &[FileRecord], options: &ReportOptions) -> Report {
    let mut descending: Vec<&FileRecord> = records.iter().collect();
    descending.sort_by(|a, b| b.lines.cmp(&a.lines));

    let mut ascending: Vec<&FileRecord> = records.iter().collect();
    ascending.sort_by(|a, b| a.lines.cmp(&b.lines));

    let mut long_warnings = Vec::new();
    let longest: Vec<ReportRow> = descending
        .iter()
        .take(options.top_n)
        .map(|record| {
            let flagged = record.lines >= options.long_threshold;
            if flagged {
                long_warnings.push((*record).clone());
            }
            to_row(record, flagged)
        })
        .collect();

    let mut short_warnings = Vec::new();
    let shortest: Vec<ReportRow> = ascending
        .iter()
        .take(options.bottom_n)
        .map(|record| {
            let flagged = record.lines <= options.short_threshold
                && !options.exemptions.is_exempt(record.file_name());
            if flagged {
                short_warnings.push((*record).clone());
            }
            to_row(record, flagged)
        })
        .collect();

    let total_files = records.len();
    let total_lines: u64 = records.iter().map(|r| r.lines).sum();

    Report {
        longest,
        shortest,
        long_warnings,
        short_warnings,
        packages: aggregate_packages(records, &options.packages),
        total_files,
        total_lines,
        average_lines: average(total_lines, total_files),
        long_threshold: options.long_threshold,
        short_threshold: options.short_threshold,
    }
}

fn to_row(record: &FileRecord, flagged: bool) -> ReportRow {
    ReportRow {
        path: record.path.clone(),
        lines: record.lines,
        flagged,
    }
}
