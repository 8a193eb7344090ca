//! Plain-text rendering of a [`Report`].
//!
//! Layout, top to bottom: longest files, shortest files, summary totals,
//! per-package breakdown, long warnings, short warnings. Flagged rows carry a
//! trailing warning marker.

use std::fmt::Write;

use crate::query::report::{Report, ReportRow};

const TABLE_RULE_WIDTH: usize = 60;
const PACKAGE_RULE_WIDTH: usize = 45;
const WARNING_MARKER: &str = " ⚠️";

/// Render a report as text.
///
/// # Example
///
/// ```rust
/// use codestatlib::{build_report, render, FileRecord, ReportOptions};
///
/// let records = vec![FileRecord::new("src/big.ts", 1500)];
/// let text = render(&build_report(&records, &ReportOptions::new()));
///
/// assert!(text.contains("Total lines: 1,500"));
/// assert!(text.contains("src/big.ts ⚠️"));
/// ```
pub fn render(report: &Report) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_report(&mut out, report);
    out
}

fn write_report(out: &mut String, report: &Report) -> std::fmt::Result {
    writeln!(out, "📊 Top {} longest code files:\n", report.longest.len())?;
    write_file_table(out, &report.longest)?;

    writeln!(
        out,
        "\n📉 Bottom {} shortest code files:\n",
        report.shortest.len()
    )?;
    write_file_table(out, &report.shortest)?;

    writeln!(out, "{}", "-".repeat(TABLE_RULE_WIDTH))?;
    writeln!(out, "\n📈 Summary:")?;
    writeln!(out, "   Total code files: {}", thousands(report.total_files as u64))?;
    writeln!(out, "   Total lines: {}", thousands(report.total_lines))?;
    writeln!(out, "   Average lines/file: {}", thousands(report.average_lines))?;

    writeln!(out, "\n📦 Per-package breakdown:\n")?;
    writeln!(out, "{:<15} {:>8} {:>10} {:>8}", "Package", "Files", "Lines", "Avg")?;
    writeln!(out, "{}", "-".repeat(PACKAGE_RULE_WIDTH))?;
    for pkg in &report.packages {
        writeln!(
            out,
            "{:<15} {:>8} {:>10} {:>8}",
            pkg.name,
            thousands(pkg.files as u64),
            thousands(pkg.lines),
            thousands(pkg.average())
        )?;
    }

    if report.long_warnings.is_empty() {
        writeln!(out, "\n✅ No files exceed {} lines", report.long_threshold)?;
    } else {
        writeln!(
            out,
            "\n⚠️  Warning: {} file(s) exceed {} lines (consider refactoring):",
            report.long_warnings.len(),
            report.long_threshold
        )?;
        for record in &report.long_warnings {
            writeln!(
                out,
                "   - {} ({} lines)",
                record.path.display(),
                thousands(record.lines)
            )?;
        }
    }

    if report.short_warnings.is_empty() {
        writeln!(
            out,
            "\n✅ No files are {} lines or less",
            report.short_threshold
        )?;
    } else {
        writeln!(
            out,
            "\n⚠️  Warning: {} file(s) are {} lines or less (check if needed):",
            report.short_warnings.len(),
            report.short_threshold
        )?;
        for record in &report.short_warnings {
            writeln!(out, "   - {} ({} lines)", record.path.display(), record.lines)?;
        }
    }

    Ok(())
}

fn write_file_table(out: &mut String, rows: &[ReportRow]) -> std::fmt::Result {
    writeln!(out, "{:>8}  File", "Lines")?;
    writeln!(out, "{}", "-".repeat(TABLE_RULE_WIDTH))?;
    for row in rows {
        let marker = if row.flagged { WARNING_MARKER } else { "" };
        writeln!(out, "{:>8}  {}{}", row.lines, row.path.display(), marker)?;
    }
    Ok(())
}

/// Format a number with `,` between groups of three digits.
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
