//! # codestat
//!
//! Lists the longest and shortest code files in a project, with warnings for
//! files longer or shorter than a threshold and a per-package breakdown.
//!
//! ## Usage
//!
//! ```bash
//! # Scan the current directory with the defaults
//! codestat
//!
//! # Warn at 500 lines, show the 10 longest and 5 shortest files
//! codestat -t 500 -n 10 -b 5 -d ./my-project
//!
//! # Count only Rust files, skip target/, group by crates/ and bins/
//! codestat -e rs -x target -p crates -p bins
//!
//! # Machine-readable report
//! codestat --output json
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use codestatlib::{
    build_report, render, scan, to_json, PackageSet, ReportOptions, ScanConfig, ShortExemptions,
    DEFAULT_EXCLUDED_DIRS, DEFAULT_EXTENSIONS,
};
use console::{style, Term};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Build the clap Command structure
fn build_command() -> Command {
    let defaults = ReportOptions::default();

    Command::new("codestat")
        .version(env!("CARGO_PKG_VERSION"))
        .about("List the longest and shortest code files in a project")
        .arg(
            Arg::new("threshold")
                .short('t')
                .long("threshold")
                .value_parser(value_parser!(u64))
                .help(format!(
                    "Warn about files longer than this many lines [default: {}]",
                    defaults.long_threshold
                )),
        )
        .arg(
            Arg::new("min-threshold")
                .long("min-threshold")
                .value_parser(value_parser!(u64))
                .help(format!(
                    "Warn about files shorter than this many lines [default: {}]",
                    defaults.short_threshold
                )),
        )
        .arg(
            Arg::new("top")
                .short('n')
                .long("top")
                .value_parser(value_parser!(usize))
                .help(format!("Show top N longest files [default: {}]", defaults.top_n)),
        )
        .arg(
            Arg::new("bottom")
                .short('b')
                .long("bottom")
                .value_parser(value_parser!(usize))
                .help(format!("Show bottom N shortest files [default: {}]", defaults.bottom_n)),
        )
        .arg(
            Arg::new("directory")
                .short('d')
                .long("directory")
                .default_value(".")
                .help("Directory to scan"),
        )
        .arg(
            Arg::new("ext")
                .short('e')
                .long("ext")
                .action(ArgAction::Append)
                .help("Count files with this extension (replaces the default list, repeatable)"),
        )
        .arg(
            Arg::new("exclude-dir")
                .short('x')
                .long("exclude-dir")
                .action(ArgAction::Append)
                .help("Skip directories with this name (replaces the default list, repeatable)"),
        )
        .arg(
            Arg::new("package")
                .short('p')
                .long("package")
                .action(ArgAction::Append)
                .help("Top-level directory to report as a package (replaces the default list, repeatable)"),
        )
        .arg(
            Arg::new("exempt")
                .long("exempt")
                .action(ArgAction::Append)
                .help("File name never flagged as too short (replaces the default list, repeatable)"),
        )
        .arg(
            Arg::new("exempt-suffix")
                .long("exempt-suffix")
                .action(ArgAction::Append)
                .help("File name suffix never flagged as too short (replaces the default list, repeatable)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Log more detail to stderr (repeat for more)"),
        )
}

/// Collect a repeatable string argument, `None` when it was not given
fn values<'a>(matches: &'a ArgMatches, id: &str) -> Option<Vec<&'a str>> {
    matches
        .get_many::<String>(id)
        .map(|v| v.map(|s| s.as_str()).collect())
}

/// Build the scan config, replacing default sets with any given on the command line
fn build_scan_config(matches: &ArgMatches) -> anyhow::Result<ScanConfig> {
    let exts = values(matches, "ext").unwrap_or_else(|| DEFAULT_EXTENSIONS.to_vec());
    let dirs = values(matches, "exclude-dir").unwrap_or_else(|| DEFAULT_EXCLUDED_DIRS.to_vec());

    Ok(ScanConfig::new().extensions(&exts)?.exclude_dirs(&dirs)?)
}

/// Build report options from matches
fn build_report_options(matches: &ArgMatches) -> anyhow::Result<ReportOptions> {
    let mut exemptions = ShortExemptions::default();
    if let Some(names) = values(matches, "exempt") {
        exemptions.names = names.into_iter().map(String::from).collect();
    }
    if let Some(suffixes) = values(matches, "exempt-suffix") {
        exemptions.suffixes = suffixes.into_iter().map(String::from).collect();
    }

    let packages = match values(matches, "package") {
        Some(names) => PackageSet::new().packages(&names)?,
        None => PackageSet::default(),
    };

    // Unset flags keep the library defaults
    let mut options = ReportOptions::new().exemptions(exemptions).packages(packages);
    if let Some(&n) = matches.get_one::<usize>("top") {
        options = options.top(n);
    }
    if let Some(&n) = matches.get_one::<usize>("bottom") {
        options = options.bottom(n);
    }
    if let Some(&lines) = matches.get_one::<u64>("threshold") {
        options = options.long_threshold(lines);
    }
    if let Some(&lines) = matches.get_one::<u64>("min-threshold") {
        options = options.short_threshold(lines);
    }

    Ok(options)
}

/// Resolve the scan root to an absolute path, canonical when it exists
fn resolve_root(path: &str) -> anyhow::Result<PathBuf> {
    let path = Path::new(path);
    match std::fs::canonicalize(path) {
        Ok(resolved) => Ok(resolved),
        Err(_) if path.is_absolute() => Ok(path.to_path_buf()),
        Err(_) => {
            let cwd = std::env::current_dir().context("cannot read current directory")?;
            Ok(cwd.join(path))
        }
    }
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let directory = matches
        .get_one::<String>("directory")
        .map(|s| s.as_str())
        .unwrap_or(".");
    let root = resolve_root(directory)?;
    let config = build_scan_config(matches)?;
    let options = build_report_options(matches)?;
    debug!(root = %root.display(), ?config, "starting scan");

    let records = scan(&root, &config);
    let report = build_report(&records, &options);

    let term = Term::stdout();
    let json = matches
        .get_one::<String>("output")
        .is_some_and(|o| o == "json");

    if json {
        term.write_line(&to_json(&report)?)?;
    } else {
        term.write_line(&format!("\n📂 Scanning: {}\n", root.display()))?;
        term.write_line(&render(&report))?;
    }

    Ok(())
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_count("verbose"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", style("Error:").red().bold());
            ExitCode::FAILURE
        }
    }
}
