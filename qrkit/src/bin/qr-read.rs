//! qr-read: decode QR codes from an image file.
//!
//! ```bash
//! qr-read example.png
//! qr-read example.png --json --all
//! ```

use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use console::style;
use qrkit::{decode_file, DecodedSymbol};
use tracing_subscriber::EnvFilter;

fn build_command() -> Command {
    Command::new("qr-read")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Read/decode QR codes from images")
        .arg(
            Arg::new("image")
                .required(true)
                .help("Path to image file containing QR code"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Output as JSON"),
        )
        .arg(
            Arg::new("all")
                .long("all")
                .action(ArgAction::SetTrue)
                .help("Show all QR codes found (not just first)"),
        )
}

/// Format decoded symbols for stdout
fn format_symbols(symbols: &[DecodedSymbol], json: bool, all: bool) -> anyhow::Result<String> {
    let Some(first) = symbols.first() else {
        return Ok(String::new());
    };

    match (json, all) {
        (true, true) => Ok(serde_json::to_string_pretty(symbols)?),
        (true, false) => Ok(serde_json::to_string_pretty(first)?),
        (false, true) => Ok(symbols
            .iter()
            .enumerate()
            .map(|(i, s)| format!("[{}] {}", i + 1, s.data))
            .collect::<Vec<_>>()
            .join("\n")),
        (false, false) => Ok(first.data.clone()),
    }
}

/// Exit code after printing: found symbols succeed, nothing found fails
fn run(matches: &ArgMatches) -> anyhow::Result<ExitCode> {
    let image = matches
        .get_one::<String>("image")
        .map(|s| s.as_str())
        .unwrap_or_default();

    let symbols = decode_file(image)?;
    if symbols.is_empty() {
        println!("No QR code found in image");
        return Ok(ExitCode::FAILURE);
    }

    println!(
        "{}",
        format_symbols(&symbols, matches.get_flag("json"), matches.get_flag("all"))?
    );
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(&matches) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", style("Error reading QR code:").red().bold());
            ExitCode::FAILURE
        }
    }
}
