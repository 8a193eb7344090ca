//! qr-generate: write a QR-code PNG for a text or URL payload.
//!
//! ```bash
//! qr-generate "https://example.com" example.png --size 8 --border 2 --error H
//! ```

use std::path::Path;
use std::process::ExitCode;

use clap::{value_parser, Arg, ArgMatches, Command};
use console::style;
use qrkit::{encode_qr, save_image, EcLevel};
use tracing_subscriber::EnvFilter;

fn build_command() -> Command {
    Command::new("qr-generate")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate QR codes from text or URLs")
        .arg(
            Arg::new("data")
                .required(true)
                .help("Text or URL to encode in QR code"),
        )
        .arg(
            Arg::new("output")
                .required(true)
                .help("Output file path (PNG)"),
        )
        .arg(
            Arg::new("size")
                .long("size")
                .value_parser(value_parser!(u32).range(1..))
                .default_value("10")
                .help("Box size in pixels"),
        )
        .arg(
            Arg::new("border")
                .long("border")
                .value_parser(value_parser!(u32))
                .default_value("4")
                .help("Border size in boxes"),
        )
        .arg(
            Arg::new("error")
                .long("error")
                .value_parser(["L", "M", "Q", "H"])
                .ignore_case(true)
                .default_value("M")
                .help("Error correction level: L=7%, M=15%, Q=25%, H=30%"),
        )
}

fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let data = matches
        .get_one::<String>("data")
        .map(|s| s.as_str())
        .unwrap_or_default();
    let output = matches
        .get_one::<String>("output")
        .map(|s| s.as_str())
        .unwrap_or_default();
    let level: EcLevel = matches
        .get_one::<String>("error")
        .map(|s| s.parse::<EcLevel>())
        .transpose()?
        .unwrap_or_default();
    let box_size = *matches.get_one::<u32>("size").unwrap_or(&10);
    let border = *matches.get_one::<u32>("border").unwrap_or(&4);

    let img = encode_qr(data, level, box_size, border)?;
    save_image(&img, Path::new(output))?;

    Ok(output.to_string())
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
        Ok(output) => {
            println!("QR code saved to: {output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {e:#}", style("Error generating QR code:").red().bold());
            ExitCode::FAILURE
        }
    }
}
