//! Integration tests for the qr-generate and qr-read binaries

use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

fn run(bin: &str, args: &[&str]) -> (String, String, Option<i32>) {
    let output = Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code(),
    )
}

fn generate(args: &[&str]) -> (String, String, Option<i32>) {
    run(env!("CARGO_BIN_EXE_qr-generate"), args)
}

fn read(args: &[&str]) -> (String, String, Option<i32>) {
    run(env!("CARGO_BIN_EXE_qr-read"), args)
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_generate_then_read() {
    let temp = tempdir().unwrap();
    let png = temp.path().join("site.png");

    let (stdout, _, code) = generate(&["https://example.com", path_str(&png)]);
    assert_eq!(code, Some(0));
    assert!(stdout.contains("QR code saved to:"));
    assert!(png.exists());

    let (stdout, _, code) = read(&[path_str(&png)]);
    assert_eq!(code, Some(0));
    assert_eq!(stdout.trim_end(), "https://example.com");
}

#[test]
fn test_generate_options() {
    let temp = tempdir().unwrap();
    let png = temp.path().join("small.png");

    let (_, _, code) = generate(&[
        "hello",
        path_str(&png),
        "--size",
        "4",
        "--border",
        "2",
        "--error",
        "h",
    ]);
    assert_eq!(code, Some(0));

    let img = qrkit::open_image(&png).unwrap();
    // version 1 at level H is still 21 modules
    assert_eq!(img.dimensions(), (100, 100));
}

#[test]
fn test_generate_rejects_bad_level() {
    let temp = tempdir().unwrap();
    let png = temp.path().join("x.png");

    let (_, stderr, code) = generate(&["hello", path_str(&png), "--error", "Z"]);

    assert_eq!(code, Some(2));
    assert!(stderr.contains("--error"));
}

#[test]
fn test_generate_payload_too_long() {
    let temp = tempdir().unwrap();
    let png = temp.path().join("big.png");
    let payload = "x".repeat(8000);

    let (_, stderr, code) = generate(&[payload.as_str(), path_str(&png), "--error", "L"]);

    assert_eq!(code, Some(1));
    assert!(stderr.contains("Error generating QR code:"));
    assert!(!png.exists());
}

#[test]
fn test_generate_rejects_huge_box_size() {
    let temp = tempdir().unwrap();
    let png = temp.path().join("huge.png");

    let (_, stderr, code) = generate(&["hello", path_str(&png), "--size", "100000"]);

    assert_eq!(code, Some(1));
    assert!(stderr.contains("Error generating QR code:"));
    assert!(stderr.contains("image too large"));
    assert!(!png.exists());
}

#[test]
fn test_read_json() {
    let temp = tempdir().unwrap();
    let png = temp.path().join("json.png");
    generate(&["payload", path_str(&png)]);

    let (stdout, _, code) = read(&[path_str(&png), "--json"]);
    assert_eq!(code, Some(0));
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    assert_eq!(parsed["data"], "payload");
    assert_eq!(parsed["type"], "QRCODE");
    assert!(parsed["rect"]["width"].as_u64().unwrap() > 0);

    let (stdout, _, code) = read(&[path_str(&png), "--json", "--all"]);
    assert_eq!(code, Some(0));
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 1);
}

#[test]
fn test_read_all_numbered() {
    let temp = tempdir().unwrap();
    let png = temp.path().join("all.png");
    generate(&["first", path_str(&png)]);

    let (stdout, _, code) = read(&[path_str(&png), "--all"]);

    assert_eq!(code, Some(0));
    assert_eq!(stdout.trim_end(), "[1] first");
}

#[test]
fn test_read_no_symbol() {
    let temp = tempdir().unwrap();
    let png = temp.path().join("blank.png");
    image::GrayImage::from_pixel(120, 120, image::Luma([255]))
        .save(&png)
        .unwrap();

    let (stdout, _, code) = read(&[path_str(&png)]);

    assert_eq!(code, Some(1));
    assert!(stdout.contains("No QR code found in image"));
}

#[test]
fn test_read_missing_file() {
    let temp = tempdir().unwrap();
    let png = temp.path().join("missing.png");

    let (_, stderr, code) = read(&[path_str(&png)]);

    assert_eq!(code, Some(1));
    assert!(stderr.contains("Error reading QR code:"));
}
