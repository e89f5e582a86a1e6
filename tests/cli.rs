//! Black-box tests of the `receipt-lines` binary.
//!
//! Every case here fails before pdfium is bound, so they run on hosts
//! without the pdfium shared library.

use std::io::Write;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_receipt-lines"))
        .args(args)
        .env_remove("PDFIUM_LIB_PATH")
        .env_remove("RECEIPTS_PASSWORD")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn receipt-lines")
}

fn stdout(out: &Output) -> String {
    String::from_utf8(out.stdout.clone()).expect("stdout is UTF-8")
}

/// Stdout must be exactly one JSON array of strings followed by a newline.
fn parse_array(out: &Output) -> Vec<String> {
    let s = stdout(out);
    assert!(s.ends_with('\n'), "missing trailing newline: {s:?}");
    assert_eq!(s.lines().count(), 1, "expected one line, got: {s:?}");
    serde_json::from_str(s.trim_end()).expect("stdout is a JSON string array")
}

#[test]
fn no_arguments() {
    let out = run(&[]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), "[\"Error: No file path provided\"]\n");
}

#[test]
fn two_paths() {
    let out = run(&["a.pdf", "b.pdf"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(parse_array(&out), vec!["Error: No file path provided"]);
}

#[test]
fn missing_file() {
    let out = run(&["/definitely/not/a/real/receipt.pdf"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(
        parse_array(&out),
        vec!["Error: File not found: /definitely/not/a/real/receipt.pdf"]
    );
}

#[test]
fn missing_file_with_cyrillic_name_is_not_escaped() {
    let out = run(&["чек.pdf"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), "[\"Error: File not found: чек.pdf\"]\n");
}

#[test]
fn not_a_pdf() {
    let mut f = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    f.write_all(b"GIF89a fake receipt").unwrap();

    let out = run(&[f.path().to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    let arr = parse_array(&out);
    assert_eq!(arr.len(), 1);
    assert!(arr[0].starts_with("Error: File is not a valid PDF"), "got {arr:?}");
}

#[test]
fn path_plus_stray_flag_is_an_arity_error() {
    let out = run(&["a.pdf", "--bogus"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(parse_array(&out), vec!["Error: No file path provided"]);
}

#[test]
fn lone_unknown_flag_is_an_arity_error() {
    let out = run(&["--frobnicate"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(parse_array(&out), vec!["Error: No file path provided"]);
}

#[test]
fn missing_file_wins_over_bad_pdfium_path() {
    let out = Command::new(env!("CARGO_BIN_EXE_receipt-lines"))
        .arg("missing.pdf")
        .env("PDFIUM_LIB_PATH", "/nope")
        .env_remove("RECEIPTS_PASSWORD")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn receipt-lines");
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(parse_array(&out), vec!["Error: File not found: missing.pdf"]);
}

#[test]
fn verbose_is_not_read_from_the_environment() {
    let out = Command::new(env!("CARGO_BIN_EXE_receipt-lines"))
        .arg("missing.pdf")
        .env("RECEIPTS_VERBOSE", "yes")
        .env_remove("PDFIUM_LIB_PATH")
        .env_remove("RECEIPTS_PASSWORD")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn receipt-lines");
    assert_eq!(parse_array(&out), vec!["Error: File not found: missing.pdf"]);
}

#[test]
fn help_exits_zero() {
    let out = run(&["--help"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("receipt-lines"));
}

#[test]
fn logs_stay_off_stdout() {
    let out = run(&["--verbose", "/definitely/not/a/real/receipt.pdf"]);
    assert_eq!(parse_array(&out).len(), 1);
}
