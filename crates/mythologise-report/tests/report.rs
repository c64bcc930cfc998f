//! End-to-end report tests.

use std::io::Write;

use clap::Parser;
use mythologise_report::{cli::ReportCli, run};
use tempfile::NamedTempFile;

fn cli(args: &[&str]) -> ReportCli {
    let mut full = vec!["mythologise-report"];
    full.extend_from_slice(args);
    ReportCli::parse_from(full)
}

#[test]
fn test_text_report_defaults() {
    let out = run(&cli(&[])).unwrap();
    assert!(out.starts_with("mythologise collision report\n"));
    assert!(out.contains("source: built-in lexicon"));
    assert!(out.contains("scheme: paired"));
    assert!(out.contains("nouns: 109"));
    assert!(out.contains("noun/adjective combinations: 99517"));
    assert!(out.contains("  users=1000000: "));
}

#[test]
fn test_legacy_json_report() {
    let out = run(&cli(&["--scheme", "legacy", "--json", "--users", "1000"])).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["scheme"], "legacy");
    assert_eq!(json["counts"]["combinations"], 1250);
    assert_eq!(json["rows"].as_array().unwrap().len(), 4);
    assert_eq!(json["recommendations"][0]["users"], 1000);
}

#[test]
fn test_source_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
pub static NOUNS: &[NounEntry] = &[
    noun("Bríd", F, Myth),
    noun("Lugh", M, Myth),
];

pub static ADJECTIVES: &[AdjectiveEntry] = &[
    core("ciúin"),
    qual("ard"),
];
"#
    )
    .unwrap();

    let path = file.path().to_str().unwrap().to_string();
    let out = run(&cli(&["--source", &path, "--json"])).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["source"], path.as_str());
    assert_eq!(json["counts"]["nouns"], 2);
    assert_eq!(json["counts"]["adjectives"], 1);
}

#[test]
fn test_source_file_errors() {
    let missing = run(&cli(&["--source", "/nonexistent/lexicon.rs"]));
    assert!(missing.unwrap_err().to_string().contains("failed to read"));

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "fn main() {{}}").unwrap();
    let path = file.path().to_str().unwrap().to_string();
    let err = run(&cli(&["--source", &path])).unwrap_err();
    assert!(err.to_string().contains("failed to parse"));
}

#[test]
fn test_source_without_combinations_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
pub static NOUNS: &[NounEntry] = &[
    noun("Bríd", F, Myth),
];

pub static ADJECTIVES: &[AdjectiveEntry] = &[
    core("ciúin"),
];
"#
    )
    .unwrap();

    let path = file.path().to_str().unwrap().to_string();
    let err = run(&cli(&["--source", &path, "--users", "0,1,2"])).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("parsed invalid counts"), "{message}");
    assert!(message.contains("adjectives=0"), "{message}");

    // one core and one qualifier with a shared root leave no eligible pair
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
pub static NOUNS: &[NounEntry] = &[
    noun("Bríd", F, Myth),
];

pub static ADJECTIVES: &[AdjectiveEntry] = &[
    core("tapa"),
    qual("fíorthapa"),
];
"#
    )
    .unwrap();
    let path = file.path().to_str().unwrap().to_string();
    assert!(run(&cli(&["--source", &path])).is_err());
    // the legacy scheme counts adjectives regardless of role
    assert!(run(&cli(&["--source", &path, "--scheme", "legacy"])).is_ok());
}
