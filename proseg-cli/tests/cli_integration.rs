//! Integration tests for the proseg CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{name}")
}

fn proseg() -> Command {
    let mut cmd = Command::cargo_bin("proseg").unwrap();
    cmd.env_remove("PROSEG_CONFIG");
    cmd
}

#[test]
fn test_process_english_text() {
    proseg()
        .args(["process", "-q", "-i"])
        .arg(fixture_path("english-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Dr. Smith went to the store.\n"))
        .stdout(predicate::str::contains("He bought some milk and eggs.\n"))
        .stdout(predicate::str::contains("\"Are you sure?\" she asked.\n"));
}

#[test]
fn test_json_output() {
    proseg()
        .args(["process", "-q", "-f", "json", "-i"])
        .arg(fixture_path("english-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"text\": \"Dr. Smith went to the store.\""))
        .stdout(predicate::str::contains("\"index\": 3"));
}

#[test]
fn test_markdown_output() {
    proseg()
        .args(["process", "-q", "-f", "markdown", "-i"])
        .arg(fixture_path("english-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Dr. Smith went to the store."))
        .stdout(predicate::str::contains("---"))
        .stdout(predicate::str::contains("*Total sentences: 4*"));
}

#[test]
fn test_dialog_modes() {
    proseg()
        .args(["process", "-q", "-i"])
        .arg(fixture_path("dialog-sample.txt"))
        .assert()
        .success()
        .stdout("\"Wait.\nListen to me.\"\nHe left.\n");

    proseg()
        .args(["process", "-q", "--no-split-dialog", "-i"])
        .arg(fixture_path("dialog-sample.txt"))
        .assert()
        .success()
        .stdout("\"Wait. Listen to me.\"\nHe left.\n");
}

#[test]
fn test_group_quotes_markdown() {
    proseg()
        .args(["process", "-q", "--group-quotes", "-f", "markdown", "-i"])
        .arg(fixture_path("dialog-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("> \"Wait.\n> Listen to me.\"\n"))
        .stdout(predicate::str::contains("*Quote groups: 1*"));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("output.txt");

    proseg()
        .args(["process", "-q", "-i"])
        .arg(fixture_path("english-sample.txt"))
        .arg("-o")
        .arg(&output_file)
        .assert()
        .success();

    let content = fs::read_to_string(&output_file).unwrap();
    assert_eq!(content.lines().count(), 4);
    assert!(content.contains("The clerk nodded."));
}

#[test]
fn test_glob_pattern_in_parallel() {
    proseg()
        .args(["process", "-q", "--parallel", "-i"])
        .arg(fixture_path("*.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("He left."))
        .stdout(predicate::str::contains("Dr. Smith went to the store."));
}

#[test]
fn test_uax29_oracle() {
    proseg()
        .args(["process", "-q", "--oracle", "uax29", "-i"])
        .arg(fixture_path("english-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("He bought some milk and eggs."));
}

#[test]
fn test_invalid_file() {
    proseg()
        .args(["process", "-i", "nonexistent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_zero_threads_rejected() {
    proseg()
        .args(["process", "-q", "--threads", "0", "-i"])
        .arg(fixture_path("english-sample.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Thread count must be greater than 0"));
}

#[test]
fn test_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("proseg.toml");
    fs::write(
        &config,
        "[processing]\nsplit_dialog = false\n\n[output]\ndefault_format = \"json\"\npretty_json = false\n",
    )
    .unwrap();

    proseg()
        .args(["process", "-q", "-i"])
        .arg(fixture_path("dialog-sample.txt"))
        .env("PROSEG_CONFIG", &config)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"text":"\"Wait. Listen to me.\"","index":0"#,
        ));
}

#[test]
fn test_generate_validate_and_use_lexicon() {
    let temp_dir = TempDir::new().unwrap();
    let lexicon = temp_dir.path().join("custom.toml");

    proseg()
        .args(["generate-config", "--code", "xx", "-o"])
        .arg(&lexicon)
        .assert()
        .success()
        .stdout(predicate::str::contains("generated successfully"));

    proseg()
        .args(["validate", "-l"])
        .arg(&lexicon)
        .assert()
        .success()
        .stdout(predicate::str::contains("Code: xx"));

    proseg()
        .args(["process", "-q", "--lexicon"])
        .arg(&lexicon)
        .arg("-i")
        .arg(fixture_path("english-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Dr. Smith went to the store."));
}

#[test]
fn test_validate_invalid_lexicon() {
    let temp_dir = TempDir::new().unwrap();
    let lexicon = temp_dir.path().join("broken.toml");
    fs::write(&lexicon, "[metadata]\ncode = \"x\"\n").unwrap();

    proseg()
        .args(["validate", "-l"])
        .arg(&lexicon)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Lexicon is invalid"))
        .stderr(predicate::str::contains("Validation failed"));
}

#[test]
fn test_help_command() {
    proseg()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("boundary detector"));
}

#[test]
fn test_list_commands() {
    proseg()
        .args(["list", "oracles"])
        .assert()
        .success()
        .stdout(predicate::str::contains("punctuation"))
        .stdout(predicate::str::contains("uax29"));

    proseg()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("markdown"));
}
