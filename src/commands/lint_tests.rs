use std::fs;

use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::{EXIT_SUCCESS, EXIT_VIOLATIONS};

const HEADER: &str = "/-\n\
Copyright (c) 2021 Jane Doe. All rights reserved.\n\
Released under Apache 2.0 license as described in the file LICENSE.\n\
Authors: Jane Doe\n\
-/\n";

const DOC: &str = "/-! # Module docs -/\n";

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

fn cli_for(dir: &TempDir, extra: &[&str], paths: &[&Path]) -> Cli {
    let report = dir.path().join("report.txt");
    let mut args = vec![
        "lint-style".to_string(),
        "--no-config".to_string(),
        "--root".to_string(),
        dir.path().display().to_string(),
        "--output".to_string(),
        report.display().to_string(),
    ];
    args.extend(extra.iter().map(ToString::to_string));
    args.extend(paths.iter().map(|p| p.display().to_string()));
    Cli::parse_from(args)
}

fn report(dir: &TempDir) -> String {
    fs::read_to_string(dir.path().join("report.txt")).unwrap()
}

#[test]
fn clean_file_writes_empty_report() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "src/a.lean", &format!("{HEADER}import data.nat\n{DOC}\ndef a := 1\n"));

    let code = run_lint_impl(&cli_for(&dir, &[], &[&file])).unwrap();

    assert_eq!(code, EXIT_SUCCESS);
    assert_eq!(report(&dir), "");
}

#[test]
fn missing_default_exceptions_is_bootstrap_mode() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "src/a.lean", "def ᾰ := 1\n");

    let code = run_lint_impl(&cli_for(&dir, &[], &[&file])).unwrap();

    assert_eq!(code, EXIT_SUCCESS);
    assert!(report(&dir).contains(" : ERR_COP : "));
}

#[test]
fn new_violation_with_exceptions_fails() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "src/a.lean", &format!("{HEADER}def ᾰ := 1\n"));
    write(
        &dir,
        "scripts/style-exceptions.txt",
        "src/other.lean : line 1 : ERR_LIN : Line has more than 100 characters\n",
    );

    let code = run_lint_impl(&cli_for(&dir, &[], &[&file])).unwrap();

    assert_eq!(code, EXIT_VIOLATIONS);
    assert!(report(&dir).contains(" : line 6 : ERR_SAV : "));
}

#[test]
fn accepted_violation_is_suppressed() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "src/a.lean", &format!("{HEADER}{DOC}def ᾰ := 1\n"));
    write(
        &dir,
        "scripts/style-exceptions.txt",
        "src/a.lean : line 7 : ERR_SAV : File contains the character ᾰ\n",
    );

    let code = run_lint_impl(&cli_for(&dir, &[], &[&file])).unwrap();

    assert_eq!(code, EXIT_SUCCESS);
    assert_eq!(report(&dir), "");
}

#[test]
fn no_exceptions_flag_ignores_exceptions_file() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "src/a.lean", &format!("{HEADER}{DOC}def ᾰ := 1\n"));
    write(
        &dir,
        "scripts/style-exceptions.txt",
        "src/a.lean : line 7 : ERR_SAV : File contains the character ᾰ\n",
    );

    let code = run_lint_impl(&cli_for(&dir, &["--no-exceptions"], &[&file])).unwrap();

    assert_eq!(code, EXIT_SUCCESS);
    assert!(report(&dir).contains("ERR_SAV"));
}

#[test]
fn explicit_missing_exceptions_file_is_error() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "src/a.lean", HEADER);
    let missing = dir.path().join("nope.txt");
    let missing = missing.display().to_string();

    let result = run_lint_impl(&cli_for(&dir, &["--exceptions", missing.as_str()], &[&file]));

    assert!(matches!(result, Err(StyleError::Config(msg)) if msg.contains("not found")));
}

#[test]
fn malformed_exceptions_file_is_error() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "src/a.lean", HEADER);
    write(&dir, "scripts/style-exceptions.txt", "src/a.lean : line\n");

    let result = run_lint_impl(&cli_for(&dir, &[], &[&file]));

    assert!(matches!(
        result,
        Err(StyleError::MalformedException { line: 1, found: 3, .. })
    ));
}

#[test]
fn unreadable_file_is_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("src/missing.lean");

    let result = run_lint_impl(&cli_for(&dir, &[], &[&missing]));

    assert!(matches!(result, Err(StyleError::FileRead { .. })));
    assert_eq!(run_lint(&cli_for(&dir, &[], &[&missing])), EXIT_CONFIG_ERROR);
}

#[test]
fn max_line_length_override_applies() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "src/a.lean", &format!("{HEADER}def abcdefghijklmnop := 1\n"));

    run_lint_impl(&cli_for(&dir, &["--max-line-length", "10"], &[&file])).unwrap();

    assert!(report(&dir).contains(" : line 6 : ERR_LIN : Line has more than 10 characters"));
}

#[test]
fn zero_max_line_length_is_rejected() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "src/a.lean", HEADER);

    let result = run_lint_impl(&cli_for(&dir, &["--max-line-length", "0"], &[&file]));

    assert!(matches!(result, Err(StyleError::Config(_))));
}

#[test]
fn json_report_is_written() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "src/a.lean", "def ᾰ := 1\n");

    run_lint_impl(&cli_for(&dir, &["--format", "json"], &[&file])).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&report(&dir)).unwrap();
    assert_eq!(parsed["summary"]["total"], 3);
    assert_eq!(parsed["summary"]["linted"], 1);
    assert_eq!(parsed["violations"][0]["code"], "ERR_COP");
}

#[test]
fn directory_argument_lints_matching_files() {
    let dir = TempDir::new().unwrap();
    write(&dir, "src/a.lean", "def a := 1\n");
    write(&dir, "src/notes.md", "def a := 1\n");
    let src = dir.path().join("src");

    run_lint_impl(&cli_for(&dir, &[], &[&src])).unwrap();

    let output = report(&dir);
    assert!(output.contains("a.lean"));
    assert!(!output.contains("notes.md"));
}

#[test]
fn json_summary_counts_clean_files_as_linted() {
    let dir = TempDir::new().unwrap();
    let clean = write(&dir, "src/a.lean", &format!("{HEADER}{DOC}def a := 1
"));
    let bad = write(&dir, "src/b.lean", "def ᾰ := 1
");

    run_lint_impl(&cli_for(&dir, &["--format", "json"], &[&clean, &bad])).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&report(&dir)).unwrap();
    assert_eq!(parsed["summary"]["files"], 1);
    assert_eq!(parsed["summary"]["linted"], 2);
}

// =============================================================================
// project_root
// =============================================================================

#[test]
fn project_root_prefers_cli_root() {
    let loaded = LoadResult {
        config: Config::default(),
        source: Some(PathBuf::from("/repo/.lint-style.toml")),
    };
    let root = project_root(Some(Path::new("/elsewhere")), &loaded).unwrap();
    assert_eq!(root, PathBuf::from("/elsewhere"));
}

#[test]
fn project_root_uses_config_directory() {
    let loaded = LoadResult {
        config: Config::default(),
        source: Some(PathBuf::from("/repo/.lint-style.toml")),
    };
    let root = project_root(None, &loaded).unwrap();
    assert_eq!(root, PathBuf::from("/repo"));
}

#[test]
fn project_root_falls_back_to_current_dir() {
    let loaded = LoadResult {
        config: Config::default(),
        source: Some(PathBuf::from(".lint-style.toml")),
    };
    let root = project_root(None, &loaded).unwrap();
    assert_eq!(root, std::env::current_dir().unwrap());
}
