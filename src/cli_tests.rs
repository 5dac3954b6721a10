use std::path::PathBuf;

use super::*;

#[test]
fn cli_paths_in_order() {
    let cli = Cli::parse_from(["lint-style", "src/b.lean", "src/a.lean", "archive"]);
    assert_eq!(
        cli.paths,
        vec![
            PathBuf::from("src/b.lean"),
            PathBuf::from("src/a.lean"),
            PathBuf::from("archive")
        ]
    );
}

#[test]
fn cli_no_paths_is_allowed() {
    let cli = Cli::parse_from(["lint-style"]);
    assert!(cli.paths.is_empty());
}

#[test]
fn cli_defaults() {
    let cli = Cli::parse_from(["lint-style", "a.lean"]);
    assert!(cli.config.is_none());
    assert!(!cli.no_config);
    assert!(cli.root.is_none());
    assert!(cli.exceptions.is_none());
    assert!(!cli.no_exceptions);
    assert!(cli.max_line_length.is_none());
    assert_eq!(cli.format, OutputFormat::Text);
    assert!(cli.output.is_none());
    assert_eq!(cli.verbose, 0);
}

#[test]
fn cli_with_exceptions_and_root() {
    let cli = Cli::parse_from([
        "lint-style",
        "--root",
        "/repo",
        "--exceptions",
        "scripts/style-exceptions.txt",
        "a.lean",
    ]);
    assert_eq!(cli.root, Some(PathBuf::from("/repo")));
    assert_eq!(
        cli.exceptions,
        Some(PathBuf::from("scripts/style-exceptions.txt"))
    );
}

#[test]
fn cli_exceptions_conflict_with_no_exceptions() {
    let result = Cli::try_parse_from([
        "lint-style",
        "--exceptions",
        "x.txt",
        "--no-exceptions",
        "a.lean",
    ]);
    assert!(result.is_err());
}

#[test]
fn cli_json_format_and_output() {
    let cli = Cli::parse_from(["lint-style", "-f", "json", "-o", "report.json", "a.lean"]);
    assert_eq!(cli.format, OutputFormat::Json);
    assert_eq!(cli.output, Some(PathBuf::from("report.json")));
}

#[test]
fn cli_invalid_format_is_rejected() {
    assert!(Cli::try_parse_from(["lint-style", "--format", "sarif", "a.lean"]).is_err());
}

#[test]
fn cli_max_line_length_override() {
    let cli = Cli::parse_from(["lint-style", "--max-line-length", "120", "a.lean"]);
    assert_eq!(cli.max_line_length, Some(120));
}

#[test]
fn cli_verbose_counts() {
    let cli = Cli::parse_from(["lint-style", "-vv", "a.lean"]);
    assert_eq!(cli.verbose, 2);
}
