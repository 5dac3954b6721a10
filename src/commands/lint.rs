use std::fs;
use std::path::{Path, PathBuf};

use crate::baseline::ExceptionRegistry;
use crate::cli::Cli;
use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult};
use crate::lint::{LintOutcome, Linter, lint_paths};
use crate::output::{JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use crate::scanner::{DirectoryScanner, ExtensionFilter, expand_paths};
use crate::{EXIT_CONFIG_ERROR, Result, StyleError};

use super::determine_exit_code;

#[must_use]
pub fn run_lint(cli: &Cli) -> i32 {
    match run_lint_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Run the linter as configured by `cli` and write the report.
///
/// # Errors
/// Returns an error if configuration or exceptions cannot be loaded, a file
/// cannot be read, or the report cannot be written.
pub fn run_lint_impl(cli: &Cli) -> Result<i32> {
    // 1. Load configuration
    let loaded = load_config(cli.config.as_deref(), cli.no_config)?;
    let root = project_root(cli.root.as_deref(), &loaded)?;
    let config = loaded.config;
    tracing::debug!("Project root: {}", root.display());

    // 2. Apply CLI argument overrides
    let max_line_length = cli
        .max_line_length
        .unwrap_or(config.rules.max_line_length);
    if max_line_length == 0 {
        return Err(StyleError::Config(
            "--max-line-length must be greater than 0".to_string(),
        ));
    }

    // 3. Load accepted violations
    let exceptions = load_exceptions(cli, &config, &root)?;

    // 4. Collect files
    let scanner = DirectoryScanner::new(ExtensionFilter::new(config.rules.extensions.clone()));
    let files = expand_paths(&cli.paths, &scanner)?;
    tracing::debug!("Linting {} file(s)", files.len());

    // 5. Lint
    let linter = Linter::new(
        max_line_length,
        &root.join(&config.rules.reserved_notation_file),
    );
    let outcome = lint_paths(&files, &linter, &exceptions)?;
    tracing::debug!(
        "{} new violation(s), {} suppressed",
        outcome.violations.len(),
        outcome.suppressed
    );

    // 6. Report
    let output = format_output(cli.format, &outcome, max_line_length)?;
    write_output(cli.output.as_deref(), &output)?;

    Ok(determine_exit_code(&outcome, &exceptions))
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new();
    let loaded = config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))?;
    match &loaded.source {
        Some(path) => tracing::debug!("Using config: {}", path.display()),
        None => tracing::debug!("No config file found, using defaults"),
    }
    Ok(loaded)
}

/// `--root`, else the config file's directory, else the current directory.
fn project_root(cli_root: Option<&Path>, loaded: &LoadResult) -> Result<PathBuf> {
    if let Some(root) = cli_root {
        return Ok(root.to_path_buf());
    }
    let config_dir = loaded
        .source
        .as_deref()
        .and_then(Path::parent)
        .filter(|dir| !dir.as_os_str().is_empty());
    match config_dir {
        Some(dir) => Ok(dir.to_path_buf()),
        None => Ok(std::env::current_dir()?),
    }
}

fn load_exceptions(cli: &Cli, config: &Config, root: &Path) -> Result<ExceptionRegistry> {
    if cli.no_exceptions {
        tracing::info!("Exceptions disabled, reporting every violation");
        return Ok(ExceptionRegistry::new());
    }

    if let Some(path) = cli.exceptions.as_deref() {
        if !path.exists() {
            return Err(StyleError::Config(format!(
                "Exceptions file not found: {}",
                path.display()
            )));
        }
        return load_exceptions_from(path, root);
    }

    let default_path = root.join(&config.baseline.path);
    if !default_path.exists() {
        tracing::info!(
            "No exceptions file at {}, reporting every violation",
            default_path.display()
        );
        return Ok(ExceptionRegistry::new());
    }
    load_exceptions_from(&default_path, root)
}

fn load_exceptions_from(path: &Path, root: &Path) -> Result<ExceptionRegistry> {
    let exceptions = ExceptionRegistry::load(path, root)?;
    tracing::debug!(
        "Loaded {} style exception(s) from {}",
        exceptions.len(),
        path.display()
    );
    Ok(exceptions)
}

fn format_output(
    format: OutputFormat,
    outcome: &LintOutcome,
    max_line_length: usize,
) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::new(max_line_length).format(&outcome.violations),
        OutputFormat::Json => JsonFormatter::new(max_line_length)
            .with_linted(outcome.files)
            .format(&outcome.violations),
    }
}

fn write_output(output_path: Option<&Path>, content: &str) -> Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "lint_tests.rs"]
mod tests;
