use std::path::PathBuf;

use clap::Parser;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "lint-style")]
#[command(
    author,
    version,
    about = "Check proof-library sources for style violations"
)]
#[command(long_about = "Check proof-library sources for style violations.\n\n\
    Each violation is printed as `<path> : line <n> : <CODE> : <message>`.\n\
    Violations accepted in the style-exceptions file are not reported. Redirect\n\
    the output of a run with an empty exceptions file to regenerate it.\n\n\
    Exit codes:\n  \
    0 - No new violations, or no exceptions file (bootstrap mode)\n  \
    1 - New violations found\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Files or directories to lint
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Project root for paths in the exceptions file (default: config file directory or cwd)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Path to the style-exceptions file (overrides config)
    #[arg(long, conflicts_with = "no_exceptions")]
    pub exceptions: Option<PathBuf>,

    /// Ignore the style-exceptions file, e.g. to regenerate it
    #[arg(long)]
    pub no_exceptions: bool,

    /// Maximum line length in characters (overrides config)
    #[arg(long)]
    pub max_line_length: Option<usize>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
