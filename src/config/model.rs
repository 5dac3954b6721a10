use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::checker::DEFAULT_MAX_LINE_LENGTH;

/// Top-level configuration, read from `.lint-style.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub rules: RulesConfig,

    #[serde(default)]
    pub baseline: BaselineConfig,
}

/// Tunables of the individual checks [rules].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    /// Longest allowed line, in characters.
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,

    /// The one file allowed to declare reserved notation, relative to the project root.
    #[serde(default = "default_reserved_notation_file")]
    pub reserved_notation_file: PathBuf,

    /// Extensions linted when a directory is given.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_line_length: default_max_line_length(),
            reserved_notation_file: default_reserved_notation_file(),
            extensions: default_extensions(),
        }
    }
}

/// Style-exceptions file location [baseline].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BaselineConfig {
    /// Relative to the project root.
    #[serde(default = "default_baseline_path")]
    pub path: PathBuf,
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            path: default_baseline_path(),
        }
    }
}

const fn default_max_line_length() -> usize {
    DEFAULT_MAX_LINE_LENGTH
}

fn default_reserved_notation_file() -> PathBuf {
    PathBuf::from("src/tactic/reserved_notation.lean")
}

fn default_extensions() -> Vec<String> {
    vec!["lean".to_string()]
}

fn default_baseline_path() -> PathBuf {
    PathBuf::from("scripts/style-exceptions.txt")
}
