use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StyleError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Malformed style exception at {path}:{line}: expected at least 6 fields, found {found}"
    )]
    MalformedException {
        path: PathBuf,
        line: usize,
        found: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StyleError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
