use std::fs;
use std::path::{Path, PathBuf};

use crate::{Result, StyleError};

/// A source file loaded once and shared by every check.
///
/// `path` is kept exactly as supplied so reports echo the caller's spelling;
/// `resolved` is the canonical form used for exception lookups and for
/// comparing against designated files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    resolved: PathBuf,
    lines: Vec<String>,
}

impl SourceFile {
    /// Read a file from disk.
    ///
    /// # Errors
    /// Returns `StyleError::FileRead` if the file cannot be read or is not valid UTF-8.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| StyleError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self::from_source(path, &content))
    }

    /// Build a file from in-memory content.
    #[must_use]
    pub fn from_source(path: impl Into<PathBuf>, content: &str) -> Self {
        let path = path.into();
        let resolved = resolve_path(&path);
        Self {
            path,
            resolved,
            lines: content.lines().map(str::to_string).collect(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn resolved(&self) -> &Path {
        &self.resolved
    }

    /// Lines without their terminators.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lines paired with their 1-based line numbers.
    pub fn numbered_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines
            .iter()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.as_str()))
    }
}

/// Resolve a path to its canonical absolute form.
///
/// Paths that do not exist cannot be canonicalized; they fall back to the
/// lexically absolute path so lookups still work for files named in a
/// baseline but since deleted.
#[must_use]
pub fn resolve_path(path: &Path) -> PathBuf {
    dunce::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
