//! Registry of accepted violations, loaded from a style-exceptions file.
//!
//! The file is the linter's own text report: one record per line, with the
//! path (relative to the project root) as the first field and the violation
//! code as the sixth. Suppression is keyed on `(kind, resolved path)` only, so
//! an accepted kind covers every line of that file.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexSet;

use crate::checker::ViolationKind;
use crate::source::resolve_path;
use crate::{Result, StyleError};

/// Index of the path field in an exceptions record.
const PATH_FIELD: usize = 0;

/// Index of the violation code field in an exceptions record.
const CODE_FIELD: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExceptionRegistry {
    entries: IndexSet<(ViolationKind, PathBuf)>,
}

impl ExceptionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load exceptions from a file, resolving record paths against `root`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or a record is malformed.
    pub fn load(path: &Path, root: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| StyleError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content, path, root)
    }

    /// Parse exceptions from text. `source` is only used in error messages.
    ///
    /// Blank lines are skipped. Records with an unknown code are skipped with
    /// a warning; records with fewer than six fields are an error.
    ///
    /// # Errors
    /// Returns `StyleError::MalformedException` for the first short record.
    pub fn parse(content: &str, source: &Path, root: &Path) -> Result<Self> {
        let mut registry = Self::new();

        for (idx, line) in content.lines().enumerate() {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.is_empty() {
                continue;
            }
            if fields.len() <= CODE_FIELD {
                return Err(StyleError::MalformedException {
                    path: source.to_path_buf(),
                    line: idx + 1,
                    found: fields.len(),
                });
            }

            let code = fields[CODE_FIELD];
            let Some(kind) = ViolationKind::from_code(code) else {
                tracing::warn!(
                    "Ignoring unknown violation code {code} at {}:{}",
                    source.display(),
                    idx + 1
                );
                continue;
            };
            registry.insert(kind, &root.join(fields[PATH_FIELD]));
        }

        Ok(registry)
    }

    /// Accept `kind` for the file at `path` (resolved before storing).
    pub fn insert(&mut self, kind: ViolationKind, path: &Path) {
        self.entries.insert((kind, resolve_path(path)));
    }

    /// `resolved` must already be resolved, e.g. `SourceFile::resolved`.
    #[must_use]
    pub fn contains(&self, kind: ViolationKind, resolved: &Path) -> bool {
        self.entries.contains(&(kind, resolved.to_path_buf()))
    }

    /// Entries in the order they were first loaded.
    pub fn iter(&self) -> impl Iterator<Item = (ViolationKind, &Path)> {
        self.entries
            .iter()
            .map(|(kind, path)| (*kind, path.as_path()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "baseline_tests.rs"]
mod tests;
