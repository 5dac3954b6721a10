mod filter;

pub use filter::{ExtensionFilter, FileFilter};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Recursive directory walk in file-name order, so runs are reproducible.
pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(std::io::Error::from)?;
            if entry.file_type().is_file() && self.filter.should_include(entry.path()) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

/// Expand command-line paths into the list of files to lint.
///
/// Directories are walked; anything else is kept verbatim so a missing file
/// surfaces as a read error when it is linted.
///
/// # Errors
/// Returns an error if a directory cannot be walked.
pub fn expand_paths<S: FileScanner>(paths: &[PathBuf], scanner: &S) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            files.extend(scanner.scan(path)?);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
