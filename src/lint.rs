use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::baseline::ExceptionRegistry;
use crate::checker::{
    ForbiddenCharCheck, HeaderCheck, LongLineCheck, ReservedNotationCheck, SetOptionCheck,
    StyleCheck, Violation, scan_imports,
};
use crate::error::Result;
use crate::output::Reporter;
use crate::source::SourceFile;

/// Runs the full battery of style checks over one file.
///
/// Order is fixed: line length, then either the import-only violations (for
/// files holding nothing but imports and comments) or the header, forbidden
/// character, reserved notation and `set_option` checks.
#[derive(Debug, Clone)]
pub struct Linter {
    long_lines: LongLineCheck,
    header: HeaderCheck,
    forbidden_char: ForbiddenCharCheck,
    reserved_notation: ReservedNotationCheck,
    set_option: SetOptionCheck,
}

impl Linter {
    #[must_use]
    pub fn new(max_line_length: usize, reserved_notation_file: &Path) -> Self {
        Self {
            long_lines: LongLineCheck::new(max_line_length),
            header: HeaderCheck,
            forbidden_char: ForbiddenCharCheck,
            reserved_notation: ReservedNotationCheck::new(reserved_notation_file),
            set_option: SetOptionCheck,
        }
    }

    fn content_checks(&self) -> [&dyn StyleCheck; 4] {
        [
            &self.header,
            &self.forbidden_char,
            &self.reserved_notation,
            &self.set_option,
        ]
    }

    /// All violations of `file`, before suppression.
    #[must_use]
    pub fn lint(&self, file: &SourceFile) -> Vec<Violation> {
        let mut violations = self.long_lines.check(file);

        let imports = scan_imports(file);
        if imports.import_only {
            tracing::trace!("{} is import-only", file.path().display());
            violations.extend(imports.violations);
            return violations;
        }

        for check in self.content_checks() {
            let found = check.check(file);
            tracing::trace!(
                "{}: {} reported {} violation(s)",
                file.path().display(),
                check.name(),
                found.len()
            );
            violations.extend(found);
        }
        violations
    }
}

/// Result of linting a set of files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintOutcome {
    /// Unsuppressed violations, grouped by file in input order.
    pub violations: Vec<Violation>,
    /// Violations dropped because the exceptions file accepts them.
    pub suppressed: usize,
    pub files: usize,
}

impl LintOutcome {
    #[must_use]
    pub fn has_new_violations(&self) -> bool {
        !self.violations.is_empty()
    }
}

/// Lint one file and drop accepted violations.
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn lint_file(
    path: &Path,
    linter: &Linter,
    exceptions: &ExceptionRegistry,
) -> Result<(Vec<Violation>, usize)> {
    let file = SourceFile::load(path)?;
    let found = linter.lint(&file);
    let total = found.len();
    let kept = Reporter::new(exceptions).unsuppressed(&file, found);
    let suppressed = total - kept.len();
    Ok((kept, suppressed))
}

/// Lint every file in `paths`.
///
/// Files are processed in parallel but the report keeps the input order.
/// The first unreadable file aborts the run.
///
/// # Errors
/// Returns an error if any file cannot be read.
pub fn lint_paths(
    paths: &[PathBuf],
    linter: &Linter,
    exceptions: &ExceptionRegistry,
) -> Result<LintOutcome> {
    let per_file = paths
        .par_iter()
        .map(|path| lint_file(path, linter, exceptions))
        .collect::<Result<Vec<_>>>()?;

    let mut outcome = LintOutcome {
        files: paths.len(),
        ..LintOutcome::default()
    };
    for (violations, suppressed) in per_file {
        outcome.violations.extend(violations);
        outcome.suppressed += suppressed;
    }
    Ok(outcome)
}

#[cfg(test)]
#[path = "lint_tests.rs"]
mod tests;
