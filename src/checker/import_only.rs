use crate::classifier::skip_comments;
use crate::source::SourceFile;
use crate::syntax::{IMPORT_KEYWORD, LINE_COMMENT, first_word, words};

use super::{Violation, ViolationKind};

/// Outcome of scanning a file's import section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportScan {
    /// The file holds nothing but comments and `import` lines.
    pub import_only: bool,
    /// `MultipleImportsPerLine` violations seen before the first non-import line.
    pub violations: Vec<Violation>,
}

/// True if an `import` line names more than one module.
///
/// `import a -- why` is allowed: the third word starts a trailing comment.
pub(super) fn imports_several(line: &str) -> bool {
    words(line)
        .nth(2)
        .is_some_and(|third| third != LINE_COMMENT)
}

/// Decide whether `file` is import-only, collecting import violations along the way.
///
/// Block comments and blank lines are skipped. Scanning stops at the first
/// line that is neither a line comment nor an `import`.
#[must_use]
pub fn scan_imports(file: &SourceFile) -> ImportScan {
    let mut violations = Vec::new();

    for (line_nr, line) in skip_comments(file.numbered_lines()) {
        // Whitespace-only lines carry no directive.
        let Some(first) = first_word(line) else {
            continue;
        };
        if first == LINE_COMMENT {
            continue;
        }
        if first != IMPORT_KEYWORD {
            return ImportScan {
                import_only: false,
                violations,
            };
        }
        if imports_several(line) {
            violations.push(Violation::new(
                ViolationKind::MultipleImportsPerLine,
                line_nr,
                file.path(),
            ));
        }
    }

    ImportScan {
        import_only: true,
        violations,
    }
}

#[cfg(test)]
#[path = "import_only_tests.rs"]
mod tests;
