use std::path::{Path, PathBuf};

use crate::classifier::code_lines;
use crate::source::{SourceFile, resolve_path};
use crate::syntax::RESERVED_NOTATION_PREFIXES;

use super::{StyleCheck, Violation, ViolationKind};

/// Flags `reserve`/`precedence` declarations outside the one file allowed to
/// make them.
///
/// The test is a literal prefix match: indented declarations are not flagged.
#[derive(Debug, Clone)]
pub struct ReservedNotationCheck {
    definitions: PathBuf,
}

impl ReservedNotationCheck {
    /// `definitions` is resolved, so any spelling of the path works.
    #[must_use]
    pub fn new(definitions: &Path) -> Self {
        Self {
            definitions: resolve_path(definitions),
        }
    }
}

impl StyleCheck for ReservedNotationCheck {
    fn name(&self) -> &'static str {
        "reserved-notation"
    }

    fn check(&self, file: &SourceFile) -> Vec<Violation> {
        if file.resolved() == self.definitions.as_path() {
            return Vec::new();
        }
        code_lines(file)
            .filter(|(_, line)| {
                RESERVED_NOTATION_PREFIXES
                    .iter()
                    .any(|prefix| line.starts_with(prefix))
            })
            .map(|(line_nr, _)| {
                Violation::new(ViolationKind::ReservedNotationMisuse, line_nr, file.path())
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "reserved_notation_tests.rs"]
mod tests;
