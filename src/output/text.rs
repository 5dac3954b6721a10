use std::fmt::Write;

use crate::checker::{DEFAULT_MAX_LINE_LENGTH, Violation};
use crate::error::Result;

use super::OutputFormatter;

/// Plain report, one line per violation:
///
/// `<path> : line <n> : <CODE> : <message>`
///
/// Path comes first so the output sorts by file, then line. The same text
/// is the format of the style-exceptions file.
#[derive(Debug, Clone, Copy)]
pub struct TextFormatter {
    max_line_length: usize,
}

impl TextFormatter {
    #[must_use]
    pub const fn new(max_line_length: usize) -> Self {
        Self { max_line_length }
    }

    #[must_use]
    pub fn format_violation(&self, violation: &Violation) -> String {
        format!(
            "{} : line {} : {} : {}",
            violation.path.display(),
            violation.line,
            violation.kind.code(),
            violation.kind.message(self.max_line_length)
        )
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LINE_LENGTH)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, violations: &[Violation]) -> Result<String> {
        let mut output = String::new();
        for violation in violations {
            writeln!(output, "{}", self.format_violation(violation)).ok();
        }
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
