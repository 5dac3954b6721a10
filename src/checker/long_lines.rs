use crate::source::SourceFile;
use crate::syntax::URL_MARKER;

use super::{StyleCheck, Violation, ViolationKind};

pub const DEFAULT_MAX_LINE_LENGTH: usize = 100;

/// Flags lines longer than the limit, counted in characters without the line
/// terminator. Comments and strings count; lines mentioning a URL are exempt.
#[derive(Debug, Clone, Copy)]
pub struct LongLineCheck {
    max_line_length: usize,
}

impl LongLineCheck {
    #[must_use]
    pub const fn new(max_line_length: usize) -> Self {
        Self { max_line_length }
    }
}

impl Default for LongLineCheck {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LINE_LENGTH)
    }
}

impl StyleCheck for LongLineCheck {
    fn name(&self) -> &'static str {
        "long-lines"
    }

    fn check(&self, file: &SourceFile) -> Vec<Violation> {
        file.numbered_lines()
            .filter(|(_, line)| !line.contains(URL_MARKER))
            .filter(|(_, line)| line.chars().count() > self.max_line_length)
            .map(|(line_nr, _)| Violation::new(ViolationKind::LineTooLong, line_nr, file.path()))
            .collect()
    }
}

#[cfg(test)]
#[path = "long_lines_tests.rs"]
mod tests;
