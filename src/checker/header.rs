use std::path::Path;

use crate::source::SourceFile;
use crate::syntax::{
    BLOCK_COMMENT_CLOSE, BLOCK_COMMENT_OPEN, HEADER_REQUIRED_WORDS, IMPORT_KEYWORD,
    MODULE_DOC_OPEN, first_word,
};

use super::import_only::imports_several;
use super::{StyleCheck, Violation, ViolationKind};

/// Position of the header scan within a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderState {
    /// No copyright block has been opened yet.
    NotStarted,
    /// Inside the copyright block opened at `start_line`.
    InCopyright { start_line: usize },
    /// Copyright block closed; expecting imports, then the module docstring.
    AfterCopyright,
    /// Module docstring found, or a misplaced line reported.
    Done,
}

/// Line-at-a-time state machine for the file header.
///
/// A well-formed file starts with a `/-` ... `-/` block containing all the
/// required copyright words, followed by `import` lines and then the module
/// docstring `/-!`.
#[derive(Debug)]
pub struct HeaderScanner<'a> {
    path: &'a Path,
    state: HeaderState,
    header: String,
    /// Line 0 `MissingOrMalformedCopyright` already reported.
    reported_missing: bool,
    violations: Vec<Violation>,
}

impl<'a> HeaderScanner<'a> {
    #[must_use]
    pub const fn new(path: &'a Path) -> Self {
        Self {
            path,
            state: HeaderState::NotStarted,
            header: String::new(),
            reported_missing: false,
            violations: Vec::new(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> HeaderState {
        self.state
    }

    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self.state, HeaderState::Done)
    }

    /// Advance the scan by one line. Lines fed after `Done` are ignored.
    pub fn feed(&mut self, line_nr: usize, line: &str) {
        match self.state {
            HeaderState::NotStarted => self.feed_not_started(line_nr, line),
            HeaderState::InCopyright { start_line } => self.feed_copyright(start_line, line),
            HeaderState::AfterCopyright => {
                if !line.trim().is_empty() {
                    self.check_import_section(line_nr, line);
                }
            }
            HeaderState::Done => {}
        }
    }

    #[must_use]
    pub fn finish(self) -> Vec<Violation> {
        self.violations
    }

    fn feed_not_started(&mut self, line_nr: usize, line: &str) {
        if line.is_empty() {
            // Reported once, at line 0: the header never started.
            if !self.reported_missing {
                self.reported_missing = true;
                self.push(ViolationKind::MissingOrMalformedCopyright, 0);
            }
            return;
        }
        if line == BLOCK_COMMENT_OPEN {
            self.state = HeaderState::InCopyright {
                start_line: line_nr,
            };
            return;
        }
        self.push(ViolationKind::MissingOrMalformedCopyright, line_nr);
        // Without a header the line is still held to the import section rules.
        if !line.trim().is_empty() {
            self.check_import_section(line_nr, line);
        }
    }

    fn feed_copyright(&mut self, start_line: usize, line: &str) {
        self.header.push_str(line);
        self.header.push('\n');
        if line != BLOCK_COMMENT_CLOSE {
            return;
        }
        let complete = HEADER_REQUIRED_WORDS
            .iter()
            .all(|word| self.header.contains(word));
        if !complete {
            self.push(ViolationKind::MissingOrMalformedCopyright, start_line);
        }
        self.state = HeaderState::AfterCopyright;
    }

    /// Every non-blank line here must be an `import` or open the module docstring.
    fn check_import_section(&mut self, line_nr: usize, line: &str) {
        match first_word(line) {
            Some(MODULE_DOC_OPEN) => self.state = HeaderState::Done,
            Some(IMPORT_KEYWORD) => {
                if imports_several(line) {
                    self.push(ViolationKind::MultipleImportsPerLine, line_nr);
                }
            }
            _ => {
                self.push(ViolationKind::MissingOrLateModuleDoc, line_nr);
                self.state = HeaderState::Done;
            }
        }
    }

    fn push(&mut self, kind: ViolationKind, line: usize) {
        self.violations.push(Violation::new(kind, line, self.path));
    }
}

/// Copyright header, import formatting, and module docstring placement.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderCheck;

impl StyleCheck for HeaderCheck {
    fn name(&self) -> &'static str {
        "header"
    }

    fn check(&self, file: &SourceFile) -> Vec<Violation> {
        let mut scanner = HeaderScanner::new(file.path());
        for (line_nr, line) in file.numbered_lines() {
            scanner.feed(line_nr, line);
            if scanner.is_done() {
                break;
            }
        }
        scanner.finish()
    }
}

#[cfg(test)]
#[path = "header_tests.rs"]
mod tests;
