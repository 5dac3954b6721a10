use serde::Serialize;

use crate::checker::{DEFAULT_MAX_LINE_LENGTH, Violation};
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter {
    max_line_length: usize,
    linted: usize,
}

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    violations: Vec<JsonViolation>,
}

#[derive(Serialize)]
struct Summary {
    total: usize,
    /// Files with at least one reported violation.
    files: usize,
    /// Files linted in the run.
    linted: usize,
}

#[derive(Serialize)]
struct JsonViolation {
    path: String,
    line: usize,
    code: &'static str,
    message: String,
}

impl JsonFormatter {
    #[must_use]
    pub const fn new(max_line_length: usize) -> Self {
        Self {
            max_line_length,
            linted: 0,
        }
    }

    #[must_use]
    pub const fn with_linted(mut self, linted: usize) -> Self {
        self.linted = linted;
        self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LINE_LENGTH)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, violations: &[Violation]) -> Result<String> {
        let mut files: Vec<_> = violations.iter().map(|v| v.path.as_path()).collect();
        files.sort();
        files.dedup();

        let output = JsonOutput {
            summary: Summary {
                total: violations.len(),
                files: files.len(),
                linted: self.linted,
            },
            violations: violations
                .iter()
                .map(|v| JsonViolation {
                    path: v.path.display().to_string(),
                    line: v.line,
                    code: v.kind.code(),
                    message: v.kind.message(self.max_line_length),
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}
