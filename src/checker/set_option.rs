use crate::classifier::code_lines;
use crate::source::SourceFile;
use crate::syntax::{FORBIDDEN_OPTION_PREFIXES, SET_OPTION_DIRECTIVE};

use super::{StyleCheck, Violation, ViolationKind};

/// Flags `set_option` lines that enable pretty-printer, profiler, or trace
/// options.
#[derive(Debug, Clone, Copy, Default)]
pub struct SetOptionCheck;

/// The option name: the text between the first and second single space.
/// A directive with no space has no option and is never flagged.
fn option_name(line: &str) -> Option<&str> {
    line.split(' ').nth(1)
}

fn is_forbidden(line: &str) -> bool {
    if !line.starts_with(SET_OPTION_DIRECTIVE) {
        return false;
    }
    option_name(line).is_some_and(|option| {
        FORBIDDEN_OPTION_PREFIXES
            .iter()
            .any(|prefix| option.starts_with(prefix))
    })
}

impl StyleCheck for SetOptionCheck {
    fn name(&self) -> &'static str {
        "set-option"
    }

    fn check(&self, file: &SourceFile) -> Vec<Violation> {
        code_lines(file)
            .filter(|(_, line)| is_forbidden(line))
            .map(|(line_nr, _)| {
                Violation::new(ViolationKind::ForbiddenSetOption, line_nr, file.path())
            })
            .collect()
    }
}
