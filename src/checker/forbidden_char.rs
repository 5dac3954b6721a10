use crate::classifier::code_lines;
use crate::source::SourceFile;
use crate::syntax::FORBIDDEN_CHAR;

use super::{StyleCheck, Violation, ViolationKind};

/// Flags code lines containing the forbidden glyph.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForbiddenCharCheck;

impl StyleCheck for ForbiddenCharCheck {
    fn name(&self) -> &'static str {
        "forbidden-char"
    }

    fn check(&self, file: &SourceFile) -> Vec<Violation> {
        code_lines(file)
            .filter(|(_, line)| line.contains(FORBIDDEN_CHAR))
            .map(|(line_nr, _)| {
                Violation::new(ViolationKind::ForbiddenCharacter, line_nr, file.path())
            })
            .collect()
    }
}
