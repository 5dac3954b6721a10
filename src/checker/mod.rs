mod forbidden_char;
mod header;
mod import_only;
mod long_lines;
mod reserved_notation;
mod set_option;
mod violation;

pub use forbidden_char::ForbiddenCharCheck;
pub use header::{HeaderCheck, HeaderScanner, HeaderState};
pub use import_only::{ImportScan, scan_imports};
pub use long_lines::{DEFAULT_MAX_LINE_LENGTH, LongLineCheck};
pub use reserved_notation::ReservedNotationCheck;
pub use set_option::SetOptionCheck;
pub use violation::{Violation, ViolationKind};

use crate::source::SourceFile;

pub trait StyleCheck {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Check one file, returning violations in line order.
    fn check(&self, file: &SourceFile) -> Vec<Violation>;
}

#[cfg(test)]
mod test_fixtures;
