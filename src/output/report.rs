use crate::baseline::ExceptionRegistry;
use crate::checker::Violation;
use crate::source::SourceFile;

/// Drops violations covered by the exception registry.
#[derive(Debug, Clone, Copy)]
pub struct Reporter<'a> {
    exceptions: &'a ExceptionRegistry,
}

impl<'a> Reporter<'a> {
    #[must_use]
    pub const fn new(exceptions: &'a ExceptionRegistry) -> Self {
        Self { exceptions }
    }

    /// Keep the violations of `file` that are not accepted, in encounter order.
    #[must_use]
    pub fn unsuppressed(&self, file: &SourceFile, violations: Vec<Violation>) -> Vec<Violation> {
        violations
            .into_iter()
            .filter(|v| !self.exceptions.contains(v.kind, file.resolved()))
            .collect()
    }
}
