use crate::baseline::ExceptionRegistry;
use crate::lint::LintOutcome;
use crate::{EXIT_SUCCESS, EXIT_VIOLATIONS};

/// Determine exit code from the lint outcome.
///
/// With an empty exceptions registry the run is regenerating the exceptions
/// file, so violations are expected and the run succeeds.
pub fn determine_exit_code(outcome: &LintOutcome, exceptions: &ExceptionRegistry) -> i32 {
    if outcome.has_new_violations() && !exceptions.is_empty() {
        EXIT_VIOLATIONS
    } else {
        EXIT_SUCCESS
    }
}
