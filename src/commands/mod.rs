mod exit;
pub mod lint;

pub use exit::determine_exit_code;
pub use lint::{run_lint, run_lint_impl};
