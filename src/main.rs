use clap::Parser;
use tracing_subscriber::EnvFilter;

use lint_style::cli::Cli;
use lint_style::commands::run_lint;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    std::process::exit(run_lint(&cli));
}

/// Logs go to stderr so the report on stdout can be redirected into the
/// exceptions file. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
