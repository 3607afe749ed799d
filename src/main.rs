use clap::Parser;
use tracing_subscriber::EnvFilter;

use curlgen::cli::Args;
use curlgen::core;
use curlgen::status::ExitStatus;

/// Entry point - parses arguments and calls core::run()
///
/// Returns ExitStatus directly, which implements std::process::Termination.
fn main() -> ExitStatus {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    core::run(args)
}
