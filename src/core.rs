//! Main execution logic
//!
//! Resolves the input command (argument, sample, or stdin), runs it through
//! the parser and the selected generator, and maps failures to exit codes.
//! Parse failures are expected user input, so they surface as one stderr
//! line with nothing on stdout.

use std::io::Read;

use tracing::debug;

use crate::cli::Args;
use crate::codegen::generate;
use crate::errors::{CurlgenError, Result};
use crate::parser::parse;
use crate::samples;
use crate::status::ExitStatus;

/// Run a parsed CLI invocation to completion.
pub fn run(args: Args) -> ExitStatus {
    match execute(args) {
        Ok(output) => {
            print!("{}", output);
            ExitStatus::Success
        }
        Err(e) => {
            eprintln!("curlgen: {}", e);
            ExitStatus::Error
        }
    }
}

fn execute(args: Args) -> Result<String> {
    if args.list_samples {
        let mut out = String::new();
        for sample in samples::all() {
            out.push_str(&format!("{:<12}{}\n", sample.label, sample.command));
        }
        return Ok(out);
    }

    let command = resolve_command(&args)?;
    debug!(target = ?args.target, "converting command");

    let request = parse(&command)?;
    Ok(generate(args.target, &request))
}

fn resolve_command(args: &Args) -> Result<String> {
    if let Some(label) = &args.sample {
        return samples::find(label)
            .map(|s| s.command.to_string())
            .ok_or_else(|| CurlgenError::UnknownSample(label.clone()));
    }

    match &args.command {
        Some(cmd) if cmd != "-" => Ok(cmd.clone()),
        _ => {
            if atty::is(atty::Stream::Stdin) {
                return Err(CurlgenError::NoInput);
            }
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
