//! CLI argument definitions using clap

use clap::Parser;

use crate::codegen::Target;

/// Convert a curl command into a ready-to-run code snippet.
///
/// The command is read from the positional argument, or from stdin when no
/// argument is given. Output is the generated code on stdout, nothing else.
#[derive(Parser, Debug, Clone)]
#[command(name = "curlgen", version, about, long_about = None)]
pub struct Args {
    /// The curl command, as a single shell-quoted string.
    /// Reads stdin to EOF when omitted.
    #[arg(value_name = "COMMAND")]
    pub command: Option<String>,

    /// Output target
    #[arg(short = 't', long = "target", value_name = "TARGET", value_enum, default_value = "fetch")]
    pub target: Target,

    /// Use a built-in sample command instead of COMMAND
    #[arg(long = "sample", value_name = "LABEL", conflicts_with = "command")]
    pub sample: Option<String>,

    /// List the built-in sample commands and exit
    #[arg(long = "list-samples", action = clap::ArgAction::SetTrue)]
    pub list_samples: bool,
}
