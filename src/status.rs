//! Exit status codes for the CLI
//!
//! curlgen follows standard Unix exit code conventions:
//! - 0: Success
//! - 1: Any error (unparseable command, missing URL, bad invocation)

use std::process::{ExitCode, Termination};

/// Exit status codes following standard Unix conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    /// Code was generated and written to stdout
    Success = 0,
    /// Any error (input not parseable, invalid arguments)
    Error = 1,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}

impl Termination for ExitStatus {
    fn report(self) -> ExitCode {
        ExitCode::from(self as u8)
    }
}
