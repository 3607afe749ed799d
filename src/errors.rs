//! Error types for curlgen

use thiserror::Error;

/// Main error type for curlgen
#[derive(Error, Debug)]
pub enum CurlgenError {
    /// Input is missing or does not start with the `curl` keyword.
    #[error("not a curl command")]
    NotACommand,

    /// The command parsed but contained no positional URL.
    #[error("no URL found in curl command")]
    MissingUrl,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown sample: {0}")]
    UnknownSample(String),

    #[error("no command given and stdin is a terminal")]
    NoInput,
}

pub type Result<T> = std::result::Result<T, CurlgenError>;
