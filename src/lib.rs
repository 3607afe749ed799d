//! curlgen library interface
//!
//! Converts a curl command line into an equivalent code snippet for one of
//! five HTTP client targets.
//!
//! # Module Organization
//!
//! - [`lexer`] - Shell-like tokenizer (quotes, escapes, line continuations)
//! - [`parser`] - Flag parsing into a [`request::NormalizedRequest`]
//! - [`codegen`] - The five snippet generators and the [`codegen::Target`] selector
//! - [`json`] - Order-preserving JSON body decoding shared by the generators
//! - [`samples`] - Built-in labelled example commands
//! - [`errors`] - Error types (CurlgenError, Result)
//! - [`status`] - Exit status codes (ExitStatus)
//! - [`core`] - Main execution logic
//!
//! ```
//! use curlgen::codegen::{generate, Target};
//! use curlgen::parser::parse;
//!
//! let req = parse("curl https://api.example.com/users -H 'Accept: application/json'").unwrap();
//! let code = generate(Target::Fetch, &req);
//! assert!(code.contains("await fetch"));
//! ```

pub mod cli;
pub mod codegen;
pub mod core;
pub mod errors;
pub mod json;
pub mod lexer;
pub mod parser;
pub mod request;
pub mod samples;
pub mod status;
