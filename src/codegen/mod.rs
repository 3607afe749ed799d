//! Code snippet generation
//!
//! Five independent generators render a [`NormalizedRequest`] as source
//! text for one HTTP client target:
//!
//! - **fetch** — JavaScript `fetch` with an options object
//! - **axios** — axios with a single configuration object
//! - **python** — Python `requests`
//! - **go** — Go `net/http` with an explicit request builder
//! - **node** — Node's raw `http`/`https` transport module
//!
//! Each generator is a pure function over the same input; there is no
//! shared mutable state and generation never fails. Every edge case
//! (absent body, body that only looks like JSON, unparseable URL) has a
//! defined fallback rendering.

mod axios;
mod fetch;
mod golang;
mod literal;
mod node_http;
mod python;

use base64::Engine;
use clap::ValueEnum;

use crate::request::{BasicAuth, NormalizedRequest};

/// Supported output targets for code generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    /// JavaScript fetch API
    #[value(alias = "js", alias = "javascript")]
    Fetch,
    /// axios config-object call
    Axios,
    /// Python requests
    #[value(alias = "py", alias = "requests")]
    Python,
    /// Go net/http
    #[value(alias = "golang")]
    Go,
    /// Node.js http/https module
    #[value(alias = "nodejs")]
    Node,
}

/// Generate a code snippet for the given target.
pub fn generate(target: Target, req: &NormalizedRequest) -> String {
    match target {
        Target::Fetch => fetch::generate(req),
        Target::Axios => axios::generate(req),
        Target::Python => python::generate(req),
        Target::Go => golang::generate(req),
        Target::Node => node_http::generate(req),
    }
}

/// `Basic <base64(user:password)>` header value for targets without a
/// native basic-auth mechanism.
pub(crate) fn basic_auth_header(auth: &BasicAuth) -> String {
    let credentials = format!("{}:{}", auth.user, auth.password);
    let encoded = base64::engine::general_purpose::STANDARD.encode(credentials.as_bytes());
    format!("Basic {}", encoded)
}
