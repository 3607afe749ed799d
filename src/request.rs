//! Normalized request model
//!
//! The canonical, target-independent representation of an HTTP request
//! extracted from a curl command line. Built once per parse by
//! [`crate::parser::parse`], never mutated afterwards; every generator
//! consumes it read-only.

use indexmap::IndexMap;

/// Basic-auth credentials from `-u user:password`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub user: String,
    pub password: String,
}

impl BasicAuth {
    /// Split a credentials token on the first colon.
    ///
    /// `admin:secret` -> user `admin`, password `secret`; with no colon the
    /// whole token is the user and the password is empty.
    pub fn from_token(token: &str) -> Self {
        match token.split_once(':') {
            Some((user, password)) => BasicAuth {
                user: user.to_string(),
                password: password.to_string(),
            },
            None => BasicAuth {
                user: token.to_string(),
                password: String::new(),
            },
        }
    }
}

/// Parsed curl command, normalized for code generation.
///
/// `headers` preserves insertion order; a repeated header name keeps its
/// original position and takes the latest value. `body` distinguishes
/// "no body supplied" (`None`) from an explicit empty body (`Some("")`).
#[derive(Debug, Clone)]
pub struct NormalizedRequest {
    pub url: String,
    pub method: String,
    pub headers: IndexMap<String, String>,
    pub body: Option<String>,
    pub auth: Option<BasicAuth>,
    /// Derived once by [`classify`] after parsing. Generators branch on
    /// this to pick the body-rendering strategy.
    pub is_json: bool,
    /// Derived alongside `is_json`, from the Content-Type header alone.
    /// Classification output for callers; the built-in generators render
    /// form bodies as opaque strings, so only `is_json` changes their
    /// output.
    pub is_form_urlencoded: bool,
}

impl NormalizedRequest {
    /// True when a body was supplied, including the explicit empty body.
    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }
}

/// Derive the content-type classification from final headers and body.
///
/// A body counts as JSON when the Content-Type header mentions
/// `application/json` or the body itself starts with `{` or `[`.
/// Form-urlencoded is decided by the Content-Type header alone.
pub fn classify(
    headers: &IndexMap<String, String>,
    body: Option<&str>,
) -> (bool, bool) {
    let content_type = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("Content-Type"))
        .map(|(_, v)| v.to_ascii_lowercase())
        .unwrap_or_default();

    let body_looks_json = body
        .map(|b| matches!(b.trim_start().chars().next(), Some('{') | Some('[')))
        .unwrap_or(false);

    let is_json = content_type.contains("application/json") || body_looks_json;
    let is_form = content_type.contains("application/x-www-form-urlencoded");

    (is_json, is_form)
}
