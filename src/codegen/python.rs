//! Python requests generator
//!
//! Emits a headers dict and a body literal (Python spellings: `True`,
//! `False`, `None`), then a single `requests` call whose keyword arguments
//! are assembled in the order headers, auth, body. Structured JSON bodies
//! go through `json=payload`; everything else through `data=`.

use crate::codegen::literal::{py_literal, py_string};
use crate::json::parse_body;
use crate::request::NormalizedRequest;

/// Methods that exist as `requests.<method>` helpers.
const KNOWN_METHODS: &[&str] = &["GET", "POST", "PUT", "DELETE", "PATCH", "HEAD", "OPTIONS"];

pub fn generate(req: &NormalizedRequest) -> String {
    let mut code = String::from("import requests\n\n");
    let mut kwargs: Vec<String> = Vec::new();

    if !req.headers.is_empty() {
        code.push_str("headers = {\n");
        for (name, value) in &req.headers {
            code.push_str(&format!("    {}: {},\n", py_string(name), py_string(value)));
        }
        code.push_str("}\n\n");
        kwargs.push("headers=headers".to_string());
    }

    if let Some(auth) = &req.auth {
        kwargs.push(format!(
            "auth=({}, {})",
            py_string(&auth.user),
            py_string(&auth.password)
        ));
    }

    if let Some(body) = &req.body {
        match parse_body(body) {
            Some(value) if req.is_json => {
                code.push_str(&format!("payload = {}\n\n", py_literal(&value, 0)));
                kwargs.push("json=payload".to_string());
            }
            _ => {
                code.push_str(&format!("data = {}\n\n", py_string(body)));
                kwargs.push("data=data".to_string());
            }
        }
    }

    let url = py_string(&req.url);
    let call_args = if kwargs.is_empty() {
        url.clone()
    } else {
        format!("{}, {}", url, kwargs.join(", "))
    };

    if KNOWN_METHODS.contains(&req.method.as_str()) {
        code.push_str(&format!(
            "response = requests.{}({})\n",
            req.method.to_lowercase(),
            call_args
        ));
    } else {
        code.push_str(&format!(
            "response = requests.request({}, {})\n",
            py_string(&req.method),
            call_args
        ));
    }

    code.push_str("print(response.json())\n");
    code
}
