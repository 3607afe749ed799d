//! JavaScript fetch generator
//!
//! Renders a single awaited `fetch` call. The options object is only
//! emitted when something in it would differ from fetch's defaults, and
//! `method` is omitted for plain GET since that is fetch's default.

use crate::codegen::basic_auth_header;
use crate::codegen::literal::{js_literal, js_string};
use crate::json::parse_body;
use crate::request::NormalizedRequest;

pub fn generate(req: &NormalizedRequest) -> String {
    let mut fields: Vec<String> = Vec::new();

    if req.method != "GET" {
        fields.push(format!("  method: {}", js_string(&req.method)));
    }

    // fetch has no native basic-auth support; the Authorization header
    // goes in last.
    if !req.headers.is_empty() || req.auth.is_some() {
        let mut entries: Vec<String> = req
            .headers
            .iter()
            .map(|(name, value)| format!("    {}: {}", js_string(name), js_string(value)))
            .collect();
        if let Some(auth) = &req.auth {
            entries.push(format!("    'Authorization': {}", js_string(&basic_auth_header(auth))));
        }
        fields.push(format!("  headers: {{\n{}\n  }}", entries.join(",\n")));
    }

    if let Some(body) = &req.body {
        let rendered = match parse_body(body) {
            Some(value) if req.is_json => {
                format!("JSON.stringify({})", js_literal(&value, 2))
            }
            _ => js_string(body),
        };
        fields.push(format!("  body: {}", rendered));
    }

    let mut code = String::new();
    if fields.is_empty() {
        code.push_str(&format!("const response = await fetch({});\n", js_string(&req.url)));
    } else {
        code.push_str(&format!(
            "const response = await fetch({}, {{\n{}\n}});\n",
            js_string(&req.url),
            fields.join(",\n")
        ));
    }
    code.push_str("\nconst data = await response.json();\nconsole.log(data);\n");
    code
}
