//! Node http/https transport generator
//!
//! The one target that needs the URL taken apart: protocol picks the
//! `http` or `https` module, and hostname, port and path+query land in the
//! options object. The port is written only when it differs from the
//! protocol default. When a body is present, `Content-Length` is appended
//! after the user's headers as a `Buffer.byteLength(body)` expression, and
//! the basic-auth header after that.
//!
//! An unparseable URL degrades to a commented skeleton instead of failing;
//! this is the only generator with a documented degraded-output path.

use tracing::warn;
use url::Url;

use crate::codegen::basic_auth_header;
use crate::codegen::literal::{js_literal, js_string};
use crate::json::parse_body;
use crate::request::NormalizedRequest;

pub fn generate(req: &NormalizedRequest) -> String {
    let parsed = match Url::parse(&req.url) {
        Ok(url) if url.host_str().is_some() => url,
        _ => {
            warn!(url = %req.url, "URL not parseable, emitting skeleton");
            return fallback_skeleton(&req.url);
        }
    };

    let module = if parsed.scheme() == "https" { "https" } else { "http" };
    let hostname = parsed.host_str().unwrap_or_default().to_string();
    // Url::port() is None when the port matches the scheme default, which
    // is exactly the "only when it differs" rule.
    let port = parsed.port();
    let path = match parsed.query() {
        Some(q) => format!("{}?{}", parsed.path(), q),
        None => parsed.path().to_string(),
    };

    let mut code = format!("const {} = require('{}');\n\n", module, module);

    if let Some(body) = &req.body {
        let rendered = match parse_body(body) {
            Some(value) if req.is_json => {
                format!("JSON.stringify({})", js_literal(&value, 0))
            }
            _ => js_string(body),
        };
        code.push_str(&format!("const body = {};\n\n", rendered));
    }

    let mut fields: Vec<String> = Vec::new();
    if req.method != "GET" {
        fields.push(format!("  method: {}", js_string(&req.method)));
    }
    fields.push(format!("  hostname: {}", js_string(&hostname)));
    if let Some(port) = port {
        fields.push(format!("  port: {}", port));
    }
    fields.push(format!("  path: {}", js_string(&path)));

    let mut header_entries: Vec<String> = req
        .headers
        .iter()
        .map(|(name, value)| format!("    {}: {}", js_string(name), js_string(value)))
        .collect();
    if req.has_body() {
        header_entries.push("    'Content-Length': Buffer.byteLength(body)".to_string());
    }
    if let Some(auth) = &req.auth {
        header_entries.push(format!(
            "    'Authorization': {}",
            js_string(&basic_auth_header(auth))
        ));
    }
    if !header_entries.is_empty() {
        fields.push(format!("  headers: {{\n{}\n  }}", header_entries.join(",\n")));
    }

    code.push_str(&format!("const options = {{\n{}\n}};\n\n", fields.join(",\n")));

    code.push_str(&format!("const req = {}.request(options, res => {{\n", module));
    code.push_str("  let data = '';\n");
    code.push_str("  res.on('data', chunk => {\n    data += chunk;\n  });\n");
    code.push_str("  res.on('end', () => {\n    console.log(JSON.parse(data));\n  });\n");
    code.push_str("});\n\n");

    if req.has_body() {
        code.push_str("req.write(body);\n");
    }
    code.push_str("req.end();\n");

    code
}

/// Degraded output when the URL cannot be split: a commented notice plus a
/// minimal skeleton for the user to fill in.
fn fallback_skeleton(raw_url: &str) -> String {
    format!(
        "// NOTE: could not parse URL {}; fill in hostname and path manually\n\
         const http = require('http');\n\n\
         const options = {{\n  \
         hostname: 'example.com',\n  \
         path: '/'\n\
         }};\n\n\
         const req = http.request(options, res => {{\n  \
         let data = '';\n  \
         res.on('data', chunk => {{\n    data += chunk;\n  }});\n  \
         res.on('end', () => {{\n    console.log(data);\n  }});\n\
         }});\n\n\
         req.end();\n",
        js_string(raw_url)
    )
}
