//! Go net/http generator
//!
//! Renders a complete program with an explicit `http.NewRequest`. The body
//! reader is nil when there is no body; headers are set one call at a time
//! after construction; basic auth uses `req.SetBasicAuth`. The snippet is
//! illustrative, so every error path is `log.Fatal`.

use crate::codegen::literal::go_string;
use crate::json::parse_body;
use crate::request::NormalizedRequest;

pub fn generate(req: &NormalizedRequest) -> String {
    let mut code = String::from("package main\n\nimport (\n");
    code.push_str("\t\"fmt\"\n");
    code.push_str("\t\"io\"\n");
    code.push_str("\t\"log\"\n");
    code.push_str("\t\"net/http\"\n");
    if req.has_body() {
        code.push_str("\t\"strings\"\n");
    }
    code.push_str(")\n\nfunc main() {\n");

    if let Some(body) = &req.body {
        // Re-indent decodable JSON so the embedded literal reads well;
        // anything else is passed through untouched.
        let text = match parse_body(body) {
            Some(value) if req.is_json => {
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.clone())
            }
            _ => body.clone(),
        };
        code.push_str(&format!("\tbody := strings.NewReader({})\n\n", go_string(&text)));
        code.push_str(&format!(
            "\treq, err := http.NewRequest({}, {}, body)\n",
            go_quoted(&req.method),
            go_quoted(&req.url)
        ));
    } else {
        code.push_str(&format!(
            "\treq, err := http.NewRequest({}, {}, nil)\n",
            go_quoted(&req.method),
            go_quoted(&req.url)
        ));
    }

    code.push_str("\tif err != nil {\n\t\tlog.Fatal(err)\n\t}\n");

    if !req.headers.is_empty() || req.auth.is_some() {
        code.push('\n');
    }
    for (name, value) in &req.headers {
        code.push_str(&format!(
            "\treq.Header.Set({}, {})\n",
            go_quoted(name),
            go_quoted(value)
        ));
    }
    if let Some(auth) = &req.auth {
        code.push_str(&format!(
            "\treq.SetBasicAuth({}, {})\n",
            go_quoted(&auth.user),
            go_quoted(&auth.password)
        ));
    }

    code.push_str("\n\tresp, err := http.DefaultClient.Do(req)\n");
    code.push_str("\tif err != nil {\n\t\tlog.Fatal(err)\n\t}\n");
    code.push_str("\tdefer resp.Body.Close()\n\n");
    code.push_str("\tdata, err := io.ReadAll(resp.Body)\n");
    code.push_str("\tif err != nil {\n\t\tlog.Fatal(err)\n\t}\n");
    code.push_str("\tfmt.Println(string(data))\n");
    code.push_str("}\n");

    code
}

/// A double-quoted, escaped Go string literal.
fn go_quoted(s: &str) -> String {
    format!(
        "\"{}\"",
        s.replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    )
}
