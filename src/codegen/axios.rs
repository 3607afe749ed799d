//! axios generator
//!
//! Renders a single configuration object and one `axios(options)` call.
//! `method` (lower-cased) and `url` are always present; auth uses axios's
//! native `auth` sub-object rather than an Authorization header.

use crate::codegen::literal::{js_literal, js_string};
use crate::json::parse_body;
use crate::request::NormalizedRequest;

pub fn generate(req: &NormalizedRequest) -> String {
    let mut fields: Vec<String> = vec![
        format!("  method: {}", js_string(&req.method.to_lowercase())),
        format!("  url: {}", js_string(&req.url)),
    ];

    if let Some(auth) = &req.auth {
        fields.push(format!(
            "  auth: {{\n    username: {},\n    password: {}\n  }}",
            js_string(&auth.user),
            js_string(&auth.password)
        ));
    }

    if !req.headers.is_empty() {
        let entries: Vec<String> = req
            .headers
            .iter()
            .map(|(name, value)| format!("    {}: {}", js_string(name), js_string(value)))
            .collect();
        fields.push(format!("  headers: {{\n{}\n  }}", entries.join(",\n")));
    }

    if let Some(body) = &req.body {
        let rendered = match parse_body(body) {
            Some(value) if req.is_json => js_literal(&value, 2),
            _ => js_string(body),
        };
        fields.push(format!("  data: {}", rendered));
    }

    format!(
        "const axios = require('axios');\n\n\
         const options = {{\n{}\n}};\n\n\
         axios(options)\n  \
         .then(response => console.log(response.data))\n  \
         .catch(error => console.error(error));\n",
        fields.join(",\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_method_and_url_always_present() {
        let req = parse("curl https://api.example.com/users").unwrap();
        let code = generate(&req);
        assert!(code.contains("method: 'get'"));
        assert!(code.contains("url: 'https://api.example.com/users'"));
        assert!(code.contains("const axios = require('axios');"));
    }

    #[test]
    fn test_native_auth_object_no_header() {
        let req = parse("curl https://api.example.com/secure -u admin:secret").unwrap();
        let code = generate(&req);
        assert!(code.contains("auth: {\n    username: 'admin',\n    password: 'secret'\n  }"));
        assert!(!code.contains("Authorization"));
    }

    #[test]
    fn test_json_body_as_data_literal() {
        let req = parse(
            r#"curl -X POST https://x.test -H 'Content-Type: application/json' -d '{"a": 1, "b": [true, null]}'"#,
        )
        .unwrap();
        let code = generate(&req);
        assert!(code.contains("method: 'post'"));
        assert!(code.contains("data: {\n    'a': 1,\n    'b': [\n      true,\n      null\n    ]\n  }"));
    }

    #[test]
    fn test_absent_body_omits_data() {
        let req = parse("curl https://x.test").unwrap();
        assert!(!generate(&req).contains("data:"));
    }

    #[test]
    fn test_form_body_is_string_data() {
        let req = parse(
            "curl https://x.test -H 'Content-Type: application/x-www-form-urlencoded' -d 'a=1&b=2'",
        )
        .unwrap();
        let code = generate(&req);
        assert!(code.contains("data: 'a=1&b=2'"));
    }
}
