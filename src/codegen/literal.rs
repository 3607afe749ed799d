//! Target-native literal rendering
//!
//! Shared between the generators: turning the order-preserving JSON tree
//! from [`crate::json::parse_body`] into a nested literal in the target's
//! own syntax, plus string escaping helpers. Each target keeps its own
//! spelling of booleans and null; the tree itself is decoded exactly once.

use serde_json::Value;

/// Escape into a single-quoted JavaScript or Python string body.
fn escape_single_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// A single-quoted JavaScript string literal.
pub fn js_string(s: &str) -> String {
    format!("'{}'", escape_single_quoted(s))
}

/// A single-quoted Python string literal.
pub fn py_string(s: &str) -> String {
    // Same escape set; Python accepts all of them in single quotes.
    format!("'{}'", escape_single_quoted(s))
}

/// A Go string literal: raw backtick form when possible, interpreted
/// otherwise.
pub fn go_string(s: &str) -> String {
    if s.contains('`') {
        format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        format!("`{}`", s)
    }
}

/// Render a JSON tree as a JavaScript literal, indented with two spaces.
///
/// `indent` is the column of the opening token; nested lines indent
/// relative to it. The first line carries no leading whitespace so the
/// caller can embed the literal mid-line.
pub fn js_literal(value: &Value, indent: usize) -> String {
    render(value, indent, 2, "true", "false", "null", js_string)
}

/// Render a JSON tree as a Python literal with `True`/`False`/`None`
/// spellings, indented with four spaces.
pub fn py_literal(value: &Value, indent: usize) -> String {
    render(value, indent, 4, "True", "False", "None", py_string)
}

fn render(
    value: &Value,
    indent: usize,
    unit: usize,
    true_kw: &str,
    false_kw: &str,
    null_kw: &str,
    string_fn: fn(&str) -> String,
) -> String {
    match value {
        Value::Null => null_kw.to_string(),
        Value::Bool(true) => true_kw.to_string(),
        Value::Bool(false) => false_kw.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => string_fn(s),
        Value::Array(items) => {
            if items.is_empty() {
                return "[]".to_string();
            }
            let inner = " ".repeat(indent + unit);
            let close = " ".repeat(indent);
            let rendered: Vec<String> = items
                .iter()
                .map(|item| {
                    format!(
                        "{}{}",
                        inner,
                        render(item, indent + unit, unit, true_kw, false_kw, null_kw, string_fn)
                    )
                })
                .collect();
            format!("[\n{}\n{}]", rendered.join(",\n"), close)
        }
        Value::Object(map) => {
            if map.is_empty() {
                return "{}".to_string();
            }
            let inner = " ".repeat(indent + unit);
            let close = " ".repeat(indent);
            let rendered: Vec<String> = map
                .iter()
                .map(|(key, val)| {
                    format!(
                        "{}{}: {}",
                        inner,
                        string_fn(key),
                        render(val, indent + unit, unit, true_kw, false_kw, null_kw, string_fn)
                    )
                })
                .collect();
            format!("{{\n{}\n{}}}", rendered.join(",\n"), close)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::parse_body;

    #[test]
    fn test_js_string_escapes() {
        assert_eq!(js_string("it's"), r"'it\'s'");
        assert_eq!(js_string("a\nb"), r"'a\nb'");
    }

    #[test]
    fn test_go_string_backtick_fallback() {
        assert_eq!(go_string("plain"), "`plain`");
        assert_eq!(go_string("has ` tick"), "\"has ` tick\"");
    }

    #[test]
    fn test_js_literal_object() {
        let value = parse_body(r#"{"name": "John", "active": true, "note": null}"#).unwrap();
        let rendered = js_literal(&value, 0);
        assert_eq!(
            rendered,
            "{\n  'name': 'John',\n  'active': true,\n  'note': null\n}"
        );
    }

    #[test]
    fn test_py_literal_spellings() {
        let value = parse_body(r#"{"ok": false, "missing": null}"#).unwrap();
        let rendered = py_literal(&value, 0);
        assert!(rendered.contains("'ok': False"));
        assert!(rendered.contains("'missing': None"));
    }

    #[test]
    fn test_nested_indent_tracks_parent() {
        let value = parse_body(r#"{"a": {"b": [1, 2]}}"#).unwrap();
        let rendered = js_literal(&value, 0);
        assert_eq!(
            rendered,
            "{\n  'a': {\n    'b': [\n      1,\n      2\n    ]\n  }\n}"
        );
    }

    #[test]
    fn test_scalars() {
        let value = parse_body("42").unwrap();
        assert_eq!(js_literal(&value, 0), "42");
        let value = parse_body("[]").unwrap();
        assert_eq!(js_literal(&value, 0), "[]");
        let value = parse_body("{}").unwrap();
        assert_eq!(py_literal(&value, 0), "{}");
    }
}
