//! curl command parsing
//!
//! Turns a tokenized curl invocation into a [`NormalizedRequest`]. Flag
//! handling is table-driven: each supported flag is one [`FlagSpec`] entry
//! naming its spellings, whether it consumes the following token, and the
//! effect on the request under construction. Adding a flag is a data change,
//! not a new branch.
//!
//! Only a documented subset of curl's flags is supported. Unrecognized flags
//! are ignored without consuming an argument, which keeps commands using
//! newer curl options parseable.

use indexmap::IndexMap;
use tracing::debug;

use crate::errors::{CurlgenError, Result};
use crate::lexer::tokenize;
use crate::request::{classify, BasicAuth, NormalizedRequest};

/// Request model under construction; becomes a `NormalizedRequest` only
/// once a URL is known.
#[derive(Debug, Default)]
struct RequestBuilder {
    url: Option<String>,
    method: Option<String>,
    headers: IndexMap<String, String>,
    body: Option<String>,
    auth: Option<BasicAuth>,
}

impl RequestBuilder {
    fn set_header(&mut self, name: &str, value: &str) {
        // IndexMap keeps the original position on overwrite, so a repeated
        // header stays where it first appeared with the latest value.
        self.headers.insert(name.to_string(), value.to_string());
    }
}

/// One supported flag: its spellings, arity, and effect.
struct FlagSpec {
    names: &'static [&'static str],
    takes_arg: bool,
    apply: fn(&mut RequestBuilder, &str),
}

static FLAGS: &[FlagSpec] = &[
    FlagSpec {
        names: &["-X", "--request"],
        takes_arg: true,
        apply: |b, arg| b.method = Some(arg.to_uppercase()),
    },
    FlagSpec {
        names: &["-H", "--header"],
        takes_arg: true,
        apply: |b, arg| {
            if let Some((name, value)) = arg.split_once(':') {
                b.set_header(name.trim(), value.trim());
            }
        },
    },
    FlagSpec {
        names: &["-d", "--data", "--data-raw", "--data-binary", "--data-ascii"],
        takes_arg: true,
        // Last -d wins, matching curl converters' common behavior.
        apply: |b, arg| b.body = Some(arg.to_string()),
    },
    FlagSpec {
        names: &["-u", "--user"],
        takes_arg: true,
        apply: |b, arg| b.auth = Some(BasicAuth::from_token(arg)),
    },
    FlagSpec {
        names: &["--json"],
        takes_arg: true,
        apply: |b, arg| {
            b.body = Some(arg.to_string());
            b.set_header("Content-Type", "application/json");
            b.set_header("Accept", "application/json");
        },
    },
    FlagSpec {
        names: &["--form", "-F"],
        takes_arg: true,
        // Unlike the data family, the first --form wins; later ones are
        // consumed and dropped.
        apply: |b, arg| {
            if b.body.is_none() {
                b.body = Some(arg.to_string());
            }
        },
    },
    FlagSpec {
        names: &["-b", "--cookie"],
        takes_arg: true,
        apply: |b, arg| b.set_header("Cookie", arg),
    },
    FlagSpec {
        names: &["-A", "--user-agent"],
        takes_arg: true,
        apply: |b, arg| b.set_header("User-Agent", arg),
    },
    FlagSpec {
        names: &["-e", "--referer"],
        takes_arg: true,
        apply: |b, arg| b.set_header("Referer", arg),
    },
    // Transport-behavior flags with no equivalent in generated snippets;
    // consumed so the rest of the command still parses.
    FlagSpec {
        names: &[
            "--compressed",
            "-L",
            "--location",
            "-k",
            "--insecure",
            "-s",
            "--silent",
            "-v",
            "--verbose",
            "-i",
            "--include",
        ],
        takes_arg: false,
        apply: |_, _| {},
    },
];

fn lookup_flag(token: &str) -> Option<&'static FlagSpec> {
    FLAGS.iter().find(|spec| spec.names.contains(&token))
}

/// Parse a raw curl command string into a normalized request.
pub fn parse(raw: &str) -> Result<NormalizedRequest> {
    parse_tokens(&tokenize(raw))
}

/// Parse an already-tokenized command.
///
/// Fails with [`CurlgenError::NotACommand`] unless the first token is
/// `curl` (case-insensitive), and with [`CurlgenError::MissingUrl`] when no
/// positional URL is present. No partial model is ever produced.
pub fn parse_tokens(tokens: &[String]) -> Result<NormalizedRequest> {
    match tokens.first() {
        Some(first) if first.eq_ignore_ascii_case("curl") => {}
        _ => return Err(CurlgenError::NotACommand),
    }

    let mut builder = RequestBuilder::default();
    let mut i = 1;

    while i < tokens.len() {
        let token = &tokens[i];

        if let Some(spec) = lookup_flag(token) {
            if spec.takes_arg {
                // A flag at end of input binds the empty string.
                match tokens.get(i + 1) {
                    Some(arg) => {
                        (spec.apply)(&mut builder, arg);
                        i += 2;
                    }
                    None => {
                        (spec.apply)(&mut builder, "");
                        i += 1;
                    }
                }
            } else {
                (spec.apply)(&mut builder, "");
                i += 1;
            }
        } else if !token.starts_with('-') {
            // Positional URL; the first one wins, later ones are ignored.
            if builder.url.is_none() {
                builder.url = Some(token.clone());
            }
            i += 1;
        } else {
            debug!(flag = %token, "ignoring unrecognized flag");
            i += 1;
        }
    }

    let url = builder.url.ok_or(CurlgenError::MissingUrl)?;

    let method = match builder.method {
        Some(m) => m,
        None if builder.body.is_some() => "POST".to_string(),
        None => "GET".to_string(),
    };

    let (is_json, is_form_urlencoded) = classify(&builder.headers, builder.body.as_deref());

    debug!(%url, %method, headers = builder.headers.len(), is_json, "parsed curl command");

    Ok(NormalizedRequest {
        url,
        method,
        headers: builder.headers,
        body: builder.body,
        auth: builder.auth,
        is_json,
        is_form_urlencoded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_get() {
        let req = parse("curl https://example.com").unwrap();
        assert_eq!(req.url, "https://example.com");
        assert_eq!(req.method, "GET");
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
        assert!(req.auth.is_none());
    }

    #[test]
    fn test_not_a_command() {
        assert!(matches!(parse("wget https://example.com"), Err(CurlgenError::NotACommand)));
        assert!(matches!(parse(""), Err(CurlgenError::NotACommand)));
        assert!(matches!(parse("not-a-curl-command"), Err(CurlgenError::NotACommand)));
    }

    #[test]
    fn test_command_keyword_case_insensitive() {
        assert!(parse("CURL https://example.com").is_ok());
        assert!(parse("Curl https://example.com").is_ok());
    }

    #[test]
    fn test_missing_url() {
        assert!(matches!(parse("curl"), Err(CurlgenError::MissingUrl)));
        assert!(matches!(parse("curl -s -L"), Err(CurlgenError::MissingUrl)));
    }

    #[test]
    fn test_method_defaults_to_post_with_body() {
        let req = parse("curl https://example.com -d 'a=1'").unwrap();
        assert_eq!(req.method, "POST");
    }

    #[test]
    fn test_explicit_method_uppercased() {
        let req = parse("curl -X delete https://example.com").unwrap();
        assert_eq!(req.method, "DELETE");
    }

    #[test]
    fn test_header_trimmed_and_split_on_first_colon() {
        let req = parse("curl https://x.test -H 'X-Time:  12:30:00 '").unwrap();
        assert_eq!(req.headers["X-Time"], "12:30:00");
    }

    #[test]
    fn test_header_last_write_wins() {
        let req = parse("curl https://x.test -H 'A: 1' -H 'A: 2'").unwrap();
        assert_eq!(req.headers["A"], "2");
        assert_eq!(req.headers.len(), 1);
    }

    #[test]
    fn test_duplicate_header_keeps_position() {
        let req = parse("curl https://x.test -H 'A: 1' -H 'B: 2' -H 'A: 3'").unwrap();
        let names: Vec<&String> = req.headers.keys().collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_data_last_wins() {
        let req = parse("curl https://x.test -d one -d two").unwrap();
        assert_eq!(req.body.as_deref(), Some("two"));
    }

    #[test]
    fn test_form_first_wins() {
        let req = parse("curl https://x.test -F one -F two").unwrap();
        assert_eq!(req.body.as_deref(), Some("one"));
    }

    #[test]
    fn test_json_flag_forces_headers() {
        let req = parse(r#"curl https://x.test --json '{"a":1}'"#).unwrap();
        assert_eq!(req.headers["Content-Type"], "application/json");
        assert_eq!(req.headers["Accept"], "application/json");
        assert!(req.is_json);
        assert_eq!(req.method, "POST");
    }

    #[test]
    fn test_auth_token() {
        let req = parse("curl https://api.example.com/secure -u admin:secret").unwrap();
        let auth = req.auth.unwrap();
        assert_eq!(auth.user, "admin");
        assert_eq!(auth.password, "secret");
    }

    #[test]
    fn test_cookie_agent_referer_become_headers() {
        let req = parse("curl https://x.test -b 'k=v' -A agent/1.0 -e https://ref.test").unwrap();
        assert_eq!(req.headers["Cookie"], "k=v");
        assert_eq!(req.headers["User-Agent"], "agent/1.0");
        assert_eq!(req.headers["Referer"], "https://ref.test");
    }

    #[test]
    fn test_noop_flags_consumed() {
        let req = parse("curl -s -L --compressed -k https://example.com").unwrap();
        assert_eq!(req.url, "https://example.com");
        assert_eq!(req.method, "GET");
    }

    #[test]
    fn test_unrecognized_flag_does_not_consume_argument() {
        // --retry is unsupported; "3" becomes the URL per the
        // first-non-flag rule.
        let req = parse("curl --retry 3 https://example.com").unwrap();
        assert_eq!(req.url, "3");
    }

    #[test]
    fn test_later_positional_tokens_ignored() {
        let req = parse("curl https://first.test https://second.test").unwrap();
        assert_eq!(req.url, "https://first.test");
    }

    #[test]
    fn test_flag_at_end_binds_empty() {
        let req = parse("curl https://x.test -d").unwrap();
        assert_eq!(req.body.as_deref(), Some(""));
        assert_eq!(req.method, "POST");
    }

    #[test]
    fn test_empty_quoted_body_is_a_body() {
        let req = parse("curl https://x.test -d ''").unwrap();
        assert_eq!(req.body.as_deref(), Some(""));
        assert_eq!(req.method, "POST");
        assert!(!req.is_json);
    }

    #[test]
    fn test_plaintext_body_not_json() {
        let req = parse("curl https://x.test -d 'plaintext, not json'").unwrap();
        assert!(!req.is_json);
        assert!(!req.is_form_urlencoded);
    }

    #[test]
    fn test_multiline_command() {
        let req = parse(
            "curl -X POST \\\n  https://api.example.com/users \\\n  -H 'Accept: application/json'",
        )
        .unwrap();
        assert_eq!(req.url, "https://api.example.com/users");
        assert_eq!(req.method, "POST");
    }
}
