//! Built-in sample commands
//!
//! A fixed table of labelled curl invocations used to seed the input, for
//! demos and for `--list-samples`. Not part of the transformation logic.

/// A labelled example command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub label: &'static str,
    pub command: &'static str,
}

static SAMPLES: &[Sample] = &[
    Sample {
        label: "get",
        command: "curl https://api.example.com/users -H 'Accept: application/json'",
    },
    Sample {
        label: "post-json",
        command: r#"curl -X POST https://api.example.com/users -H 'Content-Type: application/json' -d '{"name":"John","email":"john@example.com"}'"#,
    },
    Sample {
        label: "auth",
        command: "curl https://api.example.com/secure -u admin:secret",
    },
    Sample {
        label: "form",
        command: "curl -X POST https://api.example.com/login -H 'Content-Type: application/x-www-form-urlencoded' -d 'user=john&pass=secret'",
    },
    Sample {
        label: "full",
        command: "curl -X PUT https://api.example.com:8443/items/7 -H 'Content-Type: application/json' -H 'X-Request-Id: 42' -A 'curlgen/0.2' -b 'session=abc123' --json '{\"price\": 9.5, \"active\": true}'",
    },
];

/// All samples, in display order.
pub fn all() -> &'static [Sample] {
    SAMPLES
}

/// Look up a sample by its label.
pub fn find(label: &str) -> Option<&'static Sample> {
    SAMPLES.iter().find(|s| s.label == label)
}
