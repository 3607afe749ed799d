//! Shell-like tokenizer for curl command lines
//!
//! Splits a raw command string into tokens the way a shell would, far enough
//! for curl invocations: single and double quoting plus backslash-newline
//! line continuations. Pipes, subshells, globbing and variable expansion are
//! out of scope.
//!
//! The tokenizer never fails. An unterminated quote ends the scan and emits
//! whatever was collected; if that leaves the command incomplete, the parser
//! reports it.

/// Tokenize a curl command, handling quoted strings and line continuations.
///
/// Empty or whitespace-only input yields an empty vec.
pub fn tokenize(raw: &str) -> Vec<String> {
    // A trailing backslash before a newline joins the lines into one
    // logical command.
    let joined = raw.trim().replace("\\\r\n", " ").replace("\\\n", " ");

    let mut tokens = Vec::new();
    let mut current = String::new();
    // Distinguishes "no token yet" from an empty quoted token like ''.
    let mut started = false;
    let mut chars = joined.chars();

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                started = true;
                // Single quotes: everything literal until the closing quote.
                for q in chars.by_ref() {
                    if q == '\'' {
                        break;
                    }
                    current.push(q);
                }
            }
            '"' => {
                started = true;
                while let Some(q) = chars.next() {
                    match q {
                        '"' => break,
                        '\\' => match chars.next() {
                            Some('n') => current.push('\n'),
                            Some('t') => current.push('\t'),
                            Some('r') => current.push('\r'),
                            Some(other) => current.push(other),
                            None => break,
                        },
                        _ => current.push(q),
                    }
                }
            }
            c if c.is_whitespace() => {
                if started {
                    tokens.push(std::mem::take(&mut current));
                    started = false;
                }
            }
            _ => {
                started = true;
                current.push(c);
            }
        }
    }

    if started {
        tokens.push(current);
    }

    tokens
}
