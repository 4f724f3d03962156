//! JSONP response decoding.
//!
//! A JSONP response is a script whose only effect is a single call
//! `callee(payload)`. Engines decorate that call in different ways:
//!
//! ```text
//! jsonp_1_0(["rust",["rust lang"]])
//! /**/jsonp_1_0(["rust",["rust lang"]]);
//! if(typeof jsonp_1_0 == 'function') jsonp_1_0(["rust",["rust lang"]]);
//! window.baidu.sug({q:"rust",p:false,s:["rust lang"]});
//! ```
//!
//! Some payloads are JavaScript object literals rather than strict JSON
//! (bare keys), so payload parsing falls back to quoting bare keys.

use serde_json::Value;

use crate::error::SuggestError;

/// Identifiers that can precede `(` without being the callback.
const KEYWORDS: &[&str] = &[
    "if", "typeof", "function", "return", "while", "for", "switch", "catch", "new", "void",
];

/// A decoded callback invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    /// The invoked function, e.g. `jsonp_1700000000000_3` or `window.baidu.sug`.
    pub callee: String,
    /// The single argument passed to the callee.
    pub payload: Value,
}

/// Parse a JSONP script body into its callback invocation.
///
/// # Errors
///
/// Returns [`SuggestError::Parse`] if the body contains no function call
/// or the argument is not a JSON value.
pub fn parse_invocation(body: &str) -> Result<Invocation, SuggestError> {
    let body = body.trim();
    let close = body
        .rfind(')')
        .ok_or_else(|| SuggestError::Parse("no callback invocation in response".into()))?;

    for (open, _) in body.match_indices('(') {
        if open >= close {
            break;
        }
        let callee = callee_before(&body[..open]);
        if callee.is_empty() || KEYWORDS.contains(&callee) {
            continue;
        }
        let payload = parse_payload(&body[open + 1..close])?;
        return Ok(Invocation {
            callee: callee.to_owned(),
            payload,
        });
    }

    Err(SuggestError::Parse(
        "no callback invocation in response".into(),
    ))
}

/// Decode a response body that is either plain JSON or a JSONP invocation.
///
/// # Errors
///
/// Returns [`SuggestError::Parse`] if the body is neither.
pub fn decode_body(body: &str) -> Result<Value, SuggestError> {
    let trimmed = body.trim();
    if let Ok(value) = serde_json::from_str(trimmed) {
        return Ok(value);
    }
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return parse_payload(trimmed);
    }
    parse_invocation(trimmed).map(|invocation| invocation.payload)
}

/// Parse a callback argument as strict JSON, then as a relaxed object literal.
fn parse_payload(text: &str) -> Result<Value, SuggestError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(SuggestError::Parse("callback invoked without a payload".into()));
    }
    match serde_json::from_str(text) {
        Ok(value) => Ok(value),
        Err(strict) => serde_json::from_str(&quote_bare_keys(text))
            .map_err(|_| SuggestError::Parse(format!("invalid callback payload: {strict}"))),
    }
}

/// The dotted identifier path immediately preceding a `(`.
fn callee_before(prefix: &str) -> &str {
    let prefix = prefix.trim_end();
    let start = prefix
        .char_indices()
        .rev()
        .take_while(|&(_, c)| is_ident_char(c) || c == '.')
        .last()
        .map_or(prefix.len(), |(i, _)| i);
    let callee = prefix[start..].trim_start_matches('.');
    match callee.chars().next() {
        Some(c) if c.is_ascii_digit() => "",
        _ => callee,
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Rewrite `{q:"a",s:["b"]}` as `{"q":"a","s":["b"]}`.
///
/// Only identifiers in key position (after `{` or `,`, followed by `:`)
/// outside string literals are quoted.
fn quote_bare_keys(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut chars = text.char_indices().peekable();
    let mut in_string = false;
    let mut escaped = false;
    let mut expect_key = false;

    while let Some((i, c)) = chars.next() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                expect_key = false;
                out.push(c);
            }
            '{' | ',' => {
                expect_key = true;
                out.push(c);
            }
            c if expect_key && (c.is_ascii_alphabetic() || c == '_' || c == '$') => {
                let end = text[i..]
                    .find(|ch: char| !is_ident_char(ch))
                    .map_or(text.len(), |n| i + n);
                let ident = &text[i..end];
                if text[end..].trim_start().starts_with(':') {
                    out.push('"');
                    out.push_str(ident);
                    out.push('"');
                } else {
                    out.push_str(ident);
                }
                while chars.peek().is_some_and(|&(j, _)| j < end) {
                    chars.next();
                }
                expect_key = false;
            }
            c if c.is_whitespace() => out.push(c),
            _ => {
                expect_key = false;
                out.push(c);
            }
        }
    }

    out
}
