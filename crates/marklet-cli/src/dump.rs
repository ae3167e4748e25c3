//! Token stream output for the `tokens` command.

use std::fmt::Write as _;

use marklet_core::Token;
use serde::Serialize;

use crate::error::{CliError, CliErrorKind};

const PREVIEW_LIMIT: usize = 50;
const PREVIEW_KEEP: usize = 47;

// =============================================================================
// Text Output
// =============================================================================

pub fn text(file: &str, tokens: &[Token]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {} ===", file);
    let _ = writeln!(out, "Total tokens: {}", tokens.len());
    for token in tokens {
        write_token(&mut out, token, 0);
    }
    out
}

fn write_token(out: &mut String, token: &Token, depth: usize) {
    let _ = write!(out, "{}{}", "  ".repeat(depth), token.kind.name());
    if !token.value.is_empty() {
        let _ = write!(out, " | value: {:?}", preview(token.value));
    }
    if !token.meta.is_empty() {
        let _ = write!(out, " | meta: {:?}", token.meta);
    }
    let _ = writeln!(out, " | span: [{}-{}]", token.span.start, token.span.end);

    for child in &token.children {
        write_token(out, child, depth + 1);
    }
}

/// Shorten long values to their first characters plus an ellipsis.
fn preview(value: &str) -> String {
    if value.chars().count() > PREVIEW_LIMIT {
        let mut short: String = value.chars().take(PREVIEW_KEEP).collect();
        short.push_str("...");
        short
    } else {
        value.to_string()
    }
}

// =============================================================================
// JSON Output
// =============================================================================

#[derive(Serialize)]
struct JsonFile<'a> {
    file: &'a str,
    tokens: Vec<JsonToken<'a>>,
}

#[derive(Serialize)]
struct JsonToken<'a> {
    kind: &'static str,
    value: &'a str,
    meta: &'a str,
    span: JsonSpan,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<JsonToken<'a>>,
}

#[derive(Serialize)]
struct JsonSpan {
    start: u32,
    end: u32,
}

fn convert_token<'a>(token: &Token<'a>) -> JsonToken<'a> {
    JsonToken {
        kind: token.kind.name(),
        value: token.value,
        meta: token.meta,
        span: JsonSpan {
            start: token.span.start,
            end: token.span.end,
        },
        children: token.children.iter().map(convert_token).collect(),
    }
}

pub fn json(file: &str, tokens: &[Token]) -> Result<String, CliError> {
    let doc = JsonFile {
        file,
        tokens: tokens.iter().map(convert_token).collect(),
    };
    serde_json::to_string_pretty(&doc)
        .map(|mut s| {
            s.push('\n');
            s
        })
        .map_err(|e| CliError::new(CliErrorKind::Write, format!("failed to encode tokens: {}", e)))
}
