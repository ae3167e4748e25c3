//! Inline links: `[label](destination)`.
//!
//! Brackets in the label and parentheses in the destination nest. A
//! backslash-escaped bracket or parenthesis does not count toward the depth.
//! The destination is either `<...>` or a bare URL; a bare URL ends at the
//! first space or tab, and anything between there and the closing `)` (a
//! title, usually) is dropped.

use std::ops::Range;

use memchr::memchr;

use super::{is_escaped, skip_blanks, trim_blanks_end};
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Shortest possible link, `[a](b)`.
const MIN_LINK_LEN: usize = 6;

pub(super) fn matches(bytes: &[u8], pos: usize) -> bool {
    if bytes[pos] != b'[' || pos + MIN_LINK_LEN > bytes.len() || is_escaped(bytes, pos) {
        return false;
    }

    let Some(label_end) = find_closing_bracket(bytes, pos + 1) else {
        return false;
    };
    if label_end == pos + 1 || bytes.get(label_end + 1) != Some(&b'(') {
        return false;
    }
    find_closing_paren(bytes, label_end + 2).is_some()
}

pub(super) fn parse<'a>(input: &'a str, pos: &mut usize) -> Token<'a> {
    let bytes = input.as_bytes();
    let start = *pos;

    let link = find_closing_bracket(bytes, start + 1)
        .filter(|&label_end| bytes.get(label_end + 1) == Some(&b'('))
        .and_then(|label_end| {
            destination(bytes, label_end + 2).map(|(url, close)| (label_end, url, close))
        });

    let Some((label_end, url, close)) = link else {
        // Give up on the bracket alone; scanning resumes right after it.
        log::trace!("link at byte {} has no usable destination", start);
        *pos = start + 1;
        return Token::text(&input[start..start + 1], Span::from_range(start, *pos));
    };

    *pos = close + 1;
    Token::new(
        TokenKind::Link,
        &input[start + 1..label_end],
        &input[url],
        Span::from_range(start, *pos),
    )
}

/// The `]` closing a label whose `[` sits just before `from`.
fn find_closing_bracket(bytes: &[u8], from: usize) -> Option<usize> {
    let mut depth = 1usize;
    let mut cursor = from;
    while cursor < bytes.len() {
        if !is_escaped(bytes, cursor) {
            match bytes[cursor] {
                b'[' => depth += 1,
                b']' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(cursor);
                    }
                }
                _ => {}
            }
        }
        cursor += 1;
    }
    None
}

/// The `)` closing a destination whose `(` sits just before `from`.
///
/// Parentheses inside `<...>` are not counted.
fn find_closing_paren(bytes: &[u8], from: usize) -> Option<usize> {
    let mut depth = 1usize;
    let mut in_angle = false;
    let mut cursor = from;
    while cursor < bytes.len() {
        match bytes[cursor] {
            b'\\' if cursor + 1 < bytes.len() => {
                cursor += 2;
                continue;
            }
            b'<' if !in_angle => in_angle = true,
            b'>' if in_angle => in_angle = false,
            b'(' if !in_angle => depth += 1,
            b')' if !in_angle => {
                depth -= 1;
                if depth == 0 {
                    return Some(cursor);
                }
            }
            _ => {}
        }
        cursor += 1;
    }
    None
}

/// Extract the URL starting at `from`, returning its byte range and the
/// position of the `)` that ends the link.
fn destination(bytes: &[u8], from: usize) -> Option<(Range<usize>, usize)> {
    let mut cursor = skip_blanks(bytes, from);

    if bytes.get(cursor) == Some(&b'<') {
        let url_start = cursor + 1;
        let url_end = url_start + memchr(b'>', bytes.get(url_start..)?)?;
        cursor = skip_blanks(bytes, url_end + 1);
        return (bytes.get(cursor) == Some(&b')')).then_some((url_start..url_end, cursor));
    }

    let url_start = cursor;
    let mut depth = 1usize;
    while cursor < bytes.len() {
        match bytes[cursor] {
            b'\\' if cursor + 1 < bytes.len() => {
                cursor += 2;
                continue;
            }
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    let url_end = trim_blanks_end(bytes, url_start, cursor);
                    return Some((url_start..url_end, cursor));
                }
            }
            b' ' | b'\t' if depth == 1 => {
                let close = cursor + memchr(b')', &bytes[cursor..])?;
                return Some((url_start..cursor, close));
            }
            _ => {}
        }
        cursor += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_at(input: &str, at: usize) -> (Token<'_>, usize) {
        let mut pos = at;
        let token = parse(input, &mut pos);
        (token, pos)
    }

    #[test]
    fn basic_link() {
        let input = "[Example](https://example.com) after";
        assert!(matches(input.as_bytes(), 0));
        let (token, pos) = parse_at(input, 0);
        assert_eq!(token.kind, TokenKind::Link);
        assert_eq!(token.value, "Example");
        assert_eq!(token.meta, "https://example.com");
        assert_eq!(pos, 30);
    }

    #[test]
    fn nested_brackets_in_label() {
        let (token, _) = parse_at("[a [b] c](u)", 0);
        assert_eq!(token.value, "a [b] c");
        assert_eq!(token.meta, "u");
    }

    #[test]
    fn escaped_brackets_do_not_nest() {
        let (token, _) = parse_at(r"[a \] b](url)", 0);
        assert_eq!(token.value, r"a \] b");
    }

    #[test]
    fn escaped_opening_bracket_is_not_a_link() {
        let input = r"\[a](b) x";
        assert!(!matches(input.as_bytes(), 1));
    }

    #[test]
    fn nested_parens_in_destination() {
        let (token, _) = parse_at("[wiki](https://x.org/A_(b)) tail", 0);
        assert_eq!(token.meta, "https://x.org/A_(b)");
    }

    #[test]
    fn angle_bracket_destination() {
        let (token, pos) = parse_at("[a](<my url>) z", 0);
        assert_eq!(token.meta, "my url");
        assert_eq!(pos, 13);
    }

    #[test]
    fn title_after_whitespace_is_dropped() {
        let input = r#"[a](http://x "title") z"#;
        let (token, pos) = parse_at(input, 0);
        assert_eq!(token.meta, "http://x");
        assert_eq!(&input[pos..], " z");
    }

    #[test]
    fn rejects_incomplete_links() {
        assert!(!matches(b"[oops", 0));
        assert!(!matches(b"[]()xxxx", 0));
        assert!(!matches(b"[label] (url)", 0));
        assert!(!matches(b"[label](url", 0));
        assert!(!matches(b"[a](b", 0));
    }

    #[test]
    fn unusable_destination_falls_back_to_bracket() {
        let input = "[a](<b> x) rest";
        assert!(matches(input.as_bytes(), 0));
        let (token, pos) = parse_at(input, 0);
        assert_eq!(token.kind, TokenKind::Text);
        assert_eq!(token.value, "[");
        assert_eq!(pos, 1);
    }
}
