//! List items: a bullet or `<digits>.` marker at line start.

use super::{is_blank, is_line_start, line_end, past_newline, skip_blanks, trim_blanks_end};
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Length of the list marker at `pos`, if there is one.
#[inline]
fn marker_len(bytes: &[u8], pos: usize) -> Option<usize> {
    match bytes.get(pos)? {
        b'-' | b'*' | b'+' => Some(1),
        b if b.is_ascii_digit() => {
            let digits = bytes[pos..].iter().take_while(|b| b.is_ascii_digit()).count();
            (bytes.get(pos + digits) == Some(&b'.')).then_some(digits + 1)
        }
        _ => None,
    }
}

pub(super) fn matches(bytes: &[u8], pos: usize) -> bool {
    if !is_line_start(bytes, pos) {
        return false;
    }

    let marker_start = skip_blanks(bytes, pos);
    let Some(len) = marker_len(bytes, marker_start) else {
        return false;
    };
    matches!(bytes.get(marker_start + len), Some(b' ' | b'\t' | b'\n'))
}

pub(super) fn parse<'a>(input: &'a str, pos: &mut usize) -> Token<'a> {
    let bytes = input.as_bytes();
    let start = *pos;

    let marker_start = skip_blanks(bytes, start);
    let marker_end = marker_start + marker_len(bytes, marker_start).unwrap_or(0);

    let mut content_start = marker_end;
    if bytes.get(content_start).copied().is_some_and(is_blank) {
        content_start += 1;
    }

    let end_of_line = line_end(bytes, content_start);
    let content_end = trim_blanks_end(bytes, content_start, end_of_line);

    *pos = past_newline(bytes, end_of_line);

    Token::new(
        TokenKind::ListItem,
        &input[content_start..content_end],
        &input[marker_start..marker_end],
        Span::from_range(start, *pos),
    )
}
