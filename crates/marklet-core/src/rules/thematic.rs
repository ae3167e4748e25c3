//! Thematic breaks: a line of at least three `-`, `*` or `_`.

use super::{is_blank, is_line_start, past_newline};
use crate::span::Span;
use crate::token::{Token, TokenKind};

const MIN_MARKS: usize = 3;

pub(super) fn matches(bytes: &[u8], pos: usize) -> bool {
    if !is_line_start(bytes, pos) {
        return false;
    }

    let mark = bytes[pos];
    if !matches!(mark, b'-' | b'*' | b'_') {
        return false;
    }

    let mut marks = 0;
    for &b in bytes[pos..].iter().take_while(|&&b| b != b'\n') {
        if b == mark {
            marks += 1;
        } else if !is_blank(b) {
            return false;
        }
    }
    marks >= MIN_MARKS
}

pub(super) fn parse<'a>(input: &'a str, pos: &mut usize) -> Token<'a> {
    let bytes = input.as_bytes();
    let start = *pos;
    let mark = bytes[start];

    let mut cursor = start;
    while cursor < bytes.len() && (bytes[cursor] == mark || is_blank(bytes[cursor])) {
        cursor += 1;
    }
    *pos = past_newline(bytes, cursor);

    Token::new(
        TokenKind::ThematicBreak,
        "",
        "",
        Span::from_range(start, *pos),
    )
}
