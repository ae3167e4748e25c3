//! ATX headings: 1-6 `#` at line start.

use super::{is_line_start, line_end, past_newline};
use crate::span::Span;
use crate::token::{Token, TokenKind};

const MAX_LEVEL: usize = 6;

/// Count of leading `#`, capped at the deepest level.
#[inline]
fn count_hashes(bytes: &[u8], pos: usize) -> usize {
    bytes[pos..]
        .iter()
        .take(MAX_LEVEL)
        .take_while(|&&b| b == b'#')
        .count()
}

pub(super) fn matches(bytes: &[u8], pos: usize) -> bool {
    if !is_line_start(bytes, pos) || bytes[pos] != b'#' {
        return false;
    }

    // Seven hashes leave a `#` after the capped run and fail here.
    let level = count_hashes(bytes, pos);
    matches!(bytes.get(pos + level), None | Some(b' ') | Some(b'\n'))
}

pub(super) fn parse<'a>(input: &'a str, pos: &mut usize) -> Token<'a> {
    let bytes = input.as_bytes();
    let start = *pos;
    let level = count_hashes(bytes, start);

    let mut text_start = start + level;
    if bytes.get(text_start) == Some(&b' ') {
        text_start += 1;
    }

    let end_of_line = line_end(bytes, text_start);
    let mut text_end = end_of_line;
    while text_end > text_start && matches!(bytes[text_end - 1], b' ' | b'#') {
        text_end -= 1;
    }

    *pos = past_newline(bytes, end_of_line);

    Token::new(
        TokenKind::Heading,
        &input[text_start..text_end],
        &input[start..start + level],
        Span::from_range(start, *pos),
    )
}
