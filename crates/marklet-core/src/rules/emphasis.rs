//! Bold (`**text**`) and italic (`*text*`, `_text_`) spans.
//!
//! Neither nests. Bold runs to the next literal `**`. Italic text is cut at
//! the first space or newline after the opening marker, not at the closing
//! marker, so italic text never spans whitespace; the cut character is
//! consumed with the span.

use memchr::{memchr, memchr2, memmem};

use crate::span::Span;
use crate::token::{Token, TokenKind};

/// `**` plus at least one content byte and one more byte after it.
const MIN_BOLD_LEN: usize = 4;

/// Start of the first `**` at or after `from`.
#[inline]
fn closing_bold(bytes: &[u8], from: usize) -> Option<usize> {
    memmem::find(bytes.get(from..)?, b"**").map(|offset| from + offset)
}

pub(super) fn matches_bold(bytes: &[u8], pos: usize) -> bool {
    pos + MIN_BOLD_LEN <= bytes.len()
        && bytes[pos] == b'*'
        && bytes[pos + 1] == b'*'
        && bytes[pos + 2] != b'*'
        && closing_bold(bytes, pos + 2).is_some()
}

pub(super) fn parse_bold<'a>(input: &'a str, pos: &mut usize) -> Token<'a> {
    let bytes = input.as_bytes();
    let start = *pos;
    let text_start = start + 2;
    let text_end = closing_bold(bytes, text_start).unwrap_or(bytes.len());

    *pos = (text_end + 2).min(bytes.len());
    Token::new(
        TokenKind::Bold,
        &input[text_start..text_end],
        &input[start..text_start],
        Span::from_range(start, *pos),
    )
}

pub(super) fn matches_italic(bytes: &[u8], pos: usize) -> bool {
    let marker = bytes[pos];
    if pos + 1 >= bytes.len() || !matches!(marker, b'*' | b'_') {
        return false;
    }

    // The marker must occur again, and not as the very next byte.
    matches!(memchr(marker, &bytes[pos + 1..]), Some(offset) if offset > 0)
}

pub(super) fn parse_italic<'a>(input: &'a str, pos: &mut usize) -> Token<'a> {
    let bytes = input.as_bytes();
    let start = *pos;
    let text_start = start + 1;
    let text_end = memchr2(b' ', b'\n', &bytes[text_start..])
        .map_or(bytes.len(), |offset| text_start + offset);

    *pos = (text_end + 1).min(bytes.len());
    Token::new(
        TokenKind::Italic,
        &input[text_start..text_end],
        &input[start..text_start],
        Span::from_range(start, *pos),
    )
}
