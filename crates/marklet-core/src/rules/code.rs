//! Code spans (one or two backticks) and fenced code blocks (three or more
//! backticks at line start).
//!
//! The closing run must have exactly the opening length. An unterminated
//! fenced block takes everything up to the end of input.

use memchr::memchr;

use super::{count_run, is_blank, is_line_start, line_end, past_newline, skip_blanks};
use crate::span::Span;
use crate::token::{Token, TokenKind};

const MIN_FENCE: usize = 3;

#[inline]
fn is_fenced_block(bytes: &[u8], pos: usize) -> bool {
    is_line_start(bytes, pos) && count_run(bytes, pos, b'`') >= MIN_FENCE
}

/// Opening run length and position of the closing run for a one- or
/// two-backtick span closed before the end of the line.
fn span_close(bytes: &[u8], pos: usize) -> Option<(usize, usize)> {
    let fence = count_run(bytes, pos, b'`');
    if fence == 0 || fence >= MIN_FENCE {
        return None;
    }

    let mut cursor = pos + fence;
    while cursor < bytes.len() {
        match bytes[cursor] {
            b'`' => {
                let run = count_run(bytes, cursor, b'`');
                if run == fence {
                    return Some((fence, cursor));
                }
                cursor += run;
            }
            b'\n' => return None,
            _ => cursor += 1,
        }
    }
    None
}

#[inline]
fn is_code_span(bytes: &[u8], pos: usize) -> bool {
    span_close(bytes, pos).is_some()
}

pub(super) fn matches(bytes: &[u8], pos: usize) -> bool {
    bytes[pos] == b'`' && (is_fenced_block(bytes, pos) || is_code_span(bytes, pos))
}

pub(super) fn parse<'a>(input: &'a str, pos: &mut usize) -> Token<'a> {
    if is_fenced_block(input.as_bytes(), *pos) {
        parse_block(input, pos)
    } else {
        parse_span(input, pos)
    }
}

fn parse_block<'a>(input: &'a str, pos: &mut usize) -> Token<'a> {
    let bytes = input.as_bytes();
    let start = *pos;
    let fence = count_run(bytes, start, b'`');

    // Info string: the first word after the fence is the language tag,
    // anything after it on the fence line is dropped.
    let lang_start = skip_blanks(bytes, start + fence);
    let lang_end = lang_start
        + bytes[lang_start..]
            .iter()
            .take_while(|&&b| b != b'\n' && !is_blank(b))
            .count();
    let language = &input[lang_start..lang_end];

    let content_start = past_newline(bytes, line_end(bytes, lang_end));

    let mut line = content_start;
    while line < bytes.len() {
        if count_run(bytes, line, b'`') == fence {
            let content_end = if line > content_start && bytes[line - 1] == b'\n' {
                line - 1
            } else {
                line
            };
            *pos = past_newline(bytes, line + fence);
            return Token::new(
                TokenKind::Code,
                &input[content_start..content_end],
                language,
                Span::from_range(start, *pos),
            );
        }
        match memchr(b'\n', &bytes[line..]) {
            Some(offset) => line += offset + 1,
            None => break,
        }
    }

    log::debug!("unterminated code fence at byte {}", start);
    *pos = bytes.len();
    Token::new(
        TokenKind::Code,
        &input[content_start.min(bytes.len())..],
        language,
        Span::from_range(start, *pos),
    )
}

fn parse_span<'a>(input: &'a str, pos: &mut usize) -> Token<'a> {
    let start = *pos;
    let Some((fence, close)) = span_close(input.as_bytes(), start) else {
        *pos = start + count_run(input.as_bytes(), start, b'`').max(1);
        return Token::text(&input[start..*pos], Span::from_range(start, *pos));
    };

    *pos = close + fence;
    Token::new(
        TokenKind::Code,
        &input[start + fence..close],
        "",
        Span::from_range(start, *pos),
    )
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
    fn fenced_block_with_language() {
        let input = "```js\ncode\n```";
        assert!(matches(input.as_bytes(), 0));
        let (token, pos) = parse_at(input, 0);
        assert_eq!(token.value, "code");
        assert_eq!(token.meta, "js");
        assert!(token.is_code_block());
        assert_eq!(pos, input.len());
    }

    #[test]
    fn fence_info_keeps_first_word() {
        let (token, _) = parse_at("```  rust ignore\nfn main() {}\n```\n", 0);
        assert_eq!(token.meta, "rust");
        assert_eq!(token.value, "fn main() {}");
    }

    #[test]
    fn closing_fence_must_match_length() {
        let input = "````\na\n```\nb\n````\nafter";
        let (token, pos) = parse_at(input, 0);
        assert_eq!(token.value, "a\n```\nb");
        assert_eq!(&input[pos..], "after");
    }

    #[test]
    fn unterminated_block_runs_to_end() {
        let input = "```rust\nfn main() {}";
        let (token, pos) = parse_at(input, 0);
        assert_eq!(token.value, "fn main() {}");
        assert_eq!(token.meta, "rust");
        assert_eq!(pos, input.len());
    }

    #[test]
    fn fence_without_language_has_empty_meta() {
        let (token, _) = parse_at("```\nplain\n```", 0);
        assert_eq!(token.meta, "");
        assert_eq!(token.value, "plain");
        assert!(!token.is_code_block());
    }

    #[test]
    fn empty_block() {
        let (token, pos) = parse_at("```x\n```\n", 0);
        assert_eq!(token.value, "");
        assert_eq!(pos, 9);
    }

    #[test]
    fn inline_spans() {
        let (token, pos) = parse_at("`code` after", 0);
        assert_eq!(token.value, "code");
        assert_eq!(pos, 6);

        let (token, pos) = parse_at("``a ` b`` after", 0);
        assert_eq!(token.value, "a ` b");
        assert_eq!(pos, 9);
    }

    #[test]
    fn unmatched_span_parses_as_literal_run() {
        let (token, pos) = parse_at("``x` y", 0);
        assert_eq!(token.kind, TokenKind::Text);
        assert_eq!(token.value, "``");
        assert_eq!(pos, 2);
    }

    #[test]
    fn inline_span_must_close_on_same_line() {
        assert!(!matches(b"`open\nclose`", 0));
        assert!(!matches(b"`never", 0));
        assert!(!matches(b"``one`", 0));
    }

    #[test]
    fn long_fence_mid_line_is_not_code() {
        assert!(!matches(b"x ```y```", 2));
    }
}
