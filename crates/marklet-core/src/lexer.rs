//! Two-level lexer: block rules over the whole input, inline rules over
//! text runs and over the text of headings and list items.
//!
//! Both levels share one scanning loop. At every byte offset the rules are
//! tried in priority order; the first match flushes the pending text run and
//! emits its token. With no match the pending run grows by one byte, so
//! every rule gets a chance at every offset and the scan always terminates.
//!
//! # Ownership
//!
//! - Zero-copy: token `value` and `meta` borrow from the input
//! - Inline passes see only their own slice; spans are mapped back to
//!   absolute input offsets

use crate::rules::{Rule, BLOCK_RULES, INLINE_RULES};
use crate::span::Span;
use crate::token::Token;

/// Block-level lexer over a complete document.
///
/// ```rust
/// use marklet_core::{Lexer, TokenKind};
///
/// let tokens = Lexer::new("# Title\n").tokenize();
/// assert_eq!(tokens[0].kind, TokenKind::Heading);
/// assert_eq!(tokens[1].kind, TokenKind::EndOfInput);
/// ```
pub struct Lexer<'a> {
    /// The complete input text.
    input: &'a str,
    /// Current byte offset.
    offset: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self { input, offset: 0 }
    }

    /// Get the current byte offset.
    #[inline(always)]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Check if all input has been consumed.
    #[inline(always)]
    pub fn is_eof(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// Scan the whole input.
    ///
    /// The result is never empty and always ends with
    /// [`crate::TokenKind::EndOfInput`]. Top-level spans tile the input exactly.
    pub fn tokenize(mut self) -> Vec<Token<'a>> {
        let len = self.input.len();
        if len == 0 {
            return vec![Token::end_of_input(0)];
        }

        let mut tokens = scan(self.input, &mut self.offset, BLOCK_RULES);

        for token in &mut tokens {
            if token.kind.has_inline_children() {
                let base = value_offset(self.input, token.value);
                token.children = tokenize_inline(token.value, base);
            }
        }

        tokens.push(Token::end_of_input(len));
        log::debug!("lexed {} bytes into {} tokens", len, tokens.len());
        tokens
    }
}

/// Scan `text` with the inline rules only.
///
/// `base_offset` is the position of `text` inside the root input; it is
/// added to every span so inline tokens point at absolute offsets. Line
/// starts and end of input are judged relative to `text` alone.
pub fn tokenize_inline(text: &str, base_offset: u32) -> Vec<Token<'_>> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut pos = 0;
    let mut tokens = scan(text, &mut pos, INLINE_RULES);
    for token in &mut tokens {
        token.shift(base_offset);
    }
    tokens
}

/// The shared fallback-scanning loop. Unmatched bytes collect into text runs.
fn scan<'a>(input: &'a str, pos: &mut usize, rules: &[Rule]) -> Vec<Token<'a>> {
    let mut tokens = Vec::with_capacity(16);
    let mut text_start = *pos;

    while *pos < input.len() {
        let Some(rule) = rules.iter().find(|rule| rule.matches(input, *pos)) else {
            *pos += 1;
            continue;
        };

        if text_start < *pos {
            tokens.push(text_run(input, text_start, *pos));
        }

        let at = *pos;
        let token = rule.parse(input, pos);
        log::trace!("{:?} matched at {}..{}", rule, at, *pos);
        tokens.push(token);
        text_start = *pos;
    }

    if text_start < input.len() {
        tokens.push(text_run(input, text_start, input.len()));
    }

    tokens
}

#[inline]
fn text_run(input: &str, start: usize, end: usize) -> Token<'_> {
    Token::text(&input[start..end], Span::from_range(start, end))
}

/// Byte offset of `value` inside `input`.
///
/// `value` is always a subslice of `input`, so the pointer distance is its
/// position.
#[inline]
fn value_offset(input: &str, value: &str) -> u32 {
    (value.as_ptr() as usize - input.as_ptr() as usize) as u32
}
