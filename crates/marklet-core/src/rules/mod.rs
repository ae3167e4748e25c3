//! Matching rules for block and inline constructs.
//!
//! A [`Rule`] answers two questions about a position in its input:
//! whether the construct it recognizes starts there ([`Rule::matches`]), and
//! what token it produces when it does ([`Rule::parse`]). `matches` is a pure
//! predicate; `parse` advances the position past everything the construct
//! owns, closing delimiter and trailing newline included.
//!
//! The rule set is closed and order-sensitive. [`BLOCK_RULES`] and
//! [`INLINE_RULES`] list the rules in priority order: when several could
//! match at the same position, the first one wins.
//!
//! All triggers and delimiters are ASCII, so every slice a rule takes lands
//! on a UTF-8 character boundary.

mod code;
mod emphasis;
mod heading;
mod link;
mod list;
mod thematic;

use memchr::memchr;

use crate::token::Token;

/// A single construct recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `# Heading` lines.
    Heading,
    /// `- item`, `* item`, `+ item` and `1. item` lines.
    List,
    /// Code spans and fenced code blocks.
    Code,
    /// `[label](url)` links.
    Link,
    /// `**bold**` spans.
    Bold,
    /// `*italic*` and `_italic_` spans.
    Italic,
    /// `---`, `***` and `___` lines.
    ThematicBreak,
}

/// Rules tried at every position of the whole document.
pub const BLOCK_RULES: &[Rule] = &[Rule::Heading, Rule::List];

/// Rules tried inside text runs, heading text and list item text.
pub const INLINE_RULES: &[Rule] = &[
    Rule::Code,
    Rule::Link,
    Rule::Bold,
    Rule::Italic,
    Rule::ThematicBreak,
];

impl Rule {
    /// Check whether this rule's construct starts at `pos`.
    ///
    /// Never panics, for any `pos` including positions past the end.
    #[inline]
    pub fn matches(self, input: &str, pos: usize) -> bool {
        let bytes = input.as_bytes();
        if pos >= bytes.len() {
            return false;
        }
        match self {
            Rule::Heading => heading::matches(bytes, pos),
            Rule::List => list::matches(bytes, pos),
            Rule::Code => code::matches(bytes, pos),
            Rule::Link => link::matches(bytes, pos),
            Rule::Bold => emphasis::matches_bold(bytes, pos),
            Rule::Italic => emphasis::matches_italic(bytes, pos),
            Rule::ThematicBreak => thematic::matches(bytes, pos),
        }
    }

    /// Consume the construct at `*pos` and return its token.
    ///
    /// Spans are relative to `input`. Must only be called right after
    /// [`Rule::matches`] returned true for the same `input` and `pos`.
    #[inline]
    pub fn parse<'a>(self, input: &'a str, pos: &mut usize) -> Token<'a> {
        debug_assert!(
            self.matches(input, *pos),
            "{:?} parsed at {} without a match",
            self,
            *pos
        );
        match self {
            Rule::Heading => heading::parse(input, pos),
            Rule::List => list::parse(input, pos),
            Rule::Code => code::parse(input, pos),
            Rule::Link => link::parse(input, pos),
            Rule::Bold => emphasis::parse_bold(input, pos),
            Rule::Italic => emphasis::parse_italic(input, pos),
            Rule::ThematicBreak => thematic::parse(input, pos),
        }
    }
}

// =============================================================================
// Scanning helpers
// =============================================================================

/// Position 0 or directly after a newline.
#[inline(always)]
fn is_line_start(bytes: &[u8], pos: usize) -> bool {
    pos == 0 || bytes[pos - 1] == b'\n'
}

/// Index of the newline ending the line containing `pos`, or the input length.
#[inline(always)]
fn line_end(bytes: &[u8], pos: usize) -> usize {
    match memchr(b'\n', &bytes[pos..]) {
        Some(offset) => pos + offset,
        None => bytes.len(),
    }
}

/// Step over the newline at `pos`, if there is one.
#[inline(always)]
fn past_newline(bytes: &[u8], pos: usize) -> usize {
    if bytes.get(pos) == Some(&b'\n') {
        pos + 1
    } else {
        pos
    }
}

#[inline(always)]
fn is_blank(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// Number of consecutive `byte`s starting at `pos`.
#[inline]
fn count_run(bytes: &[u8], pos: usize, byte: u8) -> usize {
    bytes
        .get(pos..)
        .map_or(0, |rest| rest.iter().take_while(|&&b| b == byte).count())
}

/// First position at or after `pos` that is not a space or tab.
#[inline]
fn skip_blanks(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && is_blank(bytes[pos]) {
        pos += 1;
    }
    pos
}

/// Trim spaces and tabs off the end of `start..end`.
#[inline]
fn trim_blanks_end(bytes: &[u8], start: usize, mut end: usize) -> usize {
    while end > start && is_blank(bytes[end - 1]) {
        end -= 1;
    }
    end
}

/// Whether the byte at `pos` is preceded by an odd number of backslashes.
#[inline]
fn is_escaped(bytes: &[u8], pos: usize) -> bool {
    bytes[..pos]
        .iter()
        .rev()
        .take_while(|&&b| b == b'\\')
        .count()
        % 2
        == 1
}
