//! Token types shared by the lexer and the renderer.
//!
//! Tokens are:
//!
//! - **Zero-copy**: `value` and `meta` borrow from the root input buffer
//! - **Span-tracked**: every token records the bytes it was scanned from
//! - **Two-level**: block tokens hold the inline tokenization of their text
//!   in `children`; inline tokens are leaves

use crate::span::Span;

/// What a token represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// ATX heading, level in `meta` as a run of `#`.
    Heading,
    /// `**strong**` text.
    Bold,
    /// `*emphasis*` or `_emphasis_` text.
    Italic,
    /// `[label](url)`, URL in `meta`.
    Link,
    /// Literal text run.
    Text,
    /// List item, marker in `meta`.
    ListItem,
    /// Reserved. No rule produces it.
    Image,
    /// Reserved. No rule produces it.
    Paragraph,
    /// Code span or fenced code block, language tag in `meta`.
    Code,
    /// Reserved. No rule produces it.
    Quote,
    /// `---`, `***` or `___` line.
    ThematicBreak,
    /// Zero-width marker closing every token sequence.
    EndOfInput,
}

impl TokenKind {
    /// Stable display name, used by token dumps.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Heading => "Heading",
            TokenKind::Bold => "Bold",
            TokenKind::Italic => "Italic",
            TokenKind::Link => "Link",
            TokenKind::Text => "Text",
            TokenKind::ListItem => "ListItem",
            TokenKind::Image => "Image",
            TokenKind::Paragraph => "Paragraph",
            TokenKind::Code => "Code",
            TokenKind::Quote => "Quote",
            TokenKind::ThematicBreak => "ThematicBreak",
            TokenKind::EndOfInput => "EndOfInput",
        }
    }

    /// Whether the lexer fills `children` for tokens of this kind.
    #[inline]
    pub const fn has_inline_children(self) -> bool {
        matches!(
            self,
            TokenKind::Heading | TokenKind::ListItem | TokenKind::Text
        )
    }
}

/// A single scanned construct.
///
/// The meaning of `meta` depends on `kind`:
///
/// | kind | `meta` |
/// |---|---|
/// | Heading | `#` run, length = level |
/// | Link | destination URL |
/// | Code | fence language tag, empty for inline code |
/// | ListItem | marker (`-`, `*`, `+` or `12.`) |
/// | Bold / Italic | the delimiter |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// Token kind.
    pub kind: TokenKind,
    /// Primary textual payload.
    pub value: &'a str,
    /// Kind-dependent auxiliary datum.
    pub meta: &'a str,
    /// Inline tokenization of `value` (Heading, ListItem, block Text only).
    pub children: Vec<Token<'a>>,
    /// Source bytes this token was scanned from.
    pub span: Span,
}

impl<'a> Token<'a> {
    /// Create a leaf token.
    #[inline]
    pub fn new(kind: TokenKind, value: &'a str, meta: &'a str, span: Span) -> Self {
        Self {
            kind,
            value,
            meta,
            children: Vec::new(),
            span,
        }
    }

    /// Create a plain text token without children.
    #[inline]
    pub fn text(value: &'a str, span: Span) -> Self {
        Self::new(TokenKind::Text, value, "", span)
    }

    /// The end-of-input marker for a source of `len` bytes.
    #[inline]
    pub fn end_of_input(len: usize) -> Self {
        Self::new(TokenKind::EndOfInput, "", "", Span::empty_at(len as u32))
    }

    /// Heading level (1-6); 0 for non-headings.
    #[inline]
    pub fn heading_level(&self) -> usize {
        match self.kind {
            TokenKind::Heading => self.meta.len(),
            _ => 0,
        }
    }

    /// Whether a list item belongs to an ordered list.
    #[inline]
    pub fn is_ordered(&self) -> bool {
        self.meta.as_bytes().first().is_some_and(u8::is_ascii_digit)
    }

    /// Whether a code token is a fenced block rather than an inline span.
    #[inline]
    pub fn is_code_block(&self) -> bool {
        self.kind == TokenKind::Code && !self.meta.is_empty()
    }

    /// Move this token's span by `offset` bytes.
    pub(crate) fn shift(&mut self, offset: u32) {
        self.span = self.span.shifted(offset);
        for child in &mut self.children {
            child.shift(offset);
        }
    }
}
