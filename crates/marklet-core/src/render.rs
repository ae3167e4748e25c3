//! Single-pass HTML renderer.
//!
//! The renderer walks the top-level token sequence once and tracks which
//! block contexts are open: a paragraph, and a list that is either ordered
//! or unordered. Block tokens close what they must before writing their own
//! markup; inline tokens found at the top level open a paragraph when none
//! is open.

use std::fmt::Write as _;

use crate::token::{Token, TokenKind};

/// HTML renderer state.
#[derive(Debug, Default)]
pub struct Renderer {
    out: String,
    in_paragraph: bool,
    in_list: bool,
    ordered: bool,
}

impl Renderer {
    /// Create a renderer with no open blocks.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a token sequence produced by [`crate::Lexer::tokenize`].
    ///
    /// Consumes the renderer: its state only makes sense for one sequence.
    pub fn render(mut self, tokens: &[Token<'_>]) -> String {
        self.out.reserve(tokens.iter().map(|t| t.span.len() as usize).sum());
        for token in tokens {
            self.block(token);
        }
        // Sequences that skipped the end marker still get their blocks closed.
        self.close_list();
        self.close_paragraph();
        log::debug!("rendered {} tokens into {} bytes", tokens.len(), self.out.len());
        self.out
    }

    fn block(&mut self, token: &Token<'_>) {
        if token.kind != TokenKind::ListItem {
            self.close_list();
        }

        match token.kind {
            TokenKind::Heading => {
                self.close_paragraph();
                let level = token.heading_level();
                let _ = write!(self.out, "<h{}>", level);
                escape_into(&mut self.out, token.value);
                let _ = writeln!(self.out, "</h{}>", level);
            }
            TokenKind::ListItem => {
                let ordered = token.is_ordered();
                if !self.in_list {
                    self.open_list(ordered);
                } else if ordered != self.ordered {
                    self.close_list();
                    self.open_list(ordered);
                }
                inline(&mut self.out, token);
            }
            TokenKind::Text => {
                self.close_paragraph();
                if !token.value.is_empty() && token.value != "\n" {
                    self.open_paragraph();
                    inline(&mut self.out, token);
                }
            }
            TokenKind::Bold | TokenKind::Italic | TokenKind::Link => {
                self.open_paragraph();
                inline(&mut self.out, token);
            }
            TokenKind::Code | TokenKind::ThematicBreak => {
                self.close_paragraph();
                inline(&mut self.out, token);
            }
            TokenKind::EndOfInput => {
                self.close_list();
                self.close_paragraph();
            }
            TokenKind::Image | TokenKind::Paragraph | TokenKind::Quote => {}
        }
    }

    #[inline]
    fn open_paragraph(&mut self) {
        if !self.in_paragraph {
            self.out.push_str("<p>");
            self.in_paragraph = true;
        }
    }

    #[inline]
    fn close_paragraph(&mut self) {
        if self.in_paragraph {
            self.out.push_str("</p>\n");
            self.in_paragraph = false;
        }
    }

    #[inline]
    fn open_list(&mut self, ordered: bool) {
        self.out.push_str(if ordered { "<ol>\n" } else { "<ul>\n" });
        self.in_list = true;
        self.ordered = ordered;
    }

    #[inline]
    fn close_list(&mut self) {
        if self.in_list {
            self.out
                .push_str(if self.ordered { "</ol>\n" } else { "</ul>\n" });
            self.in_list = false;
        }
    }
}

/// Render one token's markup, recursing into children.
fn inline(out: &mut String, token: &Token<'_>) {
    match token.kind {
        TokenKind::Bold => {
            out.push_str("<strong>");
            escape_into(out, token.value);
            out.push_str("</strong>");
        }
        TokenKind::Italic => {
            out.push_str("<em>");
            escape_into(out, token.value);
            out.push_str("</em>");
        }
        TokenKind::Link => {
            out.push_str("<a href=\"");
            escape_into(out, token.meta);
            out.push_str("\">");
            escape_into(out, token.value);
            out.push_str("</a>");
        }
        TokenKind::Code if token.is_code_block() => {
            out.push_str("<pre><code class=\"language-");
            escape_into(out, token.meta);
            out.push_str("\">");
            escape_into(out, token.value);
            out.push_str("</code></pre>\n");
        }
        TokenKind::Code => {
            out.push_str("<code>");
            escape_into(out, token.value);
            out.push_str("</code>");
        }
        TokenKind::ThematicBreak => out.push_str("<hr/>\n"),
        TokenKind::ListItem => {
            out.push_str("<li>");
            children_or_value(out, token);
            out.push_str("</li>\n");
        }
        TokenKind::Heading | TokenKind::Text => children_or_value(out, token),
        _ => escape_into(out, token.value),
    }
}

fn children_or_value(out: &mut String, token: &Token<'_>) {
    if token.children.is_empty() {
        escape_into(out, token.value);
    } else {
        for child in &token.children {
            inline(out, child);
        }
    }
}

/// Escape `<`, `>`, `&`, `"` and `'` for HTML text and attribute values.
///
/// ```rust
/// assert_eq!(marklet_core::render::escape_html("a<b & 'c'"), "a&lt;b &amp; &#39;c&#39;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(&mut out, text);
    out
}

/// Append `text` to `out`, escaped.
pub fn escape_into(out: &mut String, text: &str) {
    let mut last = 0;
    for (i, b) in text.bytes().enumerate() {
        let entity = match b {
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'&' => "&amp;",
            b'"' => "&quot;",
            b'\'' => "&#39;",
            _ => continue,
        };
        out.push_str(&text[last..i]);
        out.push_str(entity);
        last = i + 1;
    }
    out.push_str(&text[last..]);
}
