//! # Marklet Core
//!
//! A small Markdown-subset to HTML converter built as two passes: a
//! rule-driven lexer producing span-annotated tokens, and a single-pass
//! renderer that groups them into paragraphs and lists.
//!
//! ## Quick Start
//!
//! ```rust
//! let html = marklet_core::to_html("# Title\n\n- one\n- two\n");
//! assert_eq!(html, "<h1>Title</h1>\n<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n");
//! ```
//!
//! ## Working with tokens
//!
//! ```rust
//! use marklet_core::{Lexer, Renderer, TokenKind};
//!
//! let input = "Some **bold** words";
//! let tokens = Lexer::new(input).tokenize();
//! assert_eq!(tokens[0].kind, TokenKind::Text);
//! assert_eq!(tokens[0].children[1].kind, TokenKind::Bold);
//!
//! let html = Renderer::new().render(&tokens);
//! assert_eq!(html, "<p>Some <strong>bold</strong> words</p>\n");
//! ```
//!
//! ## Supported syntax
//!
//! - Block level: `#` headings, `-`/`*`/`+`/`1.` list items
//! - Inline level: code spans and fenced code, `[links](url)`, `**bold**`,
//!   `*italic*`/`_italic_`, thematic breaks
//!
//! Conversion never fails: anything that does not form a construct is kept
//! as literal text.

pub mod lexer;
pub mod render;
pub mod rules;
pub mod span;
pub mod token;

pub use lexer::{tokenize_inline, Lexer};
pub use render::{escape_html, Renderer};
pub use span::Span;
pub use token::{Token, TokenKind};

/// Convert Markdown source to an HTML fragment.
#[inline]
pub fn to_html(input: &str) -> String {
    let tokens = Lexer::new(input).tokenize();
    Renderer::new().render(&tokens)
}
