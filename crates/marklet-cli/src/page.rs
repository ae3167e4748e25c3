//! Standalone HTML page around a rendered fragment.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use marklet_core::escape_html;

use crate::error::CliError;

/// Built-in stylesheet, GitHub-like.
pub const DEFAULT_CSS: &str = r#"
body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
    line-height: 1.6;
    max-width: 800px;
    margin: 0 auto;
    padding: 20px;
    color: #333;
    background-color: #fff;
}

h1, h2, h3, h4, h5, h6 {
    margin-top: 24px;
    margin-bottom: 16px;
    font-weight: 600;
    line-height: 1.25;
}

h1 { font-size: 2em; border-bottom: 1px solid #eaecef; padding-bottom: 0.3em; }
h2 { font-size: 1.5em; border-bottom: 1px solid #eaecef; padding-bottom: 0.3em; }
h3 { font-size: 1.25em; }
h4 { font-size: 1em; }
h5 { font-size: 0.875em; }
h6 { font-size: 0.85em; color: #6a737d; }

p { margin-top: 0; margin-bottom: 16px; }

a { color: #0366d6; text-decoration: none; }
a:hover { text-decoration: underline; }

strong { font-weight: 600; }
em { font-style: italic; }

code {
    padding: .2em .4em;
    margin: 0;
    font-size: 85%;
    white-space: break-spaces;
    background-color: #818b981f;
    border-radius: 6px;
}

pre {
    padding: 16px;
    overflow: auto;
    font-size: 85%;
    line-height: 1.45;
    background-color: #f6f8fa;
    border-radius: 6px;
    margin-bottom: 16px;
}

pre code {
    display: inline;
    padding: 0;
    margin: 0;
    overflow: visible;
    line-height: inherit;
    background-color: transparent;
    border: 0;
}

ul, ol { padding-left: 2em; margin-top: 0; margin-bottom: 16px; }
li { margin-bottom: 0.25em; }

hr {
    height: 0.25em;
    padding: 0;
    margin: 24px 0;
    background-color: #e1e4e8;
    border: 0;
}
"#;

/// Load the stylesheet from `path`, or fall back to [`DEFAULT_CSS`].
pub fn load_css(path: Option<&Path>) -> Result<Cow<'static, str>, CliError> {
    match path {
        Some(path) => fs::read_to_string(path)
            .map(Cow::Owned)
            .map_err(|e| CliError::template(path, e)),
        None => Ok(Cow::Borrowed(DEFAULT_CSS)),
    }
}

/// Wrap an HTML fragment in a complete document.
pub fn wrap(fragment: &str, title: &str, css: &str) -> String {
    let mut out = String::with_capacity(fragment.len() + css.len() + 160);
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str("<meta charset=\"UTF-8\">\n");
    out.push_str("<title>");
    out.push_str(&escape_html(title));
    out.push_str("</title>\n");
    out.push_str("<style>\n");
    out.push_str(css);
    out.push_str("\n</style>\n");
    out.push_str("</head>\n<body>\n");
    out.push_str(fragment);
    out.push_str("</body>\n</html>\n");
    out
}
