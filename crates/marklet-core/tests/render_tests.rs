//! Integration tests for HTML rendering

use marklet_core::to_html;

// ============================================================================
// Block Structure
// ============================================================================

#[test]
fn test_heading_round_trip() {
    assert_eq!(to_html("# Title\n"), "<h1>Title</h1>\n");
}

#[test]
fn test_heading_levels() {
    let html = to_html("# H1\n## H2\n### H3\n#### H4\n##### H5\n###### H6");
    for level in 1..=6 {
        assert!(html.contains(&format!("<h{0}>H{0}</h{0}>\n", level)));
    }
}

#[test]
fn test_heading_text_is_escaped_not_marked_up() {
    assert_eq!(to_html("# a <b> **c**\n"), "<h1>a &lt;b&gt; **c**</h1>\n");
}

#[test]
fn test_list_grouping() {
    assert_eq!(
        to_html("- a\n- b\n1. c\n"),
        "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n<ol>\n<li>c</li>\n</ol>\n"
    );
}

#[test]
fn test_list_closed_by_following_text() {
    assert_eq!(
        to_html("1. one\n2. two\nafter"),
        "<ol>\n<li>one</li>\n<li>two</li>\n</ol>\n<p>after</p>\n"
    );
}

#[test]
fn test_list_item_inline_markup() {
    assert_eq!(
        to_html("- **bold** and `code`\n"),
        "<ul>\n<li><strong>bold</strong> and <code>code</code></li>\n</ul>\n"
    );
}

#[test]
fn test_paragraph_between_headings() {
    assert_eq!(
        to_html("# A\nbody text\n# B\n"),
        "<h1>A</h1>\n<p>body text\n</p>\n<h1>B</h1>\n"
    );
}

#[test]
fn test_lone_newline_run_opens_no_paragraph() {
    assert_eq!(to_html("# A\n\n# B\n"), "<h1>A</h1>\n<h1>B</h1>\n");
}

// ============================================================================
// Inline Markup
// ============================================================================

#[test]
fn test_link_fallback() {
    assert_eq!(to_html("[oops"), "<p>[oops</p>\n");
}

#[test]
fn test_unusable_link_destination_stays_literal() {
    let html = to_html("[a](<b> x) rest");
    assert_eq!(html, "<p>[a](&lt;b&gt; x) rest</p>\n");
    assert!(!html.contains("<a href"));
}

#[test]
fn test_link_rendering() {
    assert_eq!(
        to_html("Go [home](/index.html?a=1&b=2) now"),
        "<p>Go <a href=\"/index.html?a=1&amp;b=2\">home</a> now</p>\n"
    );
}

#[test]
fn test_code_fence_rendering() {
    assert_eq!(
        to_html("```js\ncode\n```"),
        "<p><pre><code class=\"language-js\">code</code></pre>\n</p>\n"
    );
}

#[test]
fn test_code_block_content_is_escaped() {
    let html = to_html("```html\n<div>&</div>\n```\n");
    assert!(html.contains("&lt;div&gt;&amp;&lt;/div&gt;"));
    assert!(!html.contains("<div>"));
}

#[test]
fn test_fence_without_language_renders_inline_code() {
    let html = to_html("```\nx\n```");
    assert!(html.contains("<code>x</code>"));
    assert!(!html.contains("<pre>"));
}

#[test]
fn test_bold_italic_non_nesting() {
    assert_eq!(to_html("**a*b*c**"), "<p><strong>a*b*c</strong></p>\n");
}

#[test]
fn test_italic_rendering() {
    assert_eq!(to_html("_word_"), "<p><em>word_</em></p>\n");
}

#[test]
fn test_thematic_break_in_text() {
    assert_eq!(to_html("a\n***\nb"), "<p>a\n<hr/>\nb</p>\n");
}

// ============================================================================
// Escaping
// ============================================================================

#[test]
fn test_text_is_escaped() {
    assert_eq!(
        to_html("<script>alert('x') & \"y\"</script>"),
        "<p>&lt;script&gt;alert(&#39;x&#39;) &amp; &quot;y&quot;&lt;/script&gt;</p>\n"
    );
}

#[test]
fn test_link_label_and_url_are_escaped() {
    assert_eq!(
        to_html("[<b>](<\"x\">)"),
        "<p><a href=\"&quot;x&quot;\">&lt;b&gt;</a></p>\n"
    );
}

// ============================================================================
// Edge Cases
// ============================================================================

#[test]
fn test_empty_input() {
    assert_eq!(to_html(""), "");
}

#[test]
fn test_whitespace_only() {
    assert_eq!(to_html("   "), "<p>   </p>\n");
}

#[test]
fn test_unclosed_code_block() {
    let html = to_html("```rust\nfn main() {}");
    assert!(html.contains("<pre><code class=\"language-rust\">fn main() {}</code></pre>"));
}

#[test]
fn test_complex_document() {
    let input = r#"# Introduction

This is a **complex** document with [a link](https://example.com).

- First item
- Second item

1. Step one
2. Step two

```rust
fn example() {}
```

## Conclusion
"#;

    let html = to_html(input);
    assert!(html.starts_with("<h1>Introduction</h1>\n"));
    assert!(html.contains("<strong>complex</strong>"));
    assert!(html.contains("<a href=\"https://example.com\">a link</a>"));
    assert!(html.contains("<ul>\n<li>First item</li>\n<li>Second item</li>\n</ul>\n"));
    assert!(html.contains("<ol>\n<li>Step one</li>\n<li>Step two</li>\n</ol>\n"));
    assert!(html.contains("<pre><code class=\"language-rust\">fn example() {}</code></pre>"));
    assert!(html.ends_with("<h2>Conclusion</h2>\n"));
}
