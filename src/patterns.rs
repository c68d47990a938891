//! Compiled regex patterns used by region selection.
//!
//! All patterns are compiled once on first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Matches class attributes that mark a main-content container.
///
/// Substring match over the whole attribute value, not per class token:
/// `articles-wrapper` and `postscript` both match.
pub static CONTENT_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)article|post|content|entry").expect("CONTENT_CLASS regex")
});

/// Matches the markup openers that matter when looking for a `<body>` tag:
/// comment starts, raw-text elements, and `body` itself.
///
/// Applied to ASCII-lowercased input.
static MARKUP_OPENER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<!--|<(body|script|style|title|textarea|xmp|iframe|noembed|noframes|plaintext)[\s/>]")
        .expect("MARKUP_OPENER regex")
});

/// Whether the markup declares a real `<body>` start tag.
///
/// html5ever always synthesizes a `body` element, so this has to be read from
/// the input itself. `<body` inside a comment, or inside the text of
/// `script`, `style`, `title`, `textarea` and the other raw-text elements, is
/// not a tag and does not count.
#[must_use]
pub fn declares_body(html: &str) -> bool {
    let lower = html.to_ascii_lowercase();
    let mut pos = 0;

    while let Some(caps) = MARKUP_OPENER.captures_at(&lower, pos) {
        let Some(opener) = caps.get(0) else {
            return false;
        };
        let name = caps.get(1).map(|m| m.as_str());

        let resume = match name {
            Some("body") => return true,
            Some("plaintext") => return false,
            // `<!-->` and `<!--->` close immediately, so search from `-`.
            None => lower[opener.start() + 2..]
                .find("-->")
                .map(|i| opener.start() + 2 + i + 3),
            Some(tag) => {
                let close = format!("</{tag}");
                lower[opener.end()..].find(&close).map(|i| opener.end() + i + close.len())
            }
        };

        match resume {
            Some(next) => pos = next,
            // Unterminated comment or raw text runs to the end of input.
            None => return false,
        }
    }

    false
}
