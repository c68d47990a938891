//! # article-extract
//!
//! Readable article text from arbitrary HTML, for use as text-generation
//! input.
//!
//! The page is parsed with an error-tolerant HTML5 parser, a main-content
//! region is picked by a fixed priority chain, and its headings, paragraphs
//! and list items are written out as lightweight markup.
//!
//! ## Quick Start
//!
//! ```rust
//! use article_extract::extract;
//!
//! let html = r#"<html><body><script>bad()</script><article>
//! <h1>Title</h1><p>Hello world.</p><ul><li>One</li><li>Two</li></ul>
//! </article></body></html>"#;
//!
//! assert_eq!(extract(html), "\n# Title\n\n\nHello world.\n\n- One\n\n- Two");
//! ```
//!
//! ## Region priority
//!
//! 1. first `<article>`
//! 2. first `<main>`
//! 3. first element whose class contains `article`, `post`, `content` or `entry`
//! 4. `<body>`
//!
//! `script`, `style`, `nav`, `footer` and `iframe` subtrees are invisible to
//! every step. A document with none of the above (a bare fragment without a
//! `<body>` tag) yields its full visible text, one text node per line.

mod error;
mod extract;
mod input;
mod patterns;
mod result;

pub mod encoding;
pub mod lines;
pub mod region;
pub mod tree;

// Public API - re-exports
pub use error::{Error, Result};
pub use input::{read_prompt_file, PromptInput};
pub use region::RegionKind;
pub use result::Extraction;

/// Extracts readable article text from an HTML document.
///
/// Never fails: malformed or empty markup yields best-effort text, possibly
/// an empty string.
///
/// # Example
///
/// ```rust
/// use article_extract::extract;
///
/// assert_eq!(extract("<span>hello</span>"), "hello");
/// assert_eq!(extract("<body><article><div>no paragraphs</div></article></body>"), "");
/// ```
#[must_use]
pub fn extract(html: &str) -> String {
    extract::extract_content(html).text
}

/// Extracts article text and reports which region rule produced it.
///
/// # Example
///
/// ```rust
/// use article_extract::{extract_detailed, RegionKind};
///
/// let result = extract_detailed(r#"<body><div class="post-content"><p>Hi</p></div></body>"#);
/// assert_eq!(result.region, Some(RegionKind::ContentClass));
/// assert_eq!(result.text, "Hi");
/// ```
#[must_use]
pub fn extract_detailed(html: &str) -> Extraction {
    extract::extract_content(html)
}

/// Extracts article text from raw bytes, detecting the character encoding
/// from a BOM or `<meta>` declaration first.
///
/// # Example
///
/// ```rust
/// use article_extract::extract_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Caf\xE9</p></body></html>";
/// assert_eq!(extract_bytes(html), "Caf\u{e9}");
/// ```
#[must_use]
pub fn extract_bytes(html: &[u8]) -> String {
    let html_str = encoding::transcode_to_utf8(html);
    extract(&html_str)
}
