//! Charset sniffing and transcoding of fetched page bytes.
//!
//! Pages arrive as raw bytes; the extractor wants `&str`. The charset is taken
//! from, in order: a byte-order mark, `<meta charset>`, and the
//! `http-equiv="Content-Type"` meta tag. Anything else is read as UTF-8.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// How many leading bytes are searched for a charset declaration.
const SNIFF_LIMIT: usize = 1024;

#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;/]+)"#).expect("META_CHARSET regex")
});

#[allow(clippy::expect_used)]
static HTTP_EQUIV_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>;]+)"#,
    )
    .expect("HTTP_EQUIV_CHARSET regex")
});

/// Detect the character encoding of an HTML byte buffer.
///
/// Falls back to UTF-8 when no BOM or recognizable declaration is found.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LIMIT)]);

    [&*META_CHARSET, &*HTTP_EQUIV_CHARSET]
        .into_iter()
        .filter_map(|re| declared_label(re, &head))
        .find_map(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

fn declared_label(re: &Regex, head: &str) -> Option<String> {
    re.captures(head)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Decode HTML bytes to a UTF-8 `String`.
///
/// Malformed sequences become U+FFFD; this never fails. A leading BOM is
/// stripped.
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (decoded, used, had_errors) = encoding.decode(html);
    if had_errors {
        tracing::debug!(encoding = used.name(), "replaced malformed byte sequences while decoding");
    }
    decoded.into_owned()
}
