//! Preparing generation input from fetched pages and local files.
//!
//! Callers that fetch a page decide whether the model sees the extracted
//! article text or the raw HTML. Callers that point at a file get its text
//! unchanged.

use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};

/// Text handed to a generation backend, tagged with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptInput {
    /// Readable text extracted from a page.
    Article(String),
    /// Page HTML passed through untouched.
    RawHtml(String),
}

impl PromptInput {
    /// Build input from a fetched page.
    ///
    /// With `extract_article` set the HTML is run through [`crate::extract`];
    /// otherwise it is kept as-is.
    #[must_use]
    pub fn from_html(html: &str, extract_article: bool) -> Self {
        if extract_article {
            let text = crate::extract(html);
            tracing::debug!(chars = text.len(), "extracted article content");
            Self::Article(text)
        } else {
            tracing::debug!(chars = html.len(), "using full HTML content");
            Self::RawHtml(html.to_string())
        }
    }

    /// Borrow the prompt text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Article(text) | Self::RawHtml(text) => text,
        }
    }

    /// Take the prompt text, dropping its origin.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Article(text) | Self::RawHtml(text) => text,
        }
    }
}

/// Read a UTF-8 prompt file.
pub fn read_prompt_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
        ErrorKind::InvalidData => Error::InvalidUtf8(path.to_path_buf()),
        _ => Error::Io { path: path.to_path_buf(), source },
    })?;
    tracing::debug!(chars = text.len(), path = %path.display(), "read prompt file");
    Ok(text)
}
