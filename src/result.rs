//! Result type for detailed extraction output.

use serde::Serialize;

use crate::region::RegionKind;

/// Extracted text together with how it was obtained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extraction {
    /// Readable text, possibly empty.
    pub text: String,

    /// Rule that picked the content region.
    ///
    /// `None` when the document had no region at all and the full visible
    /// text was returned instead.
    pub region: Option<RegionKind>,

    /// Number of headings, paragraphs and list items emitted.
    ///
    /// Always zero on the full-text path.
    pub line_count: usize,
}

impl Extraction {
    /// Whether the full-text fallback produced this result.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.region.is_none()
    }
}
