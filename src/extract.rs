//! Article text extraction pipeline.
//!
//! Parse, pick the content region, then either format its qualifying
//! elements or fall back to the document's full visible text when no region
//! exists. The parsed document is never mutated.

use crate::lines::{join_lines, ContentLine};
use crate::patterns::declares_body;
use crate::region::select_region;
use crate::result::Extraction;
use crate::tree::{self, Document};

/// Run the full pipeline over `html`.
pub(crate) fn extract_content(html: &str) -> Extraction {
    let doc = Document::from(html);
    let root = doc.root();
    let elements = tree::elements(&root);
    let has_body = declares_body(html);

    let Some(region) = select_region(&elements, has_body) else {
        tracing::trace!(html_len = html.len(), "no content region, using full document text");
        let text = tree::text_fragments(&root).join("\n");
        tracing::debug!(chars = text.len(), "extracted full document text");
        return Extraction { text, region: None, line_count: 0 };
    };

    let lines: Vec<ContentLine> = tree::elements(&region.node)
        .iter()
        .filter_map(ContentLine::from_node)
        .collect();
    let text = join_lines(&lines);

    tracing::debug!(
        region = %region.kind,
        lines = lines.len(),
        chars = text.len(),
        "extracted article content"
    );

    Extraction { text, region: Some(region.kind), line_count: lines.len() }
}
