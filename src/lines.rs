//! Formatting of qualifying elements into output lines.

use std::fmt;

use crate::tree::{self, NodeRef};

/// Separator placed between consecutive lines.
pub const LINE_SEPARATOR: &str = "\n\n";

/// One formatted unit of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentLine {
    /// `h1`..`h6`, rendered as `\n## text\n`.
    Heading { level: u8, text: String },
    /// `li`, rendered as `- text`.
    ListItem(String),
    /// `p`, rendered verbatim.
    Paragraph(String),
}

impl ContentLine {
    /// Build the line for `node`, or `None` when the element doesn't qualify
    /// or has no visible text.
    ///
    /// Nested qualifying elements are each formatted on their own: a `<p>`
    /// inside an `<li>` produces both a list item and a paragraph.
    #[must_use]
    pub fn from_node(node: &NodeRef) -> Option<Self> {
        let tag = tree::tag_name(node)?;
        let kind = LineKind::from_tag(&tag)?;

        let text = tree::visible_text(node);
        if text.is_empty() {
            return None;
        }

        Some(match kind {
            LineKind::Heading(level) => Self::Heading { level, text },
            LineKind::ListItem => Self::ListItem(text),
            LineKind::Paragraph => Self::Paragraph(text),
        })
    }
}

impl fmt::Display for ContentLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heading { level, text } => {
                let hashes = "#".repeat(usize::from(*level));
                write!(f, "\n{hashes} {text}\n")
            }
            Self::ListItem(text) => write!(f, "- {text}"),
            Self::Paragraph(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum LineKind {
    Heading(u8),
    ListItem,
    Paragraph,
}

impl LineKind {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "h1" => Some(Self::Heading(1)),
            "h2" => Some(Self::Heading(2)),
            "h3" => Some(Self::Heading(3)),
            "h4" => Some(Self::Heading(4)),
            "h5" => Some(Self::Heading(5)),
            "h6" => Some(Self::Heading(6)),
            "li" => Some(Self::ListItem),
            "p" => Some(Self::Paragraph),
            _ => None,
        }
    }
}

/// Join rendered lines with [`LINE_SEPARATOR`].
#[must_use]
pub fn join_lines(lines: &[ContentLine]) -> String {
    lines
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(LINE_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Document;

    fn line_for(html: &str, tag: &str) -> Option<ContentLine> {
        let doc = Document::from(html);
        let sel = doc.select(tag);
        let node = sel.nodes().first().copied()?;
        ContentLine::from_node(&node)
    }

    #[test]
    fn heading_levels_render_hashes() {
        let line = ContentLine::Heading { level: 3, text: "Deep".to_string() };
        assert_eq!(line.to_string(), "\n### Deep\n");
    }

    #[test]
    fn list_item_renders_dash() {
        assert_eq!(ContentLine::ListItem("One".to_string()).to_string(), "- One");
    }

    #[test]
    fn paragraph_renders_verbatim() {
        assert_eq!(ContentLine::Paragraph("Hi  there".to_string()).to_string(), "Hi  there");
    }

    #[test]
    fn from_node_reads_heading_level() {
        let line = line_for("<h4> Four </h4>", "h4");
        assert_eq!(line, Some(ContentLine::Heading { level: 4, text: "Four".to_string() }));
    }

    #[test]
    fn from_node_skips_empty_text() {
        assert_eq!(line_for("<p>   </p>", "p"), None);
        assert_eq!(line_for("<li><script>x()</script></li>", "li"), None);
    }

    #[test]
    fn from_node_ignores_other_tags() {
        assert_eq!(line_for("<div>text</div>", "div"), None);
        assert_eq!(line_for("<header>text</header>", "header"), None);
    }

    #[test]
    fn join_uses_blank_line() {
        let lines = vec![
            ContentLine::Heading { level: 1, text: "T".to_string() },
            ContentLine::Paragraph("p".to_string()),
            ContentLine::ListItem("i".to_string()),
        ];
        assert_eq!(join_lines(&lines), "\n# T\n\n\np\n\n- i");
    }

    #[test]
    fn join_of_nothing_is_empty() {
        assert_eq!(join_lines(&[]), "");
    }
}
