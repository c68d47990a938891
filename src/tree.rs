//! Read-only view over a parsed document.
//!
//! Unwanted subtrees (`script`, `style`, `nav`, `footer`, `iframe`) are never
//! deleted from the tree. Every walk in this module skips them instead, so the
//! parsed `Document` stays untouched for the whole extraction.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef};
pub use tendril::StrTendril;

/// Tags whose whole subtree is invisible to extraction.
pub const PRUNED_TAGS: &[&str] = &["script", "style", "nav", "footer", "iframe"];

/// Get tag name (lowercase) of an element node.
///
/// Returns `None` for text, comment and document nodes.
#[inline]
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<StrTendril> {
    if node.is_element() {
        node.node_name()
    } else {
        None
    }
}

/// Get the raw `class` attribute of an element.
#[inline]
#[must_use]
pub fn class_name(node: &NodeRef) -> Option<StrTendril> {
    node.attr("class")
}

/// Whether the node roots a subtree that extraction ignores.
#[must_use]
pub fn is_pruned(node: &NodeRef) -> bool {
    tag_name(node).is_some_and(|tag| PRUNED_TAGS.iter().any(|p| tag.eq_ignore_ascii_case(p)))
}

/// Visit every descendant of `root` in document order, depth first.
///
/// Pruned subtrees are skipped entirely, root included: nothing below a
/// `script` or `nav` reaches `visit`. The root itself is not visited.
pub fn walk<'a>(root: &NodeRef<'a>, mut visit: impl FnMut(&NodeRef<'a>)) {
    let mut stack: Vec<NodeRef<'a>> = root.children().into_iter().rev().collect();

    while let Some(node) = stack.pop() {
        if is_pruned(&node) {
            continue;
        }
        visit(&node);
        stack.extend(node.children().into_iter().rev());
    }
}

/// All non-pruned descendant elements of `root`, in document order.
#[must_use]
pub fn elements<'a>(root: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    let mut out = Vec::new();
    walk(root, |node| {
        if node.is_element() {
            out.push(*node);
        }
    });
    out
}

/// Concatenated text of every visible text node below `root`, trimmed.
///
/// Inner whitespace is kept as the parser produced it.
#[must_use]
pub fn visible_text(root: &NodeRef) -> String {
    let mut text = String::new();
    walk(root, |node| {
        if node.is_text() {
            text.push_str(&node.text());
        }
    });
    text.trim().to_string()
}

/// Every visible text node below `root`, each trimmed, empty ones dropped.
#[must_use]
pub fn text_fragments(root: &NodeRef) -> Vec<String> {
    let mut out = Vec::new();
    walk(root, |node| {
        if node.is_text() {
            let text = node.text();
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                out.push(trimmed.to_string());
            }
        }
    });
    out
}
