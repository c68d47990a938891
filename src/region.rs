//! Main-content region selection.
//!
//! Candidates are tried in strict priority order and the first kind with a
//! match wins; later kinds are never consulted once one has matched.
//!
//! 1. first `<article>`
//! 2. first `<main>`
//! 3. first element whose `class` matches [`CONTENT_CLASS`]
//! 4. `<body>`, when the source markup declared one

use std::fmt;

use serde::Serialize;

use crate::patterns::CONTENT_CLASS;
use crate::tree::{self, NodeRef};

/// Which rule picked the content region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionKind {
    /// An `<article>` element.
    Article,
    /// A `<main>` element.
    Main,
    /// An element with a content-like class name.
    ContentClass,
    /// The document `<body>`.
    Body,
}

impl RegionKind {
    /// All kinds, highest priority first.
    pub const PRIORITY: [Self; 4] = [Self::Article, Self::Main, Self::ContentClass, Self::Body];

    /// Whether `node` qualifies as a region of this kind.
    #[must_use]
    pub fn matches(self, node: &NodeRef) -> bool {
        match self {
            Self::Article => is_tag(node, "article"),
            Self::Main => is_tag(node, "main"),
            Self::ContentClass => {
                tree::class_name(node).is_some_and(|class| CONTENT_CLASS.is_match(&class))
            }
            Self::Body => is_tag(node, "body"),
        }
    }
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Article => "article",
            Self::Main => "main",
            Self::ContentClass => "content_class",
            Self::Body => "body",
        };
        f.write_str(name)
    }
}

/// The subtree chosen as main content.
#[derive(Clone, Copy)]
pub struct ContentRegion<'a> {
    /// Rule that matched.
    pub kind: RegionKind,
    /// Root element of the region.
    pub node: NodeRef<'a>,
}

fn is_tag(node: &NodeRef, name: &str) -> bool {
    tree::tag_name(node).is_some_and(|tag| tag.eq_ignore_ascii_case(name))
}

/// Pick the content region among `elements` (non-pruned, document order).
///
/// `has_body` says whether the source declared a `<body>`; without one the
/// body rule is skipped and `None` is returned when nothing else matched.
#[must_use]
pub fn select_region<'a>(elements: &[NodeRef<'a>], has_body: bool) -> Option<ContentRegion<'a>> {
    RegionKind::PRIORITY
        .into_iter()
        .filter(|kind| has_body || *kind != RegionKind::Body)
        .find_map(|kind| {
            elements
                .iter()
                .find(|node| kind.matches(node))
                .map(|node| ContentRegion { kind, node: *node })
        })
}
