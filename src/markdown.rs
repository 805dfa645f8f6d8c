//! The Markdown-node collaborator (spec.md §6). Building the real Markdown
//! AST is out of scope for this core — an upstream parser supplies
//! list-item nodes, their children, raw text and source byte ranges. This
//! module defines a minimal, concrete adapter satisfying that contract so
//! the processors are independently testable, plus a trait boundary so a
//! richer upstream AST can be wired in without touching the processors.

use std::ops::Range;

/// The role a [`MarkdownNode`] plays in the tree the processors walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkdownNodeKind {
    /// A bullet-list item: a candidate MSON element or property signature
    /// line, with its own nested entries in `children`.
    ListItem,
    /// A free-text block (prose), contributing to a description.
    Paragraph,
    /// Anything else the upstream AST can hand us — headers, code blocks,
    /// and so on — always treated as an unrecognized block at the section
    /// level (spec.md §7, `IgnoringWarning`).
    Other,
}

/// A node of the upstream Markdown AST, as consumed by this core.
///
/// For a `ListItem`, `text` is the node's own signature text (first line
/// plus any continuation lines joined by `\n` — already flattened by the
/// upstream builder, mirroring `snowcrash::MarkdownNode::text`), and
/// `children` holds the item's nested entries in source order: further
/// `ListItem`s (nested elements/properties) interleaved with `Paragraph`s
/// (free-text description between the signature and any nested list).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownNode {
    pub kind: MarkdownNodeKind,
    pub text: String,
    pub source_map: Vec<Range<usize>>,
    pub children: Vec<MarkdownNode>,
}

impl MarkdownNode {
    pub fn list_item(text: impl Into<String>, source_map: Vec<Range<usize>>) -> Self {
        Self {
            kind: MarkdownNodeKind::ListItem,
            text: text.into(),
            source_map,
            children: Vec::new(),
        }
    }

    pub fn paragraph(text: impl Into<String>, source_map: Vec<Range<usize>>) -> Self {
        Self {
            kind: MarkdownNodeKind::Paragraph,
            text: text.into(),
            source_map,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<MarkdownNode>) -> Self {
        self.children = children;
        self
    }

    pub fn is_list_item(&self) -> bool {
        self.kind == MarkdownNodeKind::ListItem
    }
}

/// Trait boundary adapting a real upstream Markdown AST node to the shape
/// the processors need, so [`MarkdownNode`] is a reference implementation
/// rather than a hard dependency.
pub trait MarkdownNodeLike {
    fn kind(&self) -> MarkdownNodeKind;
    fn text(&self) -> &str;
    fn source_map(&self) -> &[Range<usize>];
}

impl MarkdownNodeLike for MarkdownNode {
    fn kind(&self) -> MarkdownNodeKind {
        self.kind
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn source_map(&self) -> &[Range<usize>] {
        &self.source_map
    }
}
