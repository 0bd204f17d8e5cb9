//! Checker trait and the structural rules built on top of it.
//!
//! A checker is a single-pass, depth-first visitor over a parsed document.
//! The trait owns the traversal; rules override the per-kind hooks they care
//! about and accumulate whatever state and problems they need. Checkers hold
//! no shared state, so running one instance per document is safe to
//! parallelise across documents.

pub mod duplicate_topics;

use crate::document::{Document, Heading, Node, NodeKind};
use crate::location::SourceRange;

/// Depth-first, document-order traversal shared by every structural rule.
pub trait Checker {
    /// Called once per heading, in document order.
    fn visit_heading(&mut self, heading: &Heading, range: Option<&SourceRange>);

    /// Walks `document` exactly once, visiting nodes depth-first.
    fn check(&mut self, document: &Document) {
        for node in &document.children {
            self.check_node(node);
        }
    }

    /// Visits `node`, then recurses into its children.
    fn check_node(&mut self, node: &Node) {
        if let NodeKind::Heading(heading) = &node.kind {
            self.visit_heading(heading, node.range.as_ref());
        }
        for child in &node.children {
            self.check_node(child);
        }
    }
}
