//! Format trait and implementations for different document types.
//!
//! This module defines the `Format` trait which abstracts over different
//! document formats (markdown, org-mode, restructuredtext, etc.) by providing
//! the tree-sitter grammar and queries specific to each format, plus the
//! rendering of a heading's raw inline content into plain text.

pub mod markdown;

/// Grammar, queries, and title rendering for one document format.
pub trait Format {
    /// Grammar used to parse documents of this format.
    fn language(&self) -> tree_sitter::Language;

    /// Query capturing the inline content of a heading as `@title`.
    fn title_query(&self) -> &str;

    /// Renders a heading's raw inline content into plain text.
    ///
    /// The default keeps the content as written, minus surrounding
    /// whitespace; formats with inline markup override this to strip it, so
    /// that checkers comparing heading text see what a reader would see.
    fn rendered_title(&self, raw: &str) -> String {
        raw.trim().to_string()
    }
}
