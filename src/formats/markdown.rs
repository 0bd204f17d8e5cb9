//! Markdown format implementation using tree-sitter-md.
//!
//! This module provides tree-sitter queries for parsing markdown documents
//! and extracting heading structure from ATX-style (# syntax) and setext
//! (underline syntax) headings. Title rendering reparses the inline content
//! with the companion inline grammar to drop emphasis and code-span markers.

use crate::formats::Format;

/// Tree-sitter queries and title rendering for markdown documents.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn title_query(&self) -> &'static str {
        "(atx_heading (atx_h1_marker)? (atx_h2_marker)? (atx_h3_marker)? (atx_h4_marker)? (atx_h5_marker)? (atx_h6_marker)? (inline) @title) (setext_heading (paragraph (inline) @title))"
    }

    fn rendered_title(&self, raw: &str) -> String {
        let raw = raw.trim();
        let mut parser = tree_sitter::Parser::new();
        if parser
            .set_language(&tree_sitter_md::INLINE_LANGUAGE.into())
            .is_err()
        {
            return raw.to_string();
        }
        let Some(tree) = parser.parse(raw, None) else {
            return raw.to_string();
        };

        let mut rendered = String::new();
        append_rendered(tree.root_node(), raw, &mut rendered);
        rendered.trim().to_string()
    }
}

/// Collects `node`'s text into `out`, skipping markup delimiter tokens.
///
/// The inline grammar only materialises markup as nodes; plain text is the
/// gap between them, so we walk children and copy the gaps.
fn append_rendered(node: tree_sitter::Node, source: &str, out: &mut String) {
    let mut cursor = node.walk();
    let mut position = node.start_byte();

    for child in node.children(&mut cursor) {
        out.push_str(source.get(position..child.start_byte()).unwrap_or(""));
        if !child.kind().ends_with("_delimiter") {
            append_rendered(child, source, out);
        }
        position = child.end_byte();
    }

    out.push_str(source.get(position..node.end_byte()).unwrap_or(""));
}
