//! Document discovery and parsing through the tree-sitter markup layer.
//!
//! Parsing happens in two steps. [`parse_str`] builds a [`Document`] whose
//! ranges are verbatim parser coordinates: 0-indexed and source-less, i.e.
//! relative space. [`parse_file`] then promotes every range to absolute
//! 1-indexed coordinates anchored to the file on disk. Callers linting
//! markup that came from somewhere else (a symbol's documentation comment)
//! stay in relative space and offset by that location instead.

use crate::document::{Document, Heading, Node, NodeKind};
use crate::formats::Format;
use crate::location::{SourceLocation, SourceRange, SourceRangeExt};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use streaming_iterator::StreamingIterator;
use tree_sitter::{Parser, Query, QueryCursor};

/// Recursively collects files under `paths` whose extension matches.
///
/// # Errors
///
/// Returns an error if a directory cannot be read.
pub fn find_documents(paths: Vec<PathBuf>, extensions: &[String]) -> io::Result<Vec<PathBuf>> {
    let mut documents = Vec::new();
    for path in paths {
        collect(&path, extensions, &mut documents)?;
    }
    documents.sort();
    Ok(documents)
}

fn collect(path: &Path, extensions: &[String], documents: &mut Vec<PathBuf>) -> io::Result<()> {
    if path.is_dir() {
        for entry in fs::read_dir(path)? {
            collect(&entry?.path(), extensions, documents)?;
        }
    } else if matches_extension(path, extensions) {
        documents.push(path.to_path_buf());
    }
    Ok(())
}

fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extensions.iter().any(|wanted| wanted == extension))
}

/// Parses markup into a document tree in the parser's own relative space.
///
/// Every range copies the parser's 0-indexed coordinates verbatim and
/// carries no file identity.
///
/// # Errors
///
/// Returns an error if the grammar or its queries cannot be loaded, or if
/// the parser produces no tree.
pub fn parse_str(text: &str, format: &dyn Format) -> io::Result<Document> {
    let language = format.language();
    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

    let tree = parser
        .parse(text, None)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "parser produced no tree"))?;

    let title_query = Query::new(&language, format.title_query())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

    let root = tree.root_node();
    let mut cursor = root.walk();
    let children = root
        .children(&mut cursor)
        .map(|child| build_node(child, text, &title_query, format))
        .collect();

    Ok(Document { children })
}

/// Parses `path` and promotes every range to absolute file coordinates.
///
/// # Errors
///
/// Returns an error if the file cannot be read or [`parse_str`] fails.
pub fn parse_file(path: &Path, format: &dyn Format) -> io::Result<Document> {
    let text = fs::read_to_string(path)?;
    let mut document = parse_str(&text, format)?;

    // Relative space is 0-indexed, so shifting by the 1:1 start-of-file
    // range yields absolute coordinates.
    let origin = SourceRange::start_of_file(None);
    for node in &mut document.children {
        into_absolute(node, &origin, path);
    }

    Ok(document)
}

fn into_absolute(node: &mut Node, origin: &SourceRange, source: &Path) {
    if let Some(mut range) = node.range.take() {
        range.offset_with_range(origin);
        node.range = Some(range.with_source(source));
    }
    for child in &mut node.children {
        into_absolute(child, origin, source);
    }
}

fn build_node(
    node: tree_sitter::Node<'_>,
    text: &str,
    title_query: &Query,
    format: &dyn Format,
) -> Node {
    let mut cursor = node.walk();
    let children = node
        .children(&mut cursor)
        .map(|child| build_node(child, text, title_query, format))
        .collect();

    Node {
        kind: classify(node, text, title_query, format),
        range: Some(relative_range(node)),
        children,
    }
}

fn relative_range(node: tree_sitter::Node<'_>) -> SourceRange {
    let start = node.start_position();
    let end = node.end_position();

    SourceLocation::new(start.row, start.column, None)..SourceLocation::new(end.row, end.column, None)
}

fn classify(
    node: tree_sitter::Node<'_>,
    text: &str,
    title_query: &Query,
    format: &dyn Format,
) -> NodeKind {
    match node.kind() {
        "atx_heading" | "setext_heading" => NodeKind::Heading(Heading {
            level: heading_level(node),
            text: heading_title(node, text, title_query, format),
        }),
        "paragraph" => NodeKind::Paragraph,
        "fenced_code_block" | "indented_code_block" => NodeKind::CodeBlock,
        "list" => NodeKind::List,
        "block_quote" => NodeKind::BlockQuote,
        other => NodeKind::Other(other.to_string()),
    }
}

/// Reads the heading depth off the marker token's grammar name.
fn marker_level(kind: &str) -> Option<usize> {
    let digits = kind
        .strip_prefix("atx_h")
        .and_then(|rest| rest.strip_suffix("_marker"))
        .or_else(|| {
            kind.strip_prefix("setext_h")
                .and_then(|rest| rest.strip_suffix("_underline"))
        })?;
    digits.parse().ok()
}

fn heading_level(node: tree_sitter::Node<'_>) -> usize {
    let mut cursor = node.walk();
    let level = node
        .children(&mut cursor)
        .find_map(|child| marker_level(child.kind()))
        .unwrap_or(1);
    level
}

fn heading_title(
    node: tree_sitter::Node<'_>,
    text: &str,
    title_query: &Query,
    format: &dyn Format,
) -> String {
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(title_query, node, text.as_bytes());

    while let Some(found) = matches.next() {
        for capture in found.captures {
            if let Ok(title) = capture.node.utf8_text(text.as_bytes()) {
                return format.rendered_title(title);
            }
        }
    }

    String::new()
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
