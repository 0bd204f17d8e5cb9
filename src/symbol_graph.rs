//! Deserialization of the symbol parser's documentation payload.
//!
//! API symbols arrive as JSON symbol-graph files produced by a separate
//! toolchain. pilcrow only consumes the slice it lints: each symbol's
//! documentation comment, recorded line by line with the 0-indexed,
//! source-less ranges that parser reports. Range reconciliation into
//! pilcrow's own convention lives in [`crate::location`].

use serde::{Deserialize, Serialize};
use std::io;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
/// A 0-indexed line/character coordinate as the symbol parser reports it.
pub struct Position {
    /// Line number, indexed from 0.
    pub line: usize,
    /// Character offset within the line, indexed from 0.
    pub character: usize,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
/// Half-open span in the symbol parser's 0-indexed convention.
pub struct SourceRange {
    /// First position covered by the span.
    pub start: Position,
    /// Position one past the end of the span.
    pub end: Position,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// One line of a symbol's documentation comment.
pub struct DocLine {
    /// Text of the line with comment markers already stripped.
    pub text: String,
    #[serde(default)]
    /// Where the line sits in its source file, when the parser recorded it.
    pub range: Option<SourceRange>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// A symbol's documentation comment as an ordered list of lines.
pub struct DocComment {
    /// Comment lines in source order.
    pub lines: Vec<DocLine>,
}

impl DocComment {
    #[must_use]
    /// Joins the comment lines back into one markup string.
    pub fn text(&self) -> String {
        let lines: Vec<&str> = self.lines.iter().map(|line| line.text.as_str()).collect();
        lines.join("\n")
    }

    #[must_use]
    /// The recorded position of the comment's first located line.
    ///
    /// Markup parsed out of the comment is in relative coordinates; this is
    /// the anchor to offset those coordinates by.
    pub fn range(&self) -> Option<SourceRange> {
        self.lines.iter().find_map(|line| line.range)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// The slice of a symbol-graph entry that pilcrow lints.
pub struct Symbol {
    /// Stable identifier of the symbol.
    pub identifier: String,
    #[serde(default)]
    /// Documentation comment attached to the symbol, if any.
    pub doc_comment: Option<DocComment>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// A symbol-graph file: the set of symbols it declares.
pub struct SymbolGraph {
    /// Declared symbols in file order.
    pub symbols: Vec<Symbol>,
}

impl SymbolGraph {
    /// Parses a symbol graph from its JSON serialization.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or missing required fields.
    pub fn from_json(json: &str) -> io::Result<Self> {
        serde_json::from_str(json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
#[path = "tests/symbol_graph.rs"]
mod tests;
