//! Source coordinates shared by every diagnostic pilcrow emits.
//!
//! The markup parser and the symbol parser disagree on indexing conventions:
//! one reports 1-indexed positions tied to a file on disk, the other reports
//! 0-indexed positions with no file identity at all. This module centralises
//! the arithmetic that reconciles the two, so that off-by-one conversions
//! happen in exactly one place instead of at every call site.

use crate::symbol_graph;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
/// A single point in a source file, ordered by line then column.
///
/// Two coordinate spaces share this type by convention. *Absolute* locations
/// index line and column from 1 and belong to a real file. *Relative*
/// locations index from 0, carry no `source`, and only have meaning as an
/// offset delta. Nothing at runtime distinguishes the two; call sites must
/// know which space a value lives in.
pub struct SourceLocation {
    /// Line number: 1-indexed in absolute locations, 0-indexed in relative ones.
    pub line: usize,
    /// Column number, following the same convention as `line`.
    pub column: usize,
    /// File this location belongs to; relative locations carry none.
    pub source: Option<PathBuf>,
}

impl SourceLocation {
    #[must_use]
    /// Builds a location from its parts.
    pub fn new(line: usize, column: usize, source: Option<PathBuf>) -> Self {
        Self {
            line,
            column,
            source,
        }
    }
}

/// Half-open span between two locations in the same coordinate space.
pub type SourceRange = Range<SourceLocation>;

/// Coordinate arithmetic on [`SourceRange`].
pub trait SourceRangeExt {
    #[must_use]
    /// Builds a range from the symbol parser's representation.
    ///
    /// Line and character values are copied verbatim, with no reindexing, and
    /// the result carries no file identity: it is a relative range until a
    /// later offset anchors it to a document.
    fn from_symbol_range(range: &symbol_graph::SourceRange) -> Self
    where
        Self: Sized;

    #[must_use]
    /// Builds a zero-width range at line 1, column 1 of `source`.
    ///
    /// Used whenever a node carries no position of its own, so that every
    /// diagnostic points at a valid range instead of threading optionals
    /// through everything downstream.
    fn start_of_file(source: Option<PathBuf>) -> Self
    where
        Self: Sized;

    /// Shifts both bounds of `self` by the starting offset of `range`.
    ///
    /// Only the argument's lower bound participates: its span length is
    /// discarded, and file identity is preserved from `self`, never taken
    /// from the argument. At least one of `self` or `range` must be a
    /// relative range indexed from 0, otherwise the absolute origin is
    /// counted twice. Relative ranges never carry a source, so offsetting
    /// two source-anchored ranges is rejected in debug builds.
    fn offset_with_range(&mut self, range: &SourceRange);

    /// Converts `range` from the symbol parser's representation, then offsets.
    fn offset_with_symbol_range(&mut self, range: &symbol_graph::SourceRange);

    /// The file this range applies to, taken from whichever bound has one.
    fn source(&self) -> Option<&Path>;

    #[must_use]
    /// Attaches a file identity to both bounds.
    fn with_source(self, source: &Path) -> Self
    where
        Self: Sized;
}

impl SourceRangeExt for SourceRange {
    fn from_symbol_range(range: &symbol_graph::SourceRange) -> Self {
        let start = SourceLocation::new(range.start.line, range.start.character, None);
        let end = SourceLocation::new(range.end.line, range.end.character, None);

        start..end
    }

    fn start_of_file(source: Option<PathBuf>) -> Self {
        let location = SourceLocation::new(1, 1, source);
        location.clone()..location
    }

    fn offset_with_range(&mut self, range: &SourceRange) {
        debug_assert!(
            self.source().is_none() || range.source().is_none(),
            "at least one operand of a range offset must be relative (source-less)"
        );

        let start = SourceLocation::new(
            self.start.line + range.start.line,
            self.start.column + range.start.column,
            self.start.source.take(),
        );
        let end = SourceLocation::new(
            self.end.line + range.start.line,
            self.end.column + range.start.column,
            self.end.source.take(),
        );

        *self = start..end;
    }

    fn offset_with_symbol_range(&mut self, range: &symbol_graph::SourceRange) {
        self.offset_with_range(&SourceRange::from_symbol_range(range));
    }

    fn source(&self) -> Option<&Path> {
        self.start.source.as_deref().or(self.end.source.as_deref())
    }

    fn with_source(mut self, source: &Path) -> Self {
        self.start.source = Some(source.to_path_buf());
        self.end.source = Some(source.to_path_buf());
        self
    }
}

#[cfg(test)]
#[path = "tests/location.rs"]
mod tests;
