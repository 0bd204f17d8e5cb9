//! The diagnostic data model checkers emit.
//!
//! Everything here is a plain value: once a checker emits a `Problem` it is
//! never mutated again, and consumers (a reporter formatting output, a fix
//! applier materialising replacements) own their copies outright. The whole
//! model serialises to JSON for external tooling.

use crate::location::SourceRange;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
/// Diagnostic severity levels.
pub enum Severity {
    /// The document is invalid and cannot be processed further.
    Error,
    /// The document is valid but violates a documented convention.
    Warning,
    /// Advisory information about the document.
    Information,
    /// A suggestion with no convention behind it.
    Hint,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Information => "information",
            Self::Hint => "hint",
        };
        f.write_str(label)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// A secondary pointer attached to a diagnostic, e.g. "first occurrence here".
pub struct Note {
    /// Where the note points.
    pub range: SourceRange,
    /// Human-readable message for the note.
    pub message: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// A single finding: what went wrong, where, and how severe it is.
pub struct Diagnostic {
    /// Severity of the finding.
    pub severity: Severity,
    /// Stable identifier for programmatic handling, e.g. suppression lists.
    pub identifier: String,
    /// One-line description of the finding.
    pub summary: String,
    /// Longer prose explaining the convention that was violated.
    pub explanation: String,
    /// Primary range the finding points at.
    pub range: SourceRange,
    /// Secondary pointers, in presentation order.
    pub notes: Vec<Note>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// A textual replacement anchored to an exact range.
pub struct Replacement {
    /// Range of text to replace.
    pub range: SourceRange,
    /// Replacement text. May contain editor placeholder tokens of the form
    /// `<#...#>` that the user is expected to fill in.
    pub replacement: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// One way to resolve a diagnostic.
pub struct Solution {
    /// One-line description of the fix.
    pub summary: String,
    /// Edits that mechanically apply the fix, in application order. Empty
    /// for advisory solutions the user has to carry out themselves.
    pub replacements: Vec<Replacement>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// The unit of checker output: a diagnostic plus its suggested fixes.
pub struct Problem {
    /// The finding itself.
    pub diagnostic: Diagnostic,
    /// Suggested fixes, in preference order.
    pub possible_solutions: Vec<Solution>,
}
