//! Flags pages that declare more than one top-level Topics section.
//!
//! A second-level heading whose rendered text is exactly `Topics` organizes
//! the page's documentation hierarchy, and a page can only have one. Every
//! occurrence after the first produces a problem pointing at the duplicate,
//! with a note back at the first occurrence and two suggested fixes.

use crate::checkers::Checker;
use crate::document::Heading;
use crate::location::{SourceRange, SourceRangeExt};
use crate::problem::{Diagnostic, Note, Problem, Replacement, Severity, Solution};
use std::path::PathBuf;

/// Records every `## Topics` heading seen and reports all but the first.
///
/// One instance checks one document; the instance owns all of its state, so
/// checking multiple documents concurrently just means one checker each.
pub struct DuplicateTopicsSections {
    /// Topics headings in document order, with their resolved ranges.
    pub found_topics_headings: Vec<(Heading, SourceRange)>,
    /// Problems produced so far, one per duplicate heading.
    pub problems: Vec<Problem>,
    source_file: Option<PathBuf>,
}

impl DuplicateTopicsSections {
    #[must_use]
    /// Creates a checker whose fallback ranges point at `source_file`.
    pub fn new(source_file: Option<PathBuf>) -> Self {
        Self {
            found_topics_headings: Vec::new(),
            problems: Vec::new(),
            source_file,
        }
    }
}

impl Checker for DuplicateTopicsSections {
    fn visit_heading(&mut self, heading: &Heading, range: Option<&SourceRange>) {
        if heading.level != 2 || heading.text != "Topics" {
            return;
        }

        let range = range
            .cloned()
            .unwrap_or_else(|| SourceRange::start_of_file(self.source_file.clone()));
        self.found_topics_headings
            .push((heading.clone(), range.clone()));

        if self.found_topics_headings.len() == 1 {
            return;
        }
        let first_range = self.found_topics_headings[0].1.clone();

        let diagnostic = Diagnostic {
            severity: Severity::Warning,
            identifier: "MultipleTopicsSections".to_string(),
            summary: "Topics section can only appear once per page".to_string(),
            explanation: "A second-level heading named 'Topics' is reserved for the section \
                          you use to organize your documentation hierarchy. Each page can \
                          only have a single Topics section."
                .to_string(),
            range: range.clone(),
            notes: vec![Note {
                range: first_range,
                message: "Topics section starts here".to_string(),
            }],
        };

        let rename = Solution {
            summary: "Change heading name".to_string(),
            replacements: vec![Replacement {
                range,
                replacement: "## <#New heading name#>".to_string(),
            }],
        };
        let merge = Solution {
            summary: "Move this section's content under the first Topics section".to_string(),
            replacements: Vec::new(),
        };

        self.problems.push(Problem {
            diagnostic,
            possible_solutions: vec![rename, merge],
        });
    }
}

#[cfg(test)]
#[path = "../tests/duplicate_topics.rs"]
mod tests;
