use super::{SourceLocation, SourceRange, SourceRangeExt};
use crate::symbol_graph;
use std::path::{Path, PathBuf};

fn relative(start: (usize, usize), end: (usize, usize)) -> SourceRange {
    SourceLocation::new(start.0, start.1, None)..SourceLocation::new(end.0, end.1, None)
}

fn symbol_range(start: (usize, usize), end: (usize, usize)) -> symbol_graph::SourceRange {
    symbol_graph::SourceRange {
        start: symbol_graph::Position {
            line: start.0,
            character: start.1,
        },
        end: symbol_graph::Position {
            line: end.0,
            character: end.1,
        },
    }
}

#[test]
fn offset_shifts_both_bounds_by_argument_start() {
    let mut range = relative((2, 4), (3, 1));
    range.offset_with_range(&relative((10, 20), (99, 99)));

    assert_eq!(range.start, SourceLocation::new(12, 24, None));
    assert_eq!(range.end, SourceLocation::new(13, 21, None));
}

#[test]
fn offset_ignores_argument_span_length() {
    let mut short_anchor = relative((1, 1), (2, 2));
    let mut long_anchor = relative((1, 1), (2, 2));

    short_anchor.offset_with_range(&relative((5, 5), (5, 6)));
    long_anchor.offset_with_range(&relative((5, 5), (500, 600)));

    assert_eq!(short_anchor, long_anchor);
}

#[test]
fn offset_preserves_own_source_and_ignores_argument_source() {
    let file = PathBuf::from("/docs/page.md");
    let mut range = relative((0, 0), (0, 9));

    let anchor = SourceRange::start_of_file(Some(file));
    range.offset_with_range(&anchor);

    assert_eq!(range.start, SourceLocation::new(1, 1, None));
    assert_eq!(range.end, SourceLocation::new(1, 10, None));
    assert!(range.source().is_none());
}

#[test]
fn offset_keeps_file_identity_of_the_shifted_range() {
    let file = Path::new("/docs/page.md");
    let mut range = relative((4, 0), (4, 9)).with_source(file);

    range.offset_with_range(&relative((2, 0), (2, 0)));

    assert_eq!(range.start, SourceLocation::new(6, 0, Some(file.to_path_buf())));
    assert_eq!(range.source(), Some(file));
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "relative")]
fn offsetting_two_file_anchored_ranges_is_rejected() {
    let file = Path::new("/docs/page.md");
    let mut range = relative((1, 1), (1, 5)).with_source(file);
    let other = relative((3, 1), (3, 5)).with_source(file);

    range.offset_with_range(&other);
}

#[test]
fn symbol_range_conversion_copies_values_verbatim() {
    let range = SourceRange::from_symbol_range(&symbol_range((0, 4), (2, 17)));

    assert_eq!(range.start, SourceLocation::new(0, 4, None));
    assert_eq!(range.end, SourceLocation::new(2, 17, None));
    assert!(range.source().is_none());
}

#[test]
fn offset_with_symbol_range_matches_two_step_conversion() {
    let anchor = symbol_range((10, 4), (12, 0));

    let mut direct = relative((1, 0), (1, 9));
    direct.offset_with_symbol_range(&anchor);

    let mut two_step = relative((1, 0), (1, 9));
    two_step.offset_with_range(&SourceRange::from_symbol_range(&anchor));

    assert_eq!(direct, two_step);
    assert_eq!(direct.start, SourceLocation::new(11, 4, None));
}

#[test]
fn start_of_file_fallback_is_zero_width_at_one_one() {
    let file = PathBuf::from("/docs/page.md");
    let range = SourceRange::start_of_file(Some(file.clone()));

    assert_eq!(range.start, range.end);
    assert_eq!(range.start.line, 1);
    assert_eq!(range.start.column, 1);
    assert_eq!(range.source(), Some(file.as_path()));
}

#[test]
fn source_comes_from_either_bound() {
    let file = PathBuf::from("/docs/page.md");

    let start_only = SourceLocation::new(1, 1, Some(file.clone()))..SourceLocation::new(1, 2, None);
    assert_eq!(start_only.source(), Some(file.as_path()));

    let end_only = SourceLocation::new(1, 1, None)..SourceLocation::new(1, 2, Some(file.clone()));
    assert_eq!(end_only.source(), Some(file.as_path()));

    assert!(relative((1, 1), (1, 2)).source().is_none());
}

#[test]
fn locations_order_by_line_then_column() {
    assert!(SourceLocation::new(1, 9, None) < SourceLocation::new(2, 1, None));
    assert!(SourceLocation::new(3, 4, None) < SourceLocation::new(3, 5, None));
}
