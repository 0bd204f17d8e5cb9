use super::{find_documents, parse_file, parse_str};
use crate::document::{Heading, Node, NodeKind};
use crate::formats::markdown::MarkdownFormat;
use crate::location::SourceRangeExt;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

fn headings(nodes: &[Node], found: &mut Vec<(Heading, Option<usize>, Option<usize>)>) {
    for node in nodes {
        if let NodeKind::Heading(heading) = &node.kind {
            let line = node.range.as_ref().map(|range| range.start.line);
            let column = node.range.as_ref().map(|range| range.start.column);
            found.push((heading.clone(), line, column));
        }
        headings(&node.children, found);
    }
}

fn all_headings(document: &crate::document::Document) -> Vec<(Heading, Option<usize>, Option<usize>)> {
    let mut found = Vec::new();
    headings(&document.children, &mut found);
    found
}

#[test]
fn parse_str_keeps_parser_relative_coordinates() {
    let format = MarkdownFormat;
    let document = parse_str("# Title\n\n## Topics\n", &format).unwrap();

    let found = all_headings(&document);
    assert_eq!(found.len(), 2);

    // Relative space: 0-indexed, no file identity.
    assert_eq!(found[0].1, Some(0));
    assert_eq!(found[0].2, Some(0));
    assert_eq!(found[1].1, Some(2));

    for node in &document.children {
        if let Some(range) = &node.range {
            assert!(range.source().is_none());
        }
    }
}

#[test]
fn parse_file_promotes_ranges_to_absolute_coordinates() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "# Title\n\nSome prose.\n\n## Topics\n").unwrap();
    file.flush().unwrap();

    let format = MarkdownFormat;
    let document = parse_file(file.path(), &format).unwrap();

    let found = all_headings(&document);
    assert_eq!(found.len(), 2);

    // Absolute space: 1-indexed, anchored to the file.
    assert_eq!(found[0].1, Some(1));
    assert_eq!(found[0].2, Some(1));
    assert_eq!(found[1].1, Some(5));

    let first = document
        .children
        .iter()
        .find_map(|node| node.range.as_ref())
        .unwrap();
    assert_eq!(first.source(), Some(file.path()));
}

#[test]
fn heading_levels_and_titles_come_from_the_grammar() {
    let format = MarkdownFormat;
    let document = parse_str(
        "# One\n\n## Two\n\n### Three\n\n###### Six\n\nSetext\n------\n",
        &format,
    )
    .unwrap();

    let found = all_headings(&document);
    let summary: Vec<(usize, &str)> = found
        .iter()
        .map(|(heading, _, _)| (heading.level, heading.text.as_str()))
        .collect();

    assert_eq!(
        summary,
        vec![
            (1, "One"),
            (2, "Two"),
            (3, "Three"),
            (6, "Six"),
            (2, "Setext"),
        ]
    );
}

#[test]
fn inline_markup_is_stripped_from_titles() {
    let format = MarkdownFormat;
    let document = parse_str("## **Topics**\n\n## *Topics*\n\n## `Topics`\n", &format).unwrap();

    let found = all_headings(&document);
    assert_eq!(found.len(), 3);
    for (heading, _, _) in &found {
        assert_eq!(heading.text, "Topics");
    }
}

#[test]
fn non_heading_blocks_are_classified() {
    let format = MarkdownFormat;
    let document = parse_str(
        "Prose.\n\n```\ncode\n```\n\n- item\n\n> quoted\n",
        &format,
    )
    .unwrap();

    let mut kinds = Vec::new();
    collect_kinds(&document.children, &mut kinds);

    assert!(kinds.iter().any(|kind| matches!(kind, NodeKind::Paragraph)));
    assert!(kinds.iter().any(|kind| matches!(kind, NodeKind::CodeBlock)));
    assert!(kinds.iter().any(|kind| matches!(kind, NodeKind::List)));
    assert!(kinds.iter().any(|kind| matches!(kind, NodeKind::BlockQuote)));
}

fn collect_kinds(nodes: &[Node], kinds: &mut Vec<NodeKind>) {
    for node in nodes {
        kinds.push(node.kind.clone());
        collect_kinds(&node.children, kinds);
    }
}

#[test]
fn find_documents_filters_by_extension_and_recurses() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("nested");
    fs::create_dir(&nested).unwrap();

    fs::write(dir.path().join("page.md"), "# Page\n").unwrap();
    fs::write(nested.join("deep.md"), "# Deep\n").unwrap();
    fs::write(dir.path().join("ignored.txt"), "not markup\n").unwrap();

    let found = find_documents(
        vec![dir.path().to_path_buf()],
        &["md".to_string()],
    )
    .unwrap();

    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|path| {
        path.extension().and_then(|extension| extension.to_str()) == Some("md")
    }));
}
