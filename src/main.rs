//! pilcrow: a structural linter for markdown documentation trees.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use pilcrow::checkers::duplicate_topics::DuplicateTopicsSections;
use pilcrow::checkers::Checker;
use pilcrow::config;
use pilcrow::formats::markdown::MarkdownFormat;
use pilcrow::input;
use pilcrow::location::{SourceRange, SourceRangeExt};
use pilcrow::problem::Problem;
use pilcrow::symbol_graph::SymbolGraph;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pilcrow")]
#[command(about = "Structural lint checks for markdown documentation trees", long_about = None)]
struct Args {
    /// Files or directories to lint
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Lint documentation comments from a symbol graph JSON file
    #[arg(long, value_name = "FILE")]
    symbol_graph: Option<PathBuf>,

    /// File extensions to match
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,

    /// Emit problems as pretty-printed JSON
    #[arg(long)]
    json: bool,
}

fn main() -> io::Result<ExitCode> {
    let args = Args::parse();
    let mut cfg = config::Config::load();

    // Override config with command line args
    if !args.ext.is_empty() {
        cfg.file_extensions = args.ext;
    }
    if args.json {
        cfg.json = true;
    }

    let format = MarkdownFormat;
    let mut problems = Vec::new();

    let documents = input::find_documents(args.paths, &cfg.file_extensions)?;
    if documents.is_empty() && args.symbol_graph.is_none() {
        eprintln!("No matching files found");
        return Ok(ExitCode::SUCCESS);
    }

    for path in &documents {
        let document = input::parse_file(path, &format)?;
        let mut checker = DuplicateTopicsSections::new(Some(path.clone()));
        checker.check(&document);
        problems.extend(checker.problems);
    }

    if let Some(graph_path) = &args.symbol_graph {
        problems.extend(check_symbol_graph(graph_path, &format)?);
    }

    if cfg.json {
        let json = serde_json::to_string_pretty(&problems).map_err(io::Error::other)?;
        println!("{json}");
    } else {
        for problem in &problems {
            print_problem(problem);
        }
    }

    Ok(if problems.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Lints every documented symbol in a symbol graph file.
///
/// Documentation comments are parsed as markup in relative coordinates,
/// then shifted to the position the symbol parser recorded for the comment
/// before checking, so problems point into the original source.
fn check_symbol_graph(path: &Path, format: &MarkdownFormat) -> io::Result<Vec<Problem>> {
    let json = std::fs::read_to_string(path)?;
    let graph = SymbolGraph::from_json(&json)?;

    let mut problems = Vec::new();
    for symbol in &graph.symbols {
        if let Some(doc_comment) = &symbol.doc_comment {
            let mut document = input::parse_str(&doc_comment.text(), format)?;
            if let Some(anchor) = doc_comment.range() {
                document.offset_with_symbol_range(&anchor);
            }

            let mut checker = DuplicateTopicsSections::new(None);
            checker.check(&document);
            problems.extend(checker.problems);
        }
    }

    Ok(problems)
}

fn print_problem(problem: &Problem) {
    let diagnostic = &problem.diagnostic;
    println!(
        "{}: {}: {} [{}]",
        render_location(&diagnostic.range),
        diagnostic.severity,
        diagnostic.summary,
        diagnostic.identifier
    );
    for note in &diagnostic.notes {
        println!("{}: note: {}", render_location(&note.range), note.message);
    }
}

fn render_location(range: &SourceRange) -> String {
    let source = range
        .source()
        .map_or_else(|| "<unknown>".to_string(), |path| path.display().to_string());
    format!("{source}:{}:{}", range.start.line, range.start.column)
}
