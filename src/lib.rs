//! pilcrow: structural lint checks for markdown documentation trees.
//!
//! The crate has two halves. [`location`] reconciles source coordinates
//! reported by two upstream parsers (the tree-sitter markup layer and a
//! symbol-graph toolchain) into one consistent convention. [`checkers`]
//! walks parsed documents and reports structural violations as [`problem`]
//! values: diagnostics with precise ranges, cross-reference notes, and
//! suggested fixes anchored to exact ranges. Rendering problems for humans
//! and applying fixes belong to the tooling consuming this crate.
#![allow(clippy::multiple_crate_versions)]

pub mod checkers;
pub mod config;
pub mod document;
pub mod formats;
pub mod input;
pub mod location;
pub mod problem;
pub mod symbol_graph;
