//! # Parsing
//!
//! Markdown source to a [`BlockNode`] tree. Block parsing walks the lines of
//! an `xi_rope::Rope`; inline content stays raw in the tree and is parsed by
//! the HTML writer, so footnote numbering follows output order.

pub mod blocks;
pub mod inline;
pub mod rope;
pub mod snapshot;

use xi_rope::Rope;

use crate::grammar::Grammar;
use crate::state::RenderState;
use blocks::lines::expand_leading_tabs;
use blocks::{BlockNode, BlockParser};
use rope::lines_with_spans;

/// Parses a document and applies the grammar's tree rewrites.
pub fn parse_document(rope: &Rope, grammar: &Grammar, state: &mut RenderState) -> Vec<BlockNode> {
    let lines: Vec<String> = lines_with_spans(rope)
        .map(|lr| expand_leading_tabs(lr.content()))
        .collect();
    let mut blocks = BlockParser::new(grammar, state).parse(&lines);
    for rewrite in grammar.rewrites() {
        rewrite(&mut blocks);
    }
    blocks
}

pub fn parse_text(text: &str, grammar: &Grammar, state: &mut RenderState) -> Vec<BlockNode> {
    parse_document(&Rope::from(text), grammar, state)
}
