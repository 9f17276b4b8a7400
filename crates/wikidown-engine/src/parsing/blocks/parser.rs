use crate::grammar::Grammar;
use crate::state::RenderState;

use super::kinds::paragraph;
use super::lines::is_blank;
use super::types::BlockNode;

/// Container rules stop matching past this depth; their lines fall through
/// to leaf rules instead.
pub const MAX_NESTING: usize = 16;

/// What a block rule produced and how many lines it used.
#[derive(Debug)]
pub struct BlockMatch {
    pub nodes: Vec<BlockNode>,
    pub consumed: usize,
}

impl BlockMatch {
    pub fn one(node: BlockNode, consumed: usize) -> Self {
        Self {
            nodes: vec![node],
            consumed,
        }
    }

    /// Lines consumed without producing a node (e.g. footnote definitions).
    pub fn silent(consumed: usize) -> Self {
        Self {
            nodes: Vec::new(),
            consumed,
        }
    }
}

/// Drives the grammar's block rules over a slice of lines.
///
/// Container rules strip their markers and call [`BlockParser::parse_nested`]
/// on the inner lines, so every container sees the full rule set.
pub struct BlockParser<'a> {
    grammar: &'a Grammar,
    pub(crate) state: &'a mut RenderState,
    depth: usize,
}

impl<'a> BlockParser<'a> {
    pub fn new(grammar: &'a Grammar, state: &'a mut RenderState) -> Self {
        Self {
            grammar,
            state,
            depth: 0,
        }
    }

    pub fn grammar(&self) -> &'a Grammar {
        self.grammar
    }

    /// True only while parsing the document itself, not a container body.
    pub fn is_top_level(&self) -> bool {
        self.depth == 0
    }

    pub fn can_nest(&self) -> bool {
        self.depth < MAX_NESTING
    }

    pub fn parse(&mut self, lines: &[String]) -> Vec<BlockNode> {
        let grammar = self.grammar;
        let mut out = Vec::new();
        let mut pos = 0;
        while pos < lines.len() {
            if is_blank(&lines[pos]) {
                pos += 1;
                continue;
            }
            let matched = grammar
                .block_rules()
                .iter()
                .find_map(|rule| (rule.parse)(self, lines, pos))
                .or_else(|| paragraph::parse(self, lines, pos));
            match matched {
                Some(m) => {
                    pos += m.consumed.max(1);
                    out.extend(m.nodes);
                }
                None => pos += 1,
            }
        }
        out
    }

    /// Parses a container body one level deeper.
    pub fn parse_nested(&mut self, lines: &[String]) -> Vec<BlockNode> {
        self.depth += 1;
        let nodes = self.parse(lines);
        self.depth -= 1;
        nodes
    }

    /// Whether `line` may end a paragraph without a blank line in between.
    pub fn interrupts_paragraph(&self, line: &str) -> bool {
        self.grammar
            .block_rules()
            .iter()
            .any(|rule| rule.interrupts.is_some_and(|starts| starts(line)))
    }
}
