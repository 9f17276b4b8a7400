use crate::env::RenderEnv;
use crate::grammar::Grammar;
use crate::state::RenderState;

use super::cursor::Cursor;
use super::kinds::{code_span, emphasis::Emphasis};
use super::types::InlineNode;

/// Nested inline parsing (link text, emphasis bodies) stops here; deeper
/// content only gets code spans and plain text.
pub const MAX_DEPTH: usize = 8;

/// Scans inline content left to right, trying the grammar's inline rules in
/// order at every position that holds one of their trigger bytes.
pub struct InlineParser<'a> {
    grammar: &'a Grammar,
    pub(crate) env: &'a RenderEnv,
    pub(crate) state: &'a mut RenderState,
    depth: usize,
}

impl<'a> InlineParser<'a> {
    pub fn new(grammar: &'a Grammar, env: &'a RenderEnv, state: &'a mut RenderState) -> Self {
        Self {
            grammar,
            env,
            state,
            depth: 0,
        }
    }

    pub fn grammar(&self) -> &'a Grammar {
        self.grammar
    }

    /// Parses `s` into inline nodes covering all of it.
    ///
    /// A rule sees the cursor at the current position and either returns a
    /// node with the cursor moved past it, or `None`. Failed attempts never
    /// leak cursor movement: the position is reset before every rule. When no
    /// rule matches, one char (or a whole delimiter run) becomes text.
    pub fn parse(&mut self, s: &str) -> Vec<InlineNode> {
        let grammar = self.grammar;
        let shallow = self.depth < MAX_DEPTH;
        let mut cur = Cursor::new(s);
        let mut out = Vec::new();

        while let Some(b) = cur.peek() {
            let start = cur.i;
            let matched = grammar
                .inline_rules()
                .iter()
                .filter(|rule| rule.triggers.contains(&b))
                .filter(|rule| shallow || rule.name == code_span::RULE.name)
                .find_map(|rule| {
                    cur.jump_to(start);
                    (rule.parse)(self, &mut cur)
                });
            match matched {
                Some(node) => {
                    if cur.i == start {
                        cur.bump_char();
                    }
                    push(&mut out, node);
                }
                None => {
                    cur.jump_to(start);
                    skip_literal(&mut cur, b);
                    push(&mut out, InlineNode::Text(s[start..cur.i].to_string()));
                }
            }
        }
        out
    }

    /// Parses a nested span one level deeper.
    pub fn parse_nested(&mut self, s: &str) -> Vec<InlineNode> {
        self.depth += 1;
        let nodes = self.parse(s);
        self.depth -= 1;
        nodes
    }
}

/// Appends a node, merging adjacent text.
fn push(out: &mut Vec<InlineNode>, node: InlineNode) {
    if let InlineNode::Text(t) = &node
        && let Some(InlineNode::Text(prev)) = out.last_mut()
    {
        prev.push_str(t);
        return;
    }
    out.push(node);
}

/// Unmatched backtick runs, space runs and over-long emphasis runs are text
/// as a whole, so a later position inside the run cannot reinterpret them.
fn skip_literal(cur: &mut Cursor<'_>, b: u8) {
    let run = match b {
        b'`' | b' ' | b'*' | b'_' => cur.run_len(b),
        _ => 0,
    };
    let whole = match b {
        b'`' | b' ' => true,
        b'*' | b'_' => run > Emphasis::MAX_RUN,
        _ => false,
    };
    if whole {
        cur.bump_n(run);
    } else {
        cur.bump_char();
    }
}
