use crate::grammar::BlockRule;
use crate::parsing::blocks::lines::{block_start, is_blank};
use crate::parsing::blocks::parser::{BlockMatch, BlockParser};
use crate::parsing::blocks::types::BlockNode;

pub struct BlockQuote;

impl BlockQuote {
    pub const MARKER: char = '>';

    /// Content after `>` and one optional space.
    pub fn strip(line: &str) -> Option<&str> {
        let rest = block_start(line)?.strip_prefix(Self::MARKER)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }
}

/// Collects the inner lines of a `>`-style container starting at `pos`.
///
/// Lines accepted by `strip` belong to the container. A non-blank line that
/// `strip` rejects is still taken as lazy paragraph continuation when the
/// previous inner line was text and the line would not start a new block.
pub fn collect(
    parser: &BlockParser<'_>,
    lines: &[String],
    pos: usize,
    strip: fn(&str) -> Option<&str>,
) -> (Vec<String>, usize) {
    let mut inner: Vec<String> = Vec::new();
    let mut i = pos;
    while i < lines.len() {
        let line = &lines[i];
        if let Some(content) = strip(line) {
            inner.push(content.to_string());
        } else if !is_blank(line)
            && inner.last().is_some_and(|prev| !is_blank(prev))
            && !parser.interrupts_paragraph(line)
        {
            inner.push(line.clone());
        } else {
            break;
        }
        i += 1;
    }
    (inner, i - pos)
}

pub const RULE: BlockRule = BlockRule {
    name: "block_quote",
    interrupts: Some(starts),
    parse,
};

fn starts(line: &str) -> bool {
    BlockQuote::strip(line).is_some()
}

fn parse(parser: &mut BlockParser<'_>, lines: &[String], pos: usize) -> Option<BlockMatch> {
    if !parser.can_nest() {
        return None;
    }
    BlockQuote::strip(&lines[pos])?;
    let (inner, consumed) = collect(parser, lines, pos, BlockQuote::strip);
    let children = parser.parse_nested(&inner);
    Some(BlockMatch::one(BlockNode::BlockQuote { children }, consumed))
}
