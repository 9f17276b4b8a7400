use crate::grammar::BlockRule;
use crate::parsing::blocks::lines::block_start;
use crate::parsing::blocks::parser::{BlockMatch, BlockParser};
use crate::parsing::blocks::types::BlockNode;

use super::block_quote;

pub struct Spoiler;

impl Spoiler {
    pub const MARKER: &'static str = ">!";

    /// Drops only the marker; the space after it stays with the content.
    pub fn strip(line: &str) -> Option<&str> {
        block_start(line)?.strip_prefix(Self::MARKER)
    }
}

pub const RULE: BlockRule = BlockRule {
    name: "spoiler",
    interrupts: Some(starts),
    parse,
};

fn starts(line: &str) -> bool {
    Spoiler::strip(line).is_some()
}

fn parse(parser: &mut BlockParser<'_>, lines: &[String], pos: usize) -> Option<BlockMatch> {
    if !parser.can_nest() {
        return None;
    }
    Spoiler::strip(&lines[pos])?;
    let (inner, consumed) = block_quote::collect(parser, lines, pos, Spoiler::strip);
    let children = parser.parse_nested(&inner);
    Some(BlockMatch::one(BlockNode::SpoilerBlock { children }, consumed))
}
