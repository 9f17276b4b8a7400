use crate::grammar::BlockRule;
use crate::parsing::blocks::lines::{block_start, is_blank};
use crate::parsing::blocks::parser::{BlockMatch, BlockParser};
use crate::parsing::blocks::types::BlockNode;

use super::block_quote;
use super::heading::Heading;

pub struct Fold;

impl Fold {
    pub const MARKER: &'static str = ">|";

    pub fn strip(line: &str) -> Option<&str> {
        block_start(line)?.strip_prefix(Self::MARKER)
    }
}

/// Splits a leading ATX heading off a container body.
pub fn peel_title(inner: &[String]) -> (Option<String>, &[String]) {
    let Some(first) = inner.iter().position(|l| !is_blank(l)) else {
        return (None, inner);
    };
    match Heading::atx(&inner[first]) {
        Some((_, text)) => (Some(text), &inner[first + 1..]),
        None => (None, inner),
    }
}

pub const RULE: BlockRule = BlockRule {
    name: "fold",
    interrupts: Some(starts),
    parse,
};

fn starts(line: &str) -> bool {
    Fold::strip(line).is_some()
}

fn parse(parser: &mut BlockParser<'_>, lines: &[String], pos: usize) -> Option<BlockMatch> {
    if !parser.can_nest() {
        return None;
    }
    Fold::strip(&lines[pos])?;
    let (inner, consumed) = block_quote::collect(parser, lines, pos, Fold::strip);
    let (summary, body) = peel_title(&inner);
    let children = parser.parse_nested(body);
    Some(BlockMatch::one(
        BlockNode::FoldBlock { summary, children },
        consumed,
    ))
}
