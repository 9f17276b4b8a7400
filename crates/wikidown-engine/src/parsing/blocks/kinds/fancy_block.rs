use crate::grammar::BlockRule;
use crate::parsing::blocks::lines::block_start;
use crate::parsing::blocks::parser::{BlockMatch, BlockParser};
use crate::parsing::blocks::types::BlockNode;

use super::fold::peel_title;

pub struct FancyBlock;

impl FancyBlock {
    pub const FENCE: &'static str = ":::";

    /// Family word of an opening fence; bare `:::` opens with an empty family.
    pub fn opening(line: &str) -> Option<&str> {
        let rest = block_start(line)?.strip_prefix(Self::FENCE)?;
        let rest = rest.trim_start_matches(':').trim();
        Some(rest.split_whitespace().next().unwrap_or_default())
    }

    pub fn is_closing(line: &str) -> bool {
        let t = line.trim();
        t.len() >= Self::FENCE.len() && t.bytes().all(|b| b == b':')
    }

    /// Bootstrap alert class for a family name.
    pub fn alert_class(family: &str) -> String {
        let class = match family.to_ascii_lowercase().as_str() {
            "" | "info" | "blue" => "primary",
            "warning" | "gray" | "grey" => "secondary",
            "success" | "green" => "success",
            "danger" | "red" => "danger",
            "yellow" | "caution" => "warning",
            _ => return family.to_string(),
        };
        class.to_string()
    }
}

pub const RULE: BlockRule = BlockRule {
    name: "fancy_block",
    interrupts: Some(starts),
    parse,
};

fn starts(line: &str) -> bool {
    FancyBlock::opening(line).is_some()
}

/// Nested openers with a family must be closed before the outer block is.
fn parse(parser: &mut BlockParser<'_>, lines: &[String], pos: usize) -> Option<BlockMatch> {
    if !parser.can_nest() {
        return None;
    }
    let family = FancyBlock::opening(&lines[pos])?.to_string();
    let mut depth = 0usize;
    let mut i = pos + 1;
    let mut end = lines.len();
    while i < lines.len() {
        let line = &lines[i];
        if FancyBlock::is_closing(line) {
            if depth == 0 {
                end = i;
                break;
            }
            depth -= 1;
        } else if FancyBlock::opening(line).is_some_and(|f| !f.is_empty()) {
            depth += 1;
        }
        i += 1;
    }
    let consumed = if end < lines.len() { end + 1 - pos } else { end - pos };
    let (title, body) = peel_title(&lines[pos + 1..end]);
    let children = parser.parse_nested(body);
    Some(BlockMatch::one(
        BlockNode::FancyBlock {
            family,
            title,
            children,
        },
        consumed,
    ))
}
