use crate::grammar::BlockRule;
use crate::parsing::blocks::lines::block_start;
use crate::parsing::blocks::parser::{BlockMatch, BlockParser};
use crate::parsing::blocks::types::BlockNode;

/// Three or more of the same `*`, `-` or `_`, optionally spaced.
pub fn is_break(line: &str) -> bool {
    let Some(t) = block_start(line) else {
        return false;
    };
    let mut mark = None;
    let mut count = 0;
    for b in t.bytes() {
        match b {
            b' ' | b'\t' => {}
            b'*' | b'-' | b'_' => {
                if mark.is_some_and(|m| m != b) {
                    return false;
                }
                mark = Some(b);
                count += 1;
            }
            _ => return false,
        }
    }
    count >= 3
}

pub const RULE: BlockRule = BlockRule {
    name: "thematic_break",
    interrupts: Some(is_break),
    parse,
};

fn parse(_parser: &mut BlockParser<'_>, lines: &[String], pos: usize) -> Option<BlockMatch> {
    is_break(&lines[pos]).then(|| BlockMatch::one(BlockNode::ThematicBreak, 1))
}
