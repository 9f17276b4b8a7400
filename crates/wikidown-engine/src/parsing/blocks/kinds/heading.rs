use crate::grammar::BlockRule;
use crate::parsing::blocks::lines::block_start;
use crate::parsing::blocks::parser::{BlockMatch, BlockParser};
use crate::parsing::blocks::types::{BlockNode, HeadingOrigin};

pub struct Heading;

impl Heading {
    pub const MARK: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// `## Title ##` -> `(2, "Title")`.
    pub fn atx(line: &str) -> Option<(u8, String)> {
        let t = block_start(line)?;
        let level = t.bytes().take_while(|&b| b == Self::MARK).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let rest = &t[level..];
        if !rest.is_empty() && !rest.starts_with([' ', '\t']) {
            return None;
        }
        let text = rest.trim();
        let without_closing = text.trim_end_matches('#');
        let text = if without_closing.is_empty() {
            ""
        } else if without_closing.ends_with([' ', '\t']) {
            without_closing.trim_end()
        } else {
            text
        };
        Some((level as u8, text.to_string()))
    }

    /// Level of a setext underline (`===` is 1, `---` is 2).
    pub fn setext(line: &str) -> Option<u8> {
        let t = block_start(line)?.trim_end();
        if t.is_empty() {
            None
        } else if t.bytes().all(|b| b == b'=') {
            Some(1)
        } else if t.bytes().all(|b| b == b'-') {
            Some(2)
        } else {
            None
        }
    }
}

pub const RULE: BlockRule = BlockRule {
    name: "heading",
    interrupts: Some(starts),
    parse,
};

fn starts(line: &str) -> bool {
    Heading::atx(line).is_some()
}

fn parse(_parser: &mut BlockParser<'_>, lines: &[String], pos: usize) -> Option<BlockMatch> {
    let (level, text) = Heading::atx(&lines[pos])?;
    Some(BlockMatch::one(
        BlockNode::Heading {
            level,
            text,
            origin: HeadingOrigin::Atx,
        },
        1,
    ))
}
