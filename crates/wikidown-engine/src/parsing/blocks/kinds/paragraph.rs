use crate::grammar::BlockRule;
use crate::parsing::blocks::lines::is_blank;
use crate::parsing::blocks::parser::{BlockMatch, BlockParser};
use crate::parsing::blocks::types::{BlockNode, HeadingOrigin};

use super::heading::Heading;

pub const RULE: BlockRule = BlockRule {
    name: "paragraph",
    interrupts: None,
    parse,
};

/// Always matches. Continuation lines keep their leading whitespace; a
/// setext underline turns the collected text into a heading.
pub fn parse(parser: &mut BlockParser<'_>, lines: &[String], pos: usize) -> Option<BlockMatch> {
    let mut text = lines[pos].trim_start().to_string();
    let mut i = pos + 1;
    while i < lines.len() {
        let line = &lines[i];
        if is_blank(line) {
            break;
        }
        if let Some(level) = Heading::setext(line) {
            return Some(BlockMatch::one(
                BlockNode::Heading {
                    level,
                    text: text.trim_end().to_string(),
                    origin: HeadingOrigin::Setext,
                },
                i + 1 - pos,
            ));
        }
        if parser.interrupts_paragraph(line) {
            break;
        }
        text.push('\n');
        text.push_str(line);
        i += 1;
    }
    Some(BlockMatch::one(
        BlockNode::Paragraph {
            text: text.trim_end().to_string(),
        },
        i - pos,
    ))
}
