use crate::grammar::BlockRule;
use crate::parsing::blocks::lines::{indent, is_blank, strip_indent};
use crate::parsing::blocks::parser::{BlockMatch, BlockParser};
use crate::parsing::blocks::types::BlockNode;

pub const INDENT: usize = 4;

pub const RULE: BlockRule = BlockRule {
    name: "indented_code",
    interrupts: None,
    parse,
};

/// Indentation beyond four spaces is kept; trailing blank lines are not.
fn parse(_parser: &mut BlockParser<'_>, lines: &[String], pos: usize) -> Option<BlockMatch> {
    if indent(&lines[pos]) < INDENT {
        return None;
    }
    let mut end = pos;
    let mut i = pos;
    while i < lines.len() {
        let line = &lines[i];
        if is_blank(line) {
            i += 1;
            continue;
        }
        if indent(line) < INDENT {
            break;
        }
        i += 1;
        end = i;
    }
    let mut code = String::new();
    for line in &lines[pos..end] {
        code.push_str(strip_indent(line, INDENT));
        code.push('\n');
    }
    Some(BlockMatch::one(
        BlockNode::CodeBlock {
            info: String::new(),
            code,
        },
        end - pos,
    ))
}
