use crate::grammar::InlineRule;
use crate::parsing::inline::cursor::Cursor;
use crate::parsing::inline::parser::InlineParser;
use crate::parsing::inline::types::InlineNode;

pub const RULE: InlineRule = InlineRule {
    name: "line_break",
    triggers: b" ",
    parse,
};

/// Two or more spaces before a line ending.
fn parse(_p: &mut InlineParser<'_>, cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let spaces = cur.run_len(b' ');
    if spaces < 2 || cur.peek_at(spaces) != Some(b'\n') {
        return None;
    }
    cur.bump_n(spaces + 1);
    Some(InlineNode::LineBreak)
}
