use crate::grammar::InlineRule;
use crate::parsing::inline::cursor::Cursor;
use crate::parsing::inline::parser::InlineParser;
use crate::parsing::inline::types::InlineNode;

pub const BACKSLASH: u8 = b'\\';

pub const RULE: InlineRule = InlineRule {
    name: "escape",
    triggers: b"\\",
    parse,
};

/// `\*` is a literal `*`; a backslash before a line ending is a hard break.
fn parse(_p: &mut InlineParser<'_>, cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let next = cur.peek_at(1)?;
    if next == b'\n' {
        cur.bump_n(2);
        return Some(InlineNode::LineBreak);
    }
    if !next.is_ascii_punctuation() {
        return None;
    }
    cur.bump_n(2);
    Some(InlineNode::Text(char::from(next).to_string()))
}

/// Removes backslash escapes from link destinations and titles.
pub fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\'
            && let Some(&next) = chars.peek()
            && next.is_ascii_punctuation()
        {
            out.push(next);
            chars.next();
            continue;
        }
        out.push(c);
    }
    out
}
