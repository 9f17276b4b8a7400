//! `==mark==` and `~~strike~~`: a doubled delimiter on both sides and no
//! delimiter char inside.

use crate::grammar::InlineRule;
use crate::parsing::inline::cursor::Cursor;
use crate::parsing::inline::parser::InlineParser;
use crate::parsing::inline::types::InlineNode;

pub struct Mark;

impl Mark {
    pub const DELIM: &'static str = "==";
}

pub struct Strikethrough;

impl Strikethrough {
    pub const DELIM: &'static str = "~~";
}

/// Inner text between `delim` pairs at the cursor, if well formed.
fn enclosed<'s>(cur: &mut Cursor<'s>, delim: &'static str) -> Option<&'s str> {
    if !cur.rest().starts_with(delim) {
        return None;
    }
    let ch = delim.chars().next()?;
    let from = cur.i + delim.len();
    let end = cur.find_from(from, delim)?;
    let s = cur.s;
    let inner = &s[from..end];
    let well_formed = !inner.is_empty()
        && !inner.contains(ch)
        && !inner.starts_with(char::is_whitespace)
        && !inner.ends_with(char::is_whitespace);
    well_formed.then_some(inner)
}

pub const MARK_RULE: InlineRule = InlineRule {
    name: "mark",
    triggers: b"=",
    parse: parse_mark,
};

pub const STRIKETHROUGH_RULE: InlineRule = InlineRule {
    name: "strikethrough",
    triggers: b"~",
    parse: parse_strikethrough,
};

fn parse_mark(p: &mut InlineParser<'_>, cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let inner = enclosed(cur, Mark::DELIM)?;
    cur.bump_n(inner.len() + 2 * Mark::DELIM.len());
    Some(InlineNode::Mark(p.parse_nested(inner)))
}

fn parse_strikethrough(p: &mut InlineParser<'_>, cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let inner = enclosed(cur, Strikethrough::DELIM)?;
    cur.bump_n(inner.len() + 2 * Strikethrough::DELIM.len());
    Some(InlineNode::Strikethrough(p.parse_nested(inner)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enclosed_text() {
        assert_eq!(enclosed(&mut Cursor::new("==a b== x"), Mark::DELIM), Some("a b"));
        assert_eq!(enclosed(&mut Cursor::new("==m=a=r=k=="), Mark::DELIM), None);
        assert_eq!(enclosed(&mut Cursor::new("== a=="), Mark::DELIM), None);
        assert_eq!(enclosed(&mut Cursor::new("===="), Mark::DELIM), None);
        assert_eq!(enclosed(&mut Cursor::new("~~s~t~~"), Strikethrough::DELIM), None);
        assert_eq!(enclosed(&mut Cursor::new("~~gone~~"), Strikethrough::DELIM), Some("gone"));
    }
}
