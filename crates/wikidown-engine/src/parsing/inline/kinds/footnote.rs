use crate::grammar::InlineRule;
use crate::parsing::inline::cursor::Cursor;
use crate::parsing::inline::parser::InlineParser;
use crate::parsing::inline::types::InlineNode;

pub struct FootnoteRef;

impl FootnoteRef {
    pub const OPEN: &'static [u8; 2] = b"[^";
}

pub const RULE: InlineRule = InlineRule {
    name: "footnote",
    triggers: b"[",
    parse,
};

/// Matches only labels defined somewhere in the document.
fn parse(p: &mut InlineParser<'_>, cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !cur.starts_with(FootnoteRef::OPEN) {
        return None;
    }
    let from = cur.i + FootnoteRef::OPEN.len();
    let end = cur.find_from(from, "]")?;
    let label = &cur.s[from..end];
    if label.trim().is_empty() || label.contains('\n') {
        return None;
    }
    let reference = p.state.footnotes.reference(label)?;
    cur.jump_to(end + 1);
    Some(InlineNode::FootnoteRef {
        ref_index: reference.ref_index,
        number: reference.number,
    })
}
