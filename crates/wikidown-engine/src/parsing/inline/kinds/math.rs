use crate::grammar::InlineRule;
use crate::parsing::inline::cursor::Cursor;
use crate::parsing::inline::parser::InlineParser;
use crate::parsing::inline::types::InlineNode;

pub struct Math;

impl Math {
    pub const DOLLAR: u8 = b'$';
    pub const DISPLAY: &'static str = "$$";

    /// Closing `$` of an inline formula: not escaped, no space before it and
    /// no digit after it, so prices like `$5 and $6` stay text.
    fn find_inline_close(s: &str, from: usize) -> Option<usize> {
        let bytes = s.as_bytes();
        let mut i = from;
        while i < bytes.len() {
            match bytes[i] {
                b'\\' => i += 2,
                Self::DOLLAR => {
                    let before = s[..i].chars().next_back();
                    let after = bytes.get(i + 1);
                    if before.is_some_and(|c| !c.is_whitespace())
                        && !after.is_some_and(u8::is_ascii_digit)
                    {
                        return Some(i);
                    }
                    return None;
                }
                _ => i += 1,
            }
        }
        None
    }
}

pub const RULE: InlineRule = InlineRule {
    name: "math",
    triggers: b"$",
    parse,
};

fn parse(p: &mut InlineParser<'_>, cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let node = if cur.starts_with(Math::DISPLAY.as_bytes()) {
        let from = cur.i + 2;
        let close = cur.find_from(from, Math::DISPLAY)?;
        let tex = &cur.s[from..close];
        if tex.trim().is_empty() {
            return None;
        }
        cur.jump_to(close + 2);
        InlineNode::MathInline {
            tex: tex.to_string(),
            display: true,
        }
    } else {
        let from = cur.i + 1;
        let first = cur.s[from..].chars().next()?;
        if first.is_whitespace() || first == '$' {
            return None;
        }
        let close = Math::find_inline_close(cur.s, from)?;
        let tex = cur.s[from..close].to_string();
        cur.jump_to(close + 1);
        InlineNode::MathInline {
            tex,
            display: false,
        }
    };
    p.state.requirements.requires_mathjax = true;
    Some(node)
}
