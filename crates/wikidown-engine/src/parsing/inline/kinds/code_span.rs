use crate::grammar::{InlineRule, Plugin};
use crate::parsing::inline::cursor::Cursor;
use crate::parsing::inline::parser::InlineParser;
use crate::parsing::inline::types::InlineNode;

/// Code spans are raw zones: no other inline rule sees their content.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
    /// Content wrapped in this renders as inline math.
    pub const MATH: char = '$';

    /// Byte index of the closing run of exactly `n` ticks at or after `from`.
    pub fn find_close(s: &str, from: usize, n: usize) -> Option<usize> {
        let bytes = s.as_bytes();
        let mut i = from;
        while i < bytes.len() {
            if bytes[i] == Self::TICK {
                let run = bytes[i..].iter().take_while(|&&b| b == Self::TICK).count();
                if run == n {
                    return Some(i);
                }
                i += run;
            } else {
                i += 1;
            }
        }
        None
    }

    /// Line endings become spaces; one surrounding space is stripped when
    /// both ends have one.
    pub fn normalize(raw: &str) -> String {
        let s = raw.replace('\n', " ");
        let stripped = s.len() >= 2
            && s.starts_with(' ')
            && s.ends_with(' ')
            && !s.bytes().all(|b| b == b' ');
        if stripped {
            s[1..s.len() - 1].to_string()
        } else {
            s
        }
    }
}

pub const RULE: InlineRule = InlineRule {
    name: "code_span",
    triggers: b"`",
    parse,
};

fn parse(p: &mut InlineParser<'_>, cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let n = cur.run_len(CodeSpan::TICK);
    let open_end = cur.i + n;
    let close = CodeSpan::find_close(cur.s, open_end, n)?;
    let content = CodeSpan::normalize(&cur.s[open_end..close]);
    cur.jump_to(close + n);

    let is_math = content.len() >= 2
        && content.starts_with(CodeSpan::MATH)
        && content.ends_with(CodeSpan::MATH)
        && p.grammar().has(Plugin::Math);
    if is_math {
        p.state.requirements.requires_mathjax = true;
        return Some(InlineNode::MathInline {
            tex: content[1..content.len() - 1].to_string(),
            display: false,
        });
    }
    Some(InlineNode::CodeSpan(content))
}
