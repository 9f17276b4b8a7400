use std::collections::HashMap;

use crate::grammar::InlineRule;
use crate::parsing::inline::cursor::Cursor;
use crate::parsing::inline::parser::InlineParser;
use crate::parsing::inline::types::InlineNode;

use super::code_span::CodeSpan;

pub struct Emphasis;

/// A run that may still be closed, possibly in several pieces.
struct Opener {
    ch: u8,
    start: usize,
    /// Delimiters not yet used; closers take them from the end of the run.
    left: usize,
}

/// Openers waiting for closers, with per-kind counts so a closer with no
/// candidate costs nothing.
#[derive(Default)]
struct OpenerStack {
    items: Vec<Opener>,
    counts: [[usize; Emphasis::MAX_RUN + 1]; 2],
}

impl OpenerStack {
    fn slot(ch: u8) -> usize {
        usize::from(ch == Emphasis::UNDERSCORE)
    }

    fn push(&mut self, opener: Opener) {
        self.counts[Self::slot(opener.ch)][opener.left] += 1;
        self.items.push(opener);
    }

    /// Nearest opener of `ch`, with exactly `left` delimiters left when given.
    fn find(&self, ch: u8, left: Option<usize>) -> Option<usize> {
        let counts = &self.counts[Self::slot(ch)];
        let any = match left {
            Some(n) => counts[n] > 0,
            None => counts.iter().any(|&c| c > 0),
        };
        if !any {
            return None;
        }
        self.items
            .iter()
            .rposition(|o| o.ch == ch && left.is_none_or(|n| o.left == n))
    }

    /// Drops everything above `ix`; those openers stay unmatched.
    fn truncate(&mut self, ix: usize) {
        for opener in self.items.drain(ix + 1..) {
            self.counts[Self::slot(opener.ch)][opener.left] -= 1;
        }
    }

    /// Uses `n` delimiters from the end of the opener at `ix` and returns
    /// the position they start at.
    fn take(&mut self, ix: usize, n: usize) -> usize {
        let opener = &mut self.items[ix];
        let slot = Self::slot(opener.ch);
        self.counts[slot][opener.left] -= 1;
        opener.left -= n;
        let at = opener.start + opener.left;
        if opener.left == 0 {
            self.items.truncate(ix);
        } else {
            self.counts[slot][opener.left] += 1;
        }
        at
    }
}

impl Emphasis {
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';
    /// `***` is strong emphasis around emphasis; longer runs are text.
    pub const MAX_RUN: usize = 3;

    /// Pairs the emphasis delimiters of `s` in one left-to-right pass.
    ///
    /// Keys are opener positions; values are the closer position and how
    /// many delimiters the pair uses. A closer takes the nearest opener with
    /// as many delimiters left as it has. A run that cannot also open falls
    /// back to the nearest opener of its char and uses part of it. Openers
    /// passed over on the way down are dropped. Code spans and escapes hide
    /// delimiters.
    pub fn pairs(s: &str) -> HashMap<usize, (usize, usize)> {
        let bytes = s.as_bytes();
        let mut pairs = HashMap::new();
        let mut stack = OpenerStack::default();
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\\' => i += 2,
                CodeSpan::TICK => {
                    let run = bytes[i..].iter().take_while(|&&b| b == CodeSpan::TICK).count();
                    i = CodeSpan::find_close(s, i + run, run).map_or(i + run, |close| close + run);
                }
                ch @ (Self::STAR | Self::UNDERSCORE) => {
                    let run = bytes[i..].iter().take_while(|&&b| b == ch).count();
                    if run <= Self::MAX_RUN {
                        Self::delimiter_run(s, i, run, &mut stack, &mut pairs);
                    }
                    i += run;
                }
                _ => i += 1,
            }
        }
        pairs
    }

    fn delimiter_run(
        s: &str,
        at: usize,
        run: usize,
        stack: &mut OpenerStack,
        pairs: &mut HashMap<usize, (usize, usize)>,
    ) {
        let ch = s.as_bytes()[at];
        let before = s[..at].chars().next_back();
        let after = s[at + run..].chars().next();
        let can_open = after.is_some_and(|c| !c.is_whitespace())
            && (ch != Self::UNDERSCORE || !before.is_some_and(char::is_alphanumeric));
        let can_close = before.is_some_and(|c| !c.is_whitespace())
            && (ch != Self::UNDERSCORE || !after.is_some_and(char::is_alphanumeric));

        let mut pos = at;
        let mut left = run;
        while can_close && left > 0 {
            let found = stack
                .find(ch, Some(left))
                .or_else(|| if can_open { None } else { stack.find(ch, None) });
            let Some(ix) = found else {
                break;
            };
            stack.truncate(ix);
            let used = stack.items[ix].left.min(left);
            let open = stack.take(ix, used);
            pairs.insert(open, (pos, used));
            pos += used;
            left -= used;
        }
        if can_open && left > 0 {
            stack.push(Opener {
                ch,
                start: pos,
                left,
            });
        }
    }
}

pub const RULE: InlineRule = InlineRule {
    name: "emphasis",
    triggers: b"*_",
    parse,
};

fn parse(p: &mut InlineParser<'_>, cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let (close, n) = cur.emphasis_close()?;
    let s = cur.s;
    let inner = &s[cur.i + n..close];
    cur.jump_to(close + n);
    let children = p.parse_nested(inner);
    Some(match n {
        1 => InlineNode::Emphasis {
            strong: false,
            children,
        },
        2 => InlineNode::Emphasis {
            strong: true,
            children,
        },
        _ => InlineNode::Emphasis {
            strong: true,
            children: vec![InlineNode::Emphasis {
                strong: false,
                children,
            }],
        },
    })
}
