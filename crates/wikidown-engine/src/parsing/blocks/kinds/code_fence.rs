use crate::grammar::{BlockRule, Plugin};
use crate::parsing::blocks::lines::{block_start, indent, strip_indent};
use crate::parsing::blocks::parser::{BlockMatch, BlockParser};
use crate::parsing::blocks::types::BlockNode;
use crate::preview;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    pub fn byte(self) -> u8 {
        match self {
            FenceKind::Backticks => b'`',
            FenceKind::Tildes => b'~',
        }
    }
}

/// An opening fence: its character, run length and indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceSig {
    pub kind: FenceKind,
    pub len: usize,
    pub indent: usize,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";
    /// Info string that turns a fence into display math.
    pub const MATH: &'static str = "math";

    /// Recognizes an opening fence and returns it with the trimmed info string.
    pub fn opening(line: &str) -> Option<(FenceSig, &str)> {
        let indent = indent(line);
        let t = block_start(line)?;
        let kind = if t.starts_with(Self::BACKTICKS) {
            FenceKind::Backticks
        } else if t.starts_with(Self::TILDES) {
            FenceKind::Tildes
        } else {
            return None;
        };
        let len = t.bytes().take_while(|&b| b == kind.byte()).count();
        let info = t[len..].trim();
        if kind == FenceKind::Backticks && info.contains('`') {
            return None;
        }
        Some((FenceSig { kind, len, indent }, info))
    }

    pub fn closes(open: FenceSig, line: &str) -> bool {
        let Some(t) = block_start(line) else {
            return false;
        };
        let len = t.bytes().take_while(|&b| b == open.kind.byte()).count();
        len >= open.len && t[len..].trim().is_empty()
    }
}

pub const RULE: BlockRule = BlockRule {
    name: "fenced_code",
    interrupts: Some(starts),
    parse,
};

fn starts(line: &str) -> bool {
    CodeFence::opening(line).is_some()
}

/// Runs to the closing fence or, unterminated, to the end of the container.
fn parse(parser: &mut BlockParser<'_>, lines: &[String], pos: usize) -> Option<BlockMatch> {
    let (sig, info) = CodeFence::opening(&lines[pos])?;
    let mut body = Vec::new();
    let mut i = pos + 1;
    while i < lines.len() {
        if CodeFence::closes(sig, &lines[i]) {
            i += 1;
            break;
        }
        body.push(strip_indent(&lines[i], sig.indent));
        i += 1;
    }
    let mut code = body.join("\n");
    if !body.is_empty() {
        code.push('\n');
    }

    let lang = preview::scrub(info.split_whitespace().next().unwrap_or_default());
    let node = if lang.eq_ignore_ascii_case(CodeFence::MATH) && parser.grammar().has(Plugin::Math) {
        BlockNode::MathBlock { tex: code }
    } else {
        BlockNode::CodeBlock {
            info: info.to_string(),
            code,
        }
    };
    Some(BlockMatch::one(node, i - pos))
}
