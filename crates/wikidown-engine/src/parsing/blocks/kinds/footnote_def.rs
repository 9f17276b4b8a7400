use std::sync::LazyLock;

use regex::Regex;

use crate::grammar::BlockRule;
use crate::parsing::blocks::lines::{indent, is_blank, strip_indent};
use crate::parsing::blocks::parser::{BlockMatch, BlockParser};

static DEFINITION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ {0,3}\[\^([^\]\s][^\]]*)\]:[ \t]*(.*)$").unwrap());

pub struct FootnoteDef;

impl FootnoteDef {
    /// `[^label]: text` -> `(label, text)`.
    pub fn opening(line: &str) -> Option<(&str, &str)> {
        let caps = DEFINITION.captures(line)?;
        let label = caps.get(1)?.as_str();
        let text = caps.get(2)?.as_str();
        Some((label, text))
    }
}

pub const RULE: BlockRule = BlockRule {
    name: "footnote_def",
    interrupts: Some(starts),
    parse,
};

fn starts(line: &str) -> bool {
    FootnoteDef::opening(line).is_some()
}

/// Continuation lines are indented at least as deep as the first one and
/// are dedented by that much. The definition itself renders nothing in place.
fn parse(parser: &mut BlockParser<'_>, lines: &[String], pos: usize) -> Option<BlockMatch> {
    let (label, first) = FootnoteDef::opening(&lines[pos])?;
    let mut end = pos + 1;
    let mut dedent = None;
    let mut i = pos + 1;
    while i < lines.len() {
        let line = &lines[i];
        if is_blank(line) {
            i += 1;
            continue;
        }
        let depth = indent(line);
        if depth == 0 || dedent.is_some_and(|d| depth < d) {
            break;
        }
        dedent.get_or_insert(depth);
        i += 1;
        end = i;
    }

    let continuation = &lines[pos + 1..end];
    let dedent = dedent.unwrap_or_default();
    let mut text = first.trim().to_string();
    for line in continuation {
        text.push('\n');
        text.push_str(strip_indent(line, dedent));
    }
    parser.state.footnotes.define(label, text);
    Some(BlockMatch::silent(end - pos))
}
