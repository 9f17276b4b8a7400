use crate::grammar::BlockRule;
use crate::parsing::blocks::lines::{indent, is_blank};
use crate::parsing::blocks::parser::{BlockMatch, BlockParser};
use crate::parsing::blocks::types::BlockNode;

use super::thematic_break::is_break;

/// A list item marker as found at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker {
    pub ordered: bool,
    /// Bullet char, or the `.` / `)` delimiter of an ordered marker.
    pub delim: u8,
    pub start: u64,
    /// Column where item content begins.
    pub content_col: usize,
    /// Nothing follows the marker on its line.
    pub empty: bool,
}

impl ListMarker {
    pub const BULLETS: &'static [u8] = b"-*+";
    pub const MAX_DIGITS: usize = 9;

    pub fn parse(line: &str) -> Option<Self> {
        let ind = indent(line);
        if ind > 3 {
            return None;
        }
        let bytes = &line.as_bytes()[ind..];
        let (ordered, delim, start, width) = match bytes.first()? {
            b if Self::BULLETS.contains(b) => (false, *b, 0, 1),
            b'0'..=b'9' => {
                let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
                if digits > Self::MAX_DIGITS {
                    return None;
                }
                let delim = *bytes.get(digits)?;
                if delim != b'.' && delim != b')' {
                    return None;
                }
                let start = line[ind..ind + digits].parse().ok()?;
                (true, delim, start, digits + 1)
            }
            _ => return None,
        };
        let after = &line[ind + width..];
        if !after.is_empty() && !after.starts_with(' ') {
            return None;
        }
        let spaces = indent(after);
        let empty = is_blank(after);
        let content_col = if empty || spaces > 4 {
            ind + width + 1
        } else {
            ind + width + spaces
        };
        Some(Self {
            ordered,
            delim,
            start,
            content_col,
            empty,
        })
    }

    fn same_list(&self, other: &ListMarker) -> bool {
        self.ordered == other.ordered && self.delim == other.delim
    }

    /// Content of the marker line with the marker removed.
    fn content<'l>(&self, line: &'l str) -> &'l str {
        if self.empty {
            ""
        } else {
            line.get(self.content_col..).unwrap_or_default()
        }
    }
}

fn item_marker(line: &str) -> Option<ListMarker> {
    if is_break(line) {
        return None;
    }
    ListMarker::parse(line)
}

pub const RULE: BlockRule = BlockRule {
    name: "list",
    interrupts: Some(starts),
    parse,
};

/// Only non-empty items, and ordered ones starting at 1, may cut a paragraph.
fn starts(line: &str) -> bool {
    item_marker(line).is_some_and(|m| !m.empty && (!m.ordered || m.start == 1))
}

fn parse(parser: &mut BlockParser<'_>, lines: &[String], pos: usize) -> Option<BlockMatch> {
    if !parser.can_nest() {
        return None;
    }
    let first = item_marker(&lines[pos])?;
    let mut tight = true;
    let mut bodies: Vec<Vec<String>> = Vec::new();
    let mut i = pos;

    while let Some(marker) = lines.get(i).and_then(|l| item_marker(l)) {
        if !marker.same_list(&first) {
            break;
        }
        let (body, next, gap) = collect_item(parser, lines, i, &marker);
        if has_inner_gap(&body) {
            tight = false;
        }
        bodies.push(body);
        i = next;
        let continues = lines
            .get(i)
            .and_then(|l| item_marker(l))
            .is_some_and(|m| m.same_list(&first));
        if !continues {
            break;
        }
        if gap {
            tight = false;
        }
    }

    let items = bodies
        .iter()
        .map(|body| BlockNode::ListItem {
            task: None,
            children: parser.parse_nested(body),
        })
        .collect();
    Some(BlockMatch::one(
        BlockNode::List {
            ordered: first.ordered,
            start: first.start,
            tight,
            items,
        },
        i - pos,
    ))
}

/// Returns the item's dedented lines, the index after it, and whether blank
/// lines separated it from what follows.
fn collect_item(
    parser: &BlockParser<'_>,
    lines: &[String],
    pos: usize,
    marker: &ListMarker,
) -> (Vec<String>, usize, bool) {
    let mut body = vec![marker.content(&lines[pos]).to_string()];
    let mut i = pos + 1;
    while i < lines.len() {
        let line = &lines[i];
        if is_blank(line) {
            let next = (i..lines.len())
                .find(|&j| !is_blank(&lines[j]))
                .unwrap_or(lines.len());
            let starts_empty = marker.empty && body.len() == 1;
            let inside = next < lines.len() && indent(&lines[next]) >= marker.content_col;
            if inside && !starts_empty {
                body.extend(std::iter::repeat_n(String::new(), next - i));
                i = next;
                continue;
            }
            return (body, next, true);
        }
        if indent(line) >= marker.content_col {
            body.push(line[marker.content_col..].to_string());
        } else if body.last().is_some_and(|l| !is_blank(l))
            && item_marker(line).is_none()
            && !parser.interrupts_paragraph(line)
        {
            body.push(line.trim_start().to_string());
        } else {
            break;
        }
        i += 1;
    }
    (body, i, false)
}

/// A blank line followed by unindented item content makes the list loose.
fn has_inner_gap(body: &[String]) -> bool {
    body.windows(2)
        .any(|w| is_blank(&w[0]) && !is_blank(&w[1]) && indent(&w[1]) == 0)
}
