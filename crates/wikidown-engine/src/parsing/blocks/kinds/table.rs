use crate::grammar::BlockRule;
use crate::parsing::blocks::lines::{block_start, is_blank};
use crate::parsing::blocks::parser::{BlockMatch, BlockParser};
use crate::parsing::blocks::types::{Align, BlockNode};

pub struct Table;

impl Table {
    pub const PIPE: u8 = b'|';

    /// Splits a row on pipes that are neither escaped nor inside a code span.
    pub fn split_row(line: &str) -> Vec<String> {
        let t = line.trim();
        let t = t.strip_prefix('|').unwrap_or(t);
        let bytes = t.as_bytes();
        let mut cells = Vec::new();
        let mut start = 0;
        let mut i = 0;
        let mut ticks = 0usize;
        while i < bytes.len() {
            match bytes[i] {
                b'\\' => i += 1,
                b'`' => {
                    let run = bytes[i..].iter().take_while(|&&b| b == b'`').count();
                    ticks = if ticks == 0 {
                        run
                    } else if ticks == run {
                        0
                    } else {
                        ticks
                    };
                    i += run - 1;
                }
                Self::PIPE if ticks == 0 => {
                    cells.push(t[start..i].trim().to_string());
                    start = i + 1;
                }
                _ => {}
            }
            i += 1;
        }
        let last = t.get(start..).unwrap_or_default().trim();
        if !last.is_empty() || start == 0 {
            cells.push(last.to_string());
        }
        cells
    }

    /// Alignment per column, or `None` when the line is not a delimiter row.
    pub fn delimiter_row(line: &str) -> Option<Vec<Align>> {
        let t = block_start(line)?;
        if !t.contains('|') && !t.contains(':') {
            return None;
        }
        Self::split_row(t)
            .iter()
            .map(|cell| {
                let left = cell.starts_with(':');
                let right = cell.ends_with(':');
                let dashes = cell.trim_matches(':');
                if dashes.is_empty() || !dashes.bytes().all(|b| b == b'-') {
                    return None;
                }
                Some(match (left, right) {
                    (true, true) => Align::Center,
                    (true, false) => Align::Left,
                    (false, true) => Align::Right,
                    (false, false) => Align::None,
                })
            })
            .collect()
    }
}

pub const RULE: BlockRule = BlockRule {
    name: "table",
    interrupts: None,
    parse,
};

fn parse(parser: &mut BlockParser<'_>, lines: &[String], pos: usize) -> Option<BlockMatch> {
    let head = block_start(&lines[pos])?;
    if !head.contains('|') {
        return None;
    }
    let aligns = Table::delimiter_row(lines.get(pos + 1)?)?;
    let header = Table::split_row(head);
    if header.len() != aligns.len() {
        return None;
    }

    let mut rows = Vec::new();
    let mut i = pos + 2;
    while i < lines.len() {
        let line = &lines[i];
        if is_blank(line) || !line.contains('|') || parser.interrupts_paragraph(line) {
            break;
        }
        let mut cells = Table::split_row(line);
        cells.resize(aligns.len(), String::new());
        rows.push(cells);
        i += 1;
    }

    Some(BlockMatch::one(
        BlockNode::Table {
            aligns,
            header,
            rows,
        },
        i - pos,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_plain_row() {
        assert_eq!(Table::split_row("| a | b |"), vec!["a", "b"]);
        assert_eq!(Table::split_row("a | b"), vec!["a", "b"]);
    }

    #[test]
    fn escaped_and_code_pipes_do_not_split() {
        assert_eq!(Table::split_row(r"| a \| b | c |"), vec![r"a \| b", "c"]);
        assert_eq!(Table::split_row("| `a|b` | c |"), vec!["`a|b`", "c"]);
    }

    #[test]
    fn empty_cells_survive() {
        assert_eq!(Table::split_row("| | x |"), vec!["", "x"]);
    }

    #[test]
    fn delimiter_alignment() {
        assert_eq!(
            Table::delimiter_row("|:--|:-:|--:|---|"),
            Some(vec![Align::Left, Align::Center, Align::Right, Align::None])
        );
        assert_eq!(Table::delimiter_row("| a | b |"), None);
        assert_eq!(Table::delimiter_row("---"), None);
    }
}
