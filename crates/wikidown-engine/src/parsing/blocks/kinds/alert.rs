use crate::grammar::BlockRule;
use crate::parsing::blocks::parser::{BlockMatch, BlockParser};
use crate::parsing::blocks::types::{AlertKind, BlockNode};

use super::block_quote::{self, BlockQuote};

/// `> [!NOTE]` on the first line; unknown types are not alerts.
pub fn kind(line: &str) -> Option<AlertKind> {
    let marker = BlockQuote::strip(line)?
        .trim()
        .strip_prefix("[!")?
        .strip_suffix(']')?;
    AlertKind::from_marker(marker)
}

pub const RULE: BlockRule = BlockRule {
    name: "alert",
    interrupts: Some(starts),
    parse,
};

fn starts(line: &str) -> bool {
    kind(line).is_some()
}

fn parse(parser: &mut BlockParser<'_>, lines: &[String], pos: usize) -> Option<BlockMatch> {
    if !parser.can_nest() {
        return None;
    }
    let kind = kind(&lines[pos])?;
    let (inner, consumed) = block_quote::collect(parser, lines, pos + 1, BlockQuote::strip);
    let children = parser.parse_nested(&inner);
    Some(BlockMatch::one(
        BlockNode::AlertBlock { kind, children },
        consumed + 1,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_markers() {
        assert_eq!(kind("> [!NOTE]"), Some(AlertKind::Note));
        assert_eq!(kind(">[!tip]"), Some(AlertKind::Tip));
        assert_eq!(kind("> [!CAUTION]  "), Some(AlertKind::Caution));
        assert_eq!(kind("> [!DANGER]"), None);
        assert_eq!(kind("> [!NOTE] trailing"), None);
        assert_eq!(kind("[!NOTE]"), None);
    }
}
