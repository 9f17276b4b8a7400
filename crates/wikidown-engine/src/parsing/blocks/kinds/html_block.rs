use std::sync::LazyLock;

use regex::Regex;

use crate::grammar::BlockRule;
use crate::parsing::blocks::lines::{block_start, is_blank};
use crate::parsing::blocks::parser::{BlockMatch, BlockParser};
use crate::parsing::blocks::types::BlockNode;

/// Tags that open a block-level HTML section ending at the next blank line.
pub const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "base", "basefont", "blockquote", "body", "caption", "center",
    "col", "colgroup", "dd", "details", "dialog", "dir", "div", "dl", "dt", "fieldset",
    "figcaption", "figure", "footer", "form", "frame", "frameset", "h1", "h2", "h3", "h4", "h5",
    "h6", "head", "header", "hr", "html", "iframe", "legend", "li", "link", "main", "menu",
    "menuitem", "nav", "noframes", "ol", "optgroup", "option", "p", "param", "search", "section",
    "summary", "table", "tbody", "td", "tfoot", "th", "thead", "title", "tr", "track", "ul",
];

static RAW_TEXT_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^<(script|pre|style|textarea)(?:[\s>]|$)").unwrap());
static RAW_TEXT_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</(script|pre|style|textarea)>").unwrap());
static BLOCK_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^</?([A-Za-z][A-Za-z0-9-]*)(?:[\s>]|/>|$)").unwrap());
static COMPLETE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(?:<[A-Za-z][A-Za-z0-9-]*(?:\s+[A-Za-z_:][A-Za-z0-9_.:-]*(?:\s*=\s*(?:[^\s"'=<>`]+|'[^']*'|"[^"]*"))?)*\s*/?>|</[A-Za-z][A-Za-z0-9-]*\s*>)\s*$"#,
    )
    .unwrap()
});

/// How an HTML block ends, by CommonMark start condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HtmlBlockEnd {
    /// Conditions 1 to 5: the line containing this marker.
    Contains(&'static str),
    /// Condition 1: a closing raw-text tag.
    RawTextClose,
    /// Conditions 6 and 7: a blank line.
    BlankLine,
}

/// Start condition of an HTML block, if `line` opens one. Condition 7 only
/// applies when `may_interrupt` is false.
pub fn start_condition(line: &str, may_interrupt: bool) -> Option<HtmlBlockEnd> {
    let t = block_start(line)?;
    if !t.starts_with('<') {
        return None;
    }
    if RAW_TEXT_OPEN.is_match(t) {
        return Some(HtmlBlockEnd::RawTextClose);
    }
    if t.starts_with("<!--") {
        return Some(HtmlBlockEnd::Contains("-->"));
    }
    if t.starts_with("<?") {
        return Some(HtmlBlockEnd::Contains("?>"));
    }
    if t.starts_with("<![CDATA[") {
        return Some(HtmlBlockEnd::Contains("]]>"));
    }
    if t.as_bytes().get(2).is_some_and(u8::is_ascii_alphabetic) && t.starts_with("<!") {
        return Some(HtmlBlockEnd::Contains(">"));
    }
    if let Some(caps) = BLOCK_TAG.captures(t) {
        let name = caps[1].to_ascii_lowercase();
        if BLOCK_TAGS.contains(&name.as_str()) {
            return Some(HtmlBlockEnd::BlankLine);
        }
    }
    if !may_interrupt && COMPLETE_TAG.is_match(t) {
        return Some(HtmlBlockEnd::BlankLine);
    }
    None
}

fn ends(end: HtmlBlockEnd, line: &str) -> bool {
    match end {
        HtmlBlockEnd::Contains(marker) => line.contains(marker),
        HtmlBlockEnd::RawTextClose => RAW_TEXT_CLOSE.is_match(line),
        HtmlBlockEnd::BlankLine => false,
    }
}

pub const RULE: BlockRule = BlockRule {
    name: "html_block",
    interrupts: Some(starts),
    parse,
};

fn starts(line: &str) -> bool {
    start_condition(line, true).is_some()
}

fn parse(_parser: &mut BlockParser<'_>, lines: &[String], pos: usize) -> Option<BlockMatch> {
    let end = start_condition(&lines[pos], false)?;
    let mut i = pos;
    while i < lines.len() {
        let line = &lines[i];
        if end == HtmlBlockEnd::BlankLine && is_blank(line) {
            break;
        }
        i += 1;
        if ends(end, line) {
            break;
        }
    }
    let mut html = lines[pos..i].join("\n");
    html.push('\n');
    Some(BlockMatch::one(BlockNode::RawHtml { html }, i - pos))
}
