use std::sync::LazyLock;

use regex::Regex;

use crate::grammar::InlineRule;
use crate::parsing::inline::cursor::Cursor;
use crate::parsing::inline::parser::InlineParser;
use crate::parsing::inline::types::InlineNode;

use super::link::target_url;

static URI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<([A-Za-z][A-Za-z0-9+.-]{1,31}:[^\s<>]*)>").unwrap());
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^<([A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*)>",
    )
    .unwrap()
});

pub const RULE: InlineRule = InlineRule {
    name: "autolink",
    triggers: b"<",
    parse,
};

/// `<https://example.com>` and `<someone@example.com>`.
fn parse(p: &mut InlineParser<'_>, cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let rest = cur.rest();
    let (whole, text, url) = if let Some(caps) = URI.captures(rest) {
        let text = caps.get(1)?.as_str();
        (caps.get(0)?.len(), text, target_url(p, text, false))
    } else {
        let caps = EMAIL.captures(rest)?;
        let text = caps.get(1)?.as_str();
        (caps.get(0)?.len(), text, format!("mailto:{text}"))
    };
    cur.bump_n(whole);
    Some(InlineNode::Link {
        url,
        title: None,
        children: vec![InlineNode::Text(text.to_string())],
    })
}
