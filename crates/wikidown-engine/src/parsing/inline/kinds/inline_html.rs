use std::sync::LazyLock;

use regex::Regex;

use crate::grammar::InlineRule;
use crate::parsing::inline::cursor::Cursor;
use crate::parsing::inline::parser::InlineParser;
use crate::parsing::inline::types::InlineNode;

static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"^(?:<[A-Za-z][A-Za-z0-9-]*(?:\s+[A-Za-z_:][A-Za-z0-9_.:-]*(?:\s*=\s*(?:[^\s"'=<>`]+|'[^']*'|"[^"]*"))?)*\s*/?>"#,
        r"|</[A-Za-z][A-Za-z0-9-]*\s*>",
        r"|<!--[\s\S]*?-->",
        r"|<\?[\s\S]*?\?>",
        r"|<![A-Za-z][^>]*>",
        r"|<!\[CDATA\[[\s\S]*?\]\]>)",
    ))
    .unwrap()
});

pub const RULE: InlineRule = InlineRule {
    name: "inline_html",
    triggers: b"<",
    parse,
};

/// One tag, comment or declaration; the writer routes it through the sanitizer.
fn parse(_p: &mut InlineParser<'_>, cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let m = TAG.find(cur.rest())?;
    let html = m.as_str().to_string();
    cur.bump_n(m.end());
    Some(InlineNode::RawHtml(html))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_and_comments() {
        for html in ["<mark>", "</mark>", "<br/>", "<a href=\"x\" title='y'>", "<!-- c -->"] {
            assert!(TAG.is_match(html), "{html}");
        }
        for text in ["< notatag>", "<a b=>", "<3"] {
            assert!(!TAG.is_match(text), "{text}");
        }
    }
}
