use std::sync::LazyLock;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use regex::Regex;

use crate::env::WikilinkStyle;
use crate::grammar::InlineRule;
use crate::parsing::inline::cursor::Cursor;
use crate::parsing::inline::parser::InlineParser;
use crate::parsing::inline::types::InlineNode;
use crate::preview;
use crate::slug::slugify;

/// Bytes left alone when quoting a wiki link target.
const TARGET_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/')
    .remove(b'#');

static WIKILINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\[([^\]]+)\]\]").unwrap());

pub struct WikiLink;

impl WikiLink {
    pub const OPEN: &'static [u8; 2] = b"[[";
    pub const CLOSE: &'static str = "]]";
    pub const ALIAS: char = '|';
    /// Stands in for `|` inside `[[...]]` until the final pass, so table
    /// rows do not split on it.
    pub const PIPE_SENTINEL: char = '\u{E000}';

    /// Splits `[[first|second]]` content into `(title, link)` per `style`.
    pub fn split(content: &str, style: WikilinkStyle) -> (&str, &str) {
        let (first, second) = match content.split_once([Self::PIPE_SENTINEL, Self::ALIAS]) {
            Some((a, b)) if !b.is_empty() => (a, b),
            Some((a, _)) => (a, a),
            None => (content, content),
        };
        match style {
            WikilinkStyle::TitleLink => (first, second),
            WikilinkStyle::LinkTitle => (second, first),
        }
    }

    /// Pipes after the first one belong to the title or target text.
    pub fn unprotect(part: &str) -> String {
        part.replace(Self::PIPE_SENTINEL, "|")
    }

    /// Resolves a link target to `(href, page)`.
    ///
    /// Existing percent-encoding is undone first so targets are never
    /// double-encoded. A `#fragment` is slugified to match heading anchors.
    /// `page` is the decoded path used for existence checks.
    pub fn resolve(link: &str) -> (String, String) {
        let decoded = percent_decode_str(link.trim()).decode_utf8_lossy();
        let (path, fragment) = match decoded.split_once('#') {
            Some((path, fragment)) => (path, Some(fragment)),
            None => (&decoded[..], None),
        };
        let mut target = String::new();
        if !decoded.starts_with(['/', '#']) {
            target.push('/');
        }
        target.push_str(path);
        let page = target.clone();
        if let Some(fragment) = fragment {
            target.push('#');
            target.push_str(&slugify(fragment));
        }
        (utf8_percent_encode(&target, TARGET_SAFE).to_string(), page)
    }
}

/// Replaces `|` inside every `[[...]]` with the pipe sentinel.
pub fn protect_pipes(text: &str) -> String {
    WIKILINK
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let inner = caps[1].replace(WikiLink::ALIAS, &WikiLink::PIPE_SENTINEL.to_string());
            format!("[[{inner}]]")
        })
        .into_owned()
}

/// Turns leftover pipe sentinels back into `|`.
pub fn restore_pipes(text: &str) -> String {
    text.replace(WikiLink::PIPE_SENTINEL, "|")
}

pub const RULE: InlineRule = InlineRule {
    name: "wikilink",
    triggers: b"[",
    parse,
};

/// `[[content]]` with no `]` inside and no third `]` after the close.
fn parse(p: &mut InlineParser<'_>, cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !cur.starts_with(WikiLink::OPEN) {
        return None;
    }
    let from = cur.i + WikiLink::OPEN.len();
    let end = cur.find_from(from, "]")?;
    let s = cur.s;
    if end == from || !s[end..].starts_with(WikiLink::CLOSE) || s[end + 2..].starts_with(']') {
        return None;
    }
    let content = &s[from..end];
    cur.jump_to(end + WikiLink::CLOSE.len());

    let (title, link) = WikiLink::split(content, p.env.wikilink_style);
    let (title, link) = (WikiLink::unprotect(title), WikiLink::unprotect(link));
    let (link, lifted) = preview::lift(&link);
    let mut text = title;
    if lifted && !text.contains(preview::SENTINEL) {
        text.push_str(preview::SENTINEL);
    }
    let (href, page) = WikiLink::resolve(&link);
    Some(InlineNode::WikiLink { href, page, text })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Link", "/Link")]
    #[case("Link with spaces", "/Link%20with%20spaces")]
    #[case("people/Paul", "/people/Paul")]
    #[case("/people/Paul", "/people/Paul")]
    #[case("Link with#Some Heading", "/Link%20with#some-heading")]
    #[case("#anchor", "#anchor")]
    #[case("Already%20Encoded", "/Already%20Encoded")]
    #[case("Ümlaut", "/%C3%9Cmlaut")]
    fn resolve_targets(#[case] link: &str, #[case] href: &str) {
        assert_eq!(WikiLink::resolve(link).0, href);
    }

    #[test]
    fn extra_pipes_stay_in_the_target() {
        let (title, link) = WikiLink::split("a\u{E000}b\u{E000}c", WikilinkStyle::TitleLink);
        assert_eq!(title, "a");
        let link = WikiLink::unprotect(link);
        assert_eq!(WikiLink::resolve(&link).0, "/b%7Cc");
    }

    #[test]
    fn page_is_decoded_path() {
        assert_eq!(
            WikiLink::resolve("A%20B#frag").1,
            "/A B".to_string()
        );
    }

    #[test]
    fn split_by_style() {
        assert_eq!(WikiLink::split("Title|Link", WikilinkStyle::TitleLink), ("Title", "Link"));
        assert_eq!(WikiLink::split("Link|Title", WikilinkStyle::LinkTitle), ("Title", "Link"));
        assert_eq!(WikiLink::split("Page", WikilinkStyle::LinkTitle), ("Page", "Page"));
        assert_eq!(
            WikiLink::split("A\u{E000}B", WikilinkStyle::TitleLink),
            ("A", "B")
        );
    }

    #[test]
    fn pipes_are_protected_and_restored() {
        let text = "| a | [[T|L]] |";
        let protected = protect_pipes(text);
        assert_eq!(protected, "| a | [[T\u{E000}L]] |");
        assert_eq!(restore_pipes(&protected), text);
    }
}
