use std::collections::HashMap;

use relative_path::RelativePath;

use crate::grammar::InlineRule;
use crate::parsing::inline::cursor::Cursor;
use crate::parsing::inline::parser::InlineParser;
use crate::parsing::inline::types::{InlineNode, plain_text};
use crate::preview;

use super::code_span::CodeSpan;
use super::escape::unescape;

pub struct Link;

impl Link {
    pub const IMAGE: u8 = b'!';
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    /// Replacement for script-capable URLs.
    pub const HARMFUL: &'static str = "#harmful-link";
    pub const RELATIVE: &'static str = "./";

    /// `javascript:`, `vbscript:` and non-image `data:` URLs.
    pub fn is_harmful(url: &str, image: bool) -> bool {
        let normalized: String = url
            .chars()
            .filter(|c| !c.is_whitespace() && !c.is_control())
            .collect::<String>()
            .to_ascii_lowercase();
        normalized.starts_with("javascript:")
            || normalized.starts_with("vbscript:")
            || (normalized.starts_with("data:") && !(image && normalized.starts_with("data:image/")))
    }

    /// Resolves `./target` beneath the current page.
    pub fn relative_to(page_url: &str, target: &str) -> String {
        let rest = target.strip_prefix(Self::RELATIVE).unwrap_or(target);
        let base = RelativePath::new(page_url.trim_matches('/'));
        format!("/{}", base.join(rest).normalize())
    }

    /// Every `[` paired with its matching `]`. Escapes and code spans hide
    /// brackets; unmatched ones are left out.
    pub fn bracket_pairs(s: &str) -> HashMap<usize, usize> {
        let bytes = s.as_bytes();
        let mut pairs = HashMap::new();
        let mut open = Vec::new();
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\\' => i += 2,
                CodeSpan::TICK => {
                    let run = bytes[i..].iter().take_while(|&&b| b == CodeSpan::TICK).count();
                    i = CodeSpan::find_close(s, i + run, run).map_or(i + run, |close| close + run);
                }
                Self::OPEN => {
                    open.push(i);
                    i += 1;
                }
                Self::CLOSE => {
                    if let Some(start) = open.pop() {
                        pairs.insert(start, i);
                    }
                    i += 1;
                }
                _ => i += 1,
            }
        }
        pairs
    }

    /// Parses `dest "title")` starting just after `(`.
    ///
    /// Returns the unescaped destination, the optional title, and the index
    /// just past the closing `)`.
    pub fn destination(s: &str, from: usize) -> Option<(String, Option<String>, usize)> {
        let bytes = s.as_bytes();
        let len = bytes.len();
        let skip_ws = |mut i: usize| {
            while i < len && matches!(bytes[i], b' ' | b'\t' | b'\n') {
                i += 1;
            }
            i
        };

        let mut i = skip_ws(from);
        let dest = if bytes.get(i) == Some(&b'<') {
            let end = i + 1 + s[i + 1..].find(['>', '\n'])?;
            if bytes[end] != b'>' {
                return None;
            }
            let dest = &s[i + 1..end];
            i = end + 1;
            dest
        } else {
            let start = i;
            let mut depth = 0usize;
            while i < len {
                match bytes[i] {
                    b'\\' => {
                        i = (i + 2).min(len);
                        continue;
                    }
                    b'(' => depth += 1,
                    b')' if depth == 0 => break,
                    b')' => depth -= 1,
                    b if b.is_ascii_whitespace() || b.is_ascii_control() => break,
                    _ => {}
                }
                i += 1;
            }
            &s[start..i]
        };

        i = skip_ws(i);
        let mut title = None;
        if let Some(&quote) = bytes.get(i)
            && matches!(quote, b'"' | b'\'' | b'(')
        {
            let close = if quote == b'(' { b')' } else { quote };
            let mut j = i + 1;
            while j < len && bytes[j] != close {
                j += if bytes[j] == b'\\' { 2 } else { 1 };
            }
            if j >= len {
                return None;
            }
            title = Some(unescape(&s[i + 1..j]));
            i = skip_ws(j + 1);
        }

        (bytes.get(i) == Some(&b')')).then(|| (unescape(dest), title, i + 1))
    }
}

/// Final URL for a link or image; the cursor sentinel, if any, is moved to
/// the end so the writer can lift it out of the attribute.
pub fn target_url(p: &InlineParser<'_>, raw: &str, image: bool) -> String {
    let (url, lifted) = preview::lift(raw);
    let mut url = if Link::is_harmful(&url, image) {
        log::debug!("replacing harmful link target");
        Link::HARMFUL.to_string()
    } else if url.starts_with(Link::RELATIVE)
        && let Some(page) = p.env.page_url.as_deref()
    {
        Link::relative_to(page, &url)
    } else {
        url
    };
    if lifted {
        url.push_str(preview::SENTINEL);
    }
    url
}

pub const RULE: InlineRule = InlineRule {
    name: "std_link",
    triggers: b"![",
    parse,
};

fn parse(p: &mut InlineParser<'_>, cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let image = cur.peek() == Some(Link::IMAGE);
    let open = if image { cur.i + 1 } else { cur.i };
    if cur.s.as_bytes().get(open) != Some(&Link::OPEN) {
        return None;
    }
    let close = cur.bracket_close(open)?;
    if cur.s.as_bytes().get(close + 1) != Some(&b'(') {
        return None;
    }
    let (dest, title, end) = Link::destination(cur.s, close + 2)?;
    let label = &cur.s[open + 1..close];
    cur.jump_to(end);

    let url = target_url(p, &dest, image);
    let children = p.parse_nested(label);
    Some(if image {
        InlineNode::Image {
            src: url,
            alt: plain_text(&children),
            title,
        }
    } else {
        InlineNode::Link {
            url,
            title,
            children,
        }
    })
}
