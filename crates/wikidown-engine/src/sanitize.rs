//! Denylist sanitizer for raw HTML fragments.
//!
//! Every tag in a fragment is scanned. One denied tag or one event-handler
//! attribute anywhere escapes the whole fragment so it shows up as text.
//! Fragments with no recognizable tag are returned as they came in.

use std::sync::LazyLock;

use regex::Regex;

/// Tags whose mere presence escapes the fragment.
pub const DENIED_TAGS: &[&str] = &[
    "script", "style", "blink", "marquee", "iframe", "object", "embed", "applet", "frame",
    "frameset", "base", "meta", "link", "noscript", "xml",
];

/// DOM event-handler attributes.
pub const DENIED_ATTRIBUTES: &[&str] = &[
    "onabort",
    "onafterprint",
    "onbeforeprint",
    "onbeforeunload",
    "onblur",
    "oncanplay",
    "onchange",
    "onclick",
    "oncontextmenu",
    "oncopy",
    "oncut",
    "ondblclick",
    "ondrag",
    "ondragend",
    "ondragenter",
    "ondragleave",
    "ondragover",
    "ondragstart",
    "ondrop",
    "onerror",
    "onfocus",
    "onhashchange",
    "oninput",
    "oninvalid",
    "onkeydown",
    "onkeypress",
    "onkeyup",
    "onload",
    "onmessage",
    "onmousedown",
    "onmouseenter",
    "onmouseleave",
    "onmousemove",
    "onmouseout",
    "onmouseover",
    "onmouseup",
    "onmousewheel",
    "onpageshow",
    "onpaste",
    "onpointerdown",
    "onpointerup",
    "onreset",
    "onresize",
    "onscroll",
    "onsearch",
    "onselect",
    "onsubmit",
    "ontoggle",
    "onunload",
    "onwheel",
];

/// A `>` inside a quoted attribute value does not end the tag.
static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<\s*/?\s*([A-Za-z][A-Za-z0-9:-]*)((?:"[^"]*"|'[^']*'|[^'">])*)>"#).unwrap()
});

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([^\s"'<>/=]+)(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'=<>`]+))?"#).unwrap()
});

/// Returns `html` unchanged when it is safe, or fully escaped when it is not.
#[must_use]
pub fn sanitize(html: &str) -> String {
    if is_harmful(html) {
        log::debug!("escaping raw html fragment with a denied tag or attribute");
        escape_fragment(html)
    } else {
        html.to_string()
    }
}

/// True if any tag in the fragment is denied or carries an event handler.
#[must_use]
pub fn is_harmful(html: &str) -> bool {
    TAG.captures_iter(html).any(|caps| {
        let name = caps[1].to_ascii_lowercase();
        if DENIED_TAGS.contains(&name.as_str()) {
            return true;
        }
        ATTRIBUTE.captures_iter(&caps[2]).any(|attr| {
            let attr = attr[1].to_ascii_lowercase();
            DENIED_ATTRIBUTES.contains(&attr.as_str())
        })
    })
}

fn escape_fragment(html: &str) -> String {
    html_escape::encode_double_quoted_attribute(html).into_owned()
}
