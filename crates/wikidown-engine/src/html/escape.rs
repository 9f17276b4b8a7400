//! HTML escaping for text and attribute values.

use std::sync::LazyLock;

use html_escape::encode_double_quoted_attribute;
use regex::Regex;

static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:#[0-9]{1,7}|#[xX][0-9A-Fa-f]{1,6}|[A-Za-z][A-Za-z0-9]{1,31});").unwrap()
});

/// Escapes `&`, `<`, `>` and `"`, leaving well-formed character references
/// such as `&amp;` or `&#8212;` alone so authors can write them directly.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in ENTITY.find_iter(text) {
        out.push_str(&encode_double_quoted_attribute(&text[last..m.start()]));
        out.push_str(m.as_str());
        last = m.end();
    }
    out.push_str(&encode_double_quoted_attribute(&text[last..]));
    out
}

/// Escapes everything, entities included. Used for code, where `&amp;`
/// must show up literally.
#[must_use]
pub fn escape_code(code: &str) -> String {
    encode_double_quoted_attribute(code).into_owned()
}
