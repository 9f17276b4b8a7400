//! Heading text to URL-safe anchor.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s-]").unwrap());
static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-\s]+").unwrap());

/// Drops tags and decodes entities, leaving the visible text of an HTML fragment.
#[must_use]
pub fn strip_markup(html: &str) -> String {
    let stripped = TAG.replace_all(html, "");
    html_escape::decode_html_entities(&stripped).into_owned()
}

/// Turns heading text (possibly containing inline HTML) into an anchor.
///
/// Markup is stripped, the text is NFKD-normalized, and everything outside
/// ASCII word characters, whitespace and hyphens is dropped. Runs of
/// whitespace and hyphens collapse to one `-`. Uniqueness is the caller's job.
#[must_use]
pub fn slugify(text: &str) -> String {
    let plain = strip_markup(text);
    let ascii: String = plain.nfkd().filter(char::is_ascii).collect();
    let cleaned = NON_WORD.replace_all(&ascii, "");
    let lowered = cleaned.trim().to_lowercase();
    SEPARATORS.replace_all(&lowered, "-").into_owned()
}
