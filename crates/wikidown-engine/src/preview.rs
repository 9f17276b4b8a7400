//! Cursor-preserving pass for live preview.
//!
//! Before parsing, a sentinel word is glued onto the last word of the
//! editor's cursor line. It travels through parsing as ordinary text and is
//! turned into [`MARKER`] once the HTML is written, so the preview can scroll
//! to where the author is typing.

use std::sync::LazyLock;

use regex::Regex;
use xi_rope::Rope;

use crate::parsing::rope::lines_with_spans;

/// Letters and digits only, so no inline or block rule reacts to it.
pub const SENTINEL: &str = "CuRsoRm4g1cW0Rd";

pub const MARKER: &str = r#"<span id="cursor"></span>"#;

static LAST_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z_0-9.]+$").unwrap());

/// Appends the sentinel after the last word of `line` (1-based), walking
/// back towards the first line when the target has no trailing word.
///
/// Returns whether anything was injected.
pub fn inject(rope: &mut Rope, line: usize) -> bool {
    let lines: Vec<_> = lines_with_spans(rope).collect();
    if lines.is_empty() {
        return false;
    }
    let start = line.saturating_sub(1).min(lines.len() - 1);
    for lr in lines[..=start].iter().rev() {
        if let Some(word) = LAST_WORD.find(lr.content()) {
            let at = lr.span.start + word.end();
            rope.edit(at..at, SENTINEL);
            return true;
        }
    }
    false
}

/// Turns the first surviving sentinel into the marker and drops the rest.
/// Without a survivor the marker is put in front of the document.
#[must_use]
pub fn relocate(html: &str) -> String {
    match html.find(SENTINEL) {
        Some(at) => {
            let (head, tail) = html.split_at(at);
            let tail = scrub(&tail[SENTINEL.len()..]);
            format!("{head}{MARKER}{tail}")
        }
        None => format!("{MARKER}{html}"),
    }
}

/// Removes every sentinel occurrence.
#[must_use]
pub fn scrub(text: &str) -> String {
    text.replace(SENTINEL, "")
}

/// Pulls the sentinel out of `text`, reporting whether it was there.
#[must_use]
pub fn lift(text: &str) -> (String, bool) {
    if text.contains(SENTINEL) {
        (scrub(text), true)
    } else {
        (text.to_string(), false)
    }
}

/// Pulls the sentinel out of a multi-line block, returning the 0-based line
/// it sat on.
#[must_use]
pub fn lift_line(text: &str) -> (String, Option<usize>) {
    let line = text.lines().position(|l| l.contains(SENTINEL));
    match line {
        Some(_) => (scrub(text), line),
        None => (text.to_string(), None),
    }
}

/// Puts the sentinel back at the start of output line `line`, or in front of
/// the whole fragment when the output is shorter.
#[must_use]
pub fn restore_at_line(html: &str, line: usize) -> String {
    let mut offset = 0;
    for (i, l) in html.split_inclusive('\n').enumerate() {
        if i == line {
            return format!("{}{SENTINEL}{}", &html[..offset], &html[offset..]);
        }
        offset += l.len();
    }
    format!("{SENTINEL}{html}")
}

/// Emits the sentinel in front of `html` when `present`.
#[must_use]
pub fn restore_before(html: String, present: bool) -> String {
    if present { format!("{SENTINEL}{html}") } else { html }
}
