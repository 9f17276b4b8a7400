//! The footnote section appended after the document body.

use std::fmt::Write;

use crate::parsing::blocks::BlockNode;
use crate::parsing::blocks::lines::split_lines;

use super::HtmlWriter;

pub const SECTION_OPEN: &str = "<hr/><section class=\"footnotes\">\n<ol>\n";
pub const SECTION_CLOSE: &str = "</ol>\n</section>\n";
const ARROW: &str = r#"<i class="fas fa-long-arrow-alt-up"></i>"#;

/// Bijective base-26 label: 1 -> `a`, 26 -> `z`, 27 -> `aa`.
pub fn letters(mut n: usize) -> String {
    let mut out = Vec::new();
    while n > 0 {
        n -= 1;
        out.push(b'a' + (n % 26) as u8);
        n /= 26;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

/// Back-links to every reference of one note: a single arrow link, or an
/// arrow followed by lettered links when the note is cited more than once.
pub fn backlinks(backrefs: &[usize]) -> String {
    let mut out = String::new();
    match backrefs {
        [] => {}
        [only] => {
            let _ = write!(out, r##"<a class="footnote" href="#fnref-{only}">{ARROW}</a> "##);
        }
        many => {
            let _ = write!(out, "{ARROW} ");
            for (i, r) in many.iter().enumerate() {
                let _ = write!(
                    out,
                    r##"<a class="footnote" href="#fnref-{r}">{}</a> "##,
                    letters(i + 1)
                );
            }
        }
    }
    out
}

/// `<li>` for one note; back-links go inside a leading paragraph.
pub fn item(number: usize, backrefs: &[usize], body: &str) -> String {
    let links = backlinks(backrefs);
    let body = match body.strip_prefix("<p>") {
        Some(rest) => format!("<p>{links}{rest}"),
        None => format!("{links}{body}"),
    };
    format!("<li id=\"fn-{number}\">{body}</li>\n")
}

/// Renders every referenced, defined note. Bodies may cite further notes;
/// those are rendered in a following batch until none are left.
pub(super) fn section(w: &mut HtmlWriter<'_>, out: &mut String) {
    let mut done = 0;
    let mut items = String::new();
    loop {
        let batch = w.state.footnotes.referenced()[done..].to_vec();
        if batch.is_empty() {
            break;
        }
        done += batch.len();
        for key in batch {
            let footnotes = &w.state.footnotes;
            let (Some(text), Some(number)) = (footnotes.definition(&key), footnotes.number(&key))
            else {
                continue;
            };
            let lines = split_lines(text);
            let children = w.parse_nested(&lines);
            let node = BlockNode::FootnoteItem {
                number,
                backrefs: w.state.footnotes.backrefs(&key),
                children,
            };
            w.block(&mut items, &node, false);
        }
    }
    if !items.is_empty() {
        out.push_str(SECTION_OPEN);
        out.push_str(&items);
        out.push_str(SECTION_CLOSE);
    }
}
