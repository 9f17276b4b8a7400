//! Fenced and indented code: highlighter dispatch, math and mermaid.

use std::fmt::Write;

use crate::highlight::Highlighted;
use crate::preview;

use super::HtmlWriter;
use super::escape::{escape_code, escape_text};

pub const MERMAID: &str = "mermaid";
/// `python=` asks for line numbers.
pub const LINE_NUMBERS_SUFFIX: char = '=';

const COPY_BUTTON: &str = r#"<button class="copy-to-clipboard" type="button" title="Copy to clipboard"><i class="far fa-copy"></i></button>"#;

/// Output line that holds the first code line, for cursor restoring.
const FIRST_CODE_LINE: usize = 1;

pub(super) fn code_block(w: &mut HtmlWriter<'_>, out: &mut String, info: &str, code: &str) {
    let (lang, lang_lifted) = preview::lift(info.split_whitespace().next().unwrap_or_default());
    let (code, cursor) = preview::lift_line(code);
    let body = code.trim_end_matches('\n');

    if lang.is_empty() {
        let html = format!(
            "<pre class=\"code copy-to-clipboard\"><code>{}</code></pre>\n",
            escape_code(body)
        );
        out.push_str(&restore(html, cursor, 0, lang_lifted));
        return;
    }

    if lang.eq_ignore_ascii_case(MERMAID) {
        w.state.requirements.requires_mermaid = true;
        let html = format!(
            "<pre class=\"mermaid\">{}\n</pre>\n",
            escape_code(body).replace("\\n", "<br/>")
        );
        out.push_str(&preview::restore_before(html, cursor.is_some() || lang_lifted));
        return;
    }

    let (lang, numbered) = match lang.strip_suffix(LINE_NUMBERS_SUFFIX) {
        Some(lang) => (lang, true),
        None => (lang.as_str(), w.line_numbers),
    };
    let html = match w.highlighter.highlight(&code, lang) {
        Highlighted::Html(highlighted) => {
            let inner = if numbered {
                with_line_numbers(&highlighted, body.lines().count())
            } else {
                highlighted
            };
            format!("<div class=\"code-block\">{COPY_BUTTON}\n{inner}</div>\n")
        }
        Highlighted::Unrecognized => {
            log::debug!("no highlighter for language {lang:?}, rendering plain");
            format!(
                "<pre class=\"code\">{}\n{}</pre>\n",
                escape_text(lang),
                escape_code(body)
            )
        }
    };
    out.push_str(&restore(html, cursor, FIRST_CODE_LINE, lang_lifted));
}

fn restore(html: String, cursor: Option<usize>, offset: usize, before: bool) -> String {
    match cursor {
        Some(line) => preview::restore_at_line(&html, line + offset),
        None => preview::restore_before(html, before),
    }
}

fn with_line_numbers(highlighted: &str, lines: usize) -> String {
    let numbers = (1..=lines.max(1))
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "<table class=\"highlighttable\"><tr><td class=\"linenos\"><div class=\"linenodiv\"><pre>{numbers}</pre></div></td><td class=\"code\">{highlighted}</td></tr></table>\n"
    )
}

/// One `\[...\]` per non-blank line.
pub(super) fn math_block(w: &mut HtmlWriter<'_>, out: &mut String, tex: &str) {
    w.state.requirements.requires_mathjax = true;
    let (tex, cursor) = preview::lift_line(tex);
    let mut html = String::from("<div class=\"math\">");
    let lines: Vec<String> = tex
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| format!(r"\[{}\]", escape_code(l)))
        .collect();
    html.push_str(&lines.join("\n"));
    html.push_str("</div>\n");
    let _ = write!(out, "{}", preview::restore_before(html, cursor.is_some()));
}
