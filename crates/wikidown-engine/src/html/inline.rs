use std::fmt::Write;

use crate::parsing::inline::InlineNode;
use crate::preview;
use crate::sanitize::sanitize;

use super::HtmlWriter;
use super::escape::{escape_code, escape_text};

pub const NOT_FOUND_CLASS: &str = "notfound";

pub(super) fn write(w: &mut HtmlWriter<'_>, out: &mut String, nodes: &[InlineNode]) {
    for node in nodes {
        write_node(w, out, node);
    }
}

fn wrap(w: &mut HtmlWriter<'_>, out: &mut String, tag: &str, children: &[InlineNode]) {
    let _ = write!(out, "<{tag}>");
    write(w, out, children);
    let _ = write!(out, "</{tag}>");
}

fn title_attr(out: &mut String, title: &str) {
    if !title.is_empty() {
        let _ = write!(out, r#" title="{}""#, escape_text(title));
    }
}

fn write_node(w: &mut HtmlWriter<'_>, out: &mut String, node: &InlineNode) {
    match node {
        InlineNode::Text(text) => out.push_str(&escape_text(text)),
        InlineNode::Emphasis { strong, children } => {
            wrap(w, out, if *strong { "strong" } else { "em" }, children)
        }
        InlineNode::Strikethrough(children) => wrap(w, out, "del", children),
        InlineNode::Mark(children) => wrap(w, out, "mark", children),
        InlineNode::CodeSpan(code) => {
            let _ = write!(out, "<code>{}</code>", escape_code(code));
        }
        InlineNode::MathInline { tex, display } => {
            w.state.requirements.requires_mathjax = true;
            let (open, close) = if *display { (r"\[", r"\]") } else { (r"\(", r"\)") };
            let _ = write!(out, "{open}{}{close}", escape_code(tex));
        }
        InlineNode::Link {
            url,
            title,
            children,
        } => {
            let (url, lifted) = preview::lift(url);
            let _ = write!(out, r#"<a href="{}""#, escape_text(&url));
            if let Some(title) = title {
                title_attr(out, title);
            }
            out.push('>');
            write(w, out, children);
            out.push_str("</a>");
            if lifted {
                out.push_str(preview::SENTINEL);
            }
        }
        InlineNode::Image { src, alt, title } => {
            let (src, src_lifted) = preview::lift(src);
            let (alt, alt_lifted) = preview::lift(alt);
            let _ = write!(
                out,
                r#"<img src="{}" class="img-fluid" alt="{}""#,
                escape_text(&src),
                escape_text(&alt)
            );
            let mut lifted = src_lifted || alt_lifted;
            if let Some(title) = title {
                let (title, title_lifted) = preview::lift(title);
                lifted |= title_lifted;
                title_attr(out, &title);
            }
            out.push('>');
            if lifted {
                out.push_str(preview::SENTINEL);
            }
        }
        InlineNode::WikiLink { href, page, text } => {
            let missing = w.pages.is_some_and(|pages| !pages.page_exists(page));
            let _ = write!(out, r#"<a href="{href}""#);
            if missing {
                let _ = write!(out, r#" class="{NOT_FOUND_CLASS}""#);
            }
            let _ = write!(out, ">{}</a>", escape_text(text));
        }
        InlineNode::FootnoteRef { ref_index, number } => {
            let _ = write!(
                out,
                r##"<sup class="footnote-ref" id="fnref-{ref_index}"><a href="#fn-{number}">{number}</a></sup>"##
            );
        }
        InlineNode::RawHtml(html) => out.push_str(&sanitize(html)),
        InlineNode::LineBreak => out.push_str("<br />\n"),
    }
}
