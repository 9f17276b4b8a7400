//! # HTML Writing
//!
//! Walks a parsed [`BlockNode`] tree and writes HTML. Inline content is
//! parsed here, block by block, so footnote references are numbered in the
//! order they appear in the output. Headings feed the table of contents and
//! the anchor registry in [`RenderState`] as they are written.
//!
//! ## Modules
//!
//! - **`escape`**: text and code escaping
//! - **`inline`**: inline tokens
//! - **`code`**: code, math and mermaid blocks
//! - **`footnotes`**: the trailing footnote section

pub mod code;
pub mod escape;
pub mod footnotes;
pub mod inline;

use std::fmt::Write;

use crate::env::RenderEnv;
use crate::grammar::Grammar;
use crate::highlight::Highlighter;
use crate::pages::PageIndex;
use crate::parsing::blocks::kinds::{FancyBlock, Frontmatter};
use crate::parsing::blocks::{BlockNode, BlockParser};
use crate::parsing::inline::InlineParser;
use crate::preview;
use crate::sanitize::sanitize;
use crate::slug::{slugify, strip_markup};
use crate::state::{RenderState, TocEntry};

use escape::escape_code;

pub struct HtmlWriter<'a> {
    grammar: &'a Grammar,
    env: &'a RenderEnv,
    pub(crate) state: &'a mut RenderState,
    highlighter: &'a dyn Highlighter,
    pages: Option<&'a dyn PageIndex>,
    line_numbers: bool,
}

impl<'a> HtmlWriter<'a> {
    pub fn new(
        grammar: &'a Grammar,
        env: &'a RenderEnv,
        state: &'a mut RenderState,
        highlighter: &'a dyn Highlighter,
    ) -> Self {
        Self {
            grammar,
            env,
            state,
            highlighter,
            pages: None,
            line_numbers: false,
        }
    }

    #[must_use]
    pub fn with_pages(mut self, pages: Option<&'a dyn PageIndex>) -> Self {
        self.pages = pages;
        self
    }

    /// Number every highlighted block, not only `lang=` ones.
    #[must_use]
    pub fn with_line_numbers(mut self, on: bool) -> Self {
        self.line_numbers = on;
        self
    }

    /// The body followed by the footnote section, if any note was cited.
    pub fn document(&mut self, blocks: &[BlockNode]) -> String {
        let mut out = String::new();
        self.blocks(&mut out, blocks, false);
        footnotes::section(self, &mut out);
        out
    }

    /// Paragraphs directly inside a tight list are written without `<p>`.
    pub fn blocks(&mut self, out: &mut String, blocks: &[BlockNode], tight: bool) {
        for block in blocks {
            self.block(out, block, tight);
        }
    }

    /// Inline-parses `text` and writes it.
    pub fn inline(&mut self, text: &str) -> String {
        let nodes = InlineParser::new(self.grammar, self.env, self.state).parse(text);
        let mut out = String::new();
        inline::write(self, &mut out, &nodes);
        out
    }

    /// Block-parses text that did not come from the document's own lines
    /// (footnote bodies), with the grammar's rewrites applied.
    pub(crate) fn parse_nested(&mut self, lines: &[String]) -> Vec<BlockNode> {
        let mut blocks = BlockParser::new(self.grammar, self.state).parse_nested(lines);
        for rewrite in self.grammar.rewrites() {
            rewrite(&mut blocks);
        }
        blocks
    }

    fn heading(&mut self, out: &mut String, level: u8, text: &str) {
        let html = self.inline(text);
        let raw_text = strip_markup(&preview::scrub(&html));
        let anchor = self.state.anchors.register(slugify(&raw_text));
        self.state.toc.push(TocEntry {
            index: self.state.toc.len(),
            display_html: preview::scrub(&html),
            level,
            raw_text,
            anchor: anchor.clone(),
        });
        let _ = writeln!(
            out,
            r##"<h{level} id="{anchor}">{html}<a href="#{anchor}" class="anchor"><i class="fas fa-link"></i></a></h{level}>"##
        );
    }

    fn list_item(&mut self, out: &mut String, task: Option<bool>, children: &[BlockNode], tight: bool) {
        let mut body = String::new();
        self.blocks(&mut body, children, tight);
        match task {
            None => out.push_str("<li>"),
            Some(checked) => {
                let checkbox = if checked {
                    r#"<input class="task-list-item-checkbox" type="checkbox" checked/>"#
                } else {
                    r#"<input class="task-list-item-checkbox" type="checkbox"/>"#
                };
                out.push_str(r#"<li class="task-list-item">"#);
                body = match body.strip_prefix("<p>") {
                    Some(rest) => format!("<p>{checkbox}{rest}"),
                    None => format!("{checkbox}{body}"),
                };
            }
        }
        out.push_str(&body);
        out.push_str("</li>\n");
    }

    fn table(&mut self, out: &mut String, node: &BlockNode) {
        let BlockNode::Table {
            aligns,
            header,
            rows,
        } = node
        else {
            return;
        };
        let row = |w: &mut Self, out: &mut String, tag: &str, cells: &[String]| {
            out.push_str("<tr>\n");
            for (i, cell) in cells.iter().enumerate() {
                let html = w.inline(cell.trim());
                match aligns.get(i).and_then(|a| a.style()) {
                    Some(style) => {
                        let _ = writeln!(out, r#"<{tag} style="{style}">{html}</{tag}>"#);
                    }
                    None => {
                        let _ = writeln!(out, "<{tag}>{html}</{tag}>");
                    }
                }
            }
            out.push_str("</tr>\n");
        };
        out.push_str("<table>\n<thead>\n");
        row(self, out, "th", header);
        out.push_str("</thead>\n");
        if !rows.is_empty() {
            out.push_str("<tbody>\n");
            for cells in rows {
                row(self, out, "td", cells);
            }
            out.push_str("</tbody>\n");
        }
        out.push_str("</table>\n");
    }

    pub(crate) fn block(&mut self, out: &mut String, block: &BlockNode, tight: bool) {
        match block {
            BlockNode::Paragraph { text } => {
                let html = self.inline(text.trim());
                if tight {
                    out.push_str(&html);
                } else {
                    let _ = writeln!(out, "<p>{html}</p>");
                }
            }
            BlockNode::Heading { level, text, .. } => self.heading(out, *level, text),
            BlockNode::ThematicBreak => out.push_str("<hr />\n"),
            BlockNode::BlockQuote { children } => {
                out.push_str("<blockquote>\n");
                self.blocks(out, children, false);
                out.push_str("</blockquote>\n");
            }
            BlockNode::List {
                ordered,
                start,
                tight,
                items,
            } => {
                let tag = if *ordered { "ol" } else { "ul" };
                if *ordered && *start != 1 {
                    let _ = writeln!(out, r#"<ol start="{start}">"#);
                } else {
                    let _ = writeln!(out, "<{tag}>");
                }
                self.blocks(out, items, *tight);
                let _ = writeln!(out, "</{tag}>");
            }
            BlockNode::ListItem { task, children } => self.list_item(out, *task, children, tight),
            BlockNode::Table { .. } => self.table(out, block),
            BlockNode::CodeBlock { info, code } => code::code_block(self, out, info, code),
            BlockNode::MathBlock { tex } => code::math_block(self, out, tex),
            BlockNode::FancyBlock {
                family,
                title,
                children,
            } => {
                let (family, lifted) = preview::lift(family);
                if lifted {
                    out.push_str(preview::SENTINEL);
                }
                let _ = writeln!(
                    out,
                    r#"<div class="alert alert-{}" role="alert">"#,
                    FancyBlock::alert_class(&family)
                );
                if let Some(title) = title {
                    let html = self.inline(title);
                    let _ = writeln!(out, r#"<h4 class="alert-heading">{html}</h4>"#);
                }
                self.blocks(out, children, false);
                out.push_str("</div>\n");
            }
            BlockNode::AlertBlock { kind, children } => {
                let _ = writeln!(
                    out,
                    r#"<div class="quote-alert quote-alert-{}">"#,
                    kind.marker().to_lowercase()
                );
                let _ = writeln!(
                    out,
                    r#"<div class="quote-alert-header"><i class="{}"></i> {}</div>"#,
                    kind.icon(),
                    kind.title()
                );
                self.blocks(out, children, false);
                out.push_str("</div>\n");
            }
            BlockNode::SpoilerBlock { children } => {
                out.push_str("<div class=\"spoiler\">\n");
                out.push_str(
                    "<button class=\"spoiler-button\" type=\"button\"><i class=\"far fa-eye\"></i></button>\n",
                );
                self.blocks(out, children, false);
                out.push_str("</div>\n");
            }
            BlockNode::FoldBlock { summary, children } => {
                let summary = match summary {
                    Some(summary) => self.inline(summary),
                    None => "Details".to_string(),
                };
                let _ = writeln!(out, "<details class=\"fold\">\n<summary>{summary}</summary>");
                self.blocks(out, children, false);
                out.push_str("</details>\n");
            }
            BlockNode::FootnoteItem {
                number,
                backrefs,
                children,
            } => {
                let mut body = String::new();
                self.blocks(&mut body, children, false);
                out.push_str(&footnotes::item(*number, backrefs, &body));
            }
            BlockNode::Footnotes { items } => {
                out.push_str(footnotes::SECTION_OPEN);
                self.blocks(out, items, false);
                out.push_str(footnotes::SECTION_CLOSE);
            }
            BlockNode::Frontmatter { raw, data } => {
                if !Frontmatter::only_title(data) {
                    let _ = writeln!(
                        out,
                        "<details id=\"frontmatter\" class=\"frontmatter\">\n<summary>Frontmatter</summary>\n<pre>{}</pre>\n</details>",
                        escape_code(raw)
                    );
                }
            }
            BlockNode::RawHtml { html } => out.push_str(&sanitize(html)),
        }
    }
}
