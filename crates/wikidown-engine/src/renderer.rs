//! The rendering facade.
//!
//! A [`Renderer`] owns an immutable [`Grammar`] plus its collaborators and
//! can be shared between threads. Every call to [`Renderer::render`] builds a
//! fresh [`RenderState`], so renders never see each other's anchors, TOC or
//! footnotes.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use serde::Serialize;
use xi_rope::Rope;

use crate::env::RenderEnv;
use crate::grammar::{Grammar, Plugin};
use crate::highlight::{Highlighter, default_highlighter};
use crate::html::HtmlWriter;
use crate::html::escape::escape_code;
use crate::pages::PageIndex;
use crate::parsing::inline::kinds::wikilink::restore_pipes;
use crate::parsing::parse_document;
use crate::preview;
use crate::state::{LibraryRequirements, RenderState, TocEntry};

/// A source or output transform, run in registration order.
pub type Hook = Box<dyn Fn(String) -> String + Send + Sync>;

/// Output of one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendered {
    pub html: String,
    pub toc: Vec<TocEntry>,
    pub requirements: LibraryRequirements,
}

pub struct Renderer {
    grammar: Grammar,
    highlighter: Box<dyn Highlighter>,
    pages: Option<Box<dyn PageIndex>>,
    pre_hooks: Vec<Hook>,
    post_hooks: Vec<Hook>,
    line_numbers: bool,
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer")
            .field("plugins", &self.grammar.plugins())
            .field("page_index", &self.pages.is_some())
            .field("pre_hooks", &self.pre_hooks.len())
            .field("post_hooks", &self.post_hooks.len())
            .field("line_numbers", &self.line_numbers)
            .finish()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    /// All plugins, the default highlighter, no page index and no hooks.
    pub fn new() -> Self {
        RendererBuilder::new().build()
    }

    pub fn builder() -> RendererBuilder {
        RendererBuilder::new()
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Renders `document` to HTML plus its table of contents.
    ///
    /// `cursor_line` is the editor's 1-based cursor line; when set, the HTML
    /// carries a `<span id="cursor"></span>` near it. Never fails: a panic
    /// inside a rule is logged and the document comes back as escaped text.
    pub fn render(&self, document: &str, env: &RenderEnv, cursor_line: Option<usize>) -> Rendered {
        match panic::catch_unwind(AssertUnwindSafe(|| self.render_inner(document, env, cursor_line))) {
            Ok(rendered) => rendered,
            Err(_) => {
                log::error!("render panicked, returning the document as plain text");
                Rendered {
                    html: format!("<pre>{}</pre>\n", escape_code(document)),
                    toc: Vec::new(),
                    requirements: LibraryRequirements::default(),
                }
            }
        }
    }

    fn render_inner(&self, document: &str, env: &RenderEnv, cursor_line: Option<usize>) -> Rendered {
        let mut rope = Rope::from(document);
        if let Some(line) = cursor_line
            && !preview::inject(&mut rope, line)
        {
            log::debug!("no word to attach the cursor to near line {line}");
        }

        let mut text = rope.slice_to_cow(..).into_owned();
        text = self.pre_hooks.iter().fold(text, |text, hook| hook(text));
        for preprocess in self.grammar.preprocessors() {
            text = preprocess(&text);
        }

        let mut state = RenderState::default();
        let blocks = parse_document(&Rope::from(text), &self.grammar, &mut state);
        let html = HtmlWriter::new(&self.grammar, env, &mut state, self.highlighter.as_ref())
            .with_pages(self.pages.as_deref())
            .with_line_numbers(self.line_numbers)
            .document(&blocks);

        let html = self.post_hooks.iter().fold(html, |html, hook| hook(html));
        let html = match cursor_line {
            Some(_) => preview::relocate(&html),
            None => preview::scrub(&html),
        };

        let toc = state
            .toc
            .into_iter()
            .map(|entry| TocEntry {
                display_html: restore_pipes(&preview::scrub(&entry.display_html)),
                raw_text: restore_pipes(&preview::scrub(&entry.raw_text)),
                ..entry
            })
            .collect();

        Rendered {
            html: restore_pipes(&html),
            toc,
            requirements: state.requirements,
        }
    }
}

/// Builds a [`Renderer`]; starts with every plugin enabled.
pub struct RendererBuilder {
    plugins: Vec<Plugin>,
    highlighter: Option<Box<dyn Highlighter>>,
    pages: Option<Box<dyn PageIndex>>,
    pre_hooks: Vec<Hook>,
    post_hooks: Vec<Hook>,
    line_numbers: bool,
}

impl Default for RendererBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RendererBuilder {
    pub fn new() -> Self {
        Self {
            plugins: Plugin::ALL.to_vec(),
            highlighter: None,
            pages: None,
            pre_hooks: Vec::new(),
            post_hooks: Vec::new(),
            line_numbers: false,
        }
    }

    /// Replaces the enabled plugin set.
    #[must_use]
    pub fn plugins(mut self, plugins: impl IntoIterator<Item = Plugin>) -> Self {
        self.plugins = plugins.into_iter().collect();
        self
    }

    #[must_use]
    pub fn without_plugin(mut self, plugin: Plugin) -> Self {
        self.plugins.retain(|p| *p != plugin);
        self
    }

    #[must_use]
    pub fn highlighter(mut self, highlighter: impl Highlighter + 'static) -> Self {
        self.highlighter = Some(Box::new(highlighter));
        self
    }

    #[must_use]
    pub fn page_index(mut self, pages: impl PageIndex + 'static) -> Self {
        self.pages = Some(Box::new(pages));
        self
    }

    /// Runs on the Markdown source before parsing.
    #[must_use]
    pub fn pre_hook(mut self, hook: impl Fn(String) -> String + Send + Sync + 'static) -> Self {
        self.pre_hooks.push(Box::new(hook));
        self
    }

    /// Runs on the HTML before the cursor marker is placed.
    #[must_use]
    pub fn post_hook(mut self, hook: impl Fn(String) -> String + Send + Sync + 'static) -> Self {
        self.post_hooks.push(Box::new(hook));
        self
    }

    #[must_use]
    pub fn line_numbers(mut self, on: bool) -> Self {
        self.line_numbers = on;
        self
    }

    pub fn build(self) -> Renderer {
        Renderer {
            grammar: Grammar::with_plugins(self.plugins),
            highlighter: self.highlighter.unwrap_or_else(default_highlighter),
            pages: self.pages,
            pre_hooks: self.pre_hooks,
            post_hooks: self.post_hooks,
            line_numbers: self.line_numbers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::PlainHighlighter;
    use pretty_assertions::assert_eq;

    fn plain() -> Renderer {
        Renderer::builder().highlighter(PlainHighlighter).build()
    }

    #[test]
    fn renderer_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Renderer>();
    }

    #[test]
    fn empty_document() {
        let out = plain().render("", &RenderEnv::default(), None);
        assert_eq!(out.html, "");
        assert!(out.toc.is_empty());
    }

    #[test]
    fn hooks_run_in_order() {
        let r = Renderer::builder()
            .highlighter(PlainHighlighter)
            .pre_hook(|s| s.replace("one", "two"))
            .pre_hook(|s| s.replace("two", "three"))
            .post_hook(|s| s.replace("<p>", "<p class=\"x\">"))
            .build();
        let out = r.render("one", &RenderEnv::default(), None);
        assert_eq!(out.html, "<p class=\"x\">three</p>\n");
    }

    #[test]
    fn disabled_plugin_leaves_syntax_alone() {
        let r = Renderer::builder()
            .highlighter(PlainHighlighter)
            .without_plugin(Plugin::Mark)
            .build();
        let out = r.render("==x==", &RenderEnv::default(), None);
        assert_eq!(out.html, "<p>==x==</p>\n");
    }

    #[test]
    fn cursor_without_words_is_prepended() {
        let out = plain().render("---\n", &RenderEnv::default(), Some(1));
        assert!(out.html.starts_with(preview::MARKER));
    }
}
