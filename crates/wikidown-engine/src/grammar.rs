//! # Grammar
//!
//! The ordered block and inline rule tables a [`Renderer`](crate::Renderer)
//! parses with. A grammar starts from the CommonMark-ish base rules and each
//! [`Plugin`] inserts its rules relative to a named anchor rule, so the final
//! precedence does not depend on which other plugins are enabled.
//!
//! Grammars are built once and never change afterwards; every render borrows
//! the same tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::parsing::blocks::kinds::{
    alert, block_quote, code_fence, fancy_block, fold, footnote_def, frontmatter, heading,
    html_block, indented_code, list, paragraph, spoiler, table, task_list, thematic_break,
};
use crate::parsing::blocks::{BlockMatch, BlockNode, BlockParser};
use crate::parsing::inline::cursor::Cursor;
use crate::parsing::inline::kinds::{
    autolink, code_span, delimited, emphasis, escape, footnote, inline_html, line_break, link,
    math, wikilink,
};
use crate::parsing::inline::{InlineNode, InlineParser};

pub type BlockParse = fn(&mut BlockParser<'_>, &[String], usize) -> Option<BlockMatch>;
pub type InlineParse = fn(&mut InlineParser<'_>, &mut Cursor<'_>) -> Option<InlineNode>;
/// Source-to-source pass run before block parsing.
pub type Preprocessor = fn(&str) -> String;
/// Tree pass run between parsing and HTML writing.
pub type Rewrite = fn(&mut Vec<BlockNode>);

/// A block construct: tried at the start of every unconsumed line.
#[derive(Clone, Copy)]
pub struct BlockRule {
    pub name: &'static str,
    /// Set for rules that may start without a blank line after a paragraph.
    pub interrupts: Option<fn(&str) -> bool>,
    pub parse: BlockParse,
}

/// An inline construct: tried at every position holding a trigger byte.
#[derive(Clone, Copy)]
pub struct InlineRule {
    pub name: &'static str,
    pub triggers: &'static [u8],
    pub parse: InlineParse,
}

impl fmt::Debug for BlockRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BlockRule").field(&self.name).finish()
    }
}

impl fmt::Debug for InlineRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("InlineRule").field(&self.name).finish()
    }
}

trait Named {
    fn name(&self) -> &'static str;
}

impl Named for BlockRule {
    fn name(&self) -> &'static str {
        self.name
    }
}

impl Named for InlineRule {
    fn name(&self) -> &'static str {
        self.name
    }
}

/// Where a plugin rule goes. Anchors are tried in order; when none is
/// present the rule is appended.
#[derive(Debug, Clone, Copy)]
enum Place {
    Front,
    Before(&'static [&'static str]),
    After(&'static [&'static str]),
}

fn insert<R: Named>(rules: &mut Vec<R>, rule: R, place: Place) {
    let find = |anchors: &[&str]| {
        anchors
            .iter()
            .find_map(|anchor| rules.iter().position(|r| r.name() == *anchor))
    };
    let at = match place {
        Place::Front => Some(0),
        Place::Before(anchors) => find(anchors),
        Place::After(anchors) => find(anchors).map(|i| i + 1),
    };
    match at {
        Some(i) => rules.insert(i, rule),
        None => rules.push(rule),
    }
}

/// An optional syntax extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Plugin {
    Frontmatter,
    FancyBlocks,
    Alerts,
    Spoilers,
    Folds,
    Footnotes,
    Tables,
    TaskLists,
    Mark,
    Math,
    Wikilinks,
    Strikethrough,
}

impl Plugin {
    /// Every plugin, in install order.
    pub const ALL: [Plugin; 12] = [
        Plugin::Frontmatter,
        Plugin::FancyBlocks,
        Plugin::Alerts,
        Plugin::Spoilers,
        Plugin::Folds,
        Plugin::Footnotes,
        Plugin::Tables,
        Plugin::TaskLists,
        Plugin::Mark,
        Plugin::Math,
        Plugin::Wikilinks,
        Plugin::Strikethrough,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Plugin::Frontmatter => "frontmatter",
            Plugin::FancyBlocks => "fancy_blocks",
            Plugin::Alerts => "alerts",
            Plugin::Spoilers => "spoilers",
            Plugin::Folds => "folds",
            Plugin::Footnotes => "footnotes",
            Plugin::Tables => "tables",
            Plugin::TaskLists => "task_lists",
            Plugin::Mark => "mark",
            Plugin::Math => "math",
            Plugin::Wikilinks => "wikilinks",
            Plugin::Strikethrough => "strikethrough",
        }
    }
}

impl fmt::Display for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown plugin: {0}")]
pub struct UnknownPlugin(pub String);

impl FromStr for Plugin {
    type Err = UnknownPlugin;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Plugin::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| UnknownPlugin(s.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct Grammar {
    block: Vec<BlockRule>,
    inline: Vec<InlineRule>,
    plugins: Vec<Plugin>,
    preprocessors: Vec<Preprocessor>,
    rewrites: Vec<Rewrite>,
}

impl Default for Grammar {
    fn default() -> Self {
        Self::with_plugins(Plugin::ALL)
    }
}

impl Grammar {
    /// Core Markdown only, no plugins.
    pub fn base() -> Self {
        Self {
            block: vec![
                code_fence::RULE,
                heading::RULE,
                thematic_break::RULE,
                block_quote::RULE,
                list::RULE,
                html_block::RULE,
                indented_code::RULE,
                paragraph::RULE,
            ],
            inline: vec![
                escape::RULE,
                code_span::RULE,
                link::RULE,
                autolink::RULE,
                inline_html::RULE,
                emphasis::RULE,
                line_break::RULE,
            ],
            plugins: Vec::new(),
            preprocessors: Vec::new(),
            rewrites: Vec::new(),
        }
    }

    /// Base rules plus `plugins`, installed in [`Plugin::ALL`] order
    /// whatever order they are given in.
    pub fn with_plugins(plugins: impl IntoIterator<Item = Plugin>) -> Self {
        let wanted: Vec<Plugin> = plugins.into_iter().collect();
        let mut grammar = Self::base();
        for plugin in Plugin::ALL {
            if wanted.contains(&plugin) {
                grammar.install(plugin);
            }
        }
        grammar
    }

    fn install(&mut self, plugin: Plugin) {
        const BLOCK_QUOTE: Place = Place::Before(&["block_quote"]);
        match plugin {
            Plugin::Frontmatter => {
                insert(&mut self.block, frontmatter::RULE, Place::Front);
                self.rewrites.push(frontmatter::insert_title);
            }
            Plugin::FancyBlocks => {
                insert(&mut self.block, fancy_block::RULE, Place::After(&["fenced_code"]))
            }
            Plugin::Alerts => insert(&mut self.block, alert::RULE, BLOCK_QUOTE),
            Plugin::Spoilers => insert(&mut self.block, spoiler::RULE, BLOCK_QUOTE),
            Plugin::Folds => insert(&mut self.block, fold::RULE, BLOCK_QUOTE),
            Plugin::Footnotes => {
                insert(&mut self.block, footnote_def::RULE, Place::After(&["block_quote"]));
                insert(&mut self.inline, footnote::RULE, Place::Before(&["std_link"]));
            }
            Plugin::Tables => insert(&mut self.block, table::RULE, Place::Before(&["list"])),
            Plugin::TaskLists => self.rewrites.push(task_list::rewrite),
            Plugin::Mark => {
                insert(&mut self.inline, delimited::MARK_RULE, Place::After(&["code_span"]))
            }
            Plugin::Math => insert(&mut self.inline, math::RULE, Place::After(&["code_span"])),
            Plugin::Wikilinks => {
                insert(
                    &mut self.inline,
                    wikilink::RULE,
                    Place::Before(&["footnote", "std_link"]),
                );
                self.preprocessors.push(wikilink::protect_pipes);
            }
            Plugin::Strikethrough => insert(
                &mut self.inline,
                delimited::STRIKETHROUGH_RULE,
                Place::After(&["emphasis"]),
            ),
        }
        self.plugins.push(plugin);
    }

    pub fn has(&self, plugin: Plugin) -> bool {
        self.plugins.contains(&plugin)
    }

    pub fn plugins(&self) -> &[Plugin] {
        &self.plugins
    }

    pub fn block_rules(&self) -> &[BlockRule] {
        &self.block
    }

    pub fn inline_rules(&self) -> &[InlineRule] {
        &self.inline
    }

    pub fn preprocessors(&self) -> &[Preprocessor] {
        &self.preprocessors
    }

    pub fn rewrites(&self) -> &[Rewrite] {
        &self.rewrites
    }

    pub fn block_rule_names(&self) -> Vec<&'static str> {
        self.block.iter().map(|r| r.name).collect()
    }

    pub fn inline_rule_names(&self) -> Vec<&'static str> {
        self.inline.iter().map(|r| r.name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn full_block_order() {
        insta::assert_snapshot!(
            Grammar::default().block_rule_names().join(", "),
            @"frontmatter, fenced_code, fancy_block, heading, thematic_break, alert, spoiler, fold, block_quote, footnote_def, table, list, html_block, indented_code, paragraph"
        );
    }

    #[test]
    fn full_inline_order() {
        insta::assert_snapshot!(
            Grammar::default().inline_rule_names().join(", "),
            @"escape, code_span, math, mark, wikilink, footnote, std_link, autolink, inline_html, emphasis, strikethrough, line_break"
        );
    }

    #[test]
    fn base_has_no_extensions() {
        let g = Grammar::base();
        insta::assert_snapshot!(
            g.block_rule_names().join(", "),
            @"fenced_code, heading, thematic_break, block_quote, list, html_block, indented_code, paragraph"
        );
        insta::assert_snapshot!(
            g.inline_rule_names().join(", "),
            @"escape, code_span, std_link, autolink, inline_html, emphasis, line_break"
        );
        assert!(g.preprocessors().is_empty());
        assert!(g.rewrites().is_empty());
    }

    #[test]
    fn order_is_independent_of_requested_order() {
        let a = Grammar::with_plugins([Plugin::Wikilinks, Plugin::Footnotes]);
        let b = Grammar::with_plugins([Plugin::Footnotes, Plugin::Wikilinks]);
        assert_eq!(a.inline_rule_names(), b.inline_rule_names());
    }

    #[test]
    fn wikilinks_fall_back_to_std_link_anchor() {
        let g = Grammar::with_plugins([Plugin::Wikilinks]);
        let names = g.inline_rule_names();
        let wikilink = names.iter().position(|n| *n == "wikilink");
        let std_link = names.iter().position(|n| *n == "std_link");
        assert_eq!(wikilink.map(|i| i + 1), std_link);
        assert_eq!(g.preprocessors().len(), 1);
    }

    #[rstest]
    #[case("spoilers", Plugin::Spoilers)]
    #[case("task_lists", Plugin::TaskLists)]
    #[case("fancy_blocks", Plugin::FancyBlocks)]
    fn plugin_names_parse(#[case] name: &str, #[case] plugin: Plugin) {
        assert_eq!(name.parse::<Plugin>(), Ok(plugin));
        assert_eq!(plugin.to_string(), name);
    }

    #[test]
    fn unknown_plugin_is_an_error() {
        assert_eq!(
            "emoji".parse::<Plugin>(),
            Err(UnknownPlugin("emoji".to_string()))
        );
    }

    #[test]
    fn has_reports_installed_plugins() {
        let g = Grammar::with_plugins([Plugin::Math]);
        assert!(g.has(Plugin::Math));
        assert!(!g.has(Plugin::Mark));
    }
}
