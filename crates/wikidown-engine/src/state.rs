//! Mutable per-render state.
//!
//! A fresh [`RenderState`] is built for every render call and threaded by
//! `&mut` through block parsing, inline parsing and HTML writing. Nothing
//! here outlives a single render.

use std::collections::HashMap;

use serde::Serialize;

/// One heading, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub index: usize,
    /// Heading content as rendered HTML.
    pub display_html: String,
    pub level: u8,
    /// Heading content with markup stripped.
    pub raw_text: String,
    pub anchor: String,
}

/// Client-side libraries the rendered HTML depends on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LibraryRequirements {
    pub requires_mathjax: bool,
    pub requires_mermaid: bool,
}

/// Slug -> collision count for the current render.
#[derive(Debug, Default)]
pub struct AnchorRegistry {
    seen: HashMap<String, usize>,
}

impl AnchorRegistry {
    /// Returns `slug` the first time, then `slug-1`, `slug-2`, ...
    ///
    /// A suffixed anchor that an earlier heading already took is skipped.
    pub fn register(&mut self, slug: String) -> String {
        let Some(&taken) = self.seen.get(&slug) else {
            self.seen.insert(slug.clone(), 0);
            return slug;
        };
        let mut n = taken;
        loop {
            n += 1;
            let candidate = format!("{slug}-{n}");
            if !self.seen.contains_key(&candidate) {
                self.seen.insert(slug, n);
                self.seen.insert(candidate.clone(), 0);
                return candidate;
            }
        }
    }
}

/// A single `[^key]` occurrence, resolved against the definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FootnoteRef {
    /// 1-based position among all references in the document.
    pub ref_index: usize,
    /// 1-based note number, assigned on first reference.
    pub number: usize,
}

/// Definitions collected during block parsing, references during inline parsing.
#[derive(Debug, Default)]
pub struct FootnoteTable {
    definitions: HashMap<String, String>,
    /// Key of every reference, in document order.
    references: Vec<String>,
    /// Referenced keys in order of first reference.
    order: Vec<String>,
    numbers: HashMap<String, usize>,
}

impl FootnoteTable {
    /// Normalizes a label: lowercased, whitespace collapsed.
    #[must_use]
    pub fn key(label: &str) -> String {
        label
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }

    /// First definition of a key wins.
    pub fn define(&mut self, label: &str, text: String) {
        self.definitions.entry(Self::key(label)).or_insert(text);
    }

    pub fn is_defined(&self, label: &str) -> bool {
        self.definitions.contains_key(&Self::key(label))
    }

    pub fn definition(&self, key: &str) -> Option<&str> {
        self.definitions.get(key).map(String::as_str)
    }

    /// Records a reference; `None` when the label has no definition.
    pub fn reference(&mut self, label: &str) -> Option<FootnoteRef> {
        let key = Self::key(label);
        if !self.definitions.contains_key(&key) {
            return None;
        }
        let number = match self.numbers.get(&key) {
            Some(n) => *n,
            None => {
                self.order.push(key.clone());
                let n = self.order.len();
                self.numbers.insert(key.clone(), n);
                n
            }
        };
        self.references.push(key);
        Some(FootnoteRef {
            ref_index: self.references.len(),
            number,
        })
    }

    /// Referenced keys in note-number order.
    pub fn referenced(&self) -> &[String] {
        &self.order
    }

    pub fn number(&self, key: &str) -> Option<usize> {
        self.numbers.get(key).copied()
    }

    /// Reference indices (1-based) pointing at `key`.
    pub fn backrefs(&self, key: &str) -> Vec<usize> {
        self.references
            .iter()
            .enumerate()
            .filter(|(_, k)| k.as_str() == key)
            .map(|(i, _)| i + 1)
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct RenderState {
    pub toc: Vec<TocEntry>,
    pub anchors: AnchorRegistry,
    pub footnotes: FootnoteTable,
    pub requirements: LibraryRequirements,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_are_suffixed_on_collision() {
        let mut reg = AnchorRegistry::default();
        let got: Vec<_> = ["intro", "intro", "other", "intro"]
            .into_iter()
            .map(|s| reg.register(s.to_string()))
            .collect();
        assert_eq!(got, vec!["intro", "intro-1", "other", "intro-2"]);
    }

    #[test]
    fn suffixed_anchor_is_not_reused() {
        let mut reg = AnchorRegistry::default();
        let got: Vec<_> = ["a", "a", "a-1"]
            .into_iter()
            .map(|s| reg.register(s.to_string()))
            .collect();
        assert_eq!(got, vec!["a", "a-1", "a-1-1"]);
    }

    #[test]
    fn undefined_footnote_is_not_referenced() {
        let mut table = FootnoteTable::default();
        assert_eq!(table.reference("1"), None);
        assert!(table.referenced().is_empty());
    }

    #[test]
    fn numbers_follow_first_reference() {
        let mut table = FootnoteTable::default();
        table.define("a", "first".into());
        table.define("b", "second".into());
        let b = table.reference("b");
        let a = table.reference("a");
        let b_again = table.reference("B");
        assert_eq!(b, Some(FootnoteRef { ref_index: 1, number: 1 }));
        assert_eq!(a, Some(FootnoteRef { ref_index: 2, number: 2 }));
        assert_eq!(b_again, Some(FootnoteRef { ref_index: 3, number: 1 }));
        assert_eq!(table.referenced(), ["b".to_string(), "a".to_string()]);
        assert_eq!(table.backrefs("b"), vec![1, 3]);
    }

    #[test]
    fn keys_collapse_whitespace_and_case() {
        let mut table = FootnoteTable::default();
        table.define("Long   Label", "x".into());
        assert!(table.is_defined("long label"));
        assert_eq!(table.definition("long label"), Some("x"));
    }

    #[test]
    fn first_definition_wins() {
        let mut table = FootnoteTable::default();
        table.define("n", "one".into());
        table.define("n", "two".into());
        assert_eq!(table.definition("n"), Some("one"));
    }
}
