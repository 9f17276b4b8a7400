//! Closing delimiters of one inline span.
//!
//! Bracket and emphasis pairs are computed in a single pass the first time a
//! rule asks for them. Plain searches remember their last answer, so a run
//! of openers with no closer costs one scan instead of one per opener.

use std::collections::HashMap;

use super::kinds::emphasis::Emphasis;
use super::kinds::link::Link;

#[derive(Clone, Debug, Default)]
pub struct Closers {
    brackets: Option<HashMap<usize, usize>>,
    emphasis: Option<HashMap<usize, (usize, usize)>>,
    found: HashMap<&'static str, (usize, Option<usize>)>,
}

impl Closers {
    /// The `]` paired with the `[` at `open`.
    pub fn bracket(&mut self, s: &str, open: usize) -> Option<usize> {
        self.brackets
            .get_or_insert_with(|| Link::bracket_pairs(s))
            .get(&open)
            .copied()
    }

    /// `(closer, delimiters used)` for the emphasis opener at `open`.
    pub fn emphasis(&mut self, s: &str, open: usize) -> Option<(usize, usize)> {
        self.emphasis
            .get_or_insert_with(|| Emphasis::pairs(s))
            .get(&open)
            .copied()
    }

    /// First `needle` at or after `from`.
    ///
    /// An earlier search from at or before `from` still holds while `from`
    /// has not passed its result.
    pub fn find(&mut self, s: &str, from: usize, needle: &'static str) -> Option<usize> {
        if let Some(&(searched, found)) = self.found.get(needle)
            && searched <= from
            && found.is_none_or(|at| from <= at)
        {
            return found;
        }
        let found = s.get(from..)?.find(needle).map(|at| from + at);
        self.found.insert(needle, (from, found));
        found
    }
}
