use super::closers::Closers;

/// A cursor for left-to-right inline scanning.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Current byte index into `s`; always on a char boundary.
    pub i: usize,
    closers: Closers,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self {
            s,
            i: 0,
            closers: Closers::default(),
        }
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Peeks `n` bytes ahead of the current position.
    pub fn peek_at(&self, n: usize) -> Option<u8> {
        self.s.as_bytes().get(self.i + n).copied()
    }

    /// Everything from the cursor on.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i..]
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes()[self.i..].starts_with(pat)
    }

    /// Length of the run of `b` starting at the cursor.
    pub fn run_len(&self, b: u8) -> usize {
        self.s.as_bytes()[self.i..].iter().take_while(|&&c| c == b).count()
    }

    /// Advances by `n` bytes. Callers only skip over ASCII they have matched.
    pub fn bump_n(&mut self, n: usize) {
        self.i = (self.i + n).min(self.s.len());
    }

    /// Advances past one whole char.
    pub fn bump_char(&mut self) {
        if let Some(c) = self.rest().chars().next() {
            self.i += c.len_utf8();
        }
    }

    /// Moves to an absolute byte index found by searching `rest()`.
    pub fn jump_to(&mut self, i: usize) {
        self.i = i.min(self.s.len());
    }

    /// Index of the `]` paired with the `[` at `open`.
    pub fn bracket_close(&mut self, open: usize) -> Option<usize> {
        self.closers.bracket(self.s, open)
    }

    /// Closer position and delimiter count for emphasis opening here.
    pub fn emphasis_close(&mut self) -> Option<(usize, usize)> {
        self.closers.emphasis(self.s, self.i)
    }

    /// First `needle` at or after `from`.
    pub fn find_from(&mut self, from: usize, needle: &'static str) -> Option<usize> {
        self.closers.find(self.s, from, needle)
    }
}
