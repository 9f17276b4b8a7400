//! Line helpers shared by the block kinds.

/// Leading tabs become four spaces so indentation can be counted in bytes.
#[must_use]
pub fn expand_leading_tabs(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(c) = rest.chars().next() {
        match c {
            '\t' => out.push_str(&" ".repeat(4 - out.len() % 4)),
            ' ' => out.push(' '),
            _ => break,
        }
        rest = &rest[1..];
    }
    out.push_str(rest);
    out
}

/// Splits text into lines without terminators, expanding leading tabs.
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(expand_leading_tabs).collect()
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Number of leading spaces.
pub fn indent(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b' ').count()
}

/// Removes up to `n` leading spaces.
pub fn strip_indent(line: &str, n: usize) -> &str {
    let k = indent(line).min(n);
    &line[k..]
}

/// The line with at most three spaces of indentation removed, or `None`
/// when it is indented far enough to be code.
pub fn block_start(line: &str) -> Option<&str> {
    let k = indent(line);
    (k <= 3).then(|| &line[k..])
}
