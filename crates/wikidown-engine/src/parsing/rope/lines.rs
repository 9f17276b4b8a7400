use xi_rope::Rope;

use super::span::Span;

/// A reference to a single line in the rope with its byte span.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of this line in the rope (includes newline if present).
    pub span: Span,
    /// The raw line text, line ending included.
    pub text: String,
}

impl LineRef {
    /// The line without its `\n` / `\r\n` terminator.
    #[must_use]
    pub fn content(&self) -> &str {
        self.text.trim_end_matches(['\r', '\n'])
    }

    /// Byte offset just past the last content character, before the line ending.
    #[must_use]
    pub fn content_end(&self) -> usize {
        self.span.start + self.content().len()
    }
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` to keep newline characters so spans stay contiguous and
/// offsets can be fed straight back into `Rope::edit`.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        offset += line.len();
        LineRef {
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_are_contiguous() {
        let rope = Rope::from("one\ntwo\r\nthree");
        let lines: Vec<_> = lines_with_spans(&rope).collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].span, Span { start: 0, end: 4 });
        assert_eq!(lines[1].span, Span { start: 4, end: 9 });
        assert_eq!(lines[2].span, Span { start: 9, end: 14 });
    }

    #[test]
    fn content_strips_line_endings() {
        let rope = Rope::from("one\ntwo\r\nthree");
        let contents: Vec<_> = lines_with_spans(&rope)
            .map(|l| l.content().to_string())
            .collect();
        assert_eq!(contents, vec!["one", "two", "three"]);
    }

    #[test]
    fn content_end_points_before_newline() {
        let rope = Rope::from("ab\ncd\n");
        let lines: Vec<_> = lines_with_spans(&rope).collect();
        assert_eq!(lines[0].content_end(), 2);
        assert_eq!(lines[1].content_end(), 5);
    }

    #[test]
    fn empty_rope_has_no_lines() {
        let rope = Rope::from("");
        assert_eq!(lines_with_spans(&rope).count(), 0);
    }
}
