/// A parsed inline token.
///
/// Text payloads are raw (unescaped); escaping happens when HTML is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    Text(String),
    Emphasis {
        strong: bool,
        children: Vec<InlineNode>,
    },
    Strikethrough(Vec<InlineNode>),
    Mark(Vec<InlineNode>),
    CodeSpan(String),
    MathInline {
        tex: String,
        display: bool,
    },
    Link {
        url: String,
        title: Option<String>,
        children: Vec<InlineNode>,
    },
    Image {
        src: String,
        alt: String,
        title: Option<String>,
    },
    WikiLink {
        /// Percent-encoded href, fragment already slugified.
        href: String,
        /// Path part of the href, decoded, for page-existence checks.
        page: String,
        text: String,
    },
    FootnoteRef {
        ref_index: usize,
        number: usize,
    },
    RawHtml(String),
    LineBreak,
}

impl InlineNode {
    pub fn kind(&self) -> &'static str {
        match self {
            InlineNode::Text(_) => "text",
            InlineNode::Emphasis { strong: false, .. } => "emphasis",
            InlineNode::Emphasis { strong: true, .. } => "strong",
            InlineNode::Strikethrough(_) => "strikethrough",
            InlineNode::Mark(_) => "mark",
            InlineNode::CodeSpan(_) => "code_span",
            InlineNode::MathInline { .. } => "math_inline",
            InlineNode::Link { .. } => "link",
            InlineNode::Image { .. } => "image",
            InlineNode::WikiLink { .. } => "wikilink",
            InlineNode::FootnoteRef { .. } => "footnote_ref",
            InlineNode::RawHtml(_) => "raw_html",
            InlineNode::LineBreak => "line_break",
        }
    }
}

/// Concatenated visible text of a token list, used for image alt text.
pub fn plain_text(nodes: &[InlineNode]) -> String {
    let mut out = String::new();
    for n in nodes {
        match n {
            InlineNode::Text(t) | InlineNode::CodeSpan(t) => out.push_str(t),
            InlineNode::Emphasis { children, .. }
            | InlineNode::Strikethrough(children)
            | InlineNode::Mark(children)
            | InlineNode::Link { children, .. } => out.push_str(&plain_text(children)),
            InlineNode::MathInline { tex, .. } => out.push_str(tex),
            InlineNode::Image { alt, .. } => out.push_str(alt),
            InlineNode::WikiLink { text, .. } => out.push_str(text),
            InlineNode::FootnoteRef { number, .. } => out.push_str(&number.to_string()),
            InlineNode::LineBreak => out.push(' '),
            InlineNode::RawHtml(_) => {}
        }
    }
    out
}
