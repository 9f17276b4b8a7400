use serde_yaml::Mapping;

/// Column alignment from a table delimiter row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    None,
    Left,
    Center,
    Right,
}

impl Align {
    pub fn style(self) -> Option<&'static str> {
        match self {
            Align::None => None,
            Align::Left => Some("text-align:left"),
            Align::Center => Some("text-align:center"),
            Align::Right => Some("text-align:right"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Note,
    Tip,
    Important,
    Warning,
    Caution,
}

impl AlertKind {
    pub const ALL: [AlertKind; 5] = [
        AlertKind::Note,
        AlertKind::Tip,
        AlertKind::Important,
        AlertKind::Warning,
        AlertKind::Caution,
    ];

    /// Case-insensitive match on the `[!TYPE]` marker.
    pub fn from_marker(marker: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.marker().eq_ignore_ascii_case(marker))
    }

    pub fn marker(self) -> &'static str {
        match self {
            AlertKind::Note => "NOTE",
            AlertKind::Tip => "TIP",
            AlertKind::Important => "IMPORTANT",
            AlertKind::Warning => "WARNING",
            AlertKind::Caution => "CAUTION",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AlertKind::Note => "Note",
            AlertKind::Tip => "Tip",
            AlertKind::Important => "Important",
            AlertKind::Warning => "Warning",
            AlertKind::Caution => "Caution",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            AlertKind::Note => "fas fa-info-circle",
            AlertKind::Tip => "far fa-lightbulb",
            AlertKind::Important => "far fa-comment-dots",
            AlertKind::Warning => "fas fa-exclamation-triangle",
            AlertKind::Caution => "fas fa-exclamation-circle",
        }
    }
}

/// Where a heading came from; synthesized titles are marked so rewrites can
/// tell them apart from authored ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingOrigin {
    Atx,
    Setext,
    Frontmatter,
}

/// A parsed block. Children are owned; text fields hold raw inline source
/// that is only inline-parsed while HTML is written.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockNode {
    Paragraph {
        text: String,
    },
    Heading {
        level: u8,
        text: String,
        origin: HeadingOrigin,
    },
    ThematicBreak,
    BlockQuote {
        children: Vec<BlockNode>,
    },
    List {
        ordered: bool,
        start: u64,
        tight: bool,
        items: Vec<BlockNode>,
    },
    ListItem {
        /// `Some(checked)` once the task-list rewrite has claimed the item.
        task: Option<bool>,
        children: Vec<BlockNode>,
    },
    Table {
        aligns: Vec<Align>,
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    CodeBlock {
        info: String,
        code: String,
    },
    MathBlock {
        tex: String,
    },
    FancyBlock {
        family: String,
        title: Option<String>,
        children: Vec<BlockNode>,
    },
    AlertBlock {
        kind: AlertKind,
        children: Vec<BlockNode>,
    },
    SpoilerBlock {
        children: Vec<BlockNode>,
    },
    FoldBlock {
        summary: Option<String>,
        children: Vec<BlockNode>,
    },
    FootnoteItem {
        number: usize,
        backrefs: Vec<usize>,
        children: Vec<BlockNode>,
    },
    Footnotes {
        items: Vec<BlockNode>,
    },
    Frontmatter {
        raw: String,
        data: Mapping,
    },
    RawHtml {
        html: String,
    },
}

impl BlockNode {
    /// Snake-case variant name, used in tree outlines.
    pub fn kind(&self) -> &'static str {
        match self {
            BlockNode::Paragraph { .. } => "paragraph",
            BlockNode::Heading { .. } => "heading",
            BlockNode::ThematicBreak => "thematic_break",
            BlockNode::BlockQuote { .. } => "block_quote",
            BlockNode::List { .. } => "list",
            BlockNode::ListItem { .. } => "list_item",
            BlockNode::Table { .. } => "table",
            BlockNode::CodeBlock { .. } => "code_block",
            BlockNode::MathBlock { .. } => "math_block",
            BlockNode::FancyBlock { .. } => "fancy_block",
            BlockNode::AlertBlock { .. } => "alert_block",
            BlockNode::SpoilerBlock { .. } => "spoiler_block",
            BlockNode::FoldBlock { .. } => "fold_block",
            BlockNode::FootnoteItem { .. } => "footnote_item",
            BlockNode::Footnotes { .. } => "footnotes",
            BlockNode::Frontmatter { .. } => "frontmatter",
            BlockNode::RawHtml { .. } => "raw_html",
        }
    }

    /// Child blocks of container nodes; empty for leaves.
    pub fn children(&self) -> &[BlockNode] {
        match self {
            BlockNode::BlockQuote { children }
            | BlockNode::ListItem { children, .. }
            | BlockNode::FancyBlock { children, .. }
            | BlockNode::AlertBlock { children, .. }
            | BlockNode::SpoilerBlock { children }
            | BlockNode::FoldBlock { children, .. }
            | BlockNode::FootnoteItem { children, .. } => children,
            BlockNode::List { items, .. } | BlockNode::Footnotes { items } => items,
            _ => &[],
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<BlockNode>> {
        match self {
            BlockNode::BlockQuote { children }
            | BlockNode::ListItem { children, .. }
            | BlockNode::FancyBlock { children, .. }
            | BlockNode::AlertBlock { children, .. }
            | BlockNode::SpoilerBlock { children }
            | BlockNode::FoldBlock { children, .. }
            | BlockNode::FootnoteItem { children, .. } => Some(children),
            BlockNode::List { items, .. } | BlockNode::Footnotes { items } => Some(items),
            _ => None,
        }
    }
}
