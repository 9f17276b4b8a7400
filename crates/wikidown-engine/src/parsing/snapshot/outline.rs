use std::fmt::Write;

use crate::parsing::blocks::{BlockNode, HeadingOrigin};

/// One line per block, children indented by two spaces.
pub fn outline(blocks: &[BlockNode]) -> String {
    let mut out = String::new();
    write_blocks(&mut out, blocks, 0);
    out
}

fn write_blocks(out: &mut String, blocks: &[BlockNode], depth: usize) {
    for block in blocks {
        out.push_str(&"  ".repeat(depth));
        out.push_str(block.kind());
        match block {
            BlockNode::Paragraph { text } => {
                let _ = write!(out, " {text:?}");
            }
            BlockNode::Heading {
                level,
                text,
                origin,
            } => {
                let _ = write!(out, " h{level} {text:?}");
                if *origin == HeadingOrigin::Frontmatter {
                    out.push_str(" (frontmatter)");
                }
            }
            BlockNode::List {
                ordered,
                start,
                tight,
                ..
            } => {
                if *ordered {
                    let _ = write!(out, " ordered start={start}");
                } else {
                    out.push_str(" bullet");
                }
                out.push_str(if *tight { " tight" } else { " loose" });
            }
            BlockNode::ListItem {
                task: Some(checked),
                ..
            } => out.push_str(if *checked { " [x]" } else { " [ ]" }),
            BlockNode::Table { header, rows, .. } => {
                let _ = write!(out, " {}x{}", header.len(), rows.len());
            }
            BlockNode::CodeBlock { info, code } => {
                let _ = write!(out, " {info:?} {code:?}");
            }
            BlockNode::MathBlock { tex } => {
                let _ = write!(out, " {tex:?}");
            }
            BlockNode::FancyBlock { family, title, .. } => {
                let _ = write!(out, " {family:?}");
                if let Some(title) = title {
                    let _ = write!(out, " {title:?}");
                }
            }
            BlockNode::AlertBlock { kind, .. } => {
                let _ = write!(out, " {}", kind.marker());
            }
            BlockNode::FoldBlock {
                summary: Some(summary),
                ..
            } => {
                let _ = write!(out, " {summary:?}");
            }
            BlockNode::FootnoteItem {
                number, backrefs, ..
            } => {
                let _ = write!(out, " #{number} refs={backrefs:?}");
            }
            BlockNode::Frontmatter { data, .. } => {
                let _ = write!(out, " keys={}", data.len());
            }
            BlockNode::RawHtml { html } => {
                let _ = write!(out, " {html:?}");
            }
            _ => {}
        }
        out.push('\n');
        write_blocks(out, block.children(), depth + 1);
    }
}
