use serde_yaml::{Mapping, Value};

use crate::grammar::BlockRule;
use crate::parsing::blocks::parser::{BlockMatch, BlockParser};
use crate::parsing::blocks::types::{BlockNode, HeadingOrigin};

pub struct Frontmatter;

impl Frontmatter {
    pub const FENCE: &'static str = "---";
    pub const END: &'static str = "...";
    pub const TITLE: &'static str = "title";

    /// YAML mapping of the frontmatter body; anything else is an empty mapping.
    pub fn data(raw: &str) -> Mapping {
        match serde_yaml::from_str::<Value>(raw) {
            Ok(Value::Mapping(map)) => map,
            Ok(Value::Null) => Mapping::new(),
            Ok(_) => {
                log::debug!("frontmatter is not a mapping, ignoring its data");
                Mapping::new()
            }
            Err(e) => {
                log::debug!("malformed frontmatter: {e}");
                Mapping::new()
            }
        }
    }

    pub fn title(data: &Mapping) -> Option<String> {
        match data.get(Self::TITLE)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Holds nothing worth showing besides the title.
    pub fn only_title(data: &Mapping) -> bool {
        data.len() == 1 && data.contains_key(Self::TITLE)
    }
}

pub const RULE: BlockRule = BlockRule {
    name: "frontmatter",
    interrupts: None,
    parse,
};

/// Only the very first line of the document can open frontmatter.
fn parse(parser: &mut BlockParser<'_>, lines: &[String], pos: usize) -> Option<BlockMatch> {
    if pos != 0 || !parser.is_top_level() || lines[0].trim_end() != Frontmatter::FENCE {
        return None;
    }
    let close = lines
        .iter()
        .skip(1)
        .position(|l| matches!(l.trim_end(), Frontmatter::FENCE | Frontmatter::END))?
        + 1;
    let raw = lines[1..close].join("\n");
    let data = Frontmatter::data(&raw);
    Some(BlockMatch::one(BlockNode::Frontmatter { raw, data }, close + 1))
}

/// Synthesizes an `<h1>` from the `title` key when the page has none.
pub fn insert_title(blocks: &mut Vec<BlockNode>) {
    let Some(BlockNode::Frontmatter { data, .. }) = blocks.first() else {
        return;
    };
    let Some(title) = Frontmatter::title(data) else {
        return;
    };
    if has_level_one(blocks) {
        return;
    }
    blocks.insert(
        1,
        BlockNode::Heading {
            level: 1,
            text: title,
            origin: HeadingOrigin::Frontmatter,
        },
    );
}

fn has_level_one(blocks: &[BlockNode]) -> bool {
    blocks.iter().any(|b| {
        matches!(b, BlockNode::Heading { level: 1, .. }) || has_level_one(b.children())
    })
}
