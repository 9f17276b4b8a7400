use crate::parsing::blocks::types::BlockNode;

pub struct TaskList;

impl TaskList {
    pub const UNCHECKED: &'static str = "[ ]";
    pub const CHECKED: [&'static str; 2] = ["[x]", "[X]"];

    /// `[x] rest` -> `(true, "rest")`; the box must be followed by whitespace.
    pub fn marker(text: &str) -> Option<(bool, &str)> {
        let (checked, rest) = if let Some(rest) = text.strip_prefix(Self::UNCHECKED) {
            (false, rest)
        } else {
            let rest = Self::CHECKED.iter().find_map(|m| text.strip_prefix(m))?;
            (true, rest)
        };
        rest.starts_with(char::is_whitespace)
            .then(|| (checked, rest.trim_start()))
    }
}

/// Marks list items whose first paragraph starts with a checkbox.
pub fn rewrite(blocks: &mut Vec<BlockNode>) {
    for block in blocks.iter_mut() {
        if let BlockNode::ListItem { task, children } = block
            && task.is_none()
            && let Some(BlockNode::Paragraph { text }) = children.first_mut()
            && let Some((checked, rest)) = TaskList::marker(text)
        {
            let rest = rest.to_string();
            *task = Some(checked);
            *text = rest;
        }
        if let Some(children) = block.children_mut() {
            rewrite(children);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers() {
        assert_eq!(TaskList::marker("[ ] todo"), Some((false, "todo")));
        assert_eq!(TaskList::marker("[X] done"), Some((true, "done")));
        assert_eq!(TaskList::marker("[x]done"), None);
        assert_eq!(TaskList::marker("[ ]"), None);
        assert_eq!(TaskList::marker("[-] x"), None);
    }

    #[test]
    fn rewrite_marks_nested_items() {
        let item = |text: &str| BlockNode::ListItem {
            task: None,
            children: vec![BlockNode::Paragraph { text: text.into() }],
        };
        let mut blocks = vec![BlockNode::BlockQuote {
            children: vec![BlockNode::List {
                ordered: false,
                start: 0,
                tight: true,
                items: vec![item("[x] a"), item("plain")],
            }],
        }];
        rewrite(&mut blocks);
        let BlockNode::BlockQuote { children } = &blocks[0] else {
            unreachable!()
        };
        let items = children[0].children();
        assert_eq!(
            items[0],
            BlockNode::ListItem {
                task: Some(true),
                children: vec![BlockNode::Paragraph { text: "a".into() }],
            }
        );
        assert!(matches!(items[1], BlockNode::ListItem { task: None, .. }));
    }
}
