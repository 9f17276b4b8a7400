//! # Block Kinds
//!
//! One module per block construct. Each owns its markers and exports a
//! `RULE` descriptor that the grammar registers by name.
//!
//! ## Types
//!
//! - **`CodeFence`**: `` ``` `` / `~~~` fences, math fences
//! - **`Heading`**: ATX `#` headings and setext underlines
//! - **`BlockQuote`**: `>` containers, plus the shared line collector used by
//!   alerts, spoilers (`>!`) and folds (`>|`)
//! - **`FancyBlock`**: `:::family` ... `:::`
//! - **`FootnoteDef`**: `[^label]: text`
//! - **`Table`**: GFM pipe tables
//! - **`ListMarker`**: bullet and ordered list items
//! - **`Frontmatter`**: leading `---` YAML
//! - **`TaskList`**: `[ ]` / `[x]` item rewrite
//!
//! ## Design Principle
//!
//! Delimiters live with their kind; the block parser never hardcodes them.

pub mod alert;
pub mod block_quote;
pub mod code_fence;
pub mod fancy_block;
pub mod fold;
pub mod footnote_def;
pub mod frontmatter;
pub mod heading;
pub mod html_block;
pub mod indented_code;
pub mod list;
pub mod paragraph;
pub mod spoiler;
pub mod table;
pub mod task_list;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind, FenceSig};
pub use fancy_block::FancyBlock;
pub use fold::Fold;
pub use footnote_def::FootnoteDef;
pub use frontmatter::Frontmatter;
pub use heading::Heading;
pub use list::ListMarker;
pub use spoiler::Spoiler;
pub use table::Table;
pub use task_list::TaskList;
